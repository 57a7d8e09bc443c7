//! Hash string inspection
//!
//! Reads the variant and cost out of a stored bcrypt string without touching
//! the digest. Layout: `$<variant>$<cost>$<22-char salt><31-char digest>`.

use std::fmt;

/// Total length of a bcrypt hash string
pub const HASH_LEN: usize = 60;

/// Length of the encoded salt + digest tail
const TAIL_LEN: usize = 53;

/// bcrypt variant tag
///
/// `2x` (crypt_blowfish's sign-extension hashes) is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    TwoA,
    TwoB,
    TwoY,
}

impl Version {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "2a" => Some(Version::TwoA),
            "2b" => Some(Version::TwoB),
            "2y" => Some(Version::TwoY),
            _ => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::TwoA => write!(f, "2a"),
            Version::TwoB => write!(f, "2b"),
            Version::TwoY => write!(f, "2y"),
        }
    }
}

/// Parameters embedded in a stored hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashInfo {
    pub version: Version,
    pub cost: u32,
}

impl HashInfo {
    /// Parse a stored hash, returning `None` for anything that is not a
    /// well-formed bcrypt string
    pub fn parse(hash: &str) -> Option<Self> {
        if hash.len() != HASH_LEN {
            return None;
        }

        let mut parts = hash.split('$');
        if parts.next() != Some("") {
            return None;
        }

        let version = Version::from_tag(parts.next()?)?;

        let cost_str = parts.next()?;
        if cost_str.len() != 2 || !cost_str.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let cost: u32 = cost_str.parse().ok()?;
        if !(super::MIN_COST..=super::MAX_COST).contains(&cost) {
            return None;
        }

        let tail = parts.next()?;
        if parts.next().is_some() || tail.len() != TAIL_LEN {
            return None;
        }
        if !tail.bytes().all(is_bcrypt_base64) {
            return None;
        }

        Some(Self { version, cost })
    }
}

/// Check whether a string looks like a bcrypt hash
pub fn is_bcrypt_hash(hash: &str) -> bool {
    HashInfo::parse(hash).is_some()
}

fn is_bcrypt_base64(b: u8) -> bool {
    b == b'.' || b == b'/' || b.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW";

    #[test]
    fn test_parse_valid_hash() {
        let info = HashInfo::parse(SAMPLE).unwrap();
        assert_eq!(info.version, Version::TwoA);
        assert_eq!(info.cost, 5);
    }

    #[test]
    fn test_parse_each_variant() {
        for (tag, version) in [
            ("2a", Version::TwoA),
            ("2b", Version::TwoB),
            ("2y", Version::TwoY),
        ] {
            let hash = SAMPLE.replacen("2a", tag, 1);
            assert_eq!(HashInfo::parse(&hash).map(|i| i.version), Some(version));
            assert_eq!(version.to_string(), tag);
        }
    }

    #[test]
    fn test_rejects_unknown_variant() {
        let hash = SAMPLE.replacen("2a", "3a", 1);
        assert!(HashInfo::parse(&hash).is_none());
    }

    #[test]
    fn test_rejects_2x_variant() {
        let hash = SAMPLE.replacen("2a", "2x", 1);
        assert!(HashInfo::parse(&hash).is_none());
    }

    #[test]
    fn test_rejects_loose_dollar_and_cost() {
        assert!(!is_bcrypt_hash(&format!("${}", &SAMPLE[..59])));
        assert!(!is_bcrypt_hash(&SAMPLE.replacen("$05$", "$5$", 1)));
        assert!(!is_bcrypt_hash(&SAMPLE.replacen("$05$", "$$05$", 1)));
    }

    #[test]
    fn test_rejects_out_of_range_cost() {
        assert!(HashInfo::parse(&SAMPLE.replacen("05", "03", 1)).is_none());
        assert!(HashInfo::parse(&SAMPLE.replacen("05", "32", 1)).is_none());
    }

    #[test]
    fn test_rejects_bad_alphabet() {
        let hash = SAMPLE.replacen('E', "+", 1);
        assert!(!is_bcrypt_hash(&hash));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_bcrypt_hash(""));
        assert!(!is_bcrypt_hash("not-a-valid-hash"));
        assert!(!is_bcrypt_hash(&SAMPLE[..59]));
        assert!(!is_bcrypt_hash(&format!("{}$", &SAMPLE[..59])));
    }
}
