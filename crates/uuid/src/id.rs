use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Canonical recipe identifier (32 lowercase hex characters, no hyphens).
///
/// Once constructed the contained UUID is known to be canonical, so the string form is stable
/// across every read and write of the record it names.
///
/// # Construction
/// - [`RecipeUuid::new`] allocates a fresh identifier for a new record.
/// - [`RecipeUuid::parse`] validates an externally supplied identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecipeUuid(Uuid);

impl Default for RecipeUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeUuid {
    /// Generates a new random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier that must already be canonical.
    ///
    /// Hyphenated or uppercase forms are **not** normalised.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if !Self::is_canonical(input) {
            return Err(UuidError::InvalidInput(input.to_string()));
        }
        Uuid::try_parse(input)
            .map(Self)
            .map_err(|_| UuidError::InvalidInput(input.to_string()))
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns true if `input` is exactly 32 lowercase hex characters.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for RecipeUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for RecipeUuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecipeUuid::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RecipeUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RecipeUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecipeUuid::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_canonical_id() {
        let id = RecipeUuid::new();
        let canonical = id.to_string();

        assert_eq!(canonical.len(), 32);
        assert!(RecipeUuid::is_canonical(&canonical));
    }

    #[test]
    fn test_new_ids_are_distinct() {
        assert_ne!(RecipeUuid::new(), RecipeUuid::new());
    }

    #[test]
    fn test_parse_valid_canonical_id() {
        let canonical = "550e8400e29b41d4a716446655440000";
        let parsed = RecipeUuid::parse(canonical).unwrap();

        assert_eq!(parsed.to_string(), canonical);
    }

    #[test]
    fn test_parse_rejects_hyphenated_id() {
        let result = RecipeUuid::parse("550e8400-e29b-41d4-a716-446655440000");

        match result {
            Err(UuidError::InvalidInput(value)) => {
                assert_eq!(value, "550e8400-e29b-41d4-a716-446655440000");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_parse_rejects_uppercase_id() {
        assert!(RecipeUuid::parse("550E8400E29B41D4A716446655440000").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(RecipeUuid::parse("550e8400e29b41d4a71644665544000").is_err());
        assert!(RecipeUuid::parse("550e8400e29b41d4a7164466554400000").is_err());
        assert!(RecipeUuid::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(RecipeUuid::parse("550e8400e29b41d4a716446655440zzz").is_err());
        assert!(RecipeUuid::parse("not-a-real-id").is_err());
    }

    #[test]
    fn test_error_message_names_value() {
        let err = RecipeUuid::parse("abc").unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("\"abc\""));
        assert!(msg.contains("32 lowercase hex characters"));
    }

    #[test]
    fn test_from_str_round_trip() {
        let original = RecipeUuid::new();
        let parsed: RecipeUuid = original.to_string().parse().unwrap();

        assert_eq!(original, parsed);
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let id = RecipeUuid::parse("00112233445566778899aabbccddeeff").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00112233445566778899aabbccddeeff\"");

        let back: RecipeUuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        let bad: Result<RecipeUuid, _> = serde_json::from_str("\"ABC\"");
        assert!(bad.is_err());
    }
}
