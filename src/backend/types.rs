//! Types exchanged with the backend API.

use std::fmt;
use std::str::FromStr;

use axum::http::StatusCode;
use serde_json::Value;

/// Identifier of a user in the backend.
///
/// Any non-negative decimal integer, of any length, kept in canonical form
/// (no leading zeros). Anything else never reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

/// A path segment that is not a non-negative decimal integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid user id '{0}'")]
pub struct InvalidUserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for UserId {
    type Err = InvalidUserId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidUserId(s.to_string()));
        }
        let canonical = s.trim_start_matches('0');
        if canonical.is_empty() {
            Ok(Self("0".to_string()))
        } else {
            Ok(Self(canonical.to_string()))
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status and body relayed from the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendResponse {
    pub status: StatusCode,
    /// Decoded JSON body; `None` when the body is discarded (delete).
    pub body: Option<Value>,
}

impl BackendResponse {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self { status, body: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_parsing() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId::from(42));
        assert_eq!("007".parse::<UserId>().unwrap(), UserId::from(7));
        assert_eq!("000".parse::<UserId>().unwrap(), UserId::from(0));
        assert!("abc".parse::<UserId>().is_err());
        assert!("-1".parse::<UserId>().is_err());
        assert!("+1".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }

    #[test]
    fn test_user_id_display_is_canonical() {
        let id: UserId = "0042".parse().unwrap();
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_user_id_beyond_u64_is_kept_exactly() {
        let id: UserId = "018446744073709551616".parse().unwrap();
        assert_eq!(id.as_str(), "18446744073709551616");
        assert_eq!(
            "1x".parse::<UserId>().unwrap_err(),
            InvalidUserId("1x".to_string())
        );
    }
}
