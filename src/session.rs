//! Client session identity
//!
//! One token per process lifetime, created at startup and passed explicitly
//! to whoever needs it. Never regenerated.

use std::fmt;

use uuid::Uuid;

/// Immutable session token used to correlate analysis requests.
///
/// Time-derived with a short random suffix; unique enough to tell concurrent
/// client sessions apart on the server, not cryptographic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix = Uuid::new_v4().simple().to_string();
        SessionId(format!("session-{}-{}", millis, &suffix[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let session = SessionId::generate();
        assert!(session.as_str().starts_with("session-"));
    }

    #[test]
    fn test_tokens_are_distinct() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
    }
}
