//! Chat identifier taken from the `/chat/{chat_id}` route segment.

use std::fmt;

use crate::error::AppError;

/// Upper bound on identifier length, in bytes.
pub const MAX_CHAT_ID_LEN: usize = 128;

/// Validated chat identifier.
///
/// Non-empty, at most [`MAX_CHAT_ID_LEN`] bytes, ASCII alphanumerics plus `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatId(String);

impl ChatId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let valid = !raw.is_empty()
            && raw.len() <= MAX_CHAT_ID_LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

        if valid {
            Ok(Self(raw.to_owned()))
        } else {
            Err(AppError::InvalidChatId(raw.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_slug_like_ids() {
        let id = ChatId::parse("c0ffee-42_a").unwrap();
        assert_eq!(id.as_str(), "c0ffee-42_a");
        assert_eq!(id.to_string(), "c0ffee-42_a");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(ChatId::parse(""), Err(AppError::InvalidChatId(_))));
    }

    #[test]
    fn rejects_markup_and_separators() {
        for raw in ["<script>", "a b", "a/b", "a.b", "é"] {
            assert!(ChatId::parse(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn length_limit_is_inclusive() {
        assert!(ChatId::parse(&"a".repeat(MAX_CHAT_ID_LEN)).is_ok());
        assert!(ChatId::parse(&"a".repeat(MAX_CHAT_ID_LEN + 1)).is_err());
    }
}
