use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// The two ways a submission can fail. Both carry a fixed message and are
/// surfaced as an `Err`, never as a panic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Generic failure, not tied to any form field.
    #[error("Oops, something went wrong.")]
    NonField,

    /// Email uniqueness violation.
    #[error("User with this email already exists.")]
    EmailExists,
}

impl SubmitError {
    /// Key the view layer branches on to pick its error messaging.
    pub fn field_key(&self) -> &'static str {
        match self {
            SubmitError::NonField => "nonFieldError",
            SubmitError::EmailExists => "email",
        }
    }
}

// Wire shape is a single-entry map keyed by the offending field (or
// `nonFieldError`), so a derive doesn't fit here.
impl Serialize for SubmitError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field_key(), &self.to_string())?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_fixed() {
        assert_eq!(
            SubmitError::NonField.to_string(),
            "Oops, something went wrong."
        );
        assert_eq!(
            SubmitError::EmailExists.to_string(),
            "User with this email already exists."
        );
    }

    #[test]
    fn test_error_wire_shapes() {
        let json = serde_json::to_string(&SubmitError::NonField).unwrap();
        assert_eq!(json, r#"{"nonFieldError":"Oops, something went wrong."}"#);

        let json = serde_json::to_string(&SubmitError::EmailExists).unwrap();
        assert_eq!(json, r#"{"email":"User with this email already exists."}"#);
    }
}
