//! Presence-checked text.

use serde::{Deserialize, Serialize};

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string that is guaranteed to contain at least one non-whitespace
/// character.
///
/// Input is trimmed on construction, so the contained value never carries
/// leading or trailing whitespace. HYGIA uses this wherever a user action
/// requires content to be present at all - notably clinical note bodies,
/// which must not be saved empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of surrounding whitespace first.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the byte length of the contained text.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: the contained text is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_surrounding_whitespace() {
        let text = NonEmptyText::new("  evolution note  ").unwrap();
        assert_eq!(text.as_str(), "evolution note");
        assert_eq!(text.len(), "evolution note".len());
    }

    #[test]
    fn new_rejects_empty_and_whitespace_only_input() {
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new("   \n\t"), Err(TextError::Empty)));
    }

    #[test]
    fn into_inner_returns_trimmed_content() {
        let text = NonEmptyText::new(" note ").unwrap();
        assert_eq!(text.into_inner(), "note");
    }
}
