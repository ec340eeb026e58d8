//! Dilemma value object

use super::error::DomainError;

/// A dilemma submitted for resolution (Value Object)
///
/// Guaranteed non-empty after trimming. The original text is kept
/// verbatim (including surrounding whitespace) for prompt substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dilemma {
    content: String,
}

impl Dilemma {
    /// Try to create a new dilemma, rejecting empty or whitespace-only text
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyDilemma)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the dilemma text
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Dilemma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dilemma_creation() {
        let d = Dilemma::try_new("Should I ship today?").unwrap();
        assert_eq!(d.content(), "Should I ship today?");
    }

    #[test]
    fn test_try_new_rejects_blank() {
        assert!(matches!(Dilemma::try_new(""), Err(DomainError::EmptyDilemma)));
        assert!(matches!(Dilemma::try_new("   "), Err(DomainError::EmptyDilemma)));
        assert!(matches!(Dilemma::try_new("\n\t "), Err(DomainError::EmptyDilemma)));
    }

    #[test]
    fn test_content_is_not_trimmed() {
        let d = Dilemma::try_new("  pause or push?  ").unwrap();
        assert_eq!(d.content(), "  pause or push?  ");
    }
}
