//! Response classification
//!
//! Maps response keys to HTTP status codes and status codes to
//! success/error outcomes.

use service_model_generator_common::{GeneratorError, Result, UnsupportedConstruct};

/// Outcome a status code stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// 200..=299: the operation's output
    Success,
    /// Anything else: one of the operation's errors
    Error,
}

/// Classifies operation responses
pub struct ResponseClassifier;

impl ResponseClassifier {
    /// Classify a status code
    ///
    /// # Examples
    /// ```
    /// use service_model_generator_parser::{ResponseClassifier, ResponseKind};
    ///
    /// assert_eq!(ResponseClassifier::classify(201), ResponseKind::Success);
    /// assert_eq!(ResponseClassifier::classify(404), ResponseKind::Error);
    /// ```
    pub fn classify(code: u16) -> ResponseKind {
        if (200..=299).contains(&code) {
            ResponseKind::Success
        } else {
            ResponseKind::Error
        }
    }

    /// Parse a response key into a status code
    ///
    /// `default` carries no status code and yields `None`; any other
    /// non-numeric key is unsupported. `location` names the operation for
    /// the error.
    pub fn parse_status(key: &str, location: &str) -> Result<Option<u16>> {
        if key == "default" {
            return Ok(None);
        }

        key.parse::<u16>()
            .ok()
            .filter(|code| (100..=599).contains(code))
            .map(Some)
            .ok_or_else(|| {
                GeneratorError::unsupported(
                    UnsupportedConstruct::StatusCode(key.to_string()),
                    location,
                )
            })
    }
}
