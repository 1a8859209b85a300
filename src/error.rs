use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CaptionError {
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
    #[error("malformed word token at index {index}: {message}")]
    MalformedInput { index: usize, message: String },
    #[error("invalid subtitle text at line {line}: {message}")]
    InvalidSubtitle { line: usize, message: String },
}

impl CaptionError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    pub(crate) fn malformed_input(index: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            index,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_subtitle(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidSubtitle {
            line,
            message: message.into(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }

    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_are_distinguishable() {
        let config = CaptionError::invalid_config("max_chars must be positive");
        let input = CaptionError::malformed_input(3, "end precedes start");

        assert!(config.is_config_error());
        assert!(!config.is_input_error());
        assert!(input.is_input_error());
        assert_eq!(
            input.to_string(),
            "malformed word token at index 3: end precedes start"
        );
    }
}
