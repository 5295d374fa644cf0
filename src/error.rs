use thiserror::Error;

/// Every failure the catalog can report.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{reason}")]
    Validation { reason: String },

    #[error("No composition found in duration range {min}-{max}")]
    NotFound { min: i64, max: i64 },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn validation<S: Into<String>>(reason: S) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an OS-level error with the operation that triggered it.
    pub fn io_with<S: Into<String>>(message: S, source: std::io::Error) -> Self {
        Self::Io {
            message: format!("{}: {}", message.into(), source),
            source: Some(source),
        }
    }

    /// Prefix used when the error is reported to the user.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Argument error",
            Self::NotFound { .. } => "Search error",
            Self::Io { .. } | Self::Csv(_) => "I/O error",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn user_message(&self) -> String {
        format!("{}: {}", self.category(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_the_variant() {
        assert_eq!(CatalogError::validation("x").category(), "Argument error");
        assert_eq!(
            CatalogError::NotFound { min: 1, max: 2 }.category(),
            "Search error"
        );
        assert_eq!(CatalogError::io("x").category(), "I/O error");
    }

    #[test]
    fn not_found_carries_the_range() {
        let err = CatalogError::NotFound { min: 10, max: 20 };
        assert!(err.is_not_found());
        assert_eq!(
            err.user_message(),
            "Search error: No composition found in duration range 10-20"
        );
    }

    #[test]
    fn io_with_keeps_the_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CatalogError::io_with("Could not open album.txt", source);
        assert_eq!(err.to_string(), "Could not open album.txt: missing");
        assert!(std::error::Error::source(&err).is_some());
    }
}
