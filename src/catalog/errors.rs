/// Errors from the catalog domain layer.
use thiserror::Error;

/// Errors that can occur while building or running a catalog listing.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A command-line option value was missing or malformed.
    #[error("Invalid value for --{option}: {reason}")]
    OptionParse {
        /// Long name of the offending option.
        option: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The module registry could not answer whether a module is enabled.
    #[error("Cannot determine whether module '{module}' is enabled: {reason}")]
    CapabilityUnavailable {
        /// Module that was looked up.
        module: String,
        /// Underlying cause.
        reason: String,
    },

    /// The data source rejected the query or failed while iterating.
    #[error("Query failed: {0}")]
    Query(String),

    /// The catalog data file could not be read or parsed.
    #[error("Catalog data error: {0}")]
    DataFile(String),

    /// Writing the report failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::OptionParse { .. } => 2,
            Self::DataFile(_) => 3,
            Self::CapabilityUnavailable { .. } => 4,
            Self::Query(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_parse_message_names_option() {
        let err = CatalogError::OptionParse {
            option: "attributes",
            reason: "no attribute names given".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for --attributes: no attribute names given"
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let codes = [
            CatalogError::Io(std::io::Error::other("broken pipe")).exit_code(),
            CatalogError::DataFile("x".to_owned()).exit_code(),
            CatalogError::CapabilityUnavailable {
                module: "m".to_owned(),
                reason: "r".to_owned(),
            }
            .exit_code(),
            CatalogError::Query("x".to_owned()).exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
