use std::fmt;

/// Error types for perfviz operations
#[derive(Debug)]
pub enum PerfVizError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// CSV reading/parsing error
    Csv(csv::Error),

    /// Required CSV columns missing from the header
    MissingColumns(Vec<String>),

    /// Timestamp value could not be parsed
    InvalidTimestamp(String),

    /// Malformed row in the input data
    MalformedRow { row: usize, cause: String },

    /// Series contains no data rows
    EmptySeries,

    /// Chart rendering error
    Rendering(String),

    /// Serialization error (JSON output)
    Serialization(String),

    /// Rendering environment not usable (missing fonts, etc.)
    Environment(String),
}

impl fmt::Display for PerfVizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerfVizError::Io(err) => write!(f, "IO error: {err}"),
            PerfVizError::Csv(err) => write!(f, "CSV error: {err}"),
            PerfVizError::MissingColumns(cols) => {
                write!(f, "Missing required column(s): {}", cols.join(", "))
            }
            PerfVizError::InvalidTimestamp(value) => {
                write!(f, "Unparsable timestamp: {value}")
            }
            PerfVizError::MalformedRow { row, cause } => {
                write!(f, "Malformed data at row {row}: {cause}")
            }
            PerfVizError::EmptySeries => {
                write!(f, "No data rows in input (header only)")
            }
            PerfVizError::Rendering(msg) => write!(f, "Rendering error: {msg}"),
            PerfVizError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            PerfVizError::Environment(msg) => write!(f, "Environment error: {msg}"),
        }
    }
}

impl std::error::Error for PerfVizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PerfVizError::Io(err) => Some(err),
            PerfVizError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PerfVizError {
    fn from(err: std::io::Error) -> Self {
        PerfVizError::Io(err)
    }
}

impl From<csv::Error> for PerfVizError {
    fn from(err: csv::Error) -> Self {
        PerfVizError::Csv(err)
    }
}

/// Type alias for Results using PerfVizError
pub type Result<T> = std::result::Result<T, PerfVizError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let missing = PerfVizError::MissingColumns(vec!["rps".into(), "cpu_percent".into()]);
        assert_eq!(
            format!("{missing}"),
            "Missing required column(s): rps, cpu_percent"
        );

        let empty = PerfVizError::EmptySeries;
        assert_eq!(format!("{empty}"), "No data rows in input (header only)");

        let row = PerfVizError::MalformedRow {
            row: 3,
            cause: "bad float".into(),
        };
        assert_eq!(format!("{row}"), "Malformed data at row 3: bad float");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let error = PerfVizError::from(io_error);

        match error {
            PerfVizError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_no_source_variants() {
        let errors_without_source = vec![
            PerfVizError::MissingColumns(vec!["rps".into()]),
            PerfVizError::InvalidTimestamp("nope".into()),
            PerfVizError::EmptySeries,
            PerfVizError::Rendering("test".into()),
            PerfVizError::Serialization("test".into()),
            PerfVizError::Environment("test".into()),
        ];

        for error in errors_without_source {
            assert!(error.source().is_none());
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PerfVizError>();
    }

    #[test]
    fn test_result_type_alias() {
        let success: Result<i32> = Ok(42);
        let error: Result<i32> = Err(PerfVizError::EmptySeries);

        assert!(success.is_ok());
        assert!(error.is_err());
    }
}
