//! Error handling for the distance KS tester

use thiserror::Error;

/// Custom error types for the distance KS tester
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors (missing or unreadable sample files, unwritable plot path)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (malformed rows, non-numeric fields)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Statistics input errors (empty samples)
    #[error("Statistics error: {0}")]
    Statistics(String),

    /// Chart rendering errors
    #[error("Plot error: {0}")]
    Plot(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new statistics error
    pub fn statistics<S: Into<String>>(message: S) -> Self {
        Self::Statistics(message.into())
    }

    /// Create a new plot error
    pub fn plot<S: Into<String>>(message: S) -> Self {
        Self::Plot(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Statistics(_) => "STATS",
            Self::Plot(_) => "PLOT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file or command line arguments.", msg)
            }
            Self::Validation(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Check the column index, significance level and method name.", msg)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check that both sample files exist and are readable.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse data: {}\n\nSuggestion: Make sure every non-comment row has the requested column and that it is numeric. Comment lines must start with '#!'.", msg)
            }
            Self::Statistics(msg) => {
                format!("Statistics calculation failed: {}\n\nSuggestion: Both samples need at least one data row.", msg)
            }
            Self::Plot(msg) => {
                format!("Could not render the CDF plot: {}\n\nSuggestion: Check the plot output path or rerun with -noplot.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => 1,  // Invalid configuration/usage/data
            Self::Io(_) => 5,  // I/O issues
            Self::Statistics(_) => 6,  // Unusable samples
            Self::Plot(_) => 7,  // Rendering issues
            Self::Internal(_) => 99,  // Internal/unexpected errors
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Io(_) | Self::Statistics(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Plot(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("JSON serialization error: {}", error))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

// Anyhow integration
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error, keeping its category
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error
    fn context(self, message: &'static str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let original_error = e.into();
            let context = f();
            match original_error {
                AppError::Config(msg) => AppError::Config(format!("{}: {}", context, msg)),
                AppError::Validation(msg) => AppError::Validation(format!("{}: {}", context, msg)),
                AppError::Io(msg) => AppError::Io(format!("{}: {}", context, msg)),
                AppError::Parse(msg) => AppError::Parse(format!("{}: {}", context, msg)),
                AppError::Statistics(msg) => AppError::Statistics(format!("{}: {}", context, msg)),
                AppError::Plot(msg) => AppError::Plot(format!("{}: {}", context, msg)),
                AppError::Internal(msg) => AppError::Internal(format!("{}: {}", context, msg)),
            }
        })
    }

    fn context(self, message: &'static str) -> Result<T> {
        self.with_context(|| message.to_string())
    }
}

/// Error reporter for structured error logging and user feedback
pub struct ErrorReporter {
    pub use_color: bool,
    pub verbose: bool,
}

impl ErrorReporter {
    /// Create a new error reporter
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    /// Render an error the way `report_error` prints it
    pub fn format_error(&self, error: &AppError) -> String {
        let mut output = error.format_for_console(self.use_color);
        if self.verbose {
            output.push_str("\n\n");
            output.push_str(&error.user_friendly_message());
        }
        output
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", self.format_error(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = AppError::config("Test config error");
        assert_eq!(error.category(), "CONFIG");
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_exit_codes_by_taxonomy() {
        assert_eq!(AppError::validation("x").exit_code(), 1);
        assert_eq!(AppError::parse("x").exit_code(), 1);
        assert_eq!(AppError::io("x").exit_code(), 5);
        assert_eq!(AppError::statistics("x").exit_code(), 6);
        assert_eq!(AppError::plot("x").exit_code(), 7);
        assert_eq!(AppError::internal("x").exit_code(), 99);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert_eq!(app_error.category(), "IO");
        assert!(app_error.to_string().contains("File not found"));
    }

    #[test]
    fn test_dotenv_error_conversion() {
        let dotenv_error = dotenv::Error::LineParse(".env".to_string(), 1);
        let app_error: AppError = dotenv_error.into();
        assert_eq!(app_error.category(), "CONFIG");
        assert!(app_error.to_string().contains("Environment file error"));
    }

    #[test]
    fn test_anyhow_integration() {
        let anyhow_error = anyhow::anyhow!("Test anyhow error");
        let app_error: AppError = anyhow_error.into();
        assert_eq!(app_error.category(), "INTERNAL");

        let app_error = AppError::statistics("empty sample");
        let anyhow_error = anyhow::anyhow!(app_error);
        assert!(anyhow_error.to_string().contains("Statistics error"));
    }

    #[test]
    fn test_error_context_keeps_category() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let err = result.with_context(|| "reading sample1".to_string()).unwrap_err();
        assert_eq!(err.category(), "IO");
        assert!(err.to_string().contains("reading sample1: missing"));

        let result: Result<f64> = Err(AppError::parse("'x' is not a number"));
        let err = result.context("column 2").unwrap_err();
        assert_eq!(err.category(), "PARSE");
        assert!(err.to_string().starts_with("Parsing error: column 2: 'x'"));
    }

    #[test]
    fn test_console_formatting() {
        let error = AppError::parse("bad row");
        let formatted_no_color = error.format_for_console(false);
        let formatted_color = error.format_for_console(true);

        assert_eq!(formatted_no_color, "[PARSE] Parsing error: bad row");
        assert!(formatted_color.contains("PARSE"));
        assert!(formatted_color.contains("bad row"));
    }

    #[test]
    fn test_error_reporter_verbose_adds_suggestion() {
        let error = AppError::statistics("sample1 is empty");

        let quiet = ErrorReporter::new(false, false).format_error(&error);
        assert!(!quiet.contains("Suggestion"));

        let verbose = ErrorReporter::new(false, true).format_error(&error);
        assert!(verbose.starts_with("[STATS]"));
        assert!(verbose.contains("Suggestion"));
    }
}
