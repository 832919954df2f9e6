use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Failed to load profile from {path}: {message}")]
    ProfileLoadError { path: String, message: String },

    #[error("Background task failed: {message}")]
    TaskError { message: String },

    #[error("Identity provider error: {message}")]
    IdentityError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Packaging,
    Storage,
    Identity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ExportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExportError::ConfigError { .. }
            | ExportError::MissingConfigError { .. }
            | ExportError::InvalidConfigValueError { .. }
            | ExportError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            ExportError::ProfileLoadError { .. } => ErrorCategory::Input,
            ExportError::ZipError(_) | ExportError::TaskError { .. } => ErrorCategory::Packaging,
            ExportError::IoError(_) => ErrorCategory::Storage,
            ExportError::IdentityError { .. } => ErrorCategory::Identity,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Identity => ErrorSeverity::Low,
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Packaging | ErrorCategory::Storage => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ExportError::ZipError(_) | ExportError::TaskError { .. } => {
                "Run the export again; each attempt starts from scratch"
            }
            ExportError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            ExportError::ProfileLoadError { .. } => {
                "Check that the profile file is valid JSON or TOML"
            }
            ExportError::ConfigValidationError { .. } => {
                "Check the configuration file syntax"
            }
            ExportError::ConfigError { .. }
            | ExportError::MissingConfigError { .. }
            | ExportError::InvalidConfigValueError { .. } => {
                "Review the command line flags and configuration values"
            }
            ExportError::IdentityError { .. } => "Check your credentials and sign in again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Packaging | ErrorCategory::Storage => {
                format!("Error exporting portfolio. Please try again. ({})", self)
            }
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Input => format!("Could not read portfolio data: {}", self),
            ErrorCategory::Identity => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
