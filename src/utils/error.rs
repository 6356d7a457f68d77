use thiserror::Error;

/// Failures of the layers around a bottle. A `Bottle` itself never fails.
#[derive(Error, Debug)]
pub enum BottleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid step '{input}': {reason}")]
    StepParseError { input: String, reason: String },

    #[error("Unknown locale '{value}'")]
    InvalidLocale { value: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Empty value for '{field}'")]
    EmptyConfigValueError { field: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },
}

impl BottleError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            BottleError::IoError(e) => format!("Could not read the scenario file: {}", e),
            BottleError::TomlParseError(_) => "The scenario file is not valid TOML".to_string(),
            BottleError::StepParseError { input, .. } => {
                format!("Could not understand the step '{}'", input)
            }
            BottleError::InvalidLocale { value } => {
                format!("The language '{}' is not supported", value)
            }
            BottleError::InvalidConfigValueError { field, value, .. } => {
                format!("The value '{}' is not allowed for '{}'", value, field)
            }
            BottleError::EmptyConfigValueError { field } => {
                format!("The setting '{}' cannot be empty", field)
            }
            BottleError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BottleError::IoError(_) => "Check that the file exists and is readable",
            BottleError::TomlParseError(_) => "Check the file against the scenario format",
            BottleError::StepParseError { .. } => {
                "Write steps as <fill|empty>:<amount>, for example fill:250"
            }
            BottleError::InvalidLocale { .. } => "Use 'en' or 'de'",
            BottleError::InvalidConfigValueError { .. } => "Use a finite number",
            BottleError::EmptyConfigValueError { .. } => "Fill in a value, for example \"fill\"",
            BottleError::MissingConfigError { .. } => "Add the missing field to the scenario",
        }
    }
}

pub type Result<T> = std::result::Result<T, BottleError>;
