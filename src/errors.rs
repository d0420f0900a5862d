use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration section [{0}] is missing")]
    MissingSection(String),

    #[error("Configuration section [{section}] is invalid: {source}")]
    InvalidSection {
        section: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid initial_state in [{section}]: {reason}")]
    InvalidInitialState { section: String, reason: String },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SimError {
    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
