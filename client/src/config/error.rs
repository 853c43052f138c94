#[derive(Debug, derive_more::Display)]
pub enum ConfigError {
    #[display("Failed to access config file {}: {}", path, source)]
    Io { path: String, source: std::io::Error },

    #[display("Failed to deserialize config: {}", _0)]
    Parse(serde_yaml_ng::Error),

    #[display("Failed to serialize config: {}", _0)]
    Serialize(serde_yaml_ng::Error),

    #[display("Config validation error: {}", _0)]
    Invalid(String),
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) | ConfigError::Serialize(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}
