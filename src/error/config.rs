use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable holds a value that is not an absolute URL.
    #[error("Environment variable {name} is not a valid URL: {source}")]
    InvalidUrl {
        name: String,
        #[source]
        source: url::ParseError,
    },

    /// An entry of `OVERRIDE_IDS` is not a Discord user id.
    #[error("Invalid override id '{0}', expected a Discord user id")]
    InvalidOverrideId(String),
}
