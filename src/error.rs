use crate::endpoint::UrlError;

/// Errors raised while building or selecting an endpoint configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured URL is not a valid absolute URI.
    #[error("invalid configuration: `{field}` is not a valid absolute URI ({url}): {source}")]
    InvalidConfiguration {
        field: &'static str,
        url: String,
        #[source]
        source: UrlError,
    },
    /// A name that matches none of the known environments.
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
