use serde::Deserialize;

/// A server URL definition. The first declared server is the default base URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Server {
    pub url: String,

    pub description: Option<String>,
}
