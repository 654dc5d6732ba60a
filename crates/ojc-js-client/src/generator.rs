use ojc_core::CodeGenerator;
use ojc_core::parse::document::Document;
use thiserror::Error;

use crate::emitters;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),
}

/// Configuration for the JavaScript client generator.
#[derive(Debug, Clone, Default)]
pub struct JsClientConfig {
    /// Base URL baked into the module instead of the document's first server.
    pub base_url: Option<String>,
}

/// JavaScript client generator.
pub struct JsClientGenerator;

impl CodeGenerator for JsClientGenerator {
    type Config = JsClientConfig;
    type Error = EmitError;

    fn generate(&self, document: &Document, config: &Self::Config) -> Result<String, Self::Error> {
        let base_url = config
            .base_url
            .clone()
            .or_else(|| document.servers.first().map(|server| server.url.clone()))
            .unwrap_or_default();
        Ok(emitters::client::emit_module(document, &base_url)?)
    }
}
