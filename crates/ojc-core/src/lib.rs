pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;

use parse::document::Document;

/// Trait for code generators that turn a parsed document into one source module.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(&self, document: &Document, config: &Self::Config)
    -> Result<String, Self::Error>;
}
