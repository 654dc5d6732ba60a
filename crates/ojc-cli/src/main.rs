use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ojc_core::CodeGenerator;
use ojc_core::parse;
use ojc_js_client::{JsClientConfig, JsClientGenerator};

#[derive(Parser)]
#[command(name = "ojc", about = "OpenAPI 3.0 JavaScript client generator", version)]
struct Cli {
    /// Path to the OpenAPI document (YAML or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Path of the JavaScript module to write
    #[arg(short, long)]
    output: PathBuf,

    /// Base URL baked into the module instead of the document's first server
    #[arg(short, long)]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let ext = cli
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("yaml");
    let document = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };

    let config = JsClientConfig {
        base_url: cli.base_url.clone(),
    };
    let module = JsClientGenerator.generate(&document, &config)?;

    fs::write(&cli.output, &module)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    let operations: usize = document
        .paths
        .values()
        .map(|item| item.operations.len())
        .sum();
    println!(
        "Generated {} ({} operations) from {}",
        cli.output.display(),
        operations,
        cli.input.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOMENTS: &str = r#"
openapi: "3.0.0"
info:
  title: Moments API
  version: "2.1.0"
servers:
  - url: https://api.moments.dev/v2
paths:
  /moment/list:
    get:
      responses:
        "200":
          description: ok
"#;

    #[test]
    fn test_writes_the_generated_module() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.yaml");
        let output = dir.path().join("client.js");
        fs::write(&input, MOMENTS).unwrap();

        let cli = Cli {
            input,
            output: output.clone(),
            base_url: Some("https://example.test".to_string()),
        };
        run(&cli).unwrap();

        let module = fs::read_to_string(&output).unwrap();
        assert!(module.contains("const DEFAULT_BASE_URL = \"https://example.test\";"));
        assert!(module.contains("client.getMomentList = function (options = {}) {"));
        assert!(module.contains("export default createClient;"));
    }

    #[test]
    fn test_failed_parse_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.yaml");
        let output = dir.path().join("client.js");
        fs::write(&input, "openapi: \"2.0\"\ninfo:\n  title: Old\n  version: \"1\"\npaths: {}\n")
            .unwrap();

        let cli = Cli {
            input,
            output: output.clone(),
            base_url: None,
        };
        assert!(run(&cli).is_err());
        assert!(!output.exists());
    }
}
