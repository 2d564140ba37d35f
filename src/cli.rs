use clap::Parser;
use log::LevelFilter;
use std::io::Read;
use std::path::PathBuf;

use crate::builder::PluginBuilder;
use crate::config::BuilderConfig;
use crate::constants::{verbosity, STDIN_INDICATOR};
use crate::error::{Error, Result};
use crate::request::BuildRequest;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for the composer collaborator binary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, help_template = HELP_TEMPLATE)]
pub struct Args {
    /// Build request as a JSON file, or `-` to read JSON from stdin.
    #[arg(value_name = "REQUEST")]
    pub request: String,

    /// Engine configuration file (sandbox root and template roots).
    #[arg(short, long, value_name = "CONFIG")]
    pub config: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parses command line arguments.
pub fn parse_cli() -> Args {
    Args::parse()
}

/// Maps `-v` counts onto log level filters.
pub fn get_log_level_from_verbose(verbose: u8) -> LevelFilter {
    match verbose {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Reads the build request from a file or stdin.
fn read_request(source: &str) -> Result<BuildRequest> {
    let content = if source == STDIN_INDICATOR {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)?
    };

    serde_json::from_str(&content)
        .map_err(|e| Error::Other(anyhow::anyhow!("Invalid build request: {}", e)))
}

/// Loads the configuration, runs one build, prints the artifact path.
pub fn run(args: Args) -> Result<()> {
    let config = BuilderConfig::load(&args.config)?;
    let request = read_request(&args.request)?;

    let builder = PluginBuilder::new(&config)?;
    let artifact = builder.build(&request)?;

    println!("{}", artifact.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_mapping() {
        assert_eq!(get_log_level_from_verbose(0), LevelFilter::Warn);
        assert_eq!(get_log_level_from_verbose(1), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(2), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(3), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(9), LevelFilter::Trace);
    }

    #[test]
    fn request_parses_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(
            &path,
            r#"{"name": "My Plugin", "include_settings_module": true}"#,
        )
        .unwrap();

        let request = read_request(path.to_str().unwrap()).unwrap();
        assert_eq!(request.name, "My Plugin");
        assert!(request.include_settings_module);
    }
}
