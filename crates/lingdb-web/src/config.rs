//! Service configuration.

use clap::Parser;
use lingdb_core::util::SUMMARY_LENGTH;

/// LingDB reference data service command line arguments.
#[derive(Debug, Parser)]
#[command(name = "lingdb-web")]
#[command(about = "HTTP service for LingDB enumerations and glossing abbreviations")]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    pub listen: String,

    /// Maximal length of descriptions in plain text listings.
    #[arg(long, default_value_t = SUMMARY_LENGTH)]
    pub description_length: usize,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Maximal length of descriptions in plain text listings.
    pub description_length: usize,
}

impl From<&Args> for WebConfig {
    fn from(args: &Args) -> Self {
        Self {
            listen_addr: args.listen.clone(),
            description_length: args.description_length,
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            description_length: SUMMARY_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults_match_config_defaults() {
        let args = Args::parse_from(["lingdb-web"]);
        let config = WebConfig::from(&args);
        let default = WebConfig::default();
        assert_eq!(config.listen_addr, default.listen_addr);
        assert_eq!(config.description_length, default.description_length);
    }

    #[test]
    fn test_args_override() {
        let args = Args::parse_from([
            "lingdb-web",
            "-l",
            "0.0.0.0:9000",
            "--description-length",
            "20",
        ]);
        let config = WebConfig::from(&args);
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.description_length, 20);
    }
}
