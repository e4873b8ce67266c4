use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "acctdemo", about = "acctdemo - savings and current account walkthrough")]
pub struct CliArgs {
    /// Path to config file
    #[arg(short, long, default_value = "acctdemo.toml")]
    pub config: String,

    /// Log level (overrides config file)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print a summary table of the final accounts (overrides config file)
    #[arg(short, long)]
    pub summary: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ReportConfig {
    /// Append a table of the final balances after the walkthrough.
    #[serde(default)]
    pub summary: bool,
}

fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        json: false,
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging: default_logging(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    pub fn load(cli: &CliArgs) -> Self {
        let mut config = match std::fs::read_to_string(&cli.config) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Config::default(),
        };

        // CLI overrides
        if let Some(ref level) = cli.log_level {
            config.logging.level = level.clone();
        }
        if cli.summary {
            config.report.summary = true;
        }

        config
    }

    /// Parses TOML contents, falling back to defaults when they are malformed.
    pub fn parse(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse config file: {}", e);
            Config::default()
        })
    }
}
