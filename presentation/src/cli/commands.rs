//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for zenbot
#[derive(Parser, Debug)]
#[command(name = "zenbot")]
#[command(author, version, about = "Two opposing agents argue, a judge resolves, answers stream over SSE")]
#[command(long_about = r#"
zenbot serves one endpoint, POST /zenbot, that takes a dilemma and streams
back the panel's deliberation as server-sent events:

1. Fan-out: Build Fast and Stillness argue the dilemma concurrently
2. Judge: ZenJudge weighs both arguments into one resolution
3. Stream: the resolution is typed out word by word

Configuration files are loaded from (in priority order):
1. ZENBOT_* environment variables (e.g. ZENBOT_SERVER__PORT)
2. --config <path>                      Explicit config file
3. ./zenbot.toml or ./.zenbot.toml      Project-level config
4. ~/.config/zenbot/config.toml         Global config

Example:
  zenbot -v
  zenbot --port 3000 --config ./staging.toml
  curl -N -X POST localhost:8080/zenbot -d '{"message": "Ship today or sleep on it?"}'
"#)]
pub struct Cli {
    /// Address to listen on (overrides server.host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long, env = "PORT", value_name = "PORT")]
    pub port: Option<u16>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to a daily-rolling file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config_sources: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "zenbot",
            "-vv",
            "--host",
            "127.0.0.1",
            "--port",
            "3000",
            "--config",
            "zen.toml",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(3000));
        assert_eq!(cli.config, Some(PathBuf::from("zen.toml")));
        assert!(!cli.show_config_sources);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["zenbot", "--port", "99999"]).is_err());
    }
}
