//! CLI definitions for VisionCam.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// VisionCam CLI.
#[derive(Parser)]
#[command(name = "visioncam")]
#[command(about = "Webcam frame captioning and visual Q&A over OpenAI and AWS Bedrock")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (optional; defaults apply when missing)
    #[arg(short, long, env = "VISIONCAM_CONFIG", default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run {
        /// Server host, overrides the configured value
        #[arg(long)]
        host: Option<String>,

        /// Server port, overrides the configured value
        #[arg(long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["visioncam"]);
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_run_overrides() {
        let cli = Cli::parse_from([
            "visioncam",
            "run",
            "--host",
            "0.0.0.0",
            "--port",
            "8000",
            "--config",
            "/etc/visioncam.toml",
        ]);
        assert_eq!(cli.config, PathBuf::from("/etc/visioncam.toml"));
        match cli.command {
            Some(Commands::Run { host, port }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8000));
            }
            None => panic!("Expected run command"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_port() {
        assert!(Cli::try_parse_from(["visioncam", "run", "--port", "70000"]).is_err());
    }
}
