//! Command-line arguments.

use crate::error::{CliError, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Skillmine - Infer demonstrated skills from your GitHub repositories.
///
/// Writes a categorized Markdown report and a JSON export citing every piece of
/// evidence behind each skill.
#[derive(Debug, Parser)]
#[command(name = "skillmine")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// GitHub login whose repositories are scanned
    #[arg(long, env = "GITHUB_USERNAME")]
    pub username: Option<String>,

    /// Personal access token (repo scope for private repositories)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Comma-separated regular expressions of repository names to skip
    #[arg(long, env = "EXCLUDE_REPOS")]
    pub exclude: Option<String>,

    /// API root, for GitHub Enterprise
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Directory receiving the reports
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rows of the skill table printed after the scan
    #[arg(long, default_value_t = 15)]
    pub top: usize,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Load a `.env` file into the process environment, before parsing flags
///
/// Without a path, `.env` is searched in the working directory and its parents.
/// Variables already set in the environment keep their value. Returns the file
/// that was loaded.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => dotenvy::from_path(path).ok().map(|()| path.to_path_buf()),
        None => dotenvy::dotenv().ok(),
    }
}

impl Cli {
    /// Trimmed `(username, token)`; either one blank is an error
    pub fn credentials(&self) -> Result<(String, String)> {
        let username = self.username.as_deref().map(str::trim).unwrap_or_default();
        let token = self.token.as_deref().map(str::trim).unwrap_or_default();
        if username.is_empty() || token.is_empty() {
            return Err(CliError::MissingCredentials);
        }
        Ok((username.to_string(), token.to_string()))
    }

    /// Default log filter for the verbosity level; `RUST_LOG` takes precedence
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["skillmine"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--username", "alice", "--token", "t"]);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.top, 15);
        assert!(!cli.no_color);
        assert_eq!(cli.log_filter(), "info");
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&["-v"]).log_filter(), "debug");
        assert_eq!(parse(&["-vvv"]).log_filter(), "trace");
    }

    #[test]
    fn test_credentials_are_trimmed() {
        let cli = parse(&["--username", " alice ", "--token", "ghp_x\n"]);
        assert_eq!(
            cli.credentials().unwrap(),
            ("alice".to_string(), "ghp_x".to_string())
        );
    }

    #[test]
    fn test_blank_credentials() {
        let cli = parse(&["--username", "alice", "--token", "   "]);
        assert!(matches!(cli.credentials(), Err(CliError::MissingCredentials)));

        let cli = Cli {
            username: None,
            token: None,
            exclude: None,
            api_url: None,
            output_dir: PathBuf::from("."),
            config: None,
            top: 15,
            no_color: false,
            verbose: 0,
        };
        assert!(matches!(cli.credentials(), Err(CliError::MissingCredentials)));
    }

    #[test]
    fn test_env_file_feeds_credentials() {
        if std::env::var_os("GITHUB_USERNAME").is_some() || std::env::var_os("GITHUB_TOKEN").is_some() {
            // The process environment wins over the file
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "GITHUB_USERNAME=dotenv-user\nGITHUB_TOKEN=ghp_dotenv\n").unwrap();

        assert_eq!(load_env_file(Some(&path)), Some(path.clone()));
        let cli = parse(&[]);
        assert_eq!(
            cli.credentials().unwrap(),
            ("dotenv-user".to_string(), "ghp_dotenv".to_string())
        );
    }

    #[test]
    fn test_missing_env_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_env_file(Some(&dir.path().join(".env"))), None);
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "--username",
            "alice",
            "--token",
            "t",
            "--exclude",
            "^fork-",
            "--api-url",
            "https://ghe.example.com/api/v3",
            "-o",
            "out",
            "--config",
            "skillmine.toml",
            "--top",
            "5",
            "--no-color",
        ]);
        assert_eq!(cli.exclude.as_deref(), Some("^fork-"));
        assert_eq!(cli.api_url.as_deref(), Some("https://ghe.example.com/api/v3"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.config, Some(PathBuf::from("skillmine.toml")));
        assert_eq!(cli.top, 5);
        assert!(cli.no_color);
    }
}
