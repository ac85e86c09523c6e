//! Skillmine - infer demonstrated skills from a GitHub account.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use skillmine_cli::{scan, Cli, Config, Formatter};
use skillmine_github::GitHubClient;
use tracing_subscriber::EnvFilter;

fn main() {
    // Must run before parsing so the `env` fallbacks see the file
    let env_file = skillmine_cli::cli::load_env_file(None);
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the summary
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(!cli.no_color)
        .init();
    if let Some(path) = &env_file {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    if cli.no_color {
        colored::control::set_override(false);
    }
    let formatter = Formatter::new(!cli.no_color);

    let (username, token) = match cli.credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{}", formatter.error(&e.to_string()));
            eprintln!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &formatter, &username, token) {
        eprintln!("{}", formatter.error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, formatter: &Formatter, username: &str, token: String) -> anyhow::Result<()> {
    let config = Config::resolve(cli.config.as_deref()).context("Loading configuration")?;

    let mut client = GitHubClient::new(username, token).context("Building the GitHub client")?;
    if let Some(api_url) = cli.api_url.as_deref() {
        client = client
            .with_base_url(api_url)
            .with_context(|| format!("Invalid API URL {}", api_url))?;
    }

    let outcome = scan::execute(client, username, cli, &config)
        .with_context(|| format!("Scanning repositories of {}", username))?;

    println!("{}", formatter.scan_summary(&outcome.summary));
    println!("{}", formatter.skills_table(&outcome.aggregated, cli.top));
    println!("{}", formatter.reports_written(&outcome.written));
    Ok(())
}
