mod cli;
mod color;
mod config;
mod git;
mod output;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::Cli;
use clone_core::{RepositoryLister, SyncConfig, Synchronizer};
use config::Config;
use git::GitCli;
use github_backend::GitHubClient;
use output::output_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return ExitCode::SUCCESS;
    }

    color::init(cli.color);
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        output_error(&e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<()> {
    let token = cli
        .token
        .as_deref()
        .ok_or_else(|| anyhow!("GitHub token is required"))?;

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli);
    config.validate()?;
    log::debug!("{:?}", config);

    let client = GitHubClient::with_base_url(&config.api_url, &config.org, token)
        .control_repo(&config.control_repo)
        .protocol(config.protocol);

    let repos = client
        .list_repositories()
        .with_context(|| format!("Failed to list repositories of {}", config.org))?;
    output::print_found(repos.len());

    let root = config.root();
    if !cli.dry_run && config.dest.is_some() {
        std::fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create {}", root.display()))?;
    }

    let tool = GitCli::new(&config.git);
    let sync_config = SyncConfig {
        dry_run: cli.dry_run,
        root,
    };
    let report = Synchronizer::new(&tool, sync_config).run(&repos, output::print_event);
    log::info!(
        "cloned {}, skipped {}, planned {}, failed {}",
        report.cloned,
        report.skipped,
        report.planned,
        report.failed
    );

    output::print_summary(&report);
    Ok(())
}
