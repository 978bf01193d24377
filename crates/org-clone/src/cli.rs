use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use clone_core::CloneProtocol;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "org-clone",
    version,
    about = "Clone every repository of a GitHub organization"
)]
pub struct Cli {
    /// GitHub token used to list the organization's repositories
    #[arg(
        env = "ORG_CLONE_TOKEN",
        hide_env_values = true,
        required_unless_present = "completions"
    )]
    pub token: Option<String>,

    /// Print the clone commands instead of running them
    #[arg(long, short = 'n', visible_alias = "test")]
    pub dry_run: bool,

    /// Path to a TOML config file
    #[arg(long, env = "ORG_CLONE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Organization whose repositories are cloned (overrides config file)
    #[arg(long)]
    pub org: Option<String>,

    /// GitHub API base URL (overrides config file)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Repository that is never cloned (overrides config file)
    #[arg(long, value_name = "NAME")]
    pub control_repo: Option<String>,

    /// Clone over ssh or https (overrides config file)
    #[arg(long, value_enum)]
    pub protocol: Option<Protocol>,

    /// Directory to clone into (defaults to the current directory)
    #[arg(long, short = 'C', value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum Protocol {
    Ssh,
    Https,
}

impl From<Protocol> for CloneProtocol {
    fn from(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Ssh => CloneProtocol::Ssh,
            Protocol::Https => CloneProtocol::Https,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "org-clone", &mut std::io::stdout());
    }
}
