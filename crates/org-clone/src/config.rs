use crate::cli::Cli;
use anyhow::{anyhow, Result};
use clone_core::CloneProtocol;
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "org-clone";
const LOCAL_CONFIG_FILE: &str = "org-clone.toml";

/// Settings for a run, layered from defaults, config files, environment and CLI flags
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Organization whose repositories are listed
    pub org: String,
    /// Repository that is never cloned
    pub control_repo: String,
    /// GitHub API base URL
    pub api_url: String,
    /// Which clone locator to use
    pub protocol: CloneProtocol,
    /// git executable
    pub git: String,
    /// Directory the clones go into; the current directory when unset
    pub dest: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            org: "modular-server-manager".to_string(),
            control_repo: "root".to_string(),
            api_url: "https://api.github.com".to_string(),
            protocol: CloneProtocol::Ssh,
            git: "git".to_string(),
            dest: None,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed("ORG_CLONE_"));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(&mut self, cli: &Cli) {
        if let Some(org) = &cli.org {
            self.org = org.clone();
        }
        if let Some(url) = &cli.api_url {
            self.api_url = url.clone();
        }
        if let Some(name) = &cli.control_repo {
            self.control_repo = name.clone();
        }
        if let Some(protocol) = cli.protocol {
            self.protocol = protocol.into();
        }
        if let Some(dest) = &cli.dest {
            self.dest = Some(dest.clone());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.org.trim().is_empty() {
            return Err(anyhow!(
                "Organization not configured. Set via --org, ORG_CLONE_ORG env var, or config file"
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err(anyhow!(
                "API URL not configured. Set via --api-url, ORG_CLONE_API_URL env var, or config file"
            ));
        }
        if self.git.trim().is_empty() {
            return Err(anyhow!(
                "git program not configured. Set via ORG_CLONE_GIT env var or config file"
            ));
        }
        Ok(())
    }

    /// Directory existence checks and clones happen in
    pub fn root(&self) -> PathBuf {
        self.dest.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join(APP_NAME).join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join(APP_NAME)
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join(LOCAL_CONFIG_FILE))
}
