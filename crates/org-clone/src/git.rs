use clone_core::{CloneError, CloneTool};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Clones by running `git clone <url>`, with git's own output passed through
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl CloneTool for GitCli {
    fn command_line(&self, url: &str) -> Vec<String> {
        vec![self.program.clone(), "clone".to_string(), url.to_string()]
    }

    fn clone_repo(&self, url: &str, parent: &Path) -> Result<(), CloneError> {
        debug!("{} clone {} (in {})", self.program, url, parent.display());

        let status = Command::new(&self.program)
            .arg("clone")
            .arg(url)
            .current_dir(parent)
            .status()
            .map_err(|source| CloneError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CloneError::Failed {
                url: url.to_string(),
                status: status.to_string(),
            })
        }
    }
}
