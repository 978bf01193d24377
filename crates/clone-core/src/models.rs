use serde::{Deserialize, Serialize};

const REPO_SUFFIX: &str = ".git";
const WIKI_REPO_SUFFIX: &str = ".wiki.git";
const WIKI_FOLDER_SUFFIX: &str = ".wiki";

/// A remote repository selected for cloning
///
/// The wiki locator is always derived from the clone locator, so the only
/// way to build one is [`RepositoryDescriptor::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDescriptor {
    name: String,
    clone_url: String,
    wiki_clone_url: Option<String>,
}

impl RepositoryDescriptor {
    pub fn new(name: impl Into<String>, clone_url: impl Into<String>, has_wiki: bool) -> Self {
        let clone_url = clone_url.into();
        let wiki_clone_url = has_wiki.then(|| wiki_clone_url(&clone_url));
        Self {
            name: name.into(),
            clone_url,
            wiki_clone_url,
        }
    }

    /// Repository name, also the local folder name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clone_url(&self) -> &str {
        &self.clone_url
    }

    pub fn wiki_clone_url(&self) -> Option<&str> {
        self.wiki_clone_url.as_deref()
    }

    /// Folder the main repository is cloned into
    pub fn folder(&self) -> &str {
        &self.name
    }

    /// Folder the wiki is cloned into, if the repository has one
    pub fn wiki_folder(&self) -> Option<String> {
        self.wiki_clone_url
            .as_ref()
            .map(|_| format!("{}{}", self.name, WIKI_FOLDER_SUFFIX))
    }
}

/// Derive a wiki clone locator from a repository clone locator.
///
/// A trailing `.git` becomes `.wiki.git`; a locator without the suffix gets
/// `.wiki` appended. Nothing else in the URL is rewritten.
pub fn wiki_clone_url(clone_url: &str) -> String {
    match clone_url.strip_suffix(REPO_SUFFIX) {
        Some(base) => format!("{}{}", base, WIKI_REPO_SUFFIX),
        None => format!("{}{}", clone_url, WIKI_FOLDER_SUFFIX),
    }
}

/// Which locator from the forge listing is used for cloning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloneProtocol {
    /// `git@host:org/repo.git`
    #[default]
    Ssh,
    /// `https://host/org/repo.git`
    Https,
}
