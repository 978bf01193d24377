use serde::{Deserialize, Serialize};

/// Repository record from `GET /orgs/{org}/repos`
///
/// Only the fields the cloner needs are modelled; they are all required so a
/// malformed listing fails at parse time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRepo {
    pub name: String,
    pub archived: bool,
    pub ssh_url: String,
    pub clone_url: String,
    pub has_wiki: bool,
    #[serde(default)]
    pub full_name: Option<String>,
}
