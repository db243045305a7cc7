// jenkins-onboard/src/config.rs

use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Inputs of the config generator.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Git repository URL, inserted verbatim into every document.
    pub repo_url: String,
    /// Branch name without the `*/` prefix.
    pub branch: String,
    /// Directory scanned for Jenkinsfiles; documents are written here too.
    pub dir: PathBuf,
}

impl GenerateConfig {
    pub fn new(repo_url: impl Into<String>, branch: impl Into<String>, dir: PathBuf) -> Self {
        Self {
            repo_url: repo_url.into(),
            branch: branch.into(),
            dir,
        }
    }

    pub fn trace_loaded(&self) {
        info!(
            repo_url = %self.repo_url,
            branch = %self.branch,
            dir = %self.dir.display(),
            "Loaded generate config"
        );
    }
}

/// Inputs of the job uploader.
#[derive(Clone)]
pub struct UploadConfig {
    /// Server base URL with trailing slashes removed.
    pub server_url: String,
    pub user: String,
    pub api_token: String,
    /// Directory holding `config_Jenkinsfile.<name>.xml` documents.
    pub xml_dir: PathBuf,
}

impl UploadConfig {
    pub fn new(
        server_url: &str,
        user: impl Into<String>,
        api_token: impl Into<String>,
        xml_dir: PathBuf,
    ) -> Self {
        Self {
            server_url: normalize_base_url(server_url),
            user: user.into(),
            api_token: api_token.into(),
            xml_dir,
        }
    }

    pub fn trace_loaded(&self) {
        info!(
            server_url = %self.server_url,
            user = %self.user,
            api_token_len = self.api_token.len(),
            xml_dir = %self.xml_dir.display(),
            "Loaded upload config"
        );
        debug!(?self, "Upload config loaded (full debug)");
    }
}

// The token must never end up in logs.
impl fmt::Debug for UploadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadConfig")
            .field("server_url", &self.server_url)
            .field("user", &self.user)
            .field("api_token", &"<redacted>")
            .field("xml_dir", &self.xml_dir)
            .finish()
    }
}

/// Strips every trailing `/` so paths can be appended with a single slash.
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
