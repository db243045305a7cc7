//! Config generator: one job document per Jenkinsfile in a directory.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::config::GenerateConfig;
use crate::discover;
use crate::error::{OnboardError, Result};
use crate::job_config::{config_file_name, is_jenkinsfile, JobDefinition};
use crate::paths;

/// Result of writing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum GenerateOutcome {
    Written,
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedConfig {
    /// Source filename, e.g. `Jenkinsfile.api`.
    pub jenkinsfile: String,
    /// Where the document was (or should have been) written.
    pub output: PathBuf,
    /// `scriptPath` value put in the document.
    pub script_path: String,
    pub outcome: GenerateOutcome,
}

#[derive(Debug, Default, Serialize)]
pub struct GenerateReport {
    pub configs: Vec<GeneratedConfig>,
}

impl GenerateReport {
    pub fn written(&self) -> usize {
        self.configs
            .iter()
            .filter(|c| c.outcome == GenerateOutcome::Written)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.configs.len() - self.written()
    }
}

/// Writes `config_<name>.xml` next to every Jenkinsfile in `config.dir`.
///
/// `working_dir` is the base for `scriptPath`; the CLI passes the process
/// working directory. Existing documents are overwritten. A failed write is
/// recorded in the report and the remaining files are still processed.
/// `on_config` is called after each file.
pub fn generate_configs<F>(
    config: &GenerateConfig,
    working_dir: &Path,
    mut on_config: F,
) -> Result<GenerateReport>
where
    F: FnMut(&GeneratedConfig),
{
    let jenkinsfiles = discover::matching_files(&config.dir, is_jenkinsfile)?;
    if jenkinsfiles.is_empty() {
        warn!(dir = %config.dir.display(), "No Jenkinsfiles found in given path");
        return Err(OnboardError::NoInputFilesFound {
            dir: config.dir.clone(),
            pattern: "Jenkinsfile*",
        });
    }
    info!(count = jenkinsfiles.len(), "Generating job configs");

    let mut report = GenerateReport::default();
    for jenkinsfile in jenkinsfiles {
        let script_path = paths::relative_to(&config.dir.join(&jenkinsfile), working_dir);
        let output = config.dir.join(config_file_name(&jenkinsfile));

        let document = JobDefinition {
            repo_url: &config.repo_url,
            branch: &config.branch,
            script_path: &script_path,
        }
        .render();

        let outcome = match fs::write(&output, document) {
            Ok(()) => {
                info!(
                    jenkinsfile = %jenkinsfile,
                    output = %output.display(),
                    script_path = %script_path,
                    "config_generated"
                );
                GenerateOutcome::Written
            }
            Err(e) => {
                error!(error = ?e, output = %output.display(), "Failed to write job config");
                GenerateOutcome::Failed(e.to_string())
            }
        };

        let generated = GeneratedConfig {
            jenkinsfile,
            output,
            script_path,
            outcome,
        };
        on_config(&generated);
        report.configs.push(generated);
    }

    match serde_json::to_string_pretty(&report) {
        Ok(json) => debug!(json = %json, "Generate report"),
        Err(e) => error!(error = ?e, "Failed to serialize generate report"),
    }
    Ok(report)
}
