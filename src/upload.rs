//! Job uploader: create one remote job per generated document.
//!
//! Requests go out one at a time in filename order. Every file ends in
//! exactly one [`UploadOutcome`]; nothing that happens to one file stops the
//! others.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::contract::{CreateItemResponse, JobServer};
use crate::discover;
use crate::error::Result;
use crate::job_config::{job_name_from_config_file, CONFIG_SUFFIX, UPLOAD_PREFIX};

/// Terminal state of a single upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UploadOutcome {
    /// HTTP 200.
    Created,
    /// HTTP 400, which Jenkins returns for an existing job name.
    AlreadyExists,
    /// Any other status.
    Failed { status: u16, body: String },
    /// No HTTP response at all.
    TransportError { message: String },
    /// The document could not be read from disk.
    Unreadable { message: String },
}

impl UploadOutcome {
    pub fn is_failure(&self) -> bool {
        !matches!(self, UploadOutcome::Created | UploadOutcome::AlreadyExists)
    }
}

/// Maps a `createItem` response onto an outcome.
pub fn classify(response: CreateItemResponse) -> UploadOutcome {
    match response.status {
        200 => UploadOutcome::Created,
        400 => UploadOutcome::AlreadyExists,
        status => UploadOutcome::Failed {
            status,
            body: response.body,
        },
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobUploadResult {
    pub job_name: String,
    pub file: PathBuf,
    pub outcome: UploadOutcome,
}

/// Per-file outcomes of one uploader run, in processing order.
#[derive(Debug, Default, Serialize)]
pub struct UploadReport {
    pub jobs: Vec<JobUploadResult>,
    /// Files with the upload prefix and suffix but no name segment between
    /// them, e.g. `config_Jenkinsfile.xml`. Never sent.
    pub skipped: Vec<String>,
}

impl UploadReport {
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, UploadOutcome::Created))
    }

    pub fn already_exists(&self) -> usize {
        self.count(|o| matches!(o, UploadOutcome::AlreadyExists))
    }

    pub fn failed(&self) -> usize {
        self.count(UploadOutcome::is_failure)
    }

    /// Outcome for a job, if it was attempted.
    pub fn outcome_for(&self, job_name: &str) -> Option<&UploadOutcome> {
        self.jobs
            .iter()
            .find(|j| j.job_name == job_name)
            .map(|j| &j.outcome)
    }

    fn count(&self, pred: impl Fn(&UploadOutcome) -> bool) -> usize {
        self.jobs.iter().filter(|j| pred(&j.outcome)).count()
    }
}

/// Progress notifications emitted while uploading.
#[derive(Debug)]
pub enum UploadEvent<'a> {
    /// About to send the request for `job_name`.
    Starting { job_name: &'a str, file_name: &'a str },
    /// `file_name` looks like a job config but carries no job name.
    Skipped { file_name: &'a str },
    Finished(&'a JobUploadResult),
}

/// Uploads every `config_Jenkinsfile.<name>.xml` in `xml_dir` to `server`.
///
/// Fails only if the directory is missing or unreadable, before any request
/// is made. Other entries in the directory are ignored. Files with the prefix
/// and suffix but no name between them are reported as skipped.
pub async fn upload_jobs<S, F>(server: &S, xml_dir: &Path, mut on_event: F) -> Result<UploadReport>
where
    S: JobServer + ?Sized,
    F: FnMut(UploadEvent<'_>),
{
    let files = discover::matching_files(xml_dir, |name| {
        name.starts_with(UPLOAD_PREFIX) && name.ends_with(CONFIG_SUFFIX)
    })?;
    info!(dir = %xml_dir.display(), count = files.len(), "Uploading job configs");

    let mut report = UploadReport::default();
    for file_name in files {
        let Some(job_name) = job_name_from_config_file(&file_name).map(str::to_owned) else {
            warn!(file = %file_name, "Skipping config without a job name segment in its filename");
            on_event(UploadEvent::Skipped {
                file_name: &file_name,
            });
            report.skipped.push(file_name);
            continue;
        };
        let file = xml_dir.join(&file_name);

        on_event(UploadEvent::Starting {
            job_name: &job_name,
            file_name: &file_name,
        });

        let outcome = match fs::read(&file) {
            Ok(bytes) => match server.create_item(&job_name, &bytes).await {
                Ok(response) => classify(response),
                Err(e) => UploadOutcome::TransportError {
                    message: e.to_string(),
                },
            },
            Err(e) => {
                error!(error = ?e, file = %file.display(), "Failed to read job config");
                UploadOutcome::Unreadable {
                    message: e.to_string(),
                }
            }
        };

        match &outcome {
            UploadOutcome::Created => info!(job = %job_name, "Job created"),
            UploadOutcome::AlreadyExists => warn!(job = %job_name, "Job already exists"),
            UploadOutcome::Failed { status, body } => {
                error!(job = %job_name, status, body = %body, "Job creation failed")
            }
            UploadOutcome::TransportError { message } => {
                error!(job = %job_name, error = %message, "Job creation request did not complete")
            }
            UploadOutcome::Unreadable { .. } => {}
        }

        let result = JobUploadResult {
            job_name,
            file,
            outcome,
        };
        on_event(UploadEvent::Finished(&result));
        report.jobs.push(result);
    }

    match serde_json::to_string_pretty(&report) {
        Ok(json) => debug!(json = %json, "Upload report"),
        Err(e) => error!(error = ?e, "Failed to serialize upload report"),
    }
    Ok(report)
}
