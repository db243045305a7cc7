//! Command-line surface of both binaries.
//!
//! Argument definitions live here together with the `run_*` entrypoints so
//! integration tests can drive a full command without spawning a process.
//! Process exit codes are decided in the binaries only.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::client::JenkinsClient;
use crate::config::{GenerateConfig, UploadConfig};
use crate::contract::JobServer;
use crate::error::{OnboardError, Result};
use crate::generate::{generate_configs, GenerateOutcome, GenerateReport};
use crate::upload::{upload_jobs, UploadEvent, UploadOutcome, UploadReport};

/// Generate Jenkins job XMLs for the Jenkinsfiles in a directory.
#[derive(Parser, Debug)]
#[clap(
    name = "generate-configs",
    version,
    about = "Generate Jenkins job XMLs for Jenkinsfiles in a path"
)]
pub struct GenerateCli {
    /// Git repository URL (no auth)
    #[clap(long)]
    pub repo: String,
    /// Branch name
    #[clap(long)]
    pub branch: String,
    /// Directory containing Jenkinsfiles
    #[clap(long)]
    pub path: PathBuf,
}

/// Create Jenkins jobs from generated config XMLs.
#[derive(Parser)]
#[clap(
    name = "create-jobs",
    version,
    about = "Create Jenkins jobs from config_Jenkinsfile.<name>.xml files",
    after_help = "Example: create-jobs http://192.168.0.10:8080 myuser mytoken ./jenkins_xml"
)]
pub struct CreateJobsCli {
    /// Jenkins base URL
    #[clap(value_name = "JENKINS_URL")]
    pub server_url: String,
    /// Jenkins user
    #[clap(value_name = "USER")]
    pub user: String,
    /// API token of the user
    #[clap(value_name = "API_TOKEN")]
    pub api_token: String,
    /// Directory with config_Jenkinsfile.<name>.xml files
    #[clap(value_name = "XML_DIR")]
    pub xml_dir: PathBuf,
}

/// Exit status for an argument parsing failure. `--help` and `--version`
/// also surface as clap errors and must exit cleanly.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// Prints a setup-level error the way users expect to see it.
pub fn report_error(err: &OnboardError) {
    match err {
        OnboardError::NoInputFilesFound { .. } => eprintln!("Warning: {err}"),
        _ => eprintln!("Error: {err}"),
    }
}

/// Runs the config generator and prints one line per Jenkinsfile.
pub fn run_generate(cli: GenerateCli) -> Result<GenerateReport> {
    info!("trace_initialised");

    let config = GenerateConfig::new(cli.repo, cli.branch, cli.path);
    config.trace_loaded();
    let working_dir = std::env::current_dir().map_err(OnboardError::WorkingDirectory)?;

    let report = generate_configs(&config, &working_dir, |generated| {
        match &generated.outcome {
            GenerateOutcome::Written => println!(
                "Generated {} for {}",
                generated.output.display(),
                generated.jenkinsfile
            ),
            GenerateOutcome::Failed(e) => println!(
                "Failed to write {} for {}: {}",
                generated.output.display(),
                generated.jenkinsfile,
                e
            ),
        }
    })?;

    println!(
        "{} config(s) generated, {} failed.",
        report.written(),
        report.failed()
    );
    Ok(report)
}

/// Runs the job uploader against the Jenkins server named on the command line.
pub async fn run_create_jobs(cli: CreateJobsCli) -> Result<UploadReport> {
    info!("trace_initialised");

    let config = UploadConfig::new(&cli.server_url, cli.user, cli.api_token, cli.xml_dir);
    config.trace_loaded();
    if !config.xml_dir.is_dir() {
        return Err(OnboardError::DirectoryNotFound(config.xml_dir.clone()));
    }

    let client = JenkinsClient::new(&config)?;
    upload_and_print(&client, &config).await
}

/// Upload loop with user-facing output, for any [`JobServer`].
pub async fn upload_and_print<S>(server: &S, config: &UploadConfig) -> Result<UploadReport>
where
    S: JobServer + ?Sized,
{
    let report = upload_jobs(server, &config.xml_dir, |event| match event {
        UploadEvent::Starting {
            job_name,
            file_name,
        } => println!("Creating job '{job_name}' from {file_name}..."),
        UploadEvent::Skipped { file_name } => {
            println!("Skipping {file_name}: no job name between 'config_Jenkinsfile.' and '.xml'.")
        }
        UploadEvent::Finished(result) => {
            let job = &result.job_name;
            match &result.outcome {
                UploadOutcome::Created => println!("Job '{job}' created successfully."),
                UploadOutcome::AlreadyExists => println!("Warning: job '{job}' already exists."),
                UploadOutcome::Failed { status, body } => {
                    println!("Failed to create job '{job}': {status} {body}")
                }
                UploadOutcome::TransportError { message } => {
                    println!("Failed to create job '{job}': {message}")
                }
                UploadOutcome::Unreadable { message } => {
                    println!("Failed to read {}: {message}", result.file.display())
                }
            }
        }
    })
    .await?;

    println!(
        "{} created, {} already existed, {} failed.",
        report.created(),
        report.already_exists(),
        report.failed()
    );
    Ok(report)
}
