use clap::Parser;
use jenkins_onboard::cli::{report_error, run_create_jobs, usage_exit_code, CreateJobsCli};
use jenkins_onboard::logging::init_tracing;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = match CreateJobsCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e));
        }
    };
    tracing::info!("CLI arguments parsed, invoking run_create_jobs");

    // Remote failures are reported per job and do not change the exit status.
    match run_create_jobs(cli).await {
        Ok(report) => tracing::info!(
            created = report.created(),
            failed = report.failed(),
            "CLI completed"
        ),
        Err(e) => {
            tracing::error!(error = %e, "CLI exited with error");
            report_error(&e);
            std::process::exit(e.exit_code());
        }
    }
}
