use clap::Parser;
use jenkins_onboard::cli::{report_error, run_generate, usage_exit_code, GenerateCli};
use jenkins_onboard::logging::init_tracing;

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = match GenerateCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e));
        }
    };
    tracing::info!("CLI arguments parsed, invoking run_generate");

    match run_generate(cli) {
        Ok(report) if report.failed() > 0 => {
            tracing::error!(failed = report.failed(), "Some job configs could not be written");
            std::process::exit(1);
        }
        Ok(_) => tracing::info!("CLI completed successfully"),
        Err(e) => {
            tracing::error!(error = %e, "CLI exited with error");
            report_error(&e);
            std::process::exit(e.exit_code());
        }
    }
}
