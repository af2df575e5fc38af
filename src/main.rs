use gcp_infra_audit::gcp::ShellRunner;
use gcp_infra_audit::logging;
use gcp_infra_audit::output::{print_usage, write_report};
use gcp_infra_audit::{run_audit, AuditConfig};
use std::error::Error;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    logging::init(logging::LOG_CONFIG_FILE);
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = match AuditConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            print_usage(&e);
            return Ok(ExitCode::from(1));
        }
    };

    let report = run_audit(&ShellRunner, &config).await;
    write_report(&report, &mut std::io::stdout().lock())?;

    Ok(ExitCode::SUCCESS)
}
