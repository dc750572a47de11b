use closeout::config;
use closeout::errors::Result;
use closeout::export::export_report;
use closeout::model::{self, DailyReport};
use closeout::render::render_report;
use closeout::session::ReportSession;
use closeout::summary::SummaryClient;
use dotenvy::dotenv;
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Load the report named on the command line, or start from defaults
    let report = match env::args().nth(1) {
        Some(path) => {
            let report = model::load_report(&path)
                .inspect_err(|e| error!("Failed to load report from {path}: {e}"))?;
            info!("Loaded closing report from {path}.");
            report
        }
        None => {
            info!("No report file given; starting from an empty report for today.");
            DailyReport::default()
        }
    };

    if !report.branch_name.is_empty() && !app_config.reference.knows_branch(&report.branch_name) {
        warn!("Branch {:?} is not in the configured branch list.", report.branch_name);
    }

    // 5. Derive and render. The session recomputes figures on every edit;
    //    here the load is the only "edit", so derive once and read.
    let session = ReportSession::new(report);
    let rendered = render_report(session.report(), session.figures());
    println!("{rendered}");

    // 6. Export the artifact. Failure is an alert, never fatal to the report.
    match export_report(&app_config.export_dir, session.report(), &rendered).await {
        Ok(path) => info!("Report exported to {:?}.", path),
        Err(e) => error!("Export failed: {e}. The report remains available above."),
    }

    // 7. Request the AI summary when configured. The client swallows its own
    //    failures and returns a fallback string.
    if let Some(api_key) = app_config.gemini_api_key.clone() {
        let client = SummaryClient::new(api_key, app_config.gemini_model.clone());
        let analysis = client.analyze(session.report(), session.figures()).await;
        println!("EXECUTIVE SUMMARY\n{analysis}");
    }

    Ok(())
}
