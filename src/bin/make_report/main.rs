use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use serverless_batch::{
    adapters::inbound::lambda::handle_make_report, logging::init_logging, ObjectReference,
    ReportStepConfig,
};
use tracing::error;

/// The event body is ignored: every run reports on the same date.
async fn handle_request(_event: LambdaEvent<Value>) -> Result<ObjectReference, Error> {
    let config = ReportStepConfig::from_env()?;

    handle_make_report(&config).await.map_err(|e| {
        error!(error = %e, "Report step failed");
        Error::from(e)
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_logging(&level, true);

    lambda_runtime::run(service_fn(handle_request)).await
}
