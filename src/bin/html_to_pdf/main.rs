use lambda_runtime::{service_fn, Error, LambdaEvent};
use serverless_batch::{
    adapters::inbound::lambda::handle_html_to_pdf, logging::init_logging, ConversionStepConfig,
    ObjectReference,
};
use tracing::error;

async fn handle_request(event: LambdaEvent<ObjectReference>) -> Result<ObjectReference, Error> {
    let config = ConversionStepConfig::from_env()?;

    handle_html_to_pdf(&event.payload, &config)
        .await
        .map_err(|e| {
            error!(error = %e, "Conversion step failed");
            Error::from(e)
        })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_logging(&level, true);

    lambda_runtime::run(service_fn(handle_request)).await
}
