//! Lambda bootstrap for the analysis functions.
//!
//! The deployed kind is chosen with `ANALYSIS_KIND`; the same binary backs
//! all three functions.

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use analysis_lambda::adapters::{AnalysisFunction, BedrockInferenceClient};
use analysis_lambda::application::AnalysisRequestHandler;
use analysis_lambda::config::AppConfig;
use analysis_lambda::ports::InferenceClient;
use analysis_lambda::telemetry;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.service);

    // Built once per cold start and shared by every invocation
    let client = BedrockInferenceClient::from_config(&config.bedrock).await;
    let client_info = client.client_info();

    info!(
        kind = config.service.kind.as_str(),
        model_id = %config.bedrock.model_id,
        region = %client_info.region,
        "Starting analysis function"
    );

    let handler = AnalysisRequestHandler::new(Arc::new(client), config.bedrock.model_id.clone());
    let function = AnalysisFunction::new(config.service.kind, Arc::new(handler));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let function = function.clone();
        async move { function.call(event).await }
    }))
    .await
}
