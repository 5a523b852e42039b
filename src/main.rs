// file: src/main.rs
// description: Lambda entry point wiring configuration, clients, and handler
// reference: https://docs.rs/lambda_runtime

use git_s3_deploy::handler::{HandlerResponse, PushHandler};
use git_s3_deploy::{Config, GithubClient, S3ObjectStore, SnsEnvelope};
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use std::sync::Arc;
use tracing::info;

async fn function_handler(
    event: LambdaEvent<SnsEnvelope>,
    handler: &PushHandler,
) -> Result<HandlerResponse, Error> {
    handler.handle(&event.payload).await.map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    git_s3_deploy::utils::logging::init_logger(false);

    // fail fast before any event is processed: an empty token or bucket
    // makes every invocation useless
    let config = Config::load(None)?;

    info!(
        "git_s3_deploy ready, destination bucket: {}",
        config.storage.bucket
    );

    let api = Arc::new(GithubClient::new(config.github.clone())?);
    let store = Arc::new(S3ObjectStore::new(&config.storage).await);
    let handler = PushHandler::new(api, store, &config.sync);

    run(service_fn(|event| function_handler(event, &handler))).await
}
