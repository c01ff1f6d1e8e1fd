use aws_config::BehaviorVersion;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn, tracing, Error};
mod context;
mod error;
mod event_handler;
mod object_key;
mod thumbnail;
use context::ResizeContext;
use event_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt().json().init();
    let shared_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let ctx = ResizeContext::new(S3Client::new(&shared_config));
    run(service_fn(|event| function_handler(event, &ctx))).await
}
