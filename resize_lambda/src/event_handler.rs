use aws_lambda_events::event::s3::S3Event;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{tracing, Error, LambdaEvent};
use serde::Serialize;

use crate::context::{ResizeContext, ResizeSettings};
use crate::error::ResizeError;
use crate::object_key::{decode_event_key, destination_key, strip_jpg};
use crate::thumbnail::resize_to_jpeg;

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResizeResponse {
    pub status_code: u16,
    pub body: String,
}

/// Bucket and decoded key of the first record. Later records are ignored.
fn source_location(event: &S3Event) -> Result<(String, String), ResizeError> {
    let record = event.records.first().ok_or(ResizeError::NoRecords)?;
    let bucket_name = record
        .s3
        .bucket
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(ResizeError::MissingField("s3.bucket.name"))?;
    let raw_key = record
        .s3
        .object
        .key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or(ResizeError::MissingField("s3.object.key"))?;
    Ok((bucket_name.to_string(), decode_event_key(raw_key)?))
}

async fn fetch_object(
    s3_client: &S3Client,
    bucket: &str,
    key: &str,
) -> Result<Vec<u8>, ResizeError> {
    let response = s3_client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| ResizeError::Fetch {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source: Box::new(e),
        })?;
    let body = response
        .body
        .collect()
        .await
        .map_err(|e| ResizeError::ReadBody {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source: e,
        })?;
    Ok(body.into_bytes().to_vec())
}

async fn upload_object(
    s3_client: &S3Client,
    settings: &ResizeSettings,
    key: &str,
    data: Vec<u8>,
) -> Result<(), ResizeError> {
    s3_client
        .put_object()
        .bucket(&settings.dest_bucket)
        .key(key)
        .content_type(settings.content_type)
        .body(ByteStream::from(data))
        .send()
        .await
        .map_err(|e| ResizeError::Upload {
            bucket: settings.dest_bucket.clone(),
            key: key.to_string(),
            source: Box::new(e),
        })?;
    Ok(())
}

pub(crate) async fn function_handler(
    event: LambdaEvent<S3Event>,
    ctx: &ResizeContext,
) -> Result<ResizeResponse, Error> {
    let payload = event.payload;
    let (bucket_name, object_key) = source_location(&payload)?;
    tracing::info!("Event: {:?}", payload);
    tracing::info!("Bucket: {}", bucket_name);
    tracing::info!("Object Key: {}", strip_jpg(&object_key));

    let settings = &ctx.settings;
    let original = fetch_object(&ctx.s3_client, &bucket_name, &object_key).await?;
    tracing::info!("Fetched {}/{} ({} bytes)", bucket_name, object_key, original.len());

    let resized = resize_to_jpeg(
        &original,
        settings.width,
        settings.height,
        settings.jpeg_quality,
    )?;

    let dest_key = destination_key(&object_key);
    tracing::info!("Uploading {}/{}", settings.dest_bucket, dest_key);
    upload_object(&ctx.s3_client, settings, &dest_key, resized).await?;

    Ok(ResizeResponse {
        status_code: 200,
        body: format!("Image {object_key} processed and saved as resized-{object_key}."),
    })
}
