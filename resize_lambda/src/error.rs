use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::put_object::PutObjectError;
use aws_sdk_s3::primitives::ByteStreamError;
use thiserror::Error;

/// Every way a single resize invocation can fail.
///
/// None of these are recovered from inside the handler; they surface to the
/// Lambda runtime as a failed invocation.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("No records found in S3 event")]
    NoRecords,

    #[error("S3 event record is missing {0}")]
    MissingField(&'static str),

    #[error("object key {key:?} is not valid URL-encoded UTF-8")]
    InvalidKey {
        key: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to fetch s3://{bucket}/{key}")]
    Fetch {
        bucket: String,
        key: String,
        #[source]
        source: Box<SdkError<GetObjectError>>,
    },

    #[error("failed to read body of s3://{bucket}/{key}")]
    ReadBody {
        bucket: String,
        key: String,
        #[source]
        source: ByteStreamError,
    },

    #[error("failed to decode image")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode JPEG")]
    Encode(#[source] image::ImageError),

    #[error("failed to upload s3://{bucket}/{key}")]
    Upload {
        bucket: String,
        key: String,
        #[source]
        source: Box<SdkError<PutObjectError>>,
    },
}
