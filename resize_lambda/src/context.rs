use aws_sdk_s3::Client as S3Client;

/// Fixed parameters of the resize handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResizeSettings {
    pub dest_bucket: String,
    pub width: u32,
    pub height: u32,
    pub jpeg_quality: u8,
    pub content_type: &'static str,
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            dest_bucket: "prcsd-img-bkt".to_string(),
            width: 300,
            height: 300,
            jpeg_quality: 75,
            content_type: "image/jpeg",
        }
    }
}

/// Built once per process and borrowed by every invocation, so the S3 client
/// and its connection pool are reused across events.
#[derive(Clone, Debug)]
pub struct ResizeContext {
    pub s3_client: S3Client,
    pub settings: ResizeSettings,
}

impl ResizeContext {
    pub fn new(s3_client: S3Client) -> Self {
        Self {
            s3_client,
            settings: ResizeSettings::default(),
        }
    }
}
