use crate::error::ResizeError;

const STRIPPED_EXTENSION: &str = ".jpg";
const DEST_PREFIX: &str = "resized-";
const DEST_SUFFIX: &str = ".jpeg";

/// Keys arrive form-encoded in S3 notifications (`+` for space, `%XX` for
/// everything else reserved).
pub fn decode_event_key(raw: &str) -> Result<String, ResizeError> {
    let plus_decoded = raw.replace('+', " ");
    urlencoding::decode(&plus_decoded)
        .map(|key| key.into_owned())
        .map_err(|source| ResizeError::InvalidKey {
            key: raw.to_string(),
            source,
        })
}

/// Removes every lowercase `.jpg`; `.JPG` and `.jpeg` are left alone.
pub fn strip_jpg(key: &str) -> String {
    key.replace(STRIPPED_EXTENSION, "")
}

pub fn destination_key(source_key: &str) -> String {
    format!("{DEST_PREFIX}{}{DEST_SUFFIX}", strip_jpg(source_key))
}
