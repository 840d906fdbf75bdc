use crate::ImageError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Drop a `data:<mime>;base64,` style prefix.
///
/// Anything up to and including the first comma is discarded; a payload
/// without a comma is returned as is.
pub fn strip_data_uri(payload: &str) -> &str {
    match payload.split_once(',') {
        Some((_, encoded)) => encoded,
        None => payload,
    }
}

/// Decode a base64 image payload, optionally wrapped in a data URI, into the
/// raw encoded image bytes.
pub fn decode_base64_image(payload: &str) -> Result<Vec<u8>, ImageError> {
    let encoded = strip_data_uri(payload).trim();
    Ok(STANDARD.decode(encoded)?)
}
