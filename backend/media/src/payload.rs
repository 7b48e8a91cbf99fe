//! Base64 data-URL decoding for uploaded images.
//!
//! The scan endpoints accept `{"image": "data:image/jpeg;base64,..."}`; a
//! bare base64 string (no header) is also accepted and sniffed for its type.

use base64::{engine::general_purpose::STANDARD, Engine};
use harvest_core::ScanError;

use crate::mime_detect::{is_image, sniff_image_mime};

/// Decoded image bytes plus their MIME label.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// Decode a data URL (or bare base64 string) into an image payload.
///
/// Fails with [`ScanError::Payload`] when the header declares a non-image
/// type, the base64 is malformed, or the decoded bytes are not a recognized
/// image format.
pub fn decode_data_url(input: &str) -> Result<ImagePayload, ScanError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ScanError::Payload("empty image payload".into()));
    }

    let (declared_mime, b64) = split_data_url(input)?;

    let data = STANDARD
        .decode(b64.trim())
        .map_err(|err| ScanError::Payload(format!("invalid base64 image data: {err}")))?;
    if data.is_empty() {
        return Err(ScanError::Payload("decoded image payload is empty".into()));
    }

    // Trust the bytes over the header: browsers occasionally mislabel.
    let mime_type = match sniff_image_mime(&data) {
        Some(sniffed) => sniffed.to_string(),
        None => match declared_mime {
            Some(declared) => declared.to_string(),
            None => return Err(ScanError::Payload("payload is not a recognized image".into())),
        },
    };

    Ok(ImagePayload { data, mime_type })
}

/// Split `data:<mime>;base64,<payload>` into its declared MIME and payload.
/// Input without a `data:` header is treated as bare base64.
fn split_data_url(input: &str) -> Result<(Option<&str>, &str), ScanError> {
    let Some(rest) = input.strip_prefix("data:") else {
        return Ok((None, input));
    };
    let Some((header, b64)) = rest.split_once(',') else {
        return Err(ScanError::Payload("data URL has no payload section".into()));
    };
    let mime = header.split(';').next().unwrap_or("").trim();
    if mime.is_empty() {
        return Ok((None, b64));
    }
    if !is_image(mime) {
        return Err(ScanError::Payload(format!("expected an image payload, got {mime}")));
    }
    Ok((Some(mime), b64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine};

    // Minimal valid PNG signature followed by junk.
    const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];

    fn png_data_url() -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(PNG_BYTES))
    }

    #[test]
    fn decodes_a_png_data_url() {
        let payload = decode_data_url(&png_data_url()).unwrap();
        assert_eq!(payload.data, PNG_BYTES);
        assert_eq!(payload.mime_type, "image/png");
    }

    #[test]
    fn bare_base64_is_sniffed() {
        let payload = decode_data_url(&STANDARD.encode(PNG_BYTES)).unwrap();
        assert_eq!(payload.mime_type, "image/png");
    }

    #[test]
    fn sniffed_type_wins_over_the_header() {
        let mislabeled = format!("data:image/jpeg;base64,{}", STANDARD.encode(PNG_BYTES));
        let payload = decode_data_url(&mislabeled).unwrap();
        assert_eq!(payload.mime_type, "image/png");
    }

    #[test]
    fn non_image_header_is_rejected() {
        let url = format!("data:text/plain;base64,{}", STANDARD.encode(b"hello"));
        assert!(matches!(decode_data_url(&url), Err(ScanError::Payload(_))));
    }

    #[test]
    fn malformed_base64_is_rejected() {
        assert!(matches!(
            decode_data_url("data:image/png;base64,!!not-base64!!"),
            Err(ScanError::Payload(_))
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(decode_data_url("  "), Err(ScanError::Payload(_))));
    }

    #[test]
    fn unrecognizable_bare_bytes_are_rejected() {
        let url = STANDARD.encode(b"plain text, not an image");
        assert!(matches!(decode_data_url(&url), Err(ScanError::Payload(_))));
    }
}
