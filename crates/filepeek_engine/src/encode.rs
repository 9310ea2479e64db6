use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("media type cannot be embedded in a data url: {0:?}")]
    InvalidMediaType(String),
}

/// Encodes raw file bytes as a self-describing `data:<mime>;base64,<...>`
/// URL.
///
/// The media type is embedded verbatim, so it must be sane: non-empty and
/// free of commas and control characters, which would corrupt the data URL
/// structure. A bad media type is a conversion failure, not a panic, keeping
/// the one-result-per-request invariant.
pub fn to_data_url(bytes: &[u8], mime_type: &str) -> Result<String, EncodeError> {
    if mime_type.trim().is_empty()
        || mime_type.chars().any(|c| c == ',' || c.is_ascii_control())
    {
        return Err(EncodeError::InvalidMediaType(mime_type.to_string()));
    }
    let encoded = STANDARD.encode(bytes);
    Ok(format!("data:{mime_type};base64,{encoded}"))
}

#[cfg(test)]
mod tests {
    use super::{to_data_url, EncodeError};

    #[test]
    fn encodes_bytes_with_media_type_prefix() {
        let data_url = to_data_url(b"hi", "text/plain").unwrap();
        assert_eq!(data_url, "data:text/plain;base64,aGk=");
    }

    #[test]
    fn keeps_media_type_parameters() {
        let data_url = to_data_url(&[0u8], "application/pdf; charset=binary").unwrap();
        assert!(data_url.starts_with("data:application/pdf; charset=binary;base64,"));
    }

    #[test]
    fn rejects_empty_media_type() {
        assert_eq!(
            to_data_url(b"x", "  "),
            Err(EncodeError::InvalidMediaType("  ".to_string()))
        );
    }

    #[test]
    fn rejects_media_type_that_breaks_url_structure() {
        assert!(to_data_url(b"x", "image/png,evil").is_err());
        assert!(to_data_url(b"x", "image/\npng").is_err());
    }

    #[test]
    fn empty_body_is_still_a_valid_payload() {
        assert_eq!(to_data_url(b"", "application/pdf").unwrap(), "data:application/pdf;base64,");
    }
}
