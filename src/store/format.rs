//! Document envelope encoding and decoding.
//!
//! Every persisted document is framed as a 1-byte format version, the
//! little-endian CRC32 of the JSON body, and the body itself. Decoding
//! verifies both the version and the checksum before touching the JSON.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::StoreError;

/// Current document envelope version.
pub const FORMAT_VERSION: u8 = 1;

/// Encode a document into its envelope.
pub fn encode_document<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    let body = serde_json::to_vec(value)?;
    let checksum = crc32fast::hash(&body);

    let mut buffer = Vec::with_capacity(1 + 4 + body.len());
    buffer.push(FORMAT_VERSION);
    buffer.extend_from_slice(&checksum.to_le_bytes());
    buffer.extend_from_slice(&body);

    Ok(buffer)
}

/// Decode a document from its envelope.
pub fn decode_document<T: DeserializeOwned>(buffer: &[u8]) -> Result<T, StoreError> {
    let (version, rest) = buffer
        .split_first()
        .ok_or_else(|| StoreError::InvalidFormat("empty document buffer".to_string()))?;

    if *version != FORMAT_VERSION {
        return Err(StoreError::InvalidFormat(format!(
            "unsupported document format version {version}"
        )));
    }

    if rest.len() < 4 {
        return Err(StoreError::InvalidFormat(
            "truncated document header".to_string(),
        ));
    }

    let (checksum_bytes, body) = rest.split_at(4);
    let stored = u32::from_le_bytes(
        checksum_bytes
            .try_into()
            .map_err(|_| StoreError::InvalidFormat("invalid checksum bytes".to_string()))?,
    );

    let computed = crc32fast::hash(body);
    if stored != computed {
        return Err(StoreError::ChecksumMismatch { stored, computed });
    }

    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::Blog;

    #[test]
    fn test_roundtrip() {
        let blog = Blog::new("1", "First blog", "http://example.com/1")
            .with_author("Alice")
            .with_likes(5);

        let buffer = encode_document(&blog).unwrap();
        let decoded: Blog = decode_document(&buffer).unwrap();

        assert_eq!(decoded, blog);
    }

    #[test]
    fn test_empty_buffer_is_rejected() {
        let result: Result<Blog, _> = decode_document(&[]);
        assert!(matches!(result, Err(StoreError::InvalidFormat(_))));
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let blog = Blog::new("1", "First blog", "http://example.com/1");
        let mut buffer = encode_document(&blog).unwrap();
        if let Some(version) = buffer.first_mut() {
            *version = 99;
        }

        let result: Result<Blog, _> = decode_document(&buffer);
        assert!(matches!(result, Err(StoreError::InvalidFormat(_))));
    }

    #[test]
    fn test_corrupted_body_is_rejected() {
        let blog = Blog::new("1", "First blog", "http://example.com/1");
        let mut buffer = encode_document(&blog).unwrap();
        if let Some(byte) = buffer.last_mut() {
            *byte ^= 0xff;
        }

        let result: Result<Blog, _> = decode_document(&buffer);
        assert!(matches!(result, Err(StoreError::ChecksumMismatch { .. })));
    }
}
