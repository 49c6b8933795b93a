//! JSON bodies accepted and returned by the gateway.
//!
//! Record payloads travel as standard base64 strings. Missing or `null`
//! fields fall back to their zero values, so `{}` is a valid (empty) write.

use proglog_kernel::log::{Offset, Record};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, base64::Base64, serde_as};

/// Record as it appears on the wire.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordBody {
    #[serde_as(as = "DefaultOnNull<Base64>")]
    #[serde(default)]
    pub value: Vec<u8>,
    /// Ignored on write; filled in on read.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub offset: Offset,
}

impl From<Record> for RecordBody {
    fn from(record: Record) -> Self {
        Self {
            value: record.value,
            offset: record.offset,
        }
    }
}

/// Body of `POST /log/write`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct WriteRequest {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub record: RecordBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WriteResponse {
    pub offset: Offset,
}

/// Body of `GET /log/read`.
///
/// Wide enough for every `u64` offset and for negatives, so both reach the
/// store lookup and are reported as not found instead of as a decoding
/// failure.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ReadRequest {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub offset: i128,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadResponse {
    pub record: RecordBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_base64_record_value() {
        // given
        let body = r#"{"record": {"value": "TGV0J3MgR28gIzEK"}}"#;

        // when
        let request: WriteRequest = serde_json::from_str(body).unwrap();

        // then
        assert_eq!(request.record.value, b"Let's Go #1\n".to_vec());
        assert_eq!(request.record.offset, 0);
    }

    #[test]
    fn should_encode_read_response_with_base64_value() {
        // given
        let response = ReadResponse {
            record: Record {
                value: b"A".to_vec(),
                offset: 3,
            }
            .into(),
        };

        // when
        let json = serde_json::to_string(&response).unwrap();

        // then
        assert_eq!(json, r#"{"record":{"value":"QQ==","offset":3}}"#);
    }

    #[test]
    fn should_default_missing_fields() {
        let write: WriteRequest = serde_json::from_str("{}").unwrap();
        let read: ReadRequest = serde_json::from_str("{}").unwrap();

        assert!(write.record.value.is_empty());
        assert_eq!(read.offset, 0);
    }

    #[test]
    fn should_accept_negative_read_offset() {
        let read: ReadRequest = serde_json::from_str(r#"{"offset": -1}"#).unwrap();

        assert_eq!(read.offset, -1);
    }

    #[test]
    fn should_accept_offsets_beyond_i64() {
        let read: ReadRequest =
            serde_json::from_str(r#"{"offset": 18446744073709551615}"#).unwrap();

        assert_eq!(read.offset, u64::MAX as i128);
    }

    #[test]
    fn should_treat_null_as_zero_value() {
        let write: WriteRequest =
            serde_json::from_str(r#"{"record": {"value": null, "offset": null}}"#).unwrap();
        let empty: WriteRequest = serde_json::from_str(r#"{"record": null}"#).unwrap();
        let read: ReadRequest = serde_json::from_str(r#"{"offset": null}"#).unwrap();

        assert!(write.record.value.is_empty());
        assert_eq!(write.record.offset, 0);
        assert_eq!(empty.record, RecordBody::default());
        assert_eq!(read.offset, 0);
    }
}
