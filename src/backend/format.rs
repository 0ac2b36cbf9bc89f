//! Binary entry encoding for persistent backends.
//!
//! Layout: a format version byte, the kind tag, a CRC32 of the payload,
//! then the payload itself. Integers and floats are little-endian; strings
//! are raw UTF-8; string sets are a `u32` element count followed by
//! length-prefixed UTF-8 elements in sorted order.

use std::collections::BTreeSet;

use crate::store::{BackendError, Kind, Value};

/// Current entry format version.
pub const ENTRY_VERSION: u8 = 1;

/// Header size: version byte, kind tag, payload checksum.
const HEADER_LEN: usize = 1 + 1 + 4;

fn invalid(msg: impl Into<String>) -> BackendError {
    BackendError::InvalidFormat(msg.into())
}

/// Encode `value` into the tagged entry layout.
pub fn encode_entry(value: &Value) -> Vec<u8> {
    let payload = encode_payload(value);
    let mut buf = Vec::with_capacity(HEADER_LEN + payload.len());
    buf.push(ENTRY_VERSION);
    buf.push(value.kind().tag());
    buf.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
    buf.extend_from_slice(&payload);
    buf
}

fn encode_payload(value: &Value) -> Vec<u8> {
    match value {
        Value::String(s) => s.as_bytes().to_vec(),
        Value::StringSet(set) => {
            let mut buf = Vec::new();
            buf.extend_from_slice(&(set.len() as u32).to_le_bytes());
            for item in set {
                buf.extend_from_slice(&(item.len() as u32).to_le_bytes());
                buf.extend_from_slice(item.as_bytes());
            }
            buf
        }
        Value::I32(v) => v.to_le_bytes().to_vec(),
        Value::I64(v) => v.to_le_bytes().to_vec(),
        Value::F32(v) => v.to_le_bytes().to_vec(),
        Value::Bool(v) => vec![u8::from(*v)],
    }
}

/// Decode an entry produced by [`encode_entry`].
pub fn decode_entry(data: &[u8]) -> Result<Value, BackendError> {
    let (version, rest) = data
        .split_first()
        .ok_or_else(|| invalid("empty entry"))?;
    if *version != ENTRY_VERSION {
        return Err(invalid(format!(
            "entry version mismatch: expected {}, got {}",
            ENTRY_VERSION, version
        )));
    }

    let (tag, rest) = rest
        .split_first()
        .ok_or_else(|| invalid("missing kind tag"))?;
    let kind =
        Kind::from_tag(*tag).ok_or_else(|| invalid(format!("unknown kind tag {}", tag)))?;

    if rest.len() < 4 {
        return Err(invalid("truncated checksum"));
    }
    let (checksum_bytes, payload) = rest.split_at(4);
    let checksum = u32::from_le_bytes(
        checksum_bytes
            .try_into()
            .map_err(|_| invalid("truncated checksum"))?,
    );
    if checksum != crc32fast::hash(payload) {
        return Err(invalid("payload checksum mismatch"));
    }

    decode_payload(kind, payload)
}

fn decode_payload(kind: Kind, payload: &[u8]) -> Result<Value, BackendError> {
    match kind {
        Kind::String => Ok(Value::String(utf8(payload)?)),
        Kind::StringSet => {
            let (count, mut rest) = read_u32(payload)?;
            let mut set = BTreeSet::new();
            for _ in 0..count {
                let (len, tail) = read_u32(rest)?;
                let len = len as usize;
                if tail.len() < len {
                    return Err(invalid("string-set element out of bounds"));
                }
                let (bytes, tail) = tail.split_at(len);
                set.insert(utf8(bytes)?);
                rest = tail;
            }
            if !rest.is_empty() {
                return Err(invalid("trailing bytes after string-set payload"));
            }
            Ok(Value::StringSet(set))
        }
        Kind::I32 => Ok(Value::I32(i32::from_le_bytes(fixed(payload)?))),
        Kind::I64 => Ok(Value::I64(i64::from_le_bytes(fixed(payload)?))),
        Kind::F32 => Ok(Value::F32(f32::from_le_bytes(fixed(payload)?))),
        Kind::Bool => match payload {
            [0] => Ok(Value::Bool(false)),
            [1] => Ok(Value::Bool(true)),
            _ => Err(invalid("bool payload must be a single 0 or 1 byte")),
        },
    }
}

fn utf8(bytes: &[u8]) -> Result<String, BackendError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| invalid("invalid UTF-8 in string payload"))
}

fn read_u32(data: &[u8]) -> Result<(u32, &[u8]), BackendError> {
    if data.len() < 4 {
        return Err(invalid("truncated length prefix"));
    }
    let (head, rest) = data.split_at(4);
    let bytes: [u8; 4] = head
        .try_into()
        .map_err(|_| invalid("truncated length prefix"))?;
    Ok((u32::from_le_bytes(bytes), rest))
}

fn fixed<const N: usize>(payload: &[u8]) -> Result<[u8; N], BackendError> {
    payload
        .try_into()
        .map_err(|_| invalid(format!("payload must be {} bytes, got {}", N, payload.len())))
}
