use std::fmt;
use std::str::FromStr;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};

/// Declared column types as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Bool,
    Int32,
    Int64,
    Float,
    Double,
    /// Milliseconds since the Unix epoch, carried as i64.
    Timestamp,
    String,
    Blob,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Bool => "bool",
            ColumnType::Int32 => "int32",
            ColumnType::Int64 => "int64",
            ColumnType::Float => "float",
            ColumnType::Double => "double",
            ColumnType::Timestamp => "timestamp",
            ColumnType::String => "string",
            ColumnType::Blob => "blob",
        }
    }

    /// Stable id used by schema catalogs that ship layouts in binary form.
    pub fn wire_id(&self) -> u8 {
        match self {
            ColumnType::Bool => 0,
            ColumnType::Int32 => 1,
            ColumnType::Int64 => 2,
            ColumnType::Float => 3,
            ColumnType::Double => 4,
            ColumnType::Timestamp => 5,
            ColumnType::String => 6,
            ColumnType::Blob => 7,
        }
    }

    pub fn from_wire_id(v: u8) -> Option<Self> {
        match v {
            0 => Some(ColumnType::Bool),
            1 => Some(ColumnType::Int32),
            2 => Some(ColumnType::Int64),
            3 => Some(ColumnType::Float),
            4 => Some(ColumnType::Double),
            5 => Some(ColumnType::Timestamp),
            6 => Some(ColumnType::String),
            7 => Some(ColumnType::Blob),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(ColumnType::Bool),
            "int32" | "int" => Ok(ColumnType::Int32),
            "int64" | "bigint" => Ok(ColumnType::Int64),
            "float" => Ok(ColumnType::Float),
            "double" => Ok(ColumnType::Double),
            "timestamp" => Ok(ColumnType::Timestamp),
            "string" => Ok(ColumnType::String),
            "blob" | "binary" => Ok(ColumnType::Blob),
            _ => Err(()),
        }
    }
}

/// One decoded cell. `Null` covers both nullable columns and positions the
/// decoder never reached.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    Timestamp(i64),
    String(String),
    Blob(Vec<u8>),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(_) => Some(ColumnType::Bool),
            CellValue::Int32(_) => Some(ColumnType::Int32),
            CellValue::Int64(_) => Some(ColumnType::Int64),
            CellValue::Float(_) => Some(ColumnType::Float),
            CellValue::Double(_) => Some(ColumnType::Double),
            CellValue::Timestamp(_) => Some(ColumnType::Timestamp),
            CellValue::String(_) => Some(ColumnType::String),
            CellValue::Blob(_) => Some(ColumnType::Blob),
        }
    }

    /// JSON rendering for callers that re-serialize rows. Blobs are base64.
    pub fn to_json(&self) -> JsonValue {
        match self {
            CellValue::Null => JsonValue::Null,
            CellValue::Bool(b) => JsonValue::Bool(*b),
            CellValue::Int32(i) => JsonValue::Number(Number::from(*i)),
            CellValue::Int64(i) => JsonValue::Number(Number::from(*i)),
            CellValue::Float(f) => Number::from_f64(*f as f64)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            CellValue::Double(f) => Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            CellValue::Timestamp(ts) => JsonValue::Number(Number::from(*ts)),
            CellValue::String(s) => JsonValue::String(s.clone()),
            CellValue::Blob(bytes) => JsonValue::String(BASE64_STANDARD.encode(bytes)),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("null"),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Int32(i) => write!(f, "{}", i),
            CellValue::Int64(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Double(v) => write!(f, "{}", v),
            CellValue::Timestamp(ts) => write!(f, "{}", ts),
            CellValue::String(s) => f.write_str(s),
            CellValue::Blob(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}
