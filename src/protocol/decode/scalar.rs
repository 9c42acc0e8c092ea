//! Column payload decoder.

use bytes::{Buf, Bytes};

use crate::error::{Error, Result};
use crate::protocol::types::{ColumnDataType, ColumnValue};

/// Decode one column from its fetched bytes.
///
/// * `slot` - the column's full slot in the value buffer
/// * `payload` - the slot truncated to the reported length
pub fn decode_column(
    data_type: ColumnDataType,
    slot: &[u8],
    payload: &[u8],
) -> Result<ColumnValue> {
    if let Some(width) = data_type.fixed_width() {
        if slot.len() < width {
            return Err(Error::buffer_too_small(width, slot.len()));
        }
    }

    let mut buf = slot;
    let value = match data_type {
        ColumnDataType::Int8 => ColumnValue::Int8(buf.get_i8()),
        ColumnDataType::UInt8 => ColumnValue::UInt8(buf.get_u8()),
        ColumnDataType::Int16 => ColumnValue::Int16(buf.get_i16_ne()),
        ColumnDataType::UInt16 => ColumnValue::UInt16(buf.get_u16_ne()),
        ColumnDataType::Int32 => ColumnValue::Int32(buf.get_i32_ne()),
        ColumnDataType::UInt32 => ColumnValue::UInt32(buf.get_u32_ne()),
        ColumnDataType::Int64 => ColumnValue::Int64(buf.get_i64_ne()),
        ColumnDataType::UInt64 => ColumnValue::UInt64(buf.get_u64_ne()),
        ColumnDataType::Float => ColumnValue::Float(buf.get_f32_ne()),
        ColumnDataType::Double => ColumnValue::Double(buf.get_f64_ne()),
        ColumnDataType::String => {
            let text = std::str::from_utf8(payload).map_err(|e| {
                Error::type_conversion(format!("invalid UTF-8 in string column: {}", e))
            })?;
            ColumnValue::String(text.to_string())
        }
        ColumnDataType::Blob => ColumnValue::Blob(Bytes::copy_from_slice(payload)),
        ColumnDataType::Unknown => ColumnValue::Raw(Bytes::copy_from_slice(payload)),
    };
    Ok(value)
}
