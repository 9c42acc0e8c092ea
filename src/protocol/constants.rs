//! MySQL client protocol constants.
//!
//! Values match `enum_field_types` and the column flag bits of `mysql_com.h`.

// Field types
pub const MYSQL_TYPE_DECIMAL: u32 = 0;
pub const MYSQL_TYPE_TINY: u32 = 1;
pub const MYSQL_TYPE_SHORT: u32 = 2;
pub const MYSQL_TYPE_LONG: u32 = 3;
pub const MYSQL_TYPE_FLOAT: u32 = 4;
pub const MYSQL_TYPE_DOUBLE: u32 = 5;
pub const MYSQL_TYPE_NULL: u32 = 6;
pub const MYSQL_TYPE_TIMESTAMP: u32 = 7;
pub const MYSQL_TYPE_LONGLONG: u32 = 8;
pub const MYSQL_TYPE_INT24: u32 = 9;
pub const MYSQL_TYPE_DATE: u32 = 10;
pub const MYSQL_TYPE_TIME: u32 = 11;
pub const MYSQL_TYPE_DATETIME: u32 = 12;
pub const MYSQL_TYPE_YEAR: u32 = 13;
pub const MYSQL_TYPE_NEWDATE: u32 = 14;
pub const MYSQL_TYPE_VARCHAR: u32 = 15;
pub const MYSQL_TYPE_BIT: u32 = 16;
pub const MYSQL_TYPE_TIMESTAMP2: u32 = 17;
pub const MYSQL_TYPE_DATETIME2: u32 = 18;
pub const MYSQL_TYPE_TIME2: u32 = 19;
pub const MYSQL_TYPE_JSON: u32 = 245;
pub const MYSQL_TYPE_NEWDECIMAL: u32 = 246;
pub const MYSQL_TYPE_ENUM: u32 = 247;
pub const MYSQL_TYPE_SET: u32 = 248;
pub const MYSQL_TYPE_TINY_BLOB: u32 = 249;
pub const MYSQL_TYPE_MEDIUM_BLOB: u32 = 250;
pub const MYSQL_TYPE_LONG_BLOB: u32 = 251;
pub const MYSQL_TYPE_BLOB: u32 = 252;
pub const MYSQL_TYPE_VAR_STRING: u32 = 253;
pub const MYSQL_TYPE_STRING: u32 = 254;
pub const MYSQL_TYPE_GEOMETRY: u32 = 255;

// Column flags
pub const NOT_NULL_FLAG: u32 = 1;
pub const PRI_KEY_FLAG: u32 = 2;
pub const UNIQUE_KEY_FLAG: u32 = 4;
pub const MULTIPLE_KEY_FLAG: u32 = 8;
pub const BLOB_FLAG: u32 = 16;
pub const UNSIGNED_FLAG: u32 = 32;
pub const ZEROFILL_FLAG: u32 = 64;
pub const BINARY_FLAG: u32 = 128;
pub const ENUM_FLAG: u32 = 256;
pub const AUTO_INCREMENT_FLAG: u32 = 512;
pub const TIMESTAMP_FLAG: u32 = 1024;
pub const SET_FLAG: u32 = 2048;
pub const NUM_FLAG: u32 = 32768;
