//! Parsing module
//!
//! This module holds the winnow grammars of the crate: numeric patterns such as
//! `#,##0.00 ¤`, the record and provider format codes, and the field grammars a
//! customer name and contact phone must satisfy.

mod codes;
mod fields;
mod pattern;
mod tokens;

pub use codes::{parse_provider_code, parse_record_code};
pub use fields::{is_valid_name, is_valid_phone};
pub use pattern::parse_number_pattern;
