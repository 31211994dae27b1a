//! Parsing helpers shared by every layer

pub mod call_filename;
pub mod phone;
