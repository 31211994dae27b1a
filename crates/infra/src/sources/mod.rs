//! Implementations of the history source ports

pub mod bulk;
pub mod sheets;
pub mod token;

pub use bulk::{decode_workbook, rows_from_range, WorkbookSource};
pub use sheets::{parse_live_snapshot, GoogleSheetsSource};
pub use token::{AccessTokenProvider, StaticTokenProvider};
