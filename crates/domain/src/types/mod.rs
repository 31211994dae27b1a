//! Domain types and models

pub mod analysis;
pub mod call;
pub mod record;
pub mod reference;
pub mod row;
pub mod source;

pub use analysis::AnalysisLogEntry;
pub use call::{CallDirection, CallMetadata};
pub use record::SalesRecord;
pub use reference::{FeedHandle, LiveSnapshot, ProductContext, Salesperson};
pub use row::{CellValue, RawRow};
pub use source::{ReadinessState, SourceKind, SourceWarning};
