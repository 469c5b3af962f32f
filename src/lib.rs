// keyword-report: keyword stem extraction and highlighted sentence reports.
//
// This is the library root. Each module is one stage of the report
// pipeline; `pipeline` chains them together.

pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod keywords;
pub mod output;
pub mod pipeline;
pub mod text;

pub use error::{ReportError, Result};
