pub mod discovery;
pub mod etl;
pub mod pipeline;
pub mod serialize;
pub mod transform;
pub mod workbook;

pub use crate::domain::model::{ExtractResult, LflStatus, OutputRow, SourceRow};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
