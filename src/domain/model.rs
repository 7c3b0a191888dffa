use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 試算表讀出的原始列，兩個欄位都保留為未解析文字
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub center_id_raw: String,
    pub lfl_status_raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LflStatus {
    #[serde(rename = "LFL")]
    Lfl,
    #[serde(rename = "Non-LFL")]
    NonLfl,
}

impl LflStatus {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "LFL" => Some(LflStatus::Lfl),
            "Non-LFL" => Some(LflStatus::NonLfl),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub center_id: i16,
    pub lfl_status: LflStatus,
    #[serde(rename = "Date")]
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub batch_date: String,
    pub input_file: PathBuf,
    pub rows: Vec<SourceRow>,
}
