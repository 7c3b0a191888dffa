use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("no date-named folder found under {}", .dir.display())]
    DateFolderNotFound { dir: PathBuf },

    #[error("dated folder {} contains no files", .dir.display())]
    EmptyBatchFolder { dir: PathBuf },

    #[error("{} is not an excel file: {detail}", .path.display())]
    UnparseableTable { path: PathBuf, detail: String },

    #[error("center id {value} does not fit into a 16-bit integer")]
    IdentifierOverflow { value: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for '{field}': '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤的處理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// 在頂層攔截：記錄訊息後以退出碼 1 結束
    Recover,
    /// 直接往外傳播，帶完整診斷鏈結束行程
    Fault,
}

impl EtlError {
    pub fn policy(&self) -> ErrorPolicy {
        match self {
            EtlError::UnparseableTable { .. } => ErrorPolicy::Recover,
            EtlError::DateFolderNotFound { .. }
            | EtlError::EmptyBatchFolder { .. }
            | EtlError::IdentifierOverflow { .. }
            | EtlError::CsvError(_)
            | EtlError::IoError(_)
            | EtlError::InvalidConfigValueError { .. } => ErrorPolicy::Fault,
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
