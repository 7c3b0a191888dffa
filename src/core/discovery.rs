use crate::domain::ports::Storage;
use crate::utils::error::{EtlError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::path::{Path, PathBuf};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 資料夾名稱必須是補零的 YYYY-MM-DD 且為有效日期
pub fn is_batch_date(name: &str) -> bool {
    let shape = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    shape.is_match(name) && NaiveDate::parse_from_str(name, DATE_FORMAT).is_ok()
}

/// 在來源資料夾底下挑出名稱最大（也就是最新）的日期批次
pub fn select_latest_batch<S: Storage>(storage: &S, source_folder: &Path) -> Result<String> {
    let mut batches: Vec<String> = Vec::new();
    for name in storage.list_dir(source_folder)? {
        if is_batch_date(&name) {
            batches.push(name);
        } else {
            tracing::warn!(
                "Expected folders within {} to be a date with format %Y-%m-%d, ignoring {}",
                source_folder.display(),
                source_folder.join(&name).display()
            );
        }
    }

    // 補零的 ISO 日期字串，字典序即時間序
    batches
        .into_iter()
        .max()
        .ok_or_else(|| EtlError::DateFolderNotFound {
            dir: source_folder.to_path_buf(),
        })
}

/// 批次資料夾內的第一個項目就是本批輸入，列舉順序不做任何保證
pub fn locate_input_file<S: Storage>(storage: &S, batch_folder: &Path) -> Result<PathBuf> {
    let entries = storage.list_dir(batch_folder)?;
    let first = entries
        .into_iter()
        .next()
        .ok_or_else(|| EtlError::EmptyBatchFolder {
            dir: batch_folder.to_path_buf(),
        })?;
    tracing::debug!("Selected input {} from {}", first, batch_folder.display());
    Ok(batch_folder.join(first))
}
