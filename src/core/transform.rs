use crate::domain::model::{LflStatus, OutputRow, SourceRow};
use crate::utils::error::{EtlError, Result};

/// 與來源系統一致的編號判定：非空且全為 ASCII 數字
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// 過濾、轉型並排序：非數字編號或未知狀態的列直接捨棄
pub fn transform_rows(rows: Vec<SourceRow>, batch_date: &str) -> Result<Vec<OutputRow>> {
    let mut output = Vec::with_capacity(rows.len());
    for row in rows {
        if !is_digits(&row.center_id_raw) {
            continue;
        }
        let status = match LflStatus::from_raw(&row.lfl_status_raw) {
            Some(status) => status,
            None => continue,
        };
        let center_id = row
            .center_id_raw
            .parse::<i16>()
            .map_err(|_| EtlError::IdentifierOverflow {
                value: row.center_id_raw.clone(),
            })?;
        output.push(OutputRow {
            center_id,
            lfl_status: status,
            date: batch_date.to_string(),
        });
    }

    output.sort_by_key(|row| row.center_id);
    Ok(output)
}
