use crate::domain::model::SourceRow;
use crate::utils::error::{EtlError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;
use std::path::Path;

pub const CENTER_ID_HEADER: &str = "Gym ID";
pub const LFL_STATUS_HEADER: &str = "LFL Status";

/// 解析試算表並取出兩個必要欄位，任何解析失敗都歸類為 UnparseableTable
pub fn extract_source_rows(path: &Path, bytes: Vec<u8>) -> Result<Vec<SourceRow>> {
    let cursor = Cursor::new(bytes);
    let mut workbook =
        open_workbook_auto_from_rs(cursor).map_err(|e| unparseable(path, e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| unparseable(path, "workbook contains no sheets".to_string()))?
        .map_err(|e| unparseable(path, e.to_string()))?;

    source_rows_from_range(&range).map_err(|detail| unparseable(path, detail))
}

fn unparseable(path: &Path, detail: String) -> EtlError {
    EtlError::UnparseableTable {
        path: path.to_path_buf(),
        detail,
    }
}

fn source_rows_from_range(range: &Range<Data>) -> std::result::Result<Vec<SourceRow>, String> {
    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| "sheet has no header row".to_string())?;
    let center_idx = find_header(header, CENTER_ID_HEADER)?;
    let status_idx = find_header(header, LFL_STATUS_HEADER)?;

    Ok(rows
        .map(|row| SourceRow {
            center_id_raw: cell_text(row.get(center_idx)),
            lfl_status_raw: cell_text(row.get(status_idx)),
        })
        .collect())
}

fn find_header(header: &[Data], wanted: &str) -> std::result::Result<usize, String> {
    header
        .iter()
        .position(|cell| cell_text(Some(cell)) == wanted)
        .ok_or_else(|| format!("required column {:?} not found", wanted))
}

/// 儲存格一律正規化為文字，空儲存格視為空字串
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) => f.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}
