use crate::domain::model::OutputRow;
use crate::utils::error::{EtlError, Result};

pub const OUTPUT_HEADER: [&str; 3] = ["center_id", "lfl_status", "Date"];

/// 輸出 UTF-8 CSV，表頭固定寫出，沒有索引欄
pub fn to_csv_bytes(rows: &[OutputRow]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    // 空表也要有表頭，所以自行寫入而不是交給 serialize 推導
    writer.write_record(OUTPUT_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}
