use crate::core::discovery::{locate_input_file, select_latest_batch};
use crate::core::serialize::to_csv_bytes;
use crate::core::transform::transform_rows;
use crate::core::workbook::extract_source_rows;
use crate::core::{ConfigProvider, ExtractResult, OutputRow, Pipeline, Storage};
use crate::utils::error::Result;

pub struct LflPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> LflPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for LflPipeline<S, C> {
    fn extract(&self) -> Result<ExtractResult> {
        let source_folder = self.config.source_folder();

        // 挑出最新的日期批次
        let batch_date = select_latest_batch(&self.storage, source_folder)?;
        tracing::info!("📂 Selected batch folder: {}", batch_date);

        // 批次資料夾內的第一個檔案就是輸入
        let input_file = locate_input_file(&self.storage, &source_folder.join(&batch_date))?;

        // 整份讀入後交給試算表解析
        let bytes = self.storage.read_file(&input_file)?;
        let rows = extract_source_rows(&input_file, bytes)?;
        tracing::info!(
            "📊 Extracted {} raw rows from {}",
            rows.len(),
            input_file.display()
        );

        Ok(ExtractResult {
            batch_date,
            input_file,
            rows,
        })
    }

    fn transform(&self, batch: ExtractResult) -> Result<Vec<OutputRow>> {
        let total = batch.rows.len();
        let rows = transform_rows(batch.rows, &batch.batch_date)?;
        tracing::info!("🔧 Kept {} of {} rows after filtering", rows.len(), total);
        Ok(rows)
    }

    fn load(&self, rows: Vec<OutputRow>) -> Result<String> {
        let destination = self.config.destination_file();
        let bytes = to_csv_bytes(&rows)?;

        // 寫出目的檔，既有檔案直接覆蓋
        self.storage.write_file(destination, &bytes)?;
        tracing::info!("💾 Wrote {} rows to {}", rows.len(), destination.display());

        Ok(destination.display().to_string())
    }
}
