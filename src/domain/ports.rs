use crate::domain::model::{ExtractResult, OutputRow};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    /// 回傳目錄底下所有項目的名稱，順序依底層實作而定
    fn list_dir(&self, dir: &Path) -> Result<Vec<String>>;
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn source_folder(&self) -> &Path;
    fn destination_file(&self) -> &Path;
}

pub trait Pipeline {
    fn extract(&self) -> Result<ExtractResult>;
    fn transform(&self, batch: ExtractResult) -> Result<Vec<OutputRow>>;
    fn load(&self, rows: Vec<OutputRow>) -> Result<String>;
}
