pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "lfl-etl")]
#[command(about = "Prepares dated LFL snapshot spreadsheets as CSV")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert the latest dated snapshot into the destination CSV
    Process(ProcessArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ProcessArgs {
    /// Folder holding one subfolder per snapshot date (YYYY-MM-DD)
    pub source_folder: PathBuf,

    /// Path of the CSV file to write
    pub destination_file: PathBuf,
}

impl ConfigProvider for ProcessArgs {
    fn source_folder(&self) -> &Path {
        &self.source_folder
    }

    fn destination_file(&self) -> &Path {
        &self.destination_file
    }
}

impl Validate for ProcessArgs {
    fn validate(&self) -> Result<()> {
        validate_path("source_folder", &self.source_folder)?;
        validate_path("destination_file", &self.destination_file)?;
        Ok(())
    }
}
