pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, Command, ProcessArgs};
pub use core::{etl::EtlEngine, pipeline::LflPipeline};
pub use utils::error::{EtlError, Result};
