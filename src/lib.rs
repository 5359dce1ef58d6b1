pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{LopdfEngine, XlsxWriter};
pub use crate::config::{BatchConfig, CliConfig};
pub use crate::core::{batch::BatchRunner, normalize::normalize, pipeline::DocumentPipeline};
pub use crate::domain::model::{BatchSummary, DocumentReport, NormalizedTable, RawRow, RawTable};
pub use crate::utils::error::{EtlError, Result};
