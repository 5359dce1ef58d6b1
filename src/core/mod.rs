pub mod batch;
pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{
    BatchSummary, Cell, DocumentReport, NormalizedTable, RawRow, RawTable,
};
pub use crate::domain::ports::{ConfigProvider, PdfDocument, PdfEngine, SheetSink, SheetWriter};
pub use crate::utils::error::Result;
