use crate::domain::model::RawTable;
use crate::utils::error::Result;
use std::path::Path;

/// Table extraction engine boundary. Implementations own the PDF parsing;
/// the pipeline only sees raw tables.
pub trait PdfEngine {
    type Doc: PdfDocument;

    fn open(&self, path: &Path) -> Result<Self::Doc>;
}

/// An opened document. Underlying resources are released on drop.
pub trait PdfDocument {
    fn page_count(&self) -> usize;

    /// All raw tables detected on the given zero-based page, in reading
    /// order. May be empty.
    fn tables_on_page(&self, page: usize) -> Result<Vec<RawTable>>;
}

/// Spreadsheet output boundary.
pub trait SheetWriter {
    type Sink: SheetSink;

    fn create_sheet(&self, name: &str) -> Result<Self::Sink>;
}

/// Append-only row sink. No random access, no read-back.
pub trait SheetSink {
    fn append_row(&mut self, cells: &[String]) -> Result<()>;

    /// Finalize and write to durable storage. Only called on success; a
    /// sink that is dropped instead must leave nothing on disk.
    fn persist(self, path: &Path) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_dir(&self) -> &Path;
    fn output_dir(&self) -> &Path;
}
