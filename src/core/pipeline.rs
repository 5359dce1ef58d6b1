use crate::core::normalize::normalize;
use crate::core::{
    ConfigProvider, DocumentReport, PdfDocument, PdfEngine, Result, SheetSink, SheetWriter,
};
use crate::utils::error::EtlError;
use std::fs;
use std::path::Path;

/// Per-document conversion: open the source, walk pages in order, normalize
/// every detected table, stream accepted rows into one output sheet.
///
/// The header of the first table that yields data becomes the sheet header
/// for the whole document. Later tables only contribute data rows, each
/// reshaped to its *own* header width, so tables that disagree on width
/// misalign under the adopted header. Known limitation, preserved from the
/// tool this replaces.
pub struct DocumentPipeline<E: PdfEngine, W: SheetWriter, C: ConfigProvider> {
    engine: E,
    writer: W,
    config: C,
}

impl<E: PdfEngine, W: SheetWriter, C: ConfigProvider> DocumentPipeline<E, W, C> {
    pub fn new(engine: E, writer: W, config: C) -> Self {
        Self {
            engine,
            writer,
            config,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Convert one PDF into `{output_dir}/{stem}.xlsx`.
    ///
    /// Fails with `NotFound` for a missing input, `OpenFailure` when the
    /// engine cannot parse it, and `NoData` when no table anywhere in the
    /// document survives normalization. On every failure path the sink is
    /// dropped without persisting, so no partial output file is left behind.
    pub fn process_document(&self, pdf_path: &Path) -> Result<DocumentReport> {
        tracing::info!("Processing: {}", pdf_path.display());

        if !pdf_path.exists() {
            return Err(EtlError::NotFound {
                path: pdf_path.to_path_buf(),
            });
        }

        let output_dir = self.config.output_dir();
        fs::create_dir_all(output_dir)?;

        let stem = pdf_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let output_path = output_dir.join(format!("{}.xlsx", stem));

        let doc = self.engine.open(pdf_path)?;
        tracing::debug!("Pages in {}: {}", pdf_path.display(), doc.page_count());

        let mut sink = self.writer.create_sheet("data")?;
        let mut header_written = false;
        let mut tables_found = 0usize;
        let mut tables_used = 0usize;
        let mut rows_written = 0usize;

        for page in 0..doc.page_count() {
            let tables = doc.tables_on_page(page)?;
            if tables.is_empty() {
                continue;
            }

            tables_found += tables.len();

            for table in &tables {
                let Some(normalized) = normalize(table) else {
                    continue;
                };

                if !header_written {
                    sink.append_row(&normalized.header)?;
                    header_written = true;
                }

                for data_row in &normalized.rows {
                    sink.append_row(data_row)?;
                    rows_written += 1;
                }

                tables_used += 1;
            }
        }

        tracing::info!(
            "Tables in {}: found={}, used={}, rows={}",
            pdf_path.display(),
            tables_found,
            tables_used,
            rows_written
        );

        if !header_written {
            return Err(EtlError::NoData {
                file: pdf_path.display().to_string(),
            });
        }

        sink.persist(&output_path)?;
        tracing::info!("Saved: {}", output_path.display());

        Ok(DocumentReport {
            source: pdf_path.to_path_buf(),
            output_path,
            tables_found,
            tables_used,
            rows_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawTable;
    use std::fs::File;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    struct MockEngine {
        pages: Vec<Vec<RawTable>>,
    }

    struct MockDocument {
        pages: Vec<Vec<RawTable>>,
    }

    impl PdfEngine for MockEngine {
        type Doc = MockDocument;

        fn open(&self, _path: &Path) -> Result<MockDocument> {
            Ok(MockDocument {
                pages: self.pages.clone(),
            })
        }
    }

    impl PdfDocument for MockDocument {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn tables_on_page(&self, page: usize) -> Result<Vec<RawTable>> {
            Ok(self.pages[page].clone())
        }
    }

    #[derive(Clone, Default)]
    struct MockWriter {
        rows: Arc<Mutex<Vec<Vec<String>>>>,
        persisted: Arc<Mutex<Option<PathBuf>>>,
    }

    struct MockSink {
        rows: Arc<Mutex<Vec<Vec<String>>>>,
        persisted: Arc<Mutex<Option<PathBuf>>>,
    }

    impl SheetWriter for MockWriter {
        type Sink = MockSink;

        fn create_sheet(&self, _name: &str) -> Result<MockSink> {
            Ok(MockSink {
                rows: self.rows.clone(),
                persisted: self.persisted.clone(),
            })
        }
    }

    impl SheetSink for MockSink {
        fn append_row(&mut self, cells: &[String]) -> Result<()> {
            self.rows.lock().unwrap().push(cells.to_vec());
            Ok(())
        }

        fn persist(self, path: &Path) -> Result<()> {
            *self.persisted.lock().unwrap() = Some(path.to_path_buf());
            Ok(())
        }
    }

    struct MockConfig {
        input_dir: PathBuf,
        output_dir: PathBuf,
    }

    impl ConfigProvider for MockConfig {
        fn input_dir(&self) -> &Path {
            &self.input_dir
        }

        fn output_dir(&self) -> &Path {
            &self.output_dir
        }
    }

    fn row(cells: &[&str]) -> Vec<Option<String>> {
        cells.iter().map(|c| Some(c.to_string())).collect()
    }

    fn setup(temp: &TempDir, pages: Vec<Vec<RawTable>>) -> (DocumentPipeline<MockEngine, MockWriter, MockConfig>, MockWriter, PathBuf) {
        let input_path = temp.path().join("doc.pdf");
        File::create(&input_path).unwrap();

        let writer = MockWriter::default();
        let pipeline = DocumentPipeline::new(
            MockEngine { pages },
            writer.clone(),
            MockConfig {
                input_dir: temp.path().to_path_buf(),
                output_dir: temp.path().join("out"),
            },
        );
        (pipeline, writer, input_path)
    }

    #[test]
    fn test_two_page_document_streams_under_first_header() {
        let temp = TempDir::new().unwrap();
        let pages = vec![
            vec![vec![row(&["ID", "Qty"]), row(&["1", "2"])]],
            vec![vec![row(&["ID", "Qty"]), row(&["3", "4"])]],
        ];
        let (pipeline, writer, input_path) = setup(&temp, pages);

        let report = pipeline.process_document(&input_path).unwrap();

        assert_eq!(report.tables_found, 2);
        assert_eq!(report.tables_used, 2);
        assert_eq!(report.rows_written, 2);
        assert_eq!(report.output_path, temp.path().join("out").join("doc.xlsx"));

        let rows = writer.rows.lock().unwrap().clone();
        assert_eq!(
            rows,
            vec![
                vec!["ID".to_string(), "Qty".to_string()],
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string(), "4".to_string()],
            ]
        );
        assert_eq!(
            writer.persisted.lock().unwrap().clone(),
            Some(temp.path().join("out").join("doc.xlsx"))
        );
    }

    #[test]
    fn test_later_headers_are_discarded() {
        let temp = TempDir::new().unwrap();
        let pages = vec![vec![
            vec![row(&["A", "B"]), row(&["1", "2"])],
            vec![row(&["X", "Y", "Z"]), row(&["7", "8", "9"])],
        ]];
        let (pipeline, writer, input_path) = setup(&temp, pages);

        let report = pipeline.process_document(&input_path).unwrap();

        // Second table keeps its own width: three cells under a two-column
        // header. Schema drift is preserved, not corrected.
        let rows = writer.rows.lock().unwrap().clone();
        assert_eq!(
            rows,
            vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["1".to_string(), "2".to_string()],
                vec!["7".to_string(), "8".to_string(), "9".to_string()],
            ]
        );
        assert_eq!(report.tables_used, 2);
    }

    #[test]
    fn test_unusable_tables_are_skipped_not_counted_as_used() {
        let temp = TempDir::new().unwrap();
        let pages = vec![vec![
            vec![row(&["only header"])],
            vec![row(&["A", "B"]), row(&["1", "2"])],
        ]];
        let (pipeline, _writer, input_path) = setup(&temp, pages);

        let report = pipeline.process_document(&input_path).unwrap();

        assert_eq!(report.tables_found, 2);
        assert_eq!(report.tables_used, 1);
        assert_eq!(report.rows_written, 1);
    }

    #[test]
    fn test_missing_input_fails_with_not_found() {
        let temp = TempDir::new().unwrap();
        let (pipeline, _writer, _input) = setup(&temp, vec![]);

        let missing = temp.path().join("nope.pdf");
        let err = pipeline.process_document(&missing).unwrap_err();
        assert!(matches!(err, EtlError::NotFound { .. }));
    }

    #[test]
    fn test_document_without_usable_data_fails_and_never_persists() {
        let temp = TempDir::new().unwrap();
        let pages = vec![
            vec![],
            vec![vec![row(&["H1", "H2"]), row(&["", ""])]],
        ];
        let (pipeline, writer, input_path) = setup(&temp, pages);

        let err = pipeline.process_document(&input_path).unwrap_err();
        assert!(matches!(err, EtlError::NoData { .. }));
        assert!(writer.persisted.lock().unwrap().is_none());
    }
}
