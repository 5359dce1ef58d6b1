use pdf2xlsx::domain::ports::{ConfigProvider, PdfDocument, PdfEngine};
use pdf2xlsx::{DocumentPipeline, EtlError, RawTable, Result, XlsxWriter};
use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct FixedEngine {
    pages: Vec<Vec<RawTable>>,
}

struct FixedDocument {
    pages: Vec<Vec<RawTable>>,
}

impl PdfEngine for FixedEngine {
    type Doc = FixedDocument;

    fn open(&self, _path: &Path) -> Result<FixedDocument> {
        Ok(FixedDocument {
            pages: self.pages.clone(),
        })
    }
}

impl PdfDocument for FixedDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn tables_on_page(&self, page: usize) -> Result<Vec<RawTable>> {
        Ok(self.pages[page].clone())
    }
}

struct DirConfig {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl ConfigProvider for DirConfig {
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

#[test]
fn test_end_to_end_document_to_real_xlsx() {
    let temp = TempDir::new().unwrap();
    let input_path = temp.path().join("invoices.pdf");
    File::create(&input_path).unwrap();

    // Two pages, one usable table each, same header.
    let engine = FixedEngine {
        pages: vec![
            vec![vec![row(&["ID", "Qty"]), row(&["1", "2"])]],
            vec![vec![row(&["ID", "Qty"]), row(&["3", "4"])]],
        ],
    };

    let output_dir = temp.path().join("xlsx_output");
    let pipeline = DocumentPipeline::new(
        engine,
        XlsxWriter::new(),
        DirConfig {
            input_dir: temp.path().to_path_buf(),
            output_dir: output_dir.clone(),
        },
    );

    let report = pipeline.process_document(&input_path).unwrap();

    assert_eq!(report.tables_found, 2);
    assert_eq!(report.tables_used, 2);
    assert_eq!(report.rows_written, 2);

    let output_path = output_dir.join("invoices.xlsx");
    assert_eq!(report.output_path, output_path);
    assert!(output_path.exists());
    assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
}

#[test]
fn test_no_data_document_leaves_no_output_on_disk() {
    let temp = TempDir::new().unwrap();
    let input_path = temp.path().join("blank.pdf");
    File::create(&input_path).unwrap();

    // Every page yields either nothing or tables that reduce to None.
    let engine = FixedEngine {
        pages: vec![
            vec![],
            vec![vec![row(&["Header", "Only"])]],
            vec![vec![row(&["H1", "H2"]), row(&["", "  "])]],
        ],
    };

    let output_dir = temp.path().join("xlsx_output");
    let pipeline = DocumentPipeline::new(
        engine,
        XlsxWriter::new(),
        DirConfig {
            input_dir: temp.path().to_path_buf(),
            output_dir: output_dir.clone(),
        },
    );

    let err = pipeline.process_document(&input_path).unwrap_err();
    assert!(matches!(err, EtlError::NoData { .. }));

    // The output directory was created but holds no file for this document.
    assert!(!output_dir.join("blank.xlsx").exists());
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 0);
}

#[test]
fn test_unreadable_pdf_fails_with_open_failure() {
    let temp = TempDir::new().unwrap();
    let input_path = temp.path().join("garbage.pdf");
    std::fs::write(&input_path, b"this is not a pdf").unwrap();

    let pipeline = DocumentPipeline::new(
        pdf2xlsx::LopdfEngine,
        XlsxWriter::new(),
        DirConfig {
            input_dir: temp.path().to_path_buf(),
            output_dir: temp.path().join("out"),
        },
    );

    let err = pipeline.process_document(&input_path).unwrap_err();
    assert!(matches!(err, EtlError::OpenFailure { .. }));
    assert!(!temp.path().join("out").join("garbage.xlsx").exists());
}
