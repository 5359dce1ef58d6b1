use crate::core::pipeline::DocumentPipeline;
use crate::core::{BatchSummary, ConfigProvider, PdfEngine, Result, SheetWriter};
use crate::utils::monitor::SystemMonitor;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Batch driver: scans the input directory for PDFs and runs the document
/// pipeline over each one. A failed document is logged and skipped; one bad
/// file never halts the batch.
pub struct BatchRunner<E: PdfEngine, W: SheetWriter, C: ConfigProvider> {
    pipeline: DocumentPipeline<E, W, C>,
    monitor: SystemMonitor,
}

impl<E: PdfEngine, W: SheetWriter, C: ConfigProvider> BatchRunner<E, W, C> {
    pub fn new(pipeline: DocumentPipeline<E, W, C>) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: DocumentPipeline<E, W, C>, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<BatchSummary> {
        let input_dir = self.pipeline.config().input_dir().to_path_buf();
        let mut summary = BatchSummary::default();

        if !input_dir.exists() {
            tracing::error!("❌ Input directory not found: {}", input_dir.display());
            return Ok(summary);
        }

        let pdf_files = collect_pdf_files(&input_dir)?;
        summary.files_found = pdf_files.len();

        tracing::info!(
            "Found {} PDF files in {}",
            pdf_files.len(),
            input_dir.display()
        );

        if pdf_files.is_empty() {
            return Ok(summary);
        }

        let bar = ProgressBar::new(pdf_files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=> "),
        );

        for pdf_path in &pdf_files {
            bar.set_message(file_label(pdf_path));

            match self.pipeline.process_document(pdf_path) {
                Ok(report) => {
                    summary.succeeded += 1;
                    summary.rows_written += report.rows_written;
                    bar.println(format!("✅ {}", report.output_path.display()));
                    summary.reports.push(report);
                }
                Err(e) => {
                    summary.failed += 1;
                    bar.println(format!("❌ {}: {}", file_label(pdf_path), e));
                    tracing::error!("Failed to process {}: {}", pdf_path.display(), e);
                }
            }

            bar.inc(1);
        }

        bar.finish_and_clear();

        if self.monitor.is_enabled() {
            self.monitor.log_final_stats();
        }

        tracing::info!(
            "Batch complete: files={}, ok={}, failed={}, rows={}",
            summary.files_found,
            summary.succeeded,
            summary.failed,
            summary.rows_written
        );

        Ok(summary)
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// All `*.pdf` files directly inside `dir`, sorted by name.
fn collect_pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("pdf")
        })
        .collect();

    files.sort();
    Ok(files)
}
