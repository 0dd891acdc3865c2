use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use folio_archive_contracts::ArchiveService;
use folio_models::submission::SubmissionRecord;
use tokio::sync::Mutex;

/// Append-only CSV archive.
///
/// The file is created lazily: the header row is written when the file is
/// missing or empty, and every record afterwards is a single appended row.
/// A mutex serializes writers so concurrent submissions cannot interleave
/// rows; the file handle is opened per append and flushed before release.
#[derive(Debug, Clone)]
pub struct CsvArchive {
    path: Arc<PathBuf>,
    writer: Arc<Mutex<()>>,
}

impl CsvArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArchiveService for CsvArchive {
    async fn append(&self, record: SubmissionRecord) -> anyhow::Result<()> {
        let _guard = self.writer.lock().await;
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || append_row(&path, &record))
            .await
            .context("Archive writer task failed")?
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let _guard = self.writer.lock().await;
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || open_append(&path).map(drop))
            .await
            .context("Archive writer task failed")?
    }
}

fn append_row(path: &Path, record: &SubmissionRecord) -> anyhow::Result<()> {
    let needs_header = std::fs::metadata(path)
        .map(|meta| meta.len() == 0)
        .unwrap_or(true);

    let file = open_append(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if needs_header {
        writer
            .write_record(SubmissionRecord::COLUMNS)
            .context("Failed to write archive header")?;
    }
    writer
        .serialize(record)
        .context("Failed to write archive row")?;
    writer.flush().context("Failed to flush archive")?;
    Ok(())
}

fn open_append(path: &Path) -> anyhow::Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create archive directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open archive at {}", path.display()))
}
