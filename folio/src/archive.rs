use folio_archive_csv::CsvArchive;
use folio_config::ArchiveConfig;

/// Open the submission archive at the configured location
pub fn open(config: &ArchiveConfig) -> CsvArchive {
    CsvArchive::new(config.path.clone())
}
