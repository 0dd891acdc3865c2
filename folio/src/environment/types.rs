use folio_archive_csv::CsvArchive;
use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_core_pages_impl::PageFeatureServiceImpl;
use folio_core_submission_impl::SubmissionFeatureServiceImpl;
use folio_email_impl::EmailServiceImpl;
use folio_shared_impl::time::TimeServiceImpl;

// Email
pub type Email = EmailServiceImpl;

// Archive
pub type Archive = CsvArchive;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Email, Archive>;
pub type PageFeature = PageFeatureServiceImpl;
pub type SubmissionFeature = SubmissionFeatureServiceImpl<Email, Archive, Time>;

// API
pub type RestServer = folio_api_rest::RestServer<HealthFeature, PageFeature, SubmissionFeature>;
