//! Data ingestion: CSV sources and the merge into a single series.

pub mod ingest;
pub mod merge;
pub mod schema;

pub use ingest::{load_csv, read_records, DataError};
pub use merge::{date_span, duplicate_dates, inconsistent_records, merge_sources};
pub use schema::RecordSchema;
