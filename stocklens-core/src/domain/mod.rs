//! Domain types for StockLens

pub mod record;

pub use record::PriceRecord;
