/// CSV and report export.
pub mod export;
