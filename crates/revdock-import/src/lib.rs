//! CSV review import/export pipeline.
//!
//! The flow mirrors the merchant dashboard's import screen: parse and
//! validate an uploaded CSV ([`parse_reviews_csv`]), show the grouped
//! preview, then commit the groups to the product store
//! ([`upload_reviews`]). Export runs the other way, serializing a
//! product's review list back to downloadable CSV ([`reviews_to_csv`]).
//! The single-review storefront path shares the same field rules and
//! store seam ([`submit_review`], [`withdraw_review`]).

pub mod export;
pub mod headers;
pub mod parse;
pub mod single;
pub mod types;
pub mod upload;
pub mod validate;

pub use export::reviews_to_csv;
pub use headers::HeaderIndex;
pub use parse::{parse_reviews_csv, summarize_groups};
pub use single::{submit_review, withdraw_review, SubmitError};
pub use types::{CsvRow, ImportOutcome, ParsedProduct, RowGroups, UploadOutcome};
pub use upload::{build_reviews, upload_reviews};
pub use validate::{validate_draft, validate_row};
