//! Row and outcome types for the review pipeline.
//!
//! The outcome enums serialize to the exact JSON the dashboard has always
//! consumed, discriminated by a `status` field:
//!
//! ```json
//! {"status":"error","error":"Validation errors in CSV file.","details":["Row 2: ..."]}
//! {"status":"success","products":[...],"products_raw":{"red-shoe":[...]}}
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One data row of an uploaded CSV, fields still raw.
///
/// Cells the line did not provide are empty strings, never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    pub handle: String,
    pub name: String,
    pub message: String,
    pub rating: String,
}

/// First-row summary of a handle group, shown in the import preview.
///
/// `rating` stays the raw CSV text; the preview renders it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProduct {
    pub handle: String,
    pub name: String,
    pub message: String,
    pub rating: String,
}

/// Valid rows grouped by handle. Handles keep first-occurrence order and
/// rows keep file order within each group.
pub type RowGroups = IndexMap<String, Vec<CsvRow>>;

/// Result of parsing and validating an uploaded CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ImportOutcome {
    Error {
        error: String,
        details: Vec<String>,
    },
    Success {
        products: Vec<ParsedProduct>,
        products_raw: RowGroups,
    },
}

impl ImportOutcome {
    /// Wraps header or row diagnostics in the fixed validation envelope.
    #[must_use]
    pub fn validation_error(details: Vec<String>) -> Self {
        Self::Error {
            error: "Validation errors in CSV file.".to_string(),
            details,
        }
    }
}

/// Result of committing grouped rows to the store.
///
/// The error variant lists only the failed handles. The success variant
/// serializes as a bare `{"status":"success"}`; the per-handle success
/// messages stay on the value for callers that print them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum UploadOutcome {
    Error {
        error: String,
        details: Vec<String>,
    },
    Success {
        #[serde(skip)]
        details: Vec<String>,
    },
}

impl UploadOutcome {
    /// Wraps per-handle failure diagnostics in the fixed upload envelope.
    #[must_use]
    pub fn upload_errors(details: Vec<String>) -> Self {
        Self::Error {
            error: "Upload Errors".to_string(),
            details,
        }
    }
}
