//! Header resolution for uploaded review CSVs.

use crate::types::CsvRow;

/// Required column names, in the order diagnostics list them.
pub(crate) const REQUIRED_HEADERS: [&str; 4] = ["handle", "name", "message", "rating"];

/// Column positions of the required fields in an uploaded CSV.
///
/// Built once from the header line; data lines are then read positionally
/// instead of through a per-row keyed map. Columns beyond the required
/// four are tolerated and ignored. When a required header appears twice,
/// the last occurrence supplies the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderIndex {
    handle: usize,
    name: usize,
    message: usize,
    rating: usize,
}

impl HeaderIndex {
    /// Resolves the header line into column positions.
    ///
    /// Cells are compared exactly, with no trimming or case folding.
    ///
    /// # Errors
    ///
    /// Returns the missing-header diagnostic, listing absent columns in
    /// required order, when the line does not name all four fields.
    pub fn from_header_line(line: &str) -> Result<Self, String> {
        let columns: Vec<&str> = line.split(',').collect();
        let find = |header: &str| columns.iter().rposition(|cell| *cell == header);

        match (
            find("handle"),
            find("name"),
            find("message"),
            find("rating"),
        ) {
            (Some(handle), Some(name), Some(message), Some(rating)) => Ok(Self {
                handle,
                name,
                message,
                rating,
            }),
            (handle, name, message, rating) => {
                let found = [handle, name, message, rating];
                let missing: Vec<&str> = REQUIRED_HEADERS
                    .iter()
                    .zip(found)
                    .filter(|(_, position)| position.is_none())
                    .map(|(header, _)| *header)
                    .collect();
                Err(format!("Missing headers: {}", missing.join(", ")))
            }
        }
    }

    /// Reads one data line into a row positionally. Cells the line does
    /// not provide come back as empty strings; cells beyond the resolved
    /// positions are ignored.
    #[must_use]
    pub fn read_row(&self, line: &str) -> CsvRow {
        let cells: Vec<&str> = line.split(',').collect();
        let cell = |position: usize| cells.get(position).copied().unwrap_or_default().to_string();
        CsvRow {
            handle: cell(self.handle),
            name: cell(self.name),
            message: cell(self.message),
            rating: cell(self.rating),
        }
    }
}
