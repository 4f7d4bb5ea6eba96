use std::fmt;

// ---------------------------------------------------------------------------
// DataTable – a cleaned, all-numeric table
// ---------------------------------------------------------------------------

/// A row-oriented numeric table with named columns.
///
/// Invariant: every row is exactly `columns.len()` wide and fully numeric.
/// Rows that contained any cell that failed numeric coercion were dropped
/// whole during loading, so downstream code never sees a missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    /// Header names exactly as read from the sheet.
    pub columns: Vec<String>,
    /// Data rows, one `Vec<f64>` per retained sheet row.
    pub rows: Vec<Vec<f64>>,
}

impl DataTable {
    /// Number of retained rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether cleaning left no usable rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Sample – one loaded workbook
// ---------------------------------------------------------------------------

/// A loaded measurement: the cleaned table plus the source file name,
/// which doubles as the legend label. Lives for the session only.
#[derive(Debug, Clone)]
pub struct Sample {
    pub table: DataTable,
    pub name: String,
}

// ---------------------------------------------------------------------------
// CellKind – inferred kind of a raw column, diagnostics only
// ---------------------------------------------------------------------------

/// What the raw cells of one column looked like before numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Every non-empty cell converted to a number.
    Numeric,
    /// No non-empty cell converted to a number.
    Text,
    /// Some cells converted, some did not.
    Mixed,
    /// The column had no non-empty cells at all.
    Empty,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CellKind::Numeric => "numeric",
            CellKind::Text => "text",
            CellKind::Mixed => "mixed",
            CellKind::Empty => "empty",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// FileReport – per-file diagnostics for the UI panel
// ---------------------------------------------------------------------------

/// What the loader saw in one file: the original header, a preview of the
/// raw rows (units row included), per-column inferred kinds, and a preview
/// of the cleaned rows. Shown in the diagnostics panel so users can see why
/// a column failed to match or why rows were dropped.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub name: String,
    pub original_columns: Vec<String>,
    pub column_kinds: Vec<CellKind>,
    /// First raw data rows as displayed text, before any coercion.
    pub raw_preview: Vec<Vec<String>>,
    /// First rows of the cleaned table.
    pub clean_preview: Vec<Vec<f64>>,
}

// ---------------------------------------------------------------------------
// LoadError – a file that could not be parsed
// ---------------------------------------------------------------------------

/// A per-file load failure. Loading continues for the remaining files.
#[derive(Debug, Clone)]
pub struct LoadError {
    pub file: String,
    pub message: String,
}
