/// Data layer: core types, spreadsheet loading, and column resolution.
///
/// Architecture:
/// ```text
///  .xlsx / .xls
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  second sheet, header on row 2, units row dropped,
///   └──────────┘  numeric coercion, incomplete rows removed
///        │
///        ▼
///   ┌──────────────┐
///   │ Sample        │  DataTable + file name (+ FileReport diagnostics)
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  columns  │  fuzzy logical-name → column-index resolution
///   └──────────┘
/// ```
pub mod columns;
pub mod loader;
pub mod model;
