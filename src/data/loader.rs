use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use calamine::{Data, Range, Reader, Xls, Xlsx, open_workbook};

use super::model::{CellKind, DataTable, FileReport, LoadError, Sample};

/// Data lives on the second sheet of the workbook.
const DATA_SHEET: usize = 1;
/// Header names live on the second row of that sheet.
const HEADER_ROW: usize = 1;
/// Rows shown in the diagnostics previews.
const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// One successfully parsed file.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub sample: Sample,
    pub report: FileReport,
}

/// The result of loading a batch of files: cleaned samples, per-file
/// diagnostics, and the files that failed.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub samples: Vec<Sample>,
    pub reports: Vec<FileReport>,
    pub errors: Vec<LoadError>,
}

/// Load every file in the batch. A file that fails to open or parse is
/// recorded with its cause and skipped; the remaining files still load.
pub fn load_files(paths: &[PathBuf]) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    for path in paths {
        let file_name = display_name(path);
        match load_file(path) {
            Ok(loaded) => {
                log::info!(
                    "Loaded '{}': {} rows, columns {:?}",
                    file_name,
                    loaded.sample.table.len(),
                    loaded.sample.table.columns
                );
                outcome.samples.push(loaded.sample);
                outcome.reports.push(loaded.report);
            }
            Err(e) => {
                log::error!("Failed to load '{file_name}': {e:#}");
                outcome.errors.push(LoadError {
                    file: file_name,
                    message: format!("{e:#}"),
                });
            }
        }
    }

    outcome
}

/// Load one frequency-sweep workbook. Dispatch by extension: the two
/// supported binary formats are `.xlsx` and `.xls`.
pub fn load_file(path: &Path) -> Result<LoadedFile> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let range = match ext.as_str() {
        "xlsx" => {
            let mut workbook: Xlsx<_> = open_workbook(path).context("opening workbook")?;
            second_sheet(&mut workbook)?
        }
        "xls" => {
            let mut workbook: Xls<_> = open_workbook(path).context("opening workbook")?;
            second_sheet(&mut workbook)?
        }
        other => bail!("unsupported file extension: .{other}"),
    };

    parse_sheet(range.rows(), &display_name(path))
}

fn second_sheet<RS, R>(workbook: &mut R) -> Result<Range<Data>>
where
    RS: std::io::Read + std::io::Seek,
    R: Reader<RS>,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    match workbook.worksheet_range_at(DATA_SHEET) {
        Some(range) => range.context("reading the data sheet"),
        None => bail!(
            "workbook has no sheet {} (measurement data is expected on the second sheet)",
            DATA_SHEET + 1
        ),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unnamed>")
        .to_string()
}

// ---------------------------------------------------------------------------
// Sheet parsing
// ---------------------------------------------------------------------------

/// Turn raw sheet rows into a cleaned table plus diagnostics.
///
/// Layout contract: the row at `HEADER_ROW` carries the column names, the
/// row after it carries units and is discarded unconditionally, everything
/// below is data. Cells are coerced to `f64`; a row with any cell that
/// fails coercion is dropped whole.
pub(crate) fn parse_sheet<'a, I>(rows: I, name: &str) -> Result<LoadedFile>
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter();
    let header = rows.nth(HEADER_ROW).with_context(|| {
        format!("sheet has no header row (expected on row {})", HEADER_ROW + 1)
    })?;
    let columns: Vec<String> = header.iter().map(cell_text).collect();

    // Everything below the header; the first of these is the units row.
    let raw_rows: Vec<&[Data]> = rows.collect();

    let raw_preview: Vec<Vec<String>> = raw_rows
        .iter()
        .take(PREVIEW_ROWS)
        .map(|row| (0..columns.len()).map(|c| cell_at_text(row, c)).collect())
        .collect();

    let data_rows = raw_rows.get(1..).unwrap_or(&[]);
    let column_kinds = infer_column_kinds(data_rows, columns.len());

    let mut clean_rows: Vec<Vec<f64>> = Vec::with_capacity(data_rows.len());
    for row in data_rows {
        let converted: Option<Vec<f64>> = (0..columns.len())
            .map(|c| row.get(c).and_then(coerce_numeric))
            .collect();
        if let Some(values) = converted {
            clean_rows.push(values);
        }
    }

    let clean_preview = clean_rows.iter().take(PREVIEW_ROWS).cloned().collect();
    let table = DataTable {
        columns: columns.clone(),
        rows: clean_rows,
    };

    Ok(LoadedFile {
        sample: Sample {
            table,
            name: name.to_string(),
        },
        report: FileReport {
            name: name.to_string(),
            original_columns: columns,
            column_kinds,
            raw_preview,
            clean_preview,
        },
    })
}

/// Numeric coercion: ints and floats pass through, strings are parsed
/// after trimming, everything else (text, bools, dates, cell errors)
/// becomes missing.
fn coerce_numeric(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn cell_text(cell: &Data) -> String {
    cell.to_string()
}

fn cell_at_text(row: &[Data], col: usize) -> String {
    row.get(col).map(cell_text).unwrap_or_default()
}

fn infer_column_kinds(data_rows: &[&[Data]], width: usize) -> Vec<CellKind> {
    (0..width)
        .map(|c| {
            let mut numeric = 0usize;
            let mut other = 0usize;
            for row in data_rows {
                match row.get(c) {
                    None | Some(Data::Empty) => continue,
                    Some(cell) if coerce_numeric(cell).is_some() => numeric += 1,
                    Some(_) => other += 1,
                }
            }
            match (numeric, other) {
                (0, 0) => CellKind::Empty,
                (_, 0) => CellKind::Numeric,
                (0, _) => CellKind::Text,
                _ => CellKind::Mixed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn s(text: &str) -> Data {
        Data::String(text.to_string())
    }

    fn f(value: f64) -> Data {
        Data::Float(value)
    }

    /// Sheet layout used by most tests: title, header, units, data.
    fn sweep_rows() -> Vec<Vec<Data>> {
        vec![
            vec![s("Frequency sweep, 1% strain"), Data::Empty, Data::Empty],
            vec![s("Angular Frequency"), s("Storage modulus"), s("Loss modulus")],
            vec![s("rad/s"), s("Pa"), s("Pa")],
            vec![f(0.1), f(1.0e3), f(2.0e3)],
            vec![f(1.0), f(1.0e4), f(2.0e4)],
            vec![f(10.0), f(1.0e5), f(2.0e5)],
        ]
    }

    fn parse(rows: &[Vec<Data>]) -> LoadedFile {
        parse_sheet(rows.iter().map(|r| r.as_slice()), "test.xlsx").expect("parse")
    }

    #[test]
    fn header_is_second_row_and_units_row_is_dropped() {
        let loaded = parse(&sweep_rows());
        assert_eq!(
            loaded.sample.table.columns,
            vec!["Angular Frequency", "Storage modulus", "Loss modulus"]
        );
        assert_eq!(loaded.sample.table.len(), 3);
        assert_eq!(loaded.sample.table.rows[0], vec![0.1, 1.0e3, 2.0e3]);
    }

    #[test]
    fn rows_with_any_bad_cell_are_dropped_whole() {
        let mut rows = sweep_rows();
        rows.push(vec![f(100.0), s("overload"), f(2.0e6)]);
        rows.push(vec![f(1000.0), Data::Empty, f(2.0e7)]);
        let loaded = parse(&rows);
        // Only the three fully numeric rows survive.
        assert_eq!(loaded.sample.table.len(), 3);
        for row in &loaded.sample.table.rows {
            assert_eq!(row.len(), 3);
            assert!(row.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let mut rows = sweep_rows();
        rows.push(vec![s(" 100.0 "), s("1e6"), f(2.0e6)]);
        let loaded = parse(&rows);
        assert_eq!(loaded.sample.table.len(), 4);
        assert_eq!(loaded.sample.table.rows[3], vec![100.0, 1.0e6, 2.0e6]);
    }

    #[test]
    fn all_bad_rows_leave_an_empty_table() {
        let rows = vec![
            vec![s("title")],
            vec![s("Angular Frequency")],
            vec![s("rad/s")],
            vec![s("n/a")],
        ];
        let loaded = parse(&rows);
        assert!(loaded.sample.table.is_empty());
    }

    #[test]
    fn missing_header_row_is_an_error() {
        let rows = vec![vec![s("only a title")]];
        let result = parse_sheet(rows.iter().map(|r| r.as_slice()), "short.xlsx");
        assert!(result.is_err());
    }

    #[test]
    fn report_captures_raw_preview_and_kinds() {
        let mut rows = sweep_rows();
        rows.push(vec![f(100.0), s("overload"), Data::Empty]);
        let loaded = parse(&rows);
        let report = &loaded.report;

        // Raw preview starts at the units row, exactly as read.
        assert_eq!(report.raw_preview[0][0], "rad/s");
        assert_eq!(report.column_kinds[0], CellKind::Numeric);
        assert_eq!(report.column_kinds[1], CellKind::Mixed);
        assert_eq!(report.column_kinds[2], CellKind::Numeric);
        assert_eq!(report.clean_preview.len(), 3);
    }

    // -- calamine round trip --

    fn unique_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "rheoview_loader_test_{}_{}.xlsx",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    fn write_workbook(path: &Path) {
        let mut workbook = Workbook::new();

        let info = workbook.add_worksheet();
        info.write_string(0, 0, "Sample").unwrap();
        info.write_string(0, 1, "Polyester Elastomer").unwrap();

        let data = workbook.add_worksheet();
        data.write_string(0, 0, "Frequency sweep").unwrap();
        for (c, h) in ["Angular Frequency", "Storage modulus"].into_iter().enumerate() {
            data.write_string(1, c as u16, h).unwrap();
        }
        for (c, u) in ["rad/s", "Pa"].into_iter().enumerate() {
            data.write_string(2, c as u16, u).unwrap();
        }
        let points = [(1.0, 1.0e3), (10.0, 1.0e4), (100.0, 1.0e5)];
        for (r, (omega, g)) in points.iter().enumerate() {
            data.write_number((r + 3) as u32, 0, *omega).unwrap();
            data.write_number((r + 3) as u32, 1, *g).unwrap();
        }

        workbook.save(path).unwrap();
    }

    #[test]
    fn loads_real_xlsx_deterministically() {
        let path = unique_path("roundtrip");
        write_workbook(&path);

        let first = load_file(&path).expect("first load");
        let second = load_file(&path).expect("second load");

        assert_eq!(
            first.sample.table.columns,
            vec!["Angular Frequency", "Storage modulus"]
        );
        assert_eq!(first.sample.table.rows[1], vec![10.0, 1.0e4]);
        assert_eq!(first.sample.table, second.sample.table);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let result = load_file(Path::new("measurements.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn batch_load_continues_past_failures() {
        let good = unique_path("batch");
        write_workbook(&good);
        let missing = unique_path("missing");

        let outcome = load_files(&[missing.clone(), good.clone()]);
        assert_eq!(outcome.samples.len(), 1);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].file, display_name(&missing));

        let _ = std::fs::remove_file(&good);
    }
}
