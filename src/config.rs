use serde::Serialize;

// ---------------------------------------------------------------------------
// Column-name configuration
// ---------------------------------------------------------------------------

/// Header substrings used to locate each measurement column.
///
/// Matching is fuzzy (see [`crate::data::columns::resolve_column`]), so these
/// only need to appear somewhere in the instrument's header text. If an
/// export uses different wording, edit [`COLUMN_NAMES`] and rebuild; there is
/// no runtime configuration. The side panel shows the active mapping.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnNames {
    pub frequency: &'static str,
    pub storage_modulus: &'static str,
    pub loss_modulus: &'static str,
    pub complex_viscosity: &'static str,
}

pub const COLUMN_NAMES: ColumnNames = ColumnNames {
    frequency: "Angular Frequency",
    storage_modulus: "Storage modulus",
    loss_modulus: "Loss modulus",
    complex_viscosity: "Complex viscosity",
};

impl ColumnNames {
    /// Pretty JSON rendering for the side panel.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
