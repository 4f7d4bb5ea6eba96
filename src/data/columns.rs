// ---------------------------------------------------------------------------
// Column resolution: logical name → actual sheet column
// ---------------------------------------------------------------------------

/// Find the column matching a logical name such as "Angular Frequency".
///
/// Both sides are trimmed and lowercased, then the first column whose
/// normalized name contains the normalized target as a substring wins
/// (first-match order = sheet column order). If no column contains the
/// target, a second pass tolerates abbreviated headers: every word of the
/// target must be matched by a column word, where a column word ending in
/// `.` matches as a prefix (so " Ang. Frequency (rad/s) " still resolves
/// against "Angular Frequency").
///
/// The match is intentionally loose to cope with inconsistent instrument
/// export headers. Ambiguity is resolved by taking the first match, with
/// no warning.
pub fn resolve_column(columns: &[String], target: &str) -> Option<usize> {
    let needle = normalize(target);
    if needle.is_empty() {
        return None;
    }
    if let Some(idx) = columns
        .iter()
        .position(|col| normalize(col).contains(&needle))
    {
        return Some(idx);
    }
    columns
        .iter()
        .position(|col| words_match(&normalize(col), &needle))
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Every target word must be covered by some column word; a column word
/// with a trailing dot counts as an abbreviation and matches by prefix.
fn words_match(column: &str, target: &str) -> bool {
    target.split_whitespace().all(|tw| {
        column.split_whitespace().any(|cw| {
            if cw.contains(tw) {
                return true;
            }
            match cw.strip_suffix('.') {
                Some(stem) => !stem.is_empty() && tw.starts_with(stem),
                None => false,
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matches_substring_case_and_whitespace_insensitively() {
        let columns = cols(&["Point No.", "  ANGULAR FREQUENCY (rad/s)  ", "Storage modulus"]);
        assert_eq!(resolve_column(&columns, "Angular Frequency"), Some(1));
        assert_eq!(resolve_column(&columns, "storage MODULUS"), Some(2));
    }

    #[test]
    fn resolves_abbreviated_header() {
        let columns = cols(&[" Ang. Frequency (rad/s) "]);
        assert_eq!(resolve_column(&columns, "Angular Frequency"), Some(0));
    }

    #[test]
    fn first_match_wins_on_ambiguity() {
        let columns = cols(&["Loss modulus", "Loss modulus (corrected)"]);
        assert_eq!(resolve_column(&columns, "Loss modulus"), Some(0));
    }

    #[test]
    fn direct_containment_beats_abbreviation_match() {
        let columns = cols(&["Ang. Frequency", "Angular Frequency"]);
        assert_eq!(resolve_column(&columns, "Angular Frequency"), Some(1));
    }

    #[test]
    fn missing_column_is_not_found() {
        let columns = cols(&["Temperature", "Torque"]);
        assert_eq!(resolve_column(&columns, "Complex viscosity"), None);
    }

    #[test]
    fn empty_target_never_matches() {
        let columns = cols(&["Angular Frequency"]);
        assert_eq!(resolve_column(&columns, "   "), None);
    }
}
