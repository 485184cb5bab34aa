use crate::types::CutRecord;

pub const CSV_HEADER: &str = "Tube,Tube Length,Cut Length,Remaining Space";

/// Renders the flattened per-cut records as CSV text, one data row per
/// individual cut. All fields are integers or fixed labels, so no quoting
/// is needed.
pub fn to_csv(records: &[CutRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "Tube {},{},{},{}\n",
            r.tube_index, r.tube_length, r.cut_length, r.remaining_space
        ));
    }
    out
}
