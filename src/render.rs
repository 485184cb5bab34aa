use crate::types::TubeAssignment;

const MAX_BAR_WIDTH: f64 = 80.0;

/// Renders the plan as horizontal stacked bars, one tube per row. Cuts
/// appear as labeled segments in packed order, with leftover space as a
/// trailing dotted segment. Bars are scaled so the longest tube spans
/// the full width.
pub fn render_plan(assignments: &[TubeAssignment]) -> String {
    let Some(max_len) = assignments.iter().map(|a| a.tube_length).max() else {
        return String::new();
    };
    if max_len == 0 {
        return String::new();
    }
    let scale = MAX_BAR_WIDTH / max_len as f64;

    let mut out = String::new();
    for (i, tube) in assignments.iter().enumerate() {
        out.push_str(&format!(
            "Tube {} ({} mm, {} mm left)\n",
            i + 1,
            tube.tube_length,
            tube.remaining_space
        ));

        out.push('|');
        for &cut in &tube.cuts_made {
            let width = scaled_width(cut, scale);
            out.push_str(&segment(&cut.to_string(), width, '='));
            out.push('|');
        }
        if tube.remaining_space > 0 {
            let width = scaled_width(tube.remaining_space, scale);
            out.push_str(&".".repeat(width));
            out.push('|');
        }
        out.push('\n');
    }
    out
}

fn scaled_width(length: u32, scale: f64) -> usize {
    // Even a tiny cut gets one cell so it stays visible.
    ((length as f64 * scale).round() as usize).max(1)
}

fn segment(label: &str, width: usize, fill: char) -> String {
    if label.len() >= width {
        return fill.to_string().repeat(width);
    }
    let pad = width - label.len();
    let left = pad / 2;
    let right = pad - left;
    format!(
        "{}{}{}",
        fill.to_string().repeat(left),
        label,
        fill.to_string().repeat(right)
    )
}
