use std::fmt::Write;

use crate::comparison::ComparisonReport;
use crate::config::Number;

const PREVIEW_COMPONENTS: usize = 3;

/// `[a, b, c, ...]` with six decimals. Shorter vectors show what they have.
pub fn format_preview(vector: &[Number]) -> String {
    let mut preview = String::from("[");
    for value in vector.iter().take(PREVIEW_COMPONENTS) {
        let _ = write!(preview, "{:.6}, ", value);
    }
    preview.push_str("...]");
    preview
}

/// Render the Markdown report. Rows keep the order in which pairs were compared, so the
/// output is deterministic for a given pair of inputs.
pub fn render_markdown(report: &ComparisonReport) -> String {
    let overview = &report.overview;
    let summary = &report.summary;

    let mut out = String::new();
    out.push_str("# Vector Comparison Report\n\n");

    out.push_str("## Overview\n\n");
    out.push_str(&format!(
        "- **Llama vectors count**: {}\n",
        overview.left_count
    ));
    out.push_str(&format!(
        "- **Ollama vectors count**: {}\n",
        overview.right_count
    ));
    out.push_str(&format!(
        "- **Vector dimensions**: {}\n",
        overview.dimensions
    ));
    out.push('\n');

    out.push_str("## Vector Comparison Results\n\n");
    out.push_str("| Vector Index | Llama (Normalized) | Ollama | Difference (%) |\n");
    out.push_str("|--------------|-------------------|--------|----------------|\n");
    for row in &report.rows {
        out.push_str(&format!(
            "| {} | {} | {} | {:.4}% |\n",
            row.index,
            format_preview(&row.normalized),
            format_preview(&row.reference),
            row.difference
        ));
    }

    out.push_str("\n## Summary Statistics\n\n");
    out.push_str(&format!(
        "- **Total vectors compared**: {}\n",
        summary.valid_count
    ));
    out.push_str(&format!(
        "- **Average difference**: {:.4}%\n",
        summary.mean
    ));
    out.push_str(&format!("- **Total difference**: {:.4}%\n", summary.total));
    out
}
