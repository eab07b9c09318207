use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod detail;
pub mod table;

/// Render a serializable response as JSON. `Table` callers build their own
/// rows; for them this falls back to pretty JSON.
pub fn render_json<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested JSON flavor.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_json(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render rows with the terminal preferences resolved at startup.
#[must_use]
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let prefs = ui::prefs();
    table::render_rows(
        headers,
        rows,
        table::TableOptions {
            max_width: prefs.term_width,
            color: prefs.table_color,
        },
    )
}
