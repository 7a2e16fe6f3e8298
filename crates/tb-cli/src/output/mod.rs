//! Command output. `json` and `raw` print the response envelope the HTTP API
//! returns; `table` prints the envelope's rows with fixed columns.

use serde::Serialize;
use tb_core::responses::MessageResponse;

use crate::cli::OutputFormat;
use crate::ui;

mod rows;
pub mod table;

pub use rows::TableRow;

/// Render `envelope`, or `rows` as a table.
pub fn render<E: Serialize, R: TableRow>(
    envelope: &E,
    rows: &[R],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(envelope)?),
        OutputFormat::Raw => Ok(serde_json::to_string(envelope)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            Ok(table::render(
                rows,
                table::TableOptions {
                    max_width: prefs.term_width,
                    color: prefs.table_color,
                },
            ))
        }
    }
}

pub fn output<E: Serialize, R: TableRow>(
    envelope: &E,
    rows: &[R],
    format: OutputFormat,
) -> anyhow::Result<()> {
    println!("{}", render(envelope, rows, format)?);
    Ok(())
}

/// Print a response that carries no rows. Tables show the bare message.
pub fn output_message(response: &MessageResponse, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(response)?,
        OutputFormat::Raw => serde_json::to_string(response)?,
        OutputFormat::Table => response.message.clone(),
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tb_core::entities::TaskStats;
    use tb_core::responses::StatsResponse;

    use super::render;
    use crate::cli::OutputFormat;

    fn stats_response() -> StatsResponse {
        StatsResponse::new(TaskStats {
            open: 2,
            in_progress: 1,
            completed: 4,
            total: 7,
        })
    }

    #[test]
    fn json_renders_the_whole_envelope() {
        let response = stats_response();
        let out = render(&response, std::slice::from_ref(&response.stats), OutputFormat::Json)
            .expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["stats"]["completed"], 4);
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_is_single_line_json() {
        let response = stats_response();
        let out = render(&response, std::slice::from_ref(&response.stats), OutputFormat::Raw)
            .expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["stats"]["total"], 7);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_renders_only_the_rows() {
        let response = stats_response();
        let out = render(&response, std::slice::from_ref(&response.stats), OutputFormat::Table)
            .expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("open"));
        assert!(!out.contains("success"));
    }
}
