//! Terminal output: styled text for people, one JSON object per line with `-o json`.
//!
//! Stylesheets go to stdout unstyled; messages and errors use `console`
//! styling and tables use `comfy-table`.

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn envelope(level: &str, message: &str, data: Option<&JsonValue>) -> String {
    let msg = Msg {
        level,
        message,
        data,
    };
    serde_json::to_string(&msg).unwrap_or_else(|_| {
        format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}")
    })
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    println!("{}", envelope(level, message, data));
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text, None);
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        eprintln!("{}", envelope("error", text, None));
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        eprintln!("{} {}", style("!").yellow(), style(text).bright());
    }
}

/// Raw stylesheet text. Written unstyled so it can be redirected to a file.
pub fn css(label: &str, css: &str) {
    if is_json() {
        let data = serde_json::json!({ "css": css });
        emit_json("data", label, Some(&data));
    } else {
        print!("{css}");
    }
}

// ── Tables ─────────────────────────────────────────────────────────

/// Create a styled table with a cyan bold header row.
pub fn table(columns: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(columns.iter().map(|c| {
            Cell::new(c)
                .fg(Color::Cyan)
                .add_attribute(comfy_table::Attribute::Bold)
        }));
    table
}

/// Add a row; the first cell is highlighted.
pub fn table_row(table: &mut Table, cells: &[String]) {
    let mut row = Vec::with_capacity(cells.len());
    for (i, cell) in cells.iter().enumerate() {
        let cell = Cell::new(cell);
        row.push(if i == 0 { cell.fg(Color::Green) } else { cell });
    }
    table.add_row(row);
}

/// Print a table; JSON mode emits `items` instead.
pub fn table_print<T: Serialize>(table: &Table, label: &str, items: &[T]) {
    if is_json() {
        let data = serde_json::json!({ "items": items });
        emit_json("list", label, Some(&data));
    } else {
        println!("{table}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_skips_missing_data() {
        let json = envelope("info", "hello", None);
        assert_eq!(json, r#"{"level":"info","message":"hello"}"#);
    }

    #[test]
    fn envelope_with_data() {
        let data = serde_json::json!({ "css": ":root {}" });
        let json = envelope("data", "print", Some(&data));
        let parsed: JsonValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["data"]["css"], ":root {}");
    }

    #[test]
    fn table_has_header_and_rows() {
        let mut t = table(&["Shade", "Hex"]);
        table_row(&mut t, &["base".to_string(), "#005260".to_string()]);
        let rendered = t.to_string();
        assert!(rendered.contains("Shade"));
        assert!(rendered.contains("#005260"));
    }
}
