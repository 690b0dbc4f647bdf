//! `autostyle palette`: inspect the shades of one color.

use anyhow::{Context, Result};
use autostyle_core::{ColorInput, Rgb};
use serde::Serialize;

use crate::output;

#[derive(Serialize)]
struct ShadeRow {
    shade: String,
    hex: String,
    rgb: String,
}

pub fn handle(color: &str) -> Result<()> {
    let base = parse_color(color)?;
    let rows = shade_rows(base);

    output::header(&format!("Shades of {}", base.to_hex()));
    let mut table = output::table(&["Shade", "Hex", "CSS"]);
    for row in &rows {
        output::table_row(
            &mut table,
            &[row.shade.clone(), row.hex.clone(), row.rgb.clone()],
        );
    }
    output::table_print(&table, "palette", &rows);
    Ok(())
}

/// `#RRGGBB`, `RRGGBB`, or `r,g,b`.
fn parse_color(color: &str) -> Result<Rgb> {
    let input = if color.contains(',') {
        let channels = color
            .split(',')
            .map(|c| c.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid channel list {color:?}"))?;
        ColorInput::Channels(channels)
    } else {
        ColorInput::from(color)
    };
    Ok(input.resolve()?)
}

fn shade_rows(base: Rgb) -> Vec<ShadeRow> {
    base.variants()
        .iter()
        .map(|(shade, rgb)| ShadeRow {
            shade: shade.key(),
            hex: rgb.to_hex(),
            rgb: rgb.to_string(),
        })
        .collect()
}
