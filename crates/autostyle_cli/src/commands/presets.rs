//! `autostyle presets` subcommands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use autostyle_core::{Preset, RenderOptions, generate_css_file, presets};
use serde::Serialize;

use crate::cli::{PresetsAction, SourceArgs};
use crate::commands::generate::sources;
use crate::output;

#[derive(Serialize)]
struct PresetItem<'a> {
    name: &'a str,
    path: &'a str,
    description: &'a str,
}

pub fn handle(action: PresetsAction) -> Result<()> {
    match action {
        PresetsAction::List => list(),
        PresetsAction::Build { only, sources } => build(only.as_deref(), &sources),
    }
}

fn list() -> Result<()> {
    let all = presets::all();
    let mut table = output::table(&["Preset", "Output", "Description"]);
    let items: Vec<PresetItem> = all
        .iter()
        .map(|p| PresetItem {
            name: p.name,
            path: p.css_path,
            description: p.description,
        })
        .collect();
    for item in &items {
        output::table_row(
            &mut table,
            &[
                item.name.to_string(),
                item.path.to_string(),
                item.description.to_string(),
            ],
        );
    }
    output::table_print(&table, "presets", &items);
    Ok(())
}

fn build(only: Option<&str>, source_args: &SourceArgs) -> Result<()> {
    let selected = select(only)?;
    let sources = sources(source_args);

    for preset in &selected {
        let path = Path::new(preset.css_path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let options = RenderOptions::new().with_css_path(path);
        generate_css_file(&preset.theme, &options, &sources)
            .with_context(|| format!("preset {} failed", preset.name))?;
        tracing::info!(preset = preset.name, path = preset.css_path, "preset built");
        output::success(&format!("{} → {}", preset.name, preset.css_path));
    }
    Ok(())
}

fn select(only: Option<&str>) -> Result<Vec<Preset>> {
    match only {
        None => Ok(presets::all()),
        Some(name) => presets::find(name).map(|p| vec![p]).ok_or_else(|| {
            let names: Vec<&str> = presets::all().iter().map(|p| p.name).collect();
            anyhow!("Unknown preset '{}'. Available: {}", name, names.join(", "))
        }),
    }
}
