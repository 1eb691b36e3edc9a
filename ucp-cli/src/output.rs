use crate::types::OutputFormat;
use serde::Serialize;
use ucp_models::{ControlPlaneResponse, Dependency, format_age};

const CONTROL_PLANE_HEADERS: [&str; 8] = [
    "NAME",
    "ID",
    "SYNCED",
    "READY",
    "MESSAGE",
    "CONFIGURATION",
    "UPDATED",
    "AGE",
];

const DEPENDENCY_HEADERS: [&str; 3] = ["PACKAGE", "TYPE", "CONSTRAINTS"];

pub fn render_control_planes(
    items: &[ControlPlaneResponse],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let rows = items.iter().map(control_plane_row).collect::<Vec<_>>();
            Ok(render_table(&CONTROL_PLANE_HEADERS, &rows))
        }
        _ => render_structured(items, format),
    }
}

pub fn render_control_plane(
    item: &ControlPlaneResponse,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => render_control_planes(
            std::slice::from_ref(item),
            OutputFormat::Table,
        ),
        _ => render_structured(item, format),
    }
}

pub fn render_dependency(
    dep: &Dependency,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let row = vec![
                dep.package.clone(),
                dep.package_type.to_string(),
                dep.constraints.clone(),
            ];
            Ok(render_table(&DEPENDENCY_HEADERS, &[row]))
        }
        _ => render_structured(dep, format),
    }
}

/// JSON or YAML rendering; tables fall back to YAML.
pub fn render_structured<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml | OutputFormat::Table => {
            serde_yaml::to_string(value)?
        }
    })
}

fn control_plane_row(item: &ControlPlaneResponse) -> Vec<String> {
    vec![
        item.name.clone(),
        item.id.clone(),
        item.synced.clone(),
        item.ready.clone(),
        item.message.clone(),
        item.cfg.clone(),
        item.updated.clone(),
        item.age.as_ref().map(format_age).unwrap_or_default(),
    ]
}

/// Left-aligned columns separated by three spaces, like `kubectl get`.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells = headers.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    for cells in std::iter::once(&header_cells).chain(rows) {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("   ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
