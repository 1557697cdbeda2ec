//! Placeholder scanning and substitution.
//!
//! The driver side of the pipeline: find `{{ name }}` tokens in the
//! template text, and for each distinct name backed by a `<name>.csv`
//! file, splice in the rendered table. Names without a data file pass
//! through untouched.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{RenderError, Result};
use crate::markdown;
use crate::table::Table;

/// Matches a `{{ name }}` token; group 1 is the name with surrounding
/// whitespace trimmed.
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(.*?)\s*\}\}").unwrap());

/// Names substituted and names skipped during one render pass, in scan
/// order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderReport {
    /// Placeholder names replaced by a rendered table.
    pub substituted: Vec<String>,
    /// Placeholder names with no matching data file, left verbatim.
    pub skipped: Vec<String>,
}

/// List distinct placeholder names in order of first appearance.
pub fn placeholder_names(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for cap in PLACEHOLDER_PATTERN.captures_iter(template) {
        let name = cap[1].to_string();
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }
    names
}

/// Discover available data sources: `<name>.csv` files directly inside
/// `data_dir`, keyed by base name. Matching is case-sensitive.
pub fn available_sources(data_dir: &Path) -> Result<BTreeMap<String, PathBuf>> {
    let entries = fs::read_dir(data_dir).map_err(|source| RenderError::DataDir {
        path: data_dir.to_owned(),
        source,
    })?;

    let mut sources = BTreeMap::new();
    for entry in entries {
        let entry = entry.map_err(|source| RenderError::DataDir {
            path: data_dir.to_owned(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            sources.insert(stem.to_string(), path.clone());
        }
    }

    tracing::debug!("{} data files in {}", sources.len(), data_dir.display());
    Ok(sources)
}

/// Substitute every placeholder that has a matching data source.
///
/// Each distinct name is processed once: its CSV is loaded, rendered as a
/// markdown table, and spliced over the first occurrence of that
/// placeholder. A second occurrence of the same name stays literal.
/// Table text is inserted verbatim. CSV failures propagate; there is no
/// per-placeholder recovery.
pub fn substitute(
    template: &str,
    sources: &BTreeMap<String, PathBuf>,
) -> Result<(String, RenderReport)> {
    let mut text = template.to_string();
    let mut report = RenderReport::default();

    for name in placeholder_names(template) {
        let Some(path) = sources.get(&name) else {
            tracing::debug!("no data file for placeholder '{}', leaving as-is", name);
            report.skipped.push(name);
            continue;
        };

        let table = Table::from_path(path)?;
        let rendered = markdown::render_table(&table)?;

        // First occurrence of this name in the current text, whitespace
        // inside the braces tolerated.
        let target = PLACEHOLDER_PATTERN
            .captures_iter(&text)
            .find(|cap| cap[1] == name)
            .and_then(|cap| cap.get(0))
            .map(|m| m.range());

        match target {
            Some(range) => {
                tracing::debug!("substituting '{}' from {}", name, path.display());
                text.replace_range(range, &rendered);
                report.substituted.push(name);
            }
            None => tracing::debug!("placeholder '{}' no longer present, skipping", name),
        }
    }

    Ok((text, report))
}
