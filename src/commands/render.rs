//! Render command: template + data directory → substituted README.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::error::RenderError;
use crate::template::{self, RenderReport};

/// Options for the render command
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Template file containing `{{ name }}` placeholders
    pub template: PathBuf,
    /// Directory of `<name>.csv` data files
    pub data_dir: PathBuf,
    /// Output file
    pub output: PathBuf,
    /// Print the substituted document instead of writing the output file
    pub dry_run: bool,
    /// Print a JSON substitution report instead of the styled summary
    pub json: bool,
}

/// Execute the render command
pub fn execute_render(options: RenderOptions) -> Result<()> {
    let template_text =
        fs::read_to_string(&options.template).map_err(|source| RenderError::TemplateRead {
            path: options.template.clone(),
            source,
        })?;

    let sources = template::available_sources(&options.data_dir)?;
    let (rendered, report) = template::substitute(&template_text, &sources)?;

    if options.dry_run {
        println!("{rendered}");
    } else {
        fs::write(&options.output, &rendered).map_err(|source| RenderError::WriteOutput {
            path: options.output.clone(),
            source,
        })?;
    }

    if options.json {
        print_json(&options, &report)?;
    } else if !options.dry_run {
        print_summary(&options, &report);
    }

    Ok(())
}

fn print_summary(options: &RenderOptions, report: &RenderReport) {
    for name in &report.substituted {
        println!("{} {{{{ {} }}}} replaced", style("✓").green(), name);
    }
    for name in &report.skipped {
        println!(
            "{} {{{{ {} }}}} has no data file, left as-is",
            style("!").yellow(),
            name
        );
    }
    println!("{} wrote {}", style("✓").green(), options.output.display());
}

fn print_json(options: &RenderOptions, report: &RenderReport) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        template: &'a PathBuf,
        output: &'a PathBuf,
        written: bool,
        substituted: &'a [String],
        skipped: &'a [String],
    }

    let output = JsonOutput {
        template: &options.template,
        output: &options.output,
        written: !options.dry_run,
        substituted: &report.substituted,
        skipped: &report.skipped,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
