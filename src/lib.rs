#![forbid(unsafe_code)]

//! # csv2readme
//!
//! Renders CSV data files as aligned markdown tables into the
//! `{{ name }}` placeholders of a README template.
//!
//! ## Pipeline
//!
//! - **Reader**: loads `<name>.csv` into an ordered [`Table`]
//! - **Formatter**: renders a table as a padded markdown table
//! - **Driver**: scans the template and splices each rendered table over
//!   the first occurrence of its placeholder
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::fs;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let template = fs::read_to_string("README.template.md")?;
//!     let sources = csv2readme::available_sources(Path::new("data"))?;
//!     let (readme, report) = csv2readme::substitute(&template, &sources)?;
//!
//!     println!("{} placeholders replaced", report.substituted.len());
//!     fs::write("README.md", readme)?;
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod error;
pub mod markdown;
pub mod table;
pub mod template;

// Re-exports
pub use error::{RenderError, Result};
pub use markdown::render_table;
pub use table::Table;
pub use template::{available_sources, placeholder_names, substitute, RenderReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
