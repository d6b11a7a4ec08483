//! CLI logic for the Archigrid layout tool.
//!
//! This module contains the core CLI logic: it reads a TOML diagram,
//! computes its matrix layout and writes the rectangles back as TOML.

pub mod error_adapter;

mod args;
mod config;
mod output;

pub use args::Args;

use std::fs;

use log::info;

use archigrid::{ArchigridError, LayoutBuilder};

/// Run the Archigrid CLI application
///
/// This function processes the input file through the layout pipeline
/// and writes the resulting layout to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ArchigridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Duplicate object identifiers
pub fn run(args: &Args) -> Result<(), ArchigridError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process diagram using LayoutBuilder API
    let builder = LayoutBuilder::new(app_config);
    let diagram = builder.parse(&source)?;
    let layout = builder.compute(&diagram)?;

    // Write output file
    fs::write(&args.output, output::render_layout(&layout)?)?;

    info!(output_file = args.output, objects = layout.len(); "Layout exported successfully");

    Ok(())
}
