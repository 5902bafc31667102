//! Command handlers.
//!
//! Thin rendering layer over the conversion pipelines: each handler
//! derives the output path, runs the pipeline, and prints the report.
//! Per-item errors are printed here and do not change the exit code;
//! fatal conditions propagate as [`snipport::Error`].

use snipport::Result;
use snipport::convert::{export, import};
use std::path::{Path, PathBuf};

/// Executes the import command.
pub fn cmd_import(bundle: &Path) -> Result<()> {
    let output = import::default_output_path(bundle);
    let report = import::import_to_file(bundle, &output)?;

    println!("Import completed:");
    println!("  Imported: {}", report.imported);
    if report.skipped > 0 {
        println!("  Skipped:  {}", report.skipped);
    }
    print_errors(&report.errors);
    println!("Created '{}' successfully.", short_name(&output));
    Ok(())
}

/// Executes the export command.
pub fn cmd_export(document: &Path, icon: Option<PathBuf>) -> Result<()> {
    let output = export::default_output_path(document);
    let mut options = export::ExportOptions::default();
    if let Some(icon) = icon {
        options = options.with_icon(icon);
    }
    let report = export::export_document(document, &output, &options)?;

    println!("Export completed:");
    println!("  Exported: {}", report.exported);
    if report.skipped > 0 {
        println!("  Skipped:  {}", report.skipped);
    }
    if !report.affixes.is_empty() {
        println!(
            "  Affixes:  prefix '{}', suffix '{}'",
            report.affixes.prefix, report.affixes.suffix
        );
    }
    print_errors(&report.errors);
    println!("Created '{}' successfully.", short_name(&output));
    Ok(())
}

/// Prints accumulated per-item errors, if any.
fn print_errors(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    println!();
    println!("Errors ({}):", errors.len());
    for error in errors {
        println!("  - {error}");
    }
    println!();
}

/// Returns the filename component for user-facing messages.
fn short_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
