//! Calcbook - a line-oriented calculator notebook.

use anyhow::{Context, Result};
use calcbook_core::Document;
use std::env;
use std::path::{Path, PathBuf};

fn print_usage() {
    eprintln!("Usage: calcbook [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    Document to evaluate (.qalc or plain text)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <EXPR>      Evaluate a single expression and print the result");
    eprintln!("  -o, --output <FILE>       Write the evaluated document to a file");
    eprintln!("  --save <FILE>             Save the evaluated document as .qalc");
    eprintln!("  --no-solver               Disable the equation solver");
    eprintln!("  -h, --help                Print help");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;
    let mut command: Option<String> = None;
    let mut output_file: Option<PathBuf> = None;
    let mut save_file: Option<PathBuf> = None;
    let mut no_solver = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --command requires an expression");
                    std::process::exit(1);
                }
                command = Some(args[i].to_string());
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                output_file = Some(PathBuf::from(&args[i]));
            }
            "--save" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --save requires a file path");
                    std::process::exit(1);
                }
                save_file = Some(PathBuf::from(&args[i]));
            }
            "--no-solver" => {
                no_solver = true;
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    let mut doc = if no_solver {
        Document::without_solver()
    } else {
        Document::new()
    };

    if let Some(expr) = command {
        if let Some(entry) = doc.evaluate_line(1, &expr) {
            let text = entry.display_text();
            if entry.is_error() {
                eprintln!("{}", text);
                std::process::exit(1);
            }
            println!("{}", text);
        }
        return;
    }

    let Some(path) = file_path else {
        print_usage();
        std::process::exit(1);
    };

    if let Err(e) = run_file(&mut doc, &path, output_file.as_deref(), save_file.as_deref()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Evaluate a document file top to bottom, then print or write the
/// annotated text and optionally persist the results.
fn run_file(
    doc: &mut Document,
    path: &Path,
    output: Option<&Path>,
    save: Option<&Path>,
) -> Result<()> {
    let lines = read_lines(doc, path)?;
    doc.evaluate_document(&lines);
    let rendered = doc.export_text(&lines);

    if let Some(out) = output {
        std::fs::write(out, &rendered)
            .with_context(|| format!("cannot write {}", out.display()))?;
        println!("Exported to {}", out.display());
    } else {
        print!("{}", rendered);
    }

    if let Some(save_path) = save {
        doc.save_qalc(save_path, &lines)
            .with_context(|| format!("cannot save {}", save_path.display()))?;
        println!("Saved to {}", save_path.display());
    }
    Ok(())
}

fn read_lines(doc: &mut Document, path: &Path) -> Result<Vec<String>> {
    if path.extension().is_some_and(|ext| ext == "qalc") {
        doc.load_qalc(path)
            .with_context(|| format!("cannot load {}", path.display()))
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Ok(text.lines().map(str::to_string).collect())
    }
}
