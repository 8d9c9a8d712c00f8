//! docgen — generate a plain-text API listing from documentation comments.
//!
//! Reads one source file, extracts every `/* name - description */` comment
//! block, and prints a function count followed by one rendered entry per
//! block, in source order:
//!
//! ```text
//! docgen editor.js
//! ```

mod model;
mod parser;
mod render;
mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "docgen",
    about = "Generate documentation from comment blocks in a source file"
)]
struct Cli {
    /// The source file to document (exactly one).
    files: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Argument-count errors go to stdout and never touch the filesystem.
    let path = match cli.files.as_slice() {
        [path] => path,
        [] => {
            println!("Please specify a file to process as a command line argument.");
            return Ok(ExitCode::from(2));
        }
        _ => {
            println!("Please only specify a single file to process.");
            return Ok(ExitCode::from(2));
        }
    };

    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;

    print!("{}", document(&source));
    Ok(ExitCode::SUCCESS)
}

/// Run the whole pipeline over one source text: scan for blocks and public
/// names, parse each block, render each record. Output order follows block
/// order.
fn document(source: &str) -> String {
    let doc = scanner::scan(source);

    let mut output = format!("Number of functions: {}\n", doc.blocks.len());
    for block in &doc.blocks {
        let record = parser::parse_block(block, &doc.public_names);
        output.push_str(&render::render(&record));
        output.push_str("\n\n");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_line_matches_rendered_blocks() {
        let source = "/* a - first */\n/* b - second */\n";
        let output = document(source);
        assert!(output.starts_with("Number of functions: 2\n"));
        assert_eq!(output.matches("\tDescription: ").count(), 2);
    }

    #[test]
    fn empty_input_prints_zero_and_nothing_else() {
        assert_eq!(document(""), "Number of functions: 0\n");
    }

    #[test]
    fn blocks_render_in_source_order() {
        let source = "/* beta - comes first here */\n/* alpha - comes second */\n";
        let output = document(source);
        let beta = output.find("beta").unwrap();
        let alpha = output.find("alpha").unwrap();
        assert!(beta < alpha);
    }
}
