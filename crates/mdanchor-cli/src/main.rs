use anyhow::Result;
use mdanchor_config::Config;
use mdanchor_engine::{io, render_decorated};
use std::path::{Path, PathBuf};
use std::{env, process};

fn main() -> Result<()> {
    // Determine source and output paths from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let source_dir;
    let output_dir;
    let from_config;

    if args.len() == 3 {
        // CLI arguments provided - use them
        source_dir = PathBuf::from(&args[1]);
        output_dir = PathBuf::from(&args[2]);
        from_config = false;
    } else if args.len() == 1 {
        // No CLI arguments - try config file
        match Config::load() {
            Ok(Some(config)) => {
                source_dir = config.source_dir;
                output_dir = config.output_dir;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No directories provided and no config file found");
                eprintln!("Usage: {} <source-dir> <output-dir>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <source-dir> <output-dir>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [source-dir output-dir]", args[0]);
        process::exit(1);
    };

    // Validate source directory using engine
    if let Err(e) = io::validate_source_dir(&source_dir) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Source path '{}'{} is invalid: {e}",
            source_dir.display(),
            source
        );
        process::exit(1);
    }

    let count = render_all(&source_dir, &output_dir)?;
    println!("Rendered {count} file(s) into {}", output_dir.display());

    Ok(())
}

/// Render and decorate every markdown file under `source_dir`, writing
/// mirrored `.html` files under `output_dir`. Returns the file count.
fn render_all(source_dir: &Path, output_dir: &Path) -> Result<usize> {
    let files = io::scan_markdown_files(source_dir)?;

    for relative in &files {
        let markdown = io::read_file(relative, source_dir)?;
        let html = render_decorated(&markdown);
        let written = io::write_rendered(relative, output_dir, &html)?;
        println!("{} -> {}", relative, written.display());
    }

    Ok(files.len())
}
