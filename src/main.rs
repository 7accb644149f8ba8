//! Arrowpath CLI
//!
//! Usage:
//!   arrowpath [OPTIONS] [FILE]
//!
//! Options:
//!   -d, --debug        Outline label boxes and show element ids
//!   --no-elements      Draw only the connectors
//!   --paths            Print each connector's path data instead of SVG
//!   -h, --help         Print help
//!
//! Set `RUST_LOG` to control log output on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arrowpath::{render_paths, render_with_config, RenderConfig, SvgConfig};

#[derive(Parser)]
#[command(name = "arrowpath")]
#[command(about = "Route connectors between anchored elements and render them as SVG")]
struct Cli {
    /// Scene file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Debug mode: outline label boxes and show element ids
    #[arg(short, long)]
    debug: bool,

    /// Do not draw element rectangles
    #[arg(long)]
    no_elements: bool,

    /// Print `source -> target: d` lines instead of SVG
    #[arg(long)]
    paths: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let output = if cli.paths {
        render_paths(&source)
    } else {
        let svg = SvgConfig::new()
            .with_debug(cli.debug)
            .with_draw_elements(!cli.no_elements);
        render_with_config(&source, RenderConfig::new().with_svg(svg))
    };

    match output {
        Ok(text) => {
            println!("{}", text);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
