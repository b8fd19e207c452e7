//! Tiledraw command line tool
//!
//! Reads a drawing in text form from a file or stdin, applies the requested
//! transformations and prints the result as text, JSON or a glyph list.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use tiledraw::{CliArgs, Config, Drawing, Operations, OutputFormat};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();

    let config = match Config::load_with_args(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(
        "min size {}, max size {}",
        config.drawing.min_size,
        config.drawing.max_size
    );

    let text = match read_input(&args) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to read input: {}", e);
            eprintln!("Failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let drawing = Drawing::from_text(text.trim_end_matches('\n'));
    tracing::info!("Loaded drawing with bounds {:?}", drawing.bounds());

    let drawing = Operations::from(&args).apply(drawing, &config.drawing);

    let format = if args.glyphs {
        OutputFormat::Glyphs
    } else if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text {
            white_squares: config.white_squares,
        }
    };
    match format.render(&drawing) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to render drawing: {}", e);
            eprintln!("Failed to render drawing: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_input(args: &CliArgs) -> io::Result<String> {
    match &args.input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
