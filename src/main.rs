// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! envheader CLI
//!
//! Generate a C config header from `KEY=VALUE` env files.
//!
//! # Usage
//!
//! ```bash
//! # Emit to stdout
//! envheader .env
//!
//! # Emit gen/config.h from two env files; later files win on conflicts
//! envheader -o gen/config.h base.env local.env
//!
//! # Verbose diagnostics
//! envheader --debug -o gen/config.h .env
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use envheader::{parse_file, write_header, EnvSet, ValueClassifier};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Logical header name used for the include guard when piping to stdout.
const DEFAULT_HEADER_NAME: &str = "config.h";

#[derive(Parser)]
#[command(name = "envheader")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a C config header from KEY=VALUE env files")]
struct Cli {
    /// Input env files, processed in order (later files win on conflicts)
    #[arg(value_name = "ENV_FILES", required = true)]
    env_files: Vec<PathBuf>,

    /// Output header file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Raise diagnostic verbosity to debug
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("envheader=debug")
    } else {
        EnvFilter::new("envheader=info")
    };
    fmt().with_env_filter(filter).with_target(false).init();

    let inputs = existing_inputs(&cli.env_files);

    let mut vars = EnvSet::new();
    for path in &inputs {
        let warnings = parse_file(path, &mut vars)?;
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        tracing::debug!(
            file = %path.display(),
            total_vars = vars.len(),
            "processed env file"
        );
    }

    let classifier = ValueClassifier::new();
    let macros = classifier.classify_set(&vars);

    let logical_name = cli
        .output
        .as_deref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_HEADER_NAME.to_string());

    match cli.output {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_header(&mut out, &logical_name, &inputs, &macros)?;
            out.flush().context("failed to flush output file")?;
            tracing::info!(
                output = %path.display(),
                macros = macros.len(),
                "header written"
            );
        }
        None => {
            tracing::debug!("piping output to stdout");
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_header(&mut out, &logical_name, &inputs, &macros)?;
        }
    }

    Ok(())
}

/// Keep only inputs that exist on disk, absolutized; warn about the rest.
fn existing_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut existing = Vec::new();
    for path in paths {
        if path.is_file() {
            let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
            existing.push(absolute);
        } else {
            tracing::warn!("file does not exist: {}", path.display());
        }
    }
    existing
}
