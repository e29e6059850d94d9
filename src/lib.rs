// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generate C preprocessor config headers from `KEY=VALUE` env files.
//!
//! Reads one or more env files, merges their assignments (later files win),
//! classifies each value as a numeric literal, a string literal, or a
//! valueless flag, and emits a header-guarded block of `#define` macros for
//! firmware/embedded C/C++ builds.
//!
//! # Example
//!
//! ```rust,ignore
//! use envheader::{parse_file, write_header, EnvSet, ValueClassifier};
//!
//! let mut vars = EnvSet::new();
//! let warnings = parse_file(Path::new(".env"), &mut vars)?;
//! let macros = ValueClassifier::new().classify_set(&vars);
//! write_header(&mut out, "config.h", &sources, &macros)?;
//! ```
//!
//! Per-line problems (missing `=`, blank names) are reported as
//! [`ParseWarning`] values rather than logged from library code; the CLI
//! decides how to surface them.

mod comment;
mod header;
mod parser;
mod value;

pub use comment::{render_comment, CommentStyle};
pub use header::{include_guard, render_macros, write_header};
pub use parser::{normalize_name, parse_file, parse_str, EnvSet, ParseWarning};
pub use value::{MacroValue, ValueClassifier};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal generation errors. Malformed input lines are not errors; they are
/// surfaced as [`ParseWarning`]s and processing continues.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// An env file that passed the existence filter could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output handle rejected a write.
    #[error("failed to write header: {0}")]
    WriteOutput(#[from] io::Error),
}
