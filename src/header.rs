// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Header assembly: include guard, macro block, and the generated-file
//! banner comment.

use std::io::Write;
use std::path::PathBuf;

use crate::comment::{render_comment, CommentStyle};
use crate::value::MacroValue;
use crate::GenerateError;

/// Derive the include-guard symbol from the header's logical filename.
///
/// `config.h` becomes `_CONFIG_H_`.
#[must_use]
pub fn include_guard(filename: &str) -> String {
    let name = filename
        .to_uppercase()
        .replace('.', "_")
        .replace(' ', "_")
        .replace('/', "_");
    format!("_{name}_")
}

/// Render the `#define` block in mapping order.
///
/// Flags are emitted without a value.
#[must_use]
pub fn render_macros(macros: &[(String, MacroValue)]) -> String {
    macros
        .iter()
        .map(|(name, value)| match value.render() {
            Some(v) => format!("#define {name} {v}"),
            None => format!("#define {name}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assemble the complete header and write it to `out`.
///
/// `logical_name` seeds the include guard; `sources` is the list of env
/// files actually consumed, enumerated in the banner. The caller owns the
/// handle; nothing is flushed or closed here.
pub fn write_header<W: Write>(
    out: &mut W,
    logical_name: &str,
    sources: &[PathBuf],
    macros: &[(String, MacroValue)],
) -> Result<(), GenerateError> {
    let banner = render_comment(&banner_content(sources), CommentStyle::Titled);
    let guard = include_guard(logical_name);

    writeln!(out, "{banner}")?;
    writeln!(out)?;
    writeln!(out, "#ifndef {guard}")?;
    writeln!(out, "#define {guard}")?;
    writeln!(out)?;
    writeln!(out, "{}", render_macros(macros))?;
    writeln!(out)?;
    writeln!(out, "#endif /* End {guard} */")?;
    Ok(())
}

/// Banner text: generation timestamp and the enumerated source files.
fn banner_content(sources: &[PathBuf]) -> String {
    let file_list = sources
        .iter()
        .enumerate()
        .map(|(idx, path)| format!("\t{}. {}", idx + 1, path.display()))
        .collect::<Vec<_>>()
        .join("\n");
    let date = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S");

    format!(
        "Auto-Generated Constants Macros\n\
         Generated on: {date}\n\
         Source Files:\n\
         {file_list}\n\
         \n\
         This file was automatically generated by envheader."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_symbol_for_config_h() {
        assert_eq!(include_guard("config.h"), "_CONFIG_H_");
    }

    #[test]
    fn guard_symbol_replaces_spaces_and_slashes() {
        assert_eq!(include_guard("my header.h"), "_MY_HEADER_H_");
        assert_eq!(include_guard("gen/config.h"), "_GEN_CONFIG_H_");
    }

    #[test]
    fn macro_block_renders_all_three_forms() {
        let macros = vec![
            ("PORT".to_string(), MacroValue::Numeric("8080".into())),
            ("HOST".to_string(), MacroValue::Str("example.org".into())),
            ("VERBOSE".to_string(), MacroValue::Flag),
        ];
        assert_eq!(
            render_macros(&macros),
            "#define PORT 8080\n#define HOST \"example.org\"\n#define VERBOSE"
        );
    }

    #[test]
    fn header_layout_is_guarded_and_newline_terminated() {
        let macros = vec![("PORT".to_string(), MacroValue::Numeric("8080".into()))];
        let sources = vec![PathBuf::from("/tmp/app.env")];

        let mut buf = Vec::new();
        write_header(&mut buf, "config.h", &sources, &macros).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("/*\n"));
        assert!(text.contains("\n\n#ifndef _CONFIG_H_\n#define _CONFIG_H_\n\n"));
        assert!(text.contains("\n#define PORT 8080\n"));
        assert!(text.ends_with("\n#endif /* End _CONFIG_H_ */\n"));
    }

    #[test]
    fn banner_enumerates_source_files() {
        let sources = vec![PathBuf::from("/tmp/a.env"), PathBuf::from("/tmp/b.env")];
        let mut buf = Vec::new();
        write_header(&mut buf, "config.h", &sources, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("1. /tmp/a.env"));
        assert!(text.contains("2. /tmp/b.env"));
        assert!(text.contains("Generated on:"));
    }
}
