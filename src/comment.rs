// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! C block-comment rendering with greedy word wrap.
//!
//! Content is tokenized on spaces; newlines and tabs are kept as explicit
//! tokens so paragraph breaks and indents survive wrapping. A literal `*/`
//! is escaped so it cannot close the comment early.

/// Column threshold at which a line is broken.
const WRAP_WIDTH: usize = 70;
/// Number of stars in the decorative rule of titled comments.
const BAR_STARS: usize = 35;
/// Rendered form of an explicit tab token.
const TAB: &str = "    ";

/// Comment flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// Bare `/* ... */` block.
    Plain,
    /// Block framed by a rule of stars above and below the content.
    Titled,
}

/// Render `content` as a C block comment wrapped to the column threshold.
#[must_use]
pub fn render_comment(content: &str, style: CommentStyle) -> String {
    let prepared = content
        .trim()
        .replace('\n', " \n ")
        .replace('\t', " \t ")
        .replace("*/", "*\\/");
    let words: Vec<&str> = prepared.split(' ').filter(|w| !w.is_empty()).collect();

    let bar = vec!["*"; BAR_STARS].join(" ");

    // Short content without explicit breaks stays on a single line.
    let total: usize = words.iter().map(|w| word_len(w)).sum::<usize>() + words.len();
    if total < WRAP_WIDTH && !words.contains(&"\n") {
        let body = words.join(" ");
        return match style {
            CommentStyle::Plain => format!("/* {body} */"),
            CommentStyle::Titled => format!("/*\n * {bar}\n * {body}\n * {bar}\n */"),
        };
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line: Vec<&str> = Vec::new();
    let mut line_len = 0usize;

    for &word in &words {
        if line_len + word_len(word) >= WRAP_WIDTH || word == "\n" {
            lines.push(line.join(" "));
            line.clear();
            line_len = 0;
        }
        if word == "\n" {
            continue;
        }
        if word == "\t" {
            line.push(TAB);
            line_len += TAB.len() + 1;
        } else {
            line.push(word);
            line_len += word.len() + 1;
        }
    }
    if !line.is_empty() {
        lines.push(line.join(" "));
    }

    let body = lines.join("\n * ");
    match style {
        CommentStyle::Plain => format!("/*\n * {body}\n */"),
        CommentStyle::Titled => format!("/*\n * {bar}\n * {body}\n * {bar}\n */"),
    }
}

fn word_len(word: &str) -> usize {
    match word {
        "\t" => TAB.len(),
        "\n" => 0,
        _ => word.len(),
    }
}
