//! Stateful scan that turns cleaned glossary text into entries.
//!
//! The clause layout is rigid: an entry number alone on its line
//! (`3.1`, `3.42`, ...), the term on the next line, then one or more
//! description lines up to the next entry number. Numbers are not
//! assumed contiguous or increasing — renumbering and extraction
//! artifacts both happen.

use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WORD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^3\.\d+$").unwrap());

/// Prefixes that force a structural break in reconstructed
/// descriptions: citations, inline examples, and numbered annotations.
const BLOCK_INTRODUCERS: &[&str] = &["cf. ", "EXAMPLE: ", "Note 1 to entry: "];

const FIGURE_PREFIX: &str = "Figure ";

/// One glossary entry. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word_number: String,
    pub word: String,
    pub description: String,
}

/// How accumulated description lines are reassembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum JoinStrategy {
    /// Block-introducer lines (`cf. `, `EXAMPLE: `, `Note 1 to entry: `)
    /// start on a new line; ordinary wrapped lines join with a space.
    #[default]
    Semantic,
    /// Every line joins with a newline, no prefix sensitivity.
    Newline,
}

impl JoinStrategy {
    pub fn join(self, lines: &[String]) -> String {
        match self {
            JoinStrategy::Newline => lines.join("\n"),
            JoinStrategy::Semantic => {
                let mut out = String::new();
                for line in lines {
                    let sep = if out.is_empty() {
                        ""
                    } else if BLOCK_INTRODUCERS.iter().any(|p| line.starts_with(p)) {
                        "\n"
                    } else {
                        " "
                    };
                    out.push_str(sep);
                    out.push_str(line);
                }
                out
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SegmentOptions {
    pub join: JoinStrategy,
    /// Drop `Figure ` captions during the scan. Only for input that did
    /// not go through the figure pre-filter; never apply both.
    pub skip_figures: bool,
}

enum Scan {
    AwaitingIdentifier,
    AwaitingTerm {
        word_number: String,
    },
    Accumulating {
        word_number: String,
        word: String,
        lines: Vec<String>,
    },
}

/// Scan `text` line by line and emit one [`Entry`] per recognized
/// identifier/term/description triple. Entries whose description would
/// be empty are dropped silently, as is a dangling identifier at end
/// of input.
pub fn extract_entries(text: &str, opts: &SegmentOptions) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut state = Scan::AwaitingIdentifier;

    for raw in text.split('\n') {
        let line = raw.trim();

        state = match state {
            // The term is the very next line after an identifier,
            // whatever it holds. A blank term just means the entry can
            // never be emitted.
            Scan::AwaitingTerm { word_number } => Scan::Accumulating {
                word_number,
                word: line.to_string(),
                lines: Vec::new(),
            },
            current if line.is_empty() => current,
            mut current if WORD_NUMBER_RE.is_match(line) => {
                flush(&mut current, opts.join, &mut entries);
                Scan::AwaitingTerm {
                    word_number: line.to_string(),
                }
            }
            mut current => {
                if let Scan::Accumulating { lines, .. } = &mut current {
                    if !(opts.skip_figures && line.starts_with(FIGURE_PREFIX)) {
                        lines.push(line.to_string());
                    }
                }
                // AwaitingIdentifier: content before the first
                // identifier/term pair is discarded.
                current
            }
        };
    }

    flush(&mut state, opts.join, &mut entries);
    entries
}

/// Emit the pending entry, if complete, and reset to AwaitingIdentifier.
fn flush(state: &mut Scan, join: JoinStrategy, entries: &mut Vec<Entry>) {
    if let Scan::Accumulating {
        word_number,
        word,
        lines,
    } = std::mem::replace(state, Scan::AwaitingIdentifier)
    {
        if !word.is_empty() && !lines.is_empty() {
            entries.push(Entry {
                word_number,
                word,
                description: join.join(&lines),
            });
        }
    }
}

// ── Tests ──
