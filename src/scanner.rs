//! Comment block extractor — one pass over the whole source text.
//!
//! Finds every documentation block of the form
//!
//! ```text
//! /* name - description
//!     @param {type} name - description
//!     @returns {type} description
//! */
//! ```
//!
//! and collects the "public member" names assigned via `this.<name> = ...;`.
//! The block delimiters are matched by a small hand-written scanner so the
//! multi-line, leftmost-shortest matching is explicit; the line-local
//! assignment pattern stays a regex constant.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Opening delimiter of a documentation block. The trailing space is part of
/// the token: `/*foo` is an ordinary comment, not documentation.
const OPEN_TOKEN: &str = "/* ";

/// Closing delimiter of a documentation block.
const CLOSE_TOKEN: &str = "*/";

/// Separator between a function name and its description.
const DASH: &str = " - ";

/// Public member assignment, e.g. `this.redraw = redraw;`.
/// Line-local and greedy: runs to the last `;` on the line.
static RE_PUBLIC_MEMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"this\..*;").unwrap());

/// Everything the extractor produces from one source file.
#[derive(Debug, Default)]
pub struct SourceDoc {
    /// Raw comment blocks, leading tabs included, in source order.
    pub blocks: Vec<String>,
    /// Names assigned through the `this.<name> = ...;` convention.
    pub public_names: HashSet<String>,
}

/// Scan the full source text for documentation blocks and public names.
///
/// Zero blocks is not an error; downstream parsing simply runs zero times.
pub fn scan(text: &str) -> SourceDoc {
    SourceDoc {
        blocks: scan_blocks(text),
        public_names: collect_public_names(text),
    }
}

/// Extract all non-overlapping documentation blocks, leftmost-first.
///
/// A block starts at optional leading tabs followed by [`OPEN_TOKEN`],
/// continues across newlines to the first [`DASH`], then to the first
/// [`CLOSE_TOKEN`] after it. The leading tabs are kept in the block text:
/// the parser uses them to tell nested blocks from top-level ones.
fn scan_blocks(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(rel) = text[pos..].find(OPEN_TOKEN) {
        let open = pos + rel;

        // A dash must follow the opener somewhere; if none remains, no
        // later opener can complete a block either.
        let Some(dash_rel) = text[open + OPEN_TOKEN.len()..].find(DASH) else {
            break;
        };
        let dash_end = open + OPEN_TOKEN.len() + dash_rel + DASH.len();

        // Shortest match: the first closer after the dash.
        let Some(close_rel) = text[dash_end..].find(CLOSE_TOKEN) else {
            break;
        };
        let end = dash_end + close_rel + CLOSE_TOKEN.len();

        // Pull in the indentation directly before the opener, without
        // reaching back into the previous match.
        let mut start = open;
        while start > pos && bytes[start - 1] == b'\t' {
            start -= 1;
        }

        blocks.push(text[start..end].to_string());
        pos = end;
    }

    blocks
}

/// Collect the identifiers bound via the public member convention.
///
/// Each match is split at its first `=`; the right-hand side, trimmed of
/// whitespace and semicolons, is the exposed name. A match with no `=`
/// (e.g. a bare method call on `this`) is skipped.
fn collect_public_names(text: &str) -> HashSet<String> {
    let mut names = HashSet::new();
    for m in RE_PUBLIC_MEMBER.find_iter(text) {
        if let Some((_, rhs)) = m.as_str().split_once('=') {
            let name = rhs.trim_matches(|c: char| c == ';' || c.is_whitespace());
            if !name.is_empty() {
                names.insert(name.to_string());
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_blocks_in_source_order() {
        let input = "/* first - one */\ncode();\n/* second - two */\n";
        let doc = scan(input);
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0], "/* first - one */");
        assert_eq!(doc.blocks[1], "/* second - two */");
    }

    #[test]
    fn block_spans_multiple_lines() {
        let input = "/* add - adds\n\t@param {number} a - first\n*/\n";
        let doc = scan(input);
        assert_eq!(doc.blocks.len(), 1);
        assert!(doc.blocks[0].starts_with("/* add"));
        assert!(doc.blocks[0].ends_with("*/"));
    }

    #[test]
    fn leading_tabs_are_part_of_the_block() {
        let input = "code\n\t\t/* nested - inner */\n";
        let doc = scan(input);
        assert_eq!(doc.blocks, vec!["\t\t/* nested - inner */"]);
    }

    #[test]
    fn opener_without_dash_extends_to_next_dash() {
        // Leftmost-first: the dashless comment swallows up to the first
        // dash and closer that follow it, same as the DOTALL regex would.
        let input = "/* header */\n/* foo - bar */\n";
        let doc = scan(input);
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.blocks[0], "/* header */\n/* foo - bar */");
    }

    #[test]
    fn no_blocks_is_empty_not_an_error() {
        assert!(scan("var x = 1;\n").blocks.is_empty());
        assert!(scan("").blocks.is_empty());
    }

    #[test]
    fn unterminated_block_is_dropped() {
        let input = "/* foo - never closed\n@param {number} a - first\n";
        assert!(scan(input).blocks.is_empty());
    }

    #[test]
    fn collects_public_names() {
        let input = "this.redraw = redraw;\nthis.reset=reset ;\n";
        let doc = scan(input);
        assert!(doc.public_names.contains("redraw"));
        assert!(doc.public_names.contains("reset"));
        assert_eq!(doc.public_names.len(), 2);
    }

    #[test]
    fn public_match_without_assignment_is_skipped() {
        let doc = scan("this.redraw();\n");
        assert!(doc.public_names.is_empty());
    }
}
