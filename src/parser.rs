//! Function record parser — turns one raw comment block into a
//! [`FunctionRecord`].
//!
//! Every block yields exactly one record. A field that cannot be extracted
//! degrades to its sentinel (`"N/A"`, the no-params flag, `"nothing"`);
//! nothing in here fails the block, let alone the run. Field boundaries are
//! the documented splitting heuristics of the comment convention: first
//! ` - ` for the description, first `-` for a parameter line, first `}` for
//! the return annotation.

use crate::model::{FunctionRecord, ParamRecord, NOT_AVAILABLE, NO_RETURN};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Parameter annotation, to end of line.
static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@param.*").unwrap());

/// Return annotation, to end of line. The trailing space is deliberate:
/// `@returnsX` is not an annotation.
static RE_RETURNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@returns .*").unwrap());

/// Bracketed type annotation inside a parameter declaration, brackets kept.
static RE_TYPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{.*\}").unwrap());

const OPEN_TOKEN: &str = "/* ";

/// Parse one raw comment block into a function record.
///
/// `public_names` is the read-only set collected by the scanner; together
/// with the block's indentation it drives the visibility heuristic.
pub fn parse_block(block: &str, public_names: &HashSet<String>) -> FunctionRecord {
    let name = extract_name(block);

    // Heuristic, not scope analysis: a name exposed via `this.<name> = ...;`
    // or a block found at an unindented position counts as public.
    let public = public_names.contains(&name) || !block.starts_with('\t');

    let (params, no_params) = extract_params(block);
    let (return_type, return_description) = extract_returns(block);

    FunctionRecord {
        public,
        name,
        description: extract_description(block),
        params,
        no_params,
        return_type,
        return_description,
    }
}

/// The function name is the second whitespace token between the opening
/// delimiter and the first ` -` on the block's first line.
fn extract_name(block: &str) -> String {
    let stripped = block.trim_matches('\t');
    let Some(rest) = stripped.strip_prefix(OPEN_TOKEN) else {
        return NOT_AVAILABLE.to_string();
    };
    let first_line = rest.split('\n').next().unwrap_or("");
    let Some(dash) = first_line.find(" -") else {
        return NOT_AVAILABLE.to_string();
    };
    let matched = &stripped[..OPEN_TOKEN.len() + dash + 2];
    matched
        .split_whitespace()
        .nth(1)
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// The description is everything after the first ` - ` in the block, up to
/// the end of that line, trimmed.
fn extract_description(block: &str) -> String {
    let Some(pos) = block.find(" - ") else {
        return NOT_AVAILABLE.to_string();
    };
    let rest = &block[pos + 3..];
    rest.split('\n').next().unwrap_or("").trim().to_string()
}

/// Collect every `@param` line in order. No lines at all sets the
/// no-params flag instead of producing an empty list.
fn extract_params(block: &str) -> (Vec<ParamRecord>, bool) {
    let params: Vec<ParamRecord> = RE_PARAM
        .find_iter(block)
        .map(|m| parse_param_line(m.as_str()))
        .collect();
    let no_params = params.is_empty();
    (params, no_params)
}

/// Parse one `@param` line.
///
/// The line splits at its first dash into a declaration half and a
/// description half. The declaration half carries the bracketed type and,
/// after the closing brace, the parameter name. A line missing its dash or
/// braces degrades field-by-field to `"N/A"` rather than failing the block.
fn parse_param_line(line: &str) -> ParamRecord {
    let (decl, desc) = match line.split_once('-') {
        Some((decl, desc)) => (decl, Some(desc)),
        None => (line, None),
    };

    let ty = RE_TYPE
        .find(decl)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let name = match decl.find('}') {
        Some(i) => decl[i + 1..].split('}').next().unwrap_or("").trim().to_string(),
        None => NOT_AVAILABLE.to_string(),
    };

    let description = match desc {
        Some(d) => d.trim().to_string(),
        None => NOT_AVAILABLE.to_string(),
    };

    ParamRecord {
        name,
        ty,
        description,
    }
}

/// Extract the return type and description from the first `@returns` line.
///
/// The line splits at its first closing brace: the left side minus the
/// marker and opening brace is the type, the right side is the description.
/// No annotation, or one with an empty type, yields the `"nothing"`
/// sentinel and an empty description.
fn extract_returns(block: &str) -> (String, String) {
    let Some(m) = RE_RETURNS.find(block) else {
        return (NO_RETURN.to_string(), String::new());
    };
    let line = m.as_str();

    let (head, tail) = match line.split_once('}') {
        Some((head, tail)) => (head, tail),
        None => (line, ""),
    };

    let ty = head
        .trim_start_matches("@returns")
        .trim()
        .trim_start_matches('{')
        .trim();
    if ty.is_empty() {
        return (NO_RETURN.to_string(), String::new());
    }

    (ty.to_string(), tail.trim().to_string())
}
