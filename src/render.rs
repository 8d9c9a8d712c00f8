//! Plain-text renderer for function records.
//!
//! The layout is fixed: a visibility/name/parameter header, a tab-indented
//! description, then the parameter section and the return section. The
//! no-params flag and the `"nothing"` return sentinel each select an
//! alternate line instead of an empty section.

use crate::model::{FunctionRecord, NO_RETURN};

/// Render one record. The result carries no trailing newline; the caller
/// decides block separation.
pub fn render(record: &FunctionRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    let visibility = if record.public { "public" } else { "private" };
    let names: Vec<&str> = record.params.iter().map(|p| p.name.as_str()).collect();
    lines.push(format!("{} {}({})", visibility, record.name, names.join(", ")));

    lines.push(format!("\tDescription: {}", record.description));

    if record.no_params {
        lines.push("\ttakes no Parameters".to_string());
    } else {
        lines.push("\tParameters:".to_string());
        for param in &record.params {
            lines.push(format!("\t\t{}", param.name));
            lines.push(format!("\t\t\tType: {}", param.ty));
            lines.push(format!("\t\t\t{}", param.description));
        }
    }

    if record.return_type == NO_RETURN {
        lines.push("\tReturns nothing".to_string());
    } else {
        lines.push(format!("\tReturns a {}", record.return_type));
        lines.push(format!("\t\t{}", record.return_description));
    }

    lines.join("\n")
}
