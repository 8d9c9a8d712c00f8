//! Data model for parsed documentation blocks — format-agnostic.

/// Placeholder for a field whose text could not be extracted.
pub const NOT_AVAILABLE: &str = "N/A";

/// Return type of a function with no `@returns` annotation.
pub const NO_RETURN: &str = "nothing";

/// One documented function, parsed from a single comment block.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FunctionRecord {
    /// Visibility heuristic: name listed via `this.<name> = ...;`, or the
    /// block was found at an unindented position. Not a scope analysis.
    pub public: bool,
    pub name: String,
    pub description: String,
    /// `@param` entries, in source order.
    pub params: Vec<ParamRecord>,
    /// Set when the block carries zero `@param` lines. Distinct from an
    /// empty `params` vector: it renders as "takes no Parameters".
    pub no_params: bool,
    /// Bare type name from `@returns`, or [`NO_RETURN`].
    pub return_type: String,
    /// Empty unless a `@returns` annotation is present.
    pub return_description: String,
}

/// One `@param` annotation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParamRecord {
    pub name: String,
    /// Literal bracketed annotation text, brackets included (e.g. `{number}`).
    pub ty: String,
    pub description: String,
}
