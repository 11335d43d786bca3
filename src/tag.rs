//! Parser for the compact field annotation grammar

/// Keyword selecting automatic, type-keyed resolution
pub(crate) const AUTO_KEYWORD: &str = "auto";

const SEPARATOR: char = ',';

/// A parsed injection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag<'a> {
    /// Dependency name to resolve; may be empty, which never resolves
    pub name: &'a str,
    /// Resolve by the slot's declared type instead of by name
    pub auto: bool,
}

/// Parse a raw field annotation. Format: `"<name>[,auto]"`
///
/// An empty annotation is no request at all. The component after the first
/// separator enables automatic mode only when it is exactly `auto`; any
/// other value is ignored, as are components past the second.
pub fn parse_field_tag(raw: &str) -> Option<FieldTag<'_>> {
    if raw.is_empty() {
        return None;
    }

    let mut components = raw.split(SEPARATOR);
    let name = components.next().unwrap_or("");
    let auto = components.next() == Some(AUTO_KEYWORD);

    Some(FieldTag { name, auto })
}
