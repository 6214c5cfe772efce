//! Column type classification
//!
//! Maps vendor type descriptors as reported by `information_schema`
//! (`varchar(255)`, `int(11) unsigned`, `enum('a','b')`) onto [`ColumnType`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ColumnType;

/// The raw type descriptor could not be classified
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported type: {raw}")]
pub struct UnsupportedTypeError {
    /// The descriptor exactly as it was passed in
    pub raw: String,
}

impl UnsupportedTypeError {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// Result of classifying a type descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedType {
    pub column_type: ColumnType,
    /// Enum literals, empty unless `column_type` is `Enum`
    pub enum_values: Vec<String>,
    pub unsigned: bool,
}

enum Matcher {
    Exact(&'static str),
    Contains(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, descriptor: &str, base: &str) -> bool {
        match self {
            Matcher::Exact(expected) => descriptor == *expected,
            Matcher::Contains(needles) => needles.iter().any(|n| base.contains(n)),
        }
    }
}

// First match wins. `tinyint(1)` must precede the generic "int" rule and
// "datetime"/"timestamp" must precede "date".
const RULES: &[(Matcher, ColumnType)] = &[
    (Matcher::Exact("tinyint(1)"), ColumnType::Boolean),
    (Matcher::Contains(&["int"]), ColumnType::Integer),
    (
        Matcher::Contains(&["float", "double", "decimal"]),
        ColumnType::Float,
    ),
    (Matcher::Contains(&["char", "text"]), ColumnType::String),
    (Matcher::Contains(&["enum"]), ColumnType::Enum),
    (
        Matcher::Contains(&["datetime", "timestamp"]),
        ColumnType::Datetime,
    ),
    (Matcher::Contains(&["date"]), ColumnType::Date),
    (Matcher::Contains(&["json"]), ColumnType::Json),
];

// A parenthesized argument list, quoted literals may contain parentheses
static ARGUMENT_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((?:'(?:[^']|'')*'|[^')])*\)").unwrap());

static ENUM_ARGUMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*enum\s*\((.*)\)").unwrap());

static QUOTED_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"'((?:[^']|'')*)'").unwrap());

/// Strip argument lists so that only type names and modifiers remain
///
/// `enum('print')` becomes `enum`, `decimal(10,2) unsigned` becomes
/// `decimal unsigned`.
fn base_descriptor(descriptor: &str) -> String {
    ARGUMENT_LIST.replace_all(descriptor, "").into_owned()
}

impl ColumnType {
    /// Classify a vendor type descriptor, ignoring enum values and modifiers
    pub fn from_raw(raw: &str) -> Result<Self, UnsupportedTypeError> {
        let descriptor = raw.trim().to_ascii_lowercase();
        let base = base_descriptor(&descriptor);
        RULES
            .iter()
            .find(|(matcher, _)| matcher.matches(&descriptor, &base))
            .map(|(_, column_type)| *column_type)
            .ok_or_else(|| UnsupportedTypeError::new(raw))
    }
}

/// Classify a vendor type descriptor
///
/// Resolves the semantic type, extracts the enum literal list for enum
/// types and detects the `unsigned` modifier. Parenthesized argument lists
/// are ignored when matching, so `enum('print')` is an enum, not an integer.
pub fn classify(raw: &str) -> Result<ClassifiedType, UnsupportedTypeError> {
    let column_type = ColumnType::from_raw(raw)?;
    let descriptor = raw.trim();
    let base = base_descriptor(&descriptor.to_ascii_lowercase());

    let enum_values = if column_type == ColumnType::Enum {
        let values = parse_enum_values(descriptor);
        if values.is_empty() {
            return Err(UnsupportedTypeError::new(raw));
        }
        values
    } else {
        Vec::new()
    };

    Ok(ClassifiedType {
        column_type,
        enum_values,
        unsigned: base.contains("unsigned"),
    })
}

/// Extract the literals of an `enum(...)` descriptor in declaration order
///
/// Quotes are stripped and doubled quotes unescaped. Duplicates are kept.
/// Returns an empty list when the descriptor is not an enum declaration.
pub fn parse_enum_values(descriptor: &str) -> Vec<String> {
    let lowered = descriptor.to_ascii_lowercase();
    let Some(arguments) = ENUM_ARGUMENTS.captures(&lowered).and_then(|c| c.get(1)) else {
        return Vec::new();
    };

    // Offsets are shared because ASCII lowercasing keeps byte positions
    let arguments = &descriptor[arguments.range()];
    QUOTED_LITERAL
        .captures_iter(arguments)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().replace("''", "'"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert_eq!(ColumnType::from_raw("datetime").unwrap(), ColumnType::Datetime);
        assert_eq!(ColumnType::from_raw("date").unwrap(), ColumnType::Date);
        assert_eq!(ColumnType::from_raw("timestamp").unwrap(), ColumnType::Datetime);
        assert_eq!(ColumnType::from_raw("tinyint(1)").unwrap(), ColumnType::Boolean);
        assert_eq!(ColumnType::from_raw("tinyint(2)").unwrap(), ColumnType::Integer);
    }

    #[test]
    fn test_common_mysql_types() {
        let cases = [
            ("int(11)", ColumnType::Integer),
            ("bigint(20) unsigned", ColumnType::Integer),
            ("smallint", ColumnType::Integer),
            ("decimal(10,2)", ColumnType::Float),
            ("double", ColumnType::Float),
            ("float(7,4)", ColumnType::Float),
            ("varchar(255)", ColumnType::String),
            ("char(36)", ColumnType::String),
            ("longtext", ColumnType::String),
            ("datetime(6)", ColumnType::Datetime),
            ("timestamp(3)", ColumnType::Datetime),
            ("json", ColumnType::Json),
        ];
        for (raw, expected) in cases {
            assert_eq!(ColumnType::from_raw(raw).unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(ColumnType::from_raw("VARCHAR").unwrap(), ColumnType::String);
        assert_eq!(ColumnType::from_raw("TINYINT(1)").unwrap(), ColumnType::Boolean);
    }

    #[test]
    fn test_unsupported_keeps_raw_input() {
        let err = ColumnType::from_raw("Geometry").unwrap_err();
        assert_eq!(err.raw, "Geometry");
        assert_eq!(err.to_string(), "unsupported type: Geometry");
        assert!(classify("blob").is_err());
    }

    #[test]
    fn test_enum_literals_do_not_affect_type() {
        let classified = classify("enum('print','paint')").unwrap();
        assert_eq!(classified.column_type, ColumnType::Enum);
        assert_eq!(classified.enum_values, vec!["print", "paint"]);

        let classified = classify("enum('unsigned','signed')").unwrap();
        assert!(!classified.unsigned);
    }

    #[test]
    fn test_enum_extraction() {
        let classified = classify("enum('a','b','c')").unwrap();
        assert_eq!(classified.column_type, ColumnType::Enum);
        assert_eq!(classified.enum_values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_enum_extraction_quoting() {
        assert_eq!(parse_enum_values("enum('a,b','c')"), vec!["a,b", "c"]);
        assert_eq!(parse_enum_values("enum('it''s','x)')"), vec!["it's", "x)"]);
        assert_eq!(parse_enum_values("enum('x','x')"), vec!["x", "x"]);
        assert_eq!(parse_enum_values("ENUM('Low', 'High')"), vec!["Low", "High"]);
        assert!(parse_enum_values("varchar(10)").is_empty());
    }

    #[test]
    fn test_enum_without_values_is_rejected() {
        let err = classify("enum()").unwrap_err();
        assert_eq!(err.raw, "enum()");
    }

    #[test]
    fn test_unsigned() {
        let classified = classify("int(11) unsigned").unwrap();
        assert_eq!(classified.column_type, ColumnType::Integer);
        assert!(classified.unsigned);

        let classified = classify("int(11)").unwrap();
        assert!(!classified.unsigned);
        assert!(classified.enum_values.is_empty());
    }
}
