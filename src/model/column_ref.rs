//! References to a column by 1-based position or by name

use std::fmt;

/// A column reference, resolved against a table's column list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnRef {
    /// 1-based position
    Index(usize),
    /// Column name
    Name(String),
}

impl ColumnRef {
    /// Resolve against an ordered list of column names, returning the canonical name
    pub fn resolve<'a>(&self, names: &[&'a str]) -> Option<&'a str> {
        match self {
            ColumnRef::Index(0) => None,
            ColumnRef::Index(i) => names.get(i - 1).copied(),
            ColumnRef::Name(name) => names.iter().copied().find(|n| *n == name.as_str()),
        }
    }

    /// Read user-typed text as a reference against the given columns.
    ///
    /// Digits are a position when that position exists; otherwise a column
    /// with that exact name wins, so numeric headers such as `2024` stay
    /// addressable by name.
    pub fn parse_for(text: &str, names: &[&str]) -> Self {
        match text.parse::<usize>() {
            Ok(i) if (1..=names.len()).contains(&i) => ColumnRef::Index(i),
            Ok(i) if !names.contains(&text) => ColumnRef::Index(i),
            _ => ColumnRef::Name(text.to_string()),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::Index(i) => write!(f, "#{}", i),
            ColumnRef::Name(name) => write!(f, "'{}'", name),
        }
    }
}

impl From<usize> for ColumnRef {
    fn from(i: usize) -> Self {
        ColumnRef::Index(i)
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::Name(name.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        ColumnRef::Name(name)
    }
}

impl From<&String> for ColumnRef {
    fn from(name: &String) -> Self {
        ColumnRef::Name(name.clone())
    }
}

impl From<&ColumnRef> for ColumnRef {
    fn from(column: &ColumnRef) -> Self {
        column.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let names = ["ctry", "gdp"];

        assert_eq!(ColumnRef::Index(1).resolve(&names), Some("ctry"));
        assert_eq!(ColumnRef::Index(2).resolve(&names), Some("gdp"));
        assert_eq!(ColumnRef::Index(0).resolve(&names), None);
        assert_eq!(ColumnRef::Index(3).resolve(&names), None);
        assert_eq!(ColumnRef::from("gdp").resolve(&names), Some("gdp"));
        assert_eq!(ColumnRef::from("pop").resolve(&names), None);
    }

    #[test]
    fn test_parse_for() {
        let names = ["ctry", "gdp"];
        assert_eq!(ColumnRef::parse_for("2", &names), ColumnRef::Index(2));
        assert_eq!(ColumnRef::parse_for("gdp", &names), ColumnRef::from("gdp"));
        assert_eq!(ColumnRef::parse_for("0", &names), ColumnRef::Index(0));
        assert_eq!(ColumnRef::parse_for("7", &names), ColumnRef::Index(7));
    }

    #[test]
    fn test_parse_for_numeric_headers() {
        let names = ["1999", "2024"];

        assert_eq!(ColumnRef::parse_for("2024", &names), ColumnRef::from("2024"));
        assert_eq!(ColumnRef::parse_for("2024", &names).resolve(&names), Some("2024"));
        assert_eq!(ColumnRef::parse_for("1", &names).resolve(&names), Some("1999"));
    }
}
