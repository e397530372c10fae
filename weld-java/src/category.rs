//! Closed classification of submitted code fragments.

use std::fmt;

/// Structural role of a submitted code fragment.
///
/// The set is closed: every fragment a generator produces falls into exactly
/// one of these five roles, and routing is an exhaustive match, so a fragment
/// can never be submitted under a role the composer does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// An import statement, without the trailing semicolon.
    Import,
    /// The class name for the generated unit.
    Class,
    /// A complete nested type declaration.
    NestedType,
    /// A complete method declaration with body.
    Method,
    /// An executable statement for the execution routine body.
    Statement,
}

impl Category {
    /// All categories, in the order their sections appear in the output.
    pub const ALL: [Category; 5] = [
        Category::Import,
        Category::Class,
        Category::NestedType,
        Category::Method,
        Category::Statement,
    ];

    /// Lowercase name, used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Import => "import",
            Category::Class => "class",
            Category::NestedType => "nested type",
            Category::Method => "method",
            Category::Statement => "statement",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_category_once() {
        assert_eq!(Category::ALL.len(), 5);
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Import.to_string(), "import");
        assert_eq!(Category::NestedType.to_string(), "nested type");
    }
}
