//! Documentation content for the qf CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Groups,
    Conversion,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "groups" | "group" | "combinators" => Some(Self::Groups),
            "conversion" | "types" | "infer" => Some(Self::Conversion),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"QUERY FILTER DOCUMENTATION

qf translates compact query strings into filter documents for document
databases. A query is a list of comparisons, optionally grouped in double
quotes and joined with AND (,) or OR (|).

DOCUMENTATION CATEGORIES

  syntax            Fields, values, and allowed characters
  operators         Equality and range comparisons
  groups            Combining comparisons with AND, OR, and quoted groups
  conversion        Raw string values and type inference

QUICK REFERENCE

  x:y               x equals y
  x>y               x greater than or equal to y
  x<y               x less than or equal to y
  a:1,b:2           AND
  a:1|b:2           OR
  "a>1,a<5" | b:2   Group
  a:1 b:2           Implicit AND (keys merged)

Run 'qf doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Groups) => Ok(GROUPS_DOC),
        Some(DocCategory::Conversion) => Ok(CONVERSION_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Comparisons

COMPARISON
  field operator value
    A single condition on one field. Whitespace between the parts is ignored.

    Example:
      Query:  status:active
      Output: {"status": "active"}

FIELDS
    Letters, digits, underscores and hyphens.

    Examples:
      created_at    x-ray    field2

VALUES
    Letters, digits, and the characters _ - / : . [ ] ( )
    Values cannot contain whitespace or quotes.

    Examples:
      42    2024-01-01T10:00    /api/v1    [1]

    Constraints:
      - A value ends at the first character outside the set above
      - Operator characters directly after the field form the operator;
        a ':' after the first value character belongs to the value
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Comparison Operators

EQUAL
  x:y
    Output: {"x": "y"}

GREATER THAN OR EQUAL
  x>y
    Output: {"x": {"$gte": "y"}}

LESS THAN OR EQUAL
  x<y
    Output: {"x": {"$lte": "y"}}

    Constraints:
      - Operators are a single character; 'x>:y' or 'x<>y' are rejected
"#;

const GROUPS_DOC: &str = r#"GROUPS - Combining Comparisons

AND
  a:1,b:2
    Output: {"$and": [{"a": "1"}, {"b": "2"}]}

OR
  a:1|b:2
    Output: {"$or": [{"a": "1"}, {"b": "2"}]}

IMPLICIT AND
  a:1 b:2
    Without separators the documents are merged key by key.
    Output: {"a": "1", "b": "2"}

    A later comparison on the same key replaces the earlier one:
      Query:  a:1 a:2
      Output: {"a": "2"}

QUOTED GROUPS
  "a>1,a<5" | "b:x|b:y"
    Each group holds its own list; the top level combines the groups.
    Output: {"$or": [{"$and": [...]}, {"$or": [...]}]}

    Constraints:
      - Groups do not nest
      - A list takes a single combinator: when one list mixes ',' and '|',
        the last separator decides for the whole list
"#;

const CONVERSION_DOC: &str = r#"CONVERSION - Value Types

RAW VALUES
    By default every value is emitted as a string.

    Example:
      Query:  age>18
      Output: {"age": {"$gte": "18"}}

TYPE INFERENCE (--infer)
    42, -7            integer
    1.5               float
    true, True        boolean
    false, False      boolean
    null, None        null
    anything else     string

    Example:
      Query:  qf check --infer 'age>18'
      Output: {"age": {"$gte": 18}}
"#;
