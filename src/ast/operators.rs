/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Equal (`:`)
    Eq,
    /// Greater than or equal (`>`)
    Gte,
    /// Less than or equal (`<`)
    Lte,
}

impl OpKind {
    /// Map an operator token to its comparison, if it names one.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ":" => Some(OpKind::Eq),
            ">" => Some(OpKind::Gte),
            "<" => Some(OpKind::Lte),
            _ => None,
        }
    }

    /// Key used in the output document.
    ///
    /// Equality has no key: `{field: value}` is emitted directly.
    pub fn document_key(self) -> Option<&'static str> {
        match self {
            OpKind::Eq => None,
            OpKind::Gte => Some("$gte"),
            OpKind::Lte => Some("$lte"),
        }
    }
}

/// Boolean combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logic {
    /// Logical AND (`,`)
    And,
    /// Logical OR (`|`)
    Or,
}

impl Logic {
    pub fn separator(self) -> char {
        match self {
            Logic::And => ',',
            Logic::Or => '|',
        }
    }

    pub fn document_key(self) -> &'static str {
        match self {
            Logic::And => "$and",
            Logic::Or => "$or",
        }
    }
}
