//! # Query Filter - Syntax and Filter Trees
//!
//! This module defines the two trees a query passes through on its way to a
//! filter document.
//!
//! ## Architecture Overview
//!
//! The module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[syntax]** - Concrete parse tree produced by the grammar
//! - **[operators]** - Comparison operators and AND/OR combinators
//! - **[nodes]** - Filter tree nodes (expressions and combinators)
//! - **[query]** - Complete query with its top-level nodes
//!
//! ## Quick Start
//!
//! ```text
//! "price>10,price<20" | "status:sale"
//! ```
//!
//! This query matches items priced between 10 and 20, or items on sale.
//!
//! ## Core Concepts
//!
//! ### Comparisons
//!
//! A comparison is a `field operator value` triple:
//!
//! - `x:y` - `x` equals `y`
//! - `x>y` - `x` is greater than or equal to `y`
//! - `x<y` - `x` is less than or equal to `y`
//!
//! ### Combining
//!
//! - **`,`** joins its neighbours with AND
//! - **`|`** joins its neighbours with OR
//! - No separator at all means implicit AND by key union
//!
//! A list takes a single combinator. When a flat list mixes `,` and `|`,
//! the last separator written decides for the whole list.
//!
//! ### Groups
//!
//! Double quotes delimit a group. A group holds its own flat list and acts
//! as one term of the top-level list. Groups do not nest.
//!
//! ## Examples
//!
//! ### Simple Filter
//!
//! ```text
//! status:active
//! ```
//!
//! ### Range
//!
//! ```text
//! "age>18,age<65"
//! ```
//!
//! ### Mixed AND/OR
//!
//! ```text
//! "x>1,x<5" | "y>10|y:None"
//! ```
pub mod nodes;
pub mod operators;
pub mod query;
pub mod syntax;
pub mod tokens;

pub use nodes::{Combinator, Expression, Node};
pub use operators::{Logic, OpKind};
pub use query::Query;
pub use syntax::{Comparison, Entry, Group, SyntaxTree, Term};
pub use tokens::Token;
