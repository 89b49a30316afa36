//! Builds the filter tree from the concrete syntax tree.
//!
//! This pass is pure: it consumes a [`SyntaxTree`] and returns a [`Query`]
//! with no other state involved.

use crate::ast::{Combinator, Comparison, Entry, Expression, Group, Logic, Node, Query, SyntaxTree, Term};

pub fn build(tree: SyntaxTree) -> Query {
    let items = tree
        .entries
        .into_iter()
        .map(|Entry { term, separator }| (build_term(term), separator));

    Query {
        nodes: combine(items),
    }
}

pub fn build_expression(comparison: Comparison) -> Expression {
    Expression {
        op: comparison.operator,
        field: comparison.field,
        raw_value: comparison.value,
    }
}

fn build_term(term: Term) -> Vec<Node> {
    match term {
        Term::Comparison(comparison) => vec![build_expression(comparison).into()],
        Term::Group(group) => build_group(group),
    }
}

/// A group without separators contributes its expressions directly to the
/// enclosing list.
pub fn build_group(group: Group) -> Vec<Node> {
    let items = group.entries.into_iter().map(|Entry { term, separator }| {
        (vec![Node::from(build_expression(term))], separator)
    });
    combine(items)
}

/// Wrap a list of terms in a combinator when any separator was written.
///
/// Without separators the nodes pass through unchanged and are later merged
/// by key union. With separators, the last one written decides the logic of
/// the whole list, so `a:1,b:2|c:3` is an OR of all three.
pub fn combine<I>(items: I) -> Vec<Node>
where
    I: IntoIterator<Item = (Vec<Node>, Option<Logic>)>,
{
    let mut children = vec![];
    let mut logic = None;

    for (nodes, separator) in items {
        children.extend(nodes);
        if separator.is_some() {
            logic = separator;
        }
    }

    match logic {
        Some(logic) => vec![Node::Combinator(Combinator { logic, children })],
        None => children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::OpKind;

    fn leaf(field: &str) -> Vec<Node> {
        vec![Expression::new(OpKind::Eq, field, "1").into()]
    }

    #[test]
    fn test_no_separator_passes_through() {
        let nodes = combine(vec![(leaf("a"), None), (leaf("b"), None)]);
        assert_eq!(nodes.len(), 2);
        assert!(nodes.iter().all(|node| matches!(node, Node::Expression(_))));
    }

    #[test]
    fn test_last_separator_wins() {
        let nodes = combine(vec![
            (leaf("a"), Some(Logic::And)),
            (leaf("b"), Some(Logic::Or)),
            (leaf("c"), None),
        ]);
        match nodes.as_slice() {
            [Node::Combinator(Combinator { logic, children })] => {
                assert_eq!(*logic, Logic::Or);
                assert_eq!(children.len(), 3);
            }
            other => panic!("Expected a single combinator, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_separator_counts() {
        let nodes = combine(vec![(leaf("a"), Some(Logic::And))]);
        assert!(matches!(
            nodes.as_slice(),
            [Node::Combinator(Combinator { logic: Logic::And, children })] if children.len() == 1
        ));
    }
}
