//! Visitor pattern for expression nodes.

use crate::node::Node;

/// Read-only traversal. Override [`Visitor::visit_node`] and call [`walk_node`] to descend.
pub trait Visitor<'ast>: Sized {
    fn visit_node(&mut self, node: &'ast Node) {
        walk_node(self, node);
    }
}

/// Visits every child of `node` in order.
pub fn walk_node<'ast>(visitor: &mut impl Visitor<'ast>, node: &'ast Node) {
    for child in node.children() {
        visitor.visit_node(child);
    }
}

/// Pre-order visitor that only reports the nodes accepted by a filter.
pub(crate) struct Filtered<V, P> {
    visitor: V,
    filter: P,
}

impl<V, P> Filtered<V, P> {
    pub(crate) fn new(visitor: V, filter: P) -> Self {
        Self { visitor, filter }
    }
}

impl<'ast, V, P> Visitor<'ast> for Filtered<V, P>
where
    V: FnMut(&'ast Node),
    P: FnMut(&'ast Node) -> bool,
{
    fn visit_node(&mut self, node: &'ast Node) {
        if (self.filter)(node) {
            (self.visitor)(node);
        }
        walk_node(self, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::NodeKind;
    use pretty_assertions::assert_eq;

    /// Collects the depth of every identifier.
    struct IdentifierDepths {
        depth: usize,
        found: Vec<(String, usize)>,
    }

    impl<'ast> Visitor<'ast> for IdentifierDepths {
        fn visit_node(&mut self, node: &'ast Node) {
            if node.kind() == NodeKind::Identifier {
                self.found.push((node.raw_value().to_string(), self.depth));
            }
            self.depth += 1;
            walk_node(self, node);
            self.depth -= 1;
        }
    }

    #[test]
    fn test_custom_visitor() {
        let tree = Node::of(NodeKind::BinaryOperator, "+")
            .unwrap()
            .with_child(Node::of(NodeKind::Identifier, "a").unwrap())
            .with_child(
                Node::of(NodeKind::Par, "(")
                    .unwrap()
                    .with_child(Node::of(NodeKind::Identifier, "b").unwrap()),
            );

        let mut visitor = IdentifierDepths {
            depth: 0,
            found: Vec::new(),
        };
        visitor.visit_node(&tree);
        assert_eq!(
            visitor.found,
            vec![("a".to_string(), 1), ("b".to_string(), 2)]
        );
    }
}
