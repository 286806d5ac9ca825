//! Indented tree dump of a node and its subtree.

use crate::node::Node;
use std::fmt;

/// Spaces of indentation per nesting level.
const INDENT: usize = 2;

impl Node {
    /// Renders the subtree one node per line: `ValueType[KIND raw]`, indented by depth.
    pub fn to_debug_string(&self) -> String {
        self.to_string()
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}{}[{} {}]",
            "",
            self.value_type().name(),
            self.kind(),
            SingleLine(self.raw_value()),
            indent = depth * INDENT
        )?;
        for child in self.children() {
            child.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

/// Escapes line breaks so that every node stays on its own line.
struct SingleLine<'a>(&'a str);

impl fmt::Display for SingleLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                c => fmt::Write::write_char(f, c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::NodeKind;
    use crate::node::Node;
    use insta::assert_snapshot;

    fn node(kind: NodeKind, raw: &str) -> Node {
        Node::of(kind, raw).unwrap()
    }

    #[test]
    fn test_leaf() {
        assert_snapshot!(node(NodeKind::Number, "2.5").to_debug_string().trim_end(), @"Number[NUMBER 2.5]");
    }

    #[test]
    fn test_nested() {
        // #{uid}.periodOffset(-1) * (2 + x)
        let tree = node(NodeKind::BinaryOperator, "*")
            .with_child(
                node(NodeKind::Method, "periodOffset")
                    .with_child(
                        node(NodeKind::DataItem, "#")
                            .with_child(node(NodeKind::Uid, "fbfJHSPpUQD")),
                    )
                    .with_child(node(NodeKind::Argument, "0").with_child(node(NodeKind::Integer, "-1"))),
            )
            .with_child(
                node(NodeKind::Par, "(").with_child(
                    node(NodeKind::BinaryOperator, "+")
                        .with_child(node(NodeKind::Number, "2"))
                        .with_child(node(NodeKind::Identifier, "x")),
                ),
            );

        assert_snapshot!(tree.to_debug_string().trim_end(), @r###"
        BinaryOperator[BINARY_OPERATOR *]
          Method[METHOD periodOffset]
            DataValue[DATA_ITEM #]
              PlainText[UID fbfJHSPpUQD]
            Argument[ARGUMENT 0]
              Integer[INTEGER -1]
          Text[PAR (]
            BinaryOperator[BINARY_OPERATOR +]
              Number[NUMBER 2]
              PlainText[IDENTIFIER x]
        "###);
    }

    #[test]
    fn test_line_breaks_are_escaped() {
        let text = node(NodeKind::String, "'a\nb'");
        assert_eq!(text.to_debug_string(), "PlainText[STRING 'a\\nb']\n");
    }
}
