use crate::convert::convert;
use crate::error::{ConversionError, PreconditionViolation};
use crate::kind::{NodeKind, ValueType};
use crate::visitor::{Filtered, Visitor};
use chrono::NaiveDateTime;
use formula_symbols::{
    BinaryOperator, DataValue, NamedMethod, NamedValue, ProgramVariable, ReportingRateType, Tag,
    UnaryOperator,
};
use std::mem;
use tracing::{debug, trace};

/// The converted value of a node. There is one variant per [`ValueType`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Text(String),
    Argument(i32),
    Method(NamedMethod),
    DataValue(DataValue),
    UnaryOperator(UnaryOperator),
    BinaryOperator(BinaryOperator),
    PlainText(String),
    Boolean(bool),
    Number(f64),
    Integer(i32),
    Date(NaiveDateTime),
    /// Constants carry no value of their own.
    Constant,
    ReportingRateType(ReportingRateType),
    ProgramVariable(ProgramVariable),
    NamedValue(NamedValue),
    Tag(Tag),
}

impl NodeValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            NodeValue::Text(_) => ValueType::Text,
            NodeValue::Argument(_) => ValueType::Argument,
            NodeValue::Method(_) => ValueType::Method,
            NodeValue::DataValue(_) => ValueType::DataValue,
            NodeValue::UnaryOperator(_) => ValueType::UnaryOperator,
            NodeValue::BinaryOperator(_) => ValueType::BinaryOperator,
            NodeValue::PlainText(_) => ValueType::PlainText,
            NodeValue::Boolean(_) => ValueType::Boolean,
            NodeValue::Number(_) => ValueType::Number,
            NodeValue::Integer(_) => ValueType::Integer,
            NodeValue::Date(_) => ValueType::Date,
            NodeValue::Constant => ValueType::Constant,
            NodeValue::ReportingRateType(_) => ValueType::ReportingRateType,
            NodeValue::ProgramVariable(_) => ValueType::ProgramVariable,
            NodeValue::NamedValue(_) => ValueType::NamedValue,
            NodeValue::Tag(_) => ValueType::Tag,
        }
    }
}

/// Types that can be borrowed out of a [`NodeValue`], see [`Node::value_as`].
pub trait FromNodeValue {
    fn from_node_value(value: &NodeValue) -> Option<&Self>;
}

/// Implements [`FromNodeValue`] for a type held by one or more `NodeValue` variants.
macro_rules! from_node_value {
    ($ty: ty => $($variant: ident),+) => {
        impl FromNodeValue for $ty {
            fn from_node_value(value: &NodeValue) -> Option<&Self> {
                match value {
                    $(NodeValue::$variant(inner) => Some(inner),)+
                    _ => None,
                }
            }
        }
    };
}

from_node_value!(String => Text, PlainText);
from_node_value!(i32 => Argument, Integer);
from_node_value!(f64 => Number);
from_node_value!(bool => Boolean);
from_node_value!(NaiveDateTime => Date);
from_node_value!(NamedMethod => Method);
from_node_value!(DataValue => DataValue);
from_node_value!(UnaryOperator => UnaryOperator);
from_node_value!(BinaryOperator => BinaryOperator);
from_node_value!(ReportingRateType => ReportingRateType);
from_node_value!(ProgramVariable => ProgramVariable);
from_node_value!(NamedValue => NamedValue);
from_node_value!(Tag => Tag);

impl FromNodeValue for () {
    fn from_node_value(value: &NodeValue) -> Option<&Self> {
        match value {
            NodeValue::Constant => Some(&()),
            _ => None,
        }
    }
}

/// A node of the expression tree.
///
/// The raw text and converted value are fixed at construction. Composite nodes exclusively own an
/// ordered sequence of children; leaves have none.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    raw_value: String,
    value: NodeValue,
    /// `None` for leaves.
    children: Option<Vec<Node>>,
}

/// Generates one named constructor per [`ValueType`].
macro_rules! constructors {
    ($($name: ident => $value_type: ident),+ $(,)?) => {
        $(
            #[doc = concat!("Creates a node converting `raw_value` as [`ValueType::", stringify!($value_type), "`].")]
            pub fn $name(kind: NodeKind, raw_value: impl Into<String>) -> Result<Self, ConversionError> {
                Self::new(ValueType::$value_type, kind, raw_value)
            }
        )+
    };
}

impl Node {
    /// Creates a node, converting `raw_value` according to `value_type`.
    /// The node is a composite if the value type is composite and a leaf otherwise.
    pub fn new(
        value_type: ValueType,
        kind: NodeKind,
        raw_value: impl Into<String>,
    ) -> Result<Self, ConversionError> {
        let raw_value = raw_value.into();
        let value = convert(value_type, &raw_value).map_err(|err| {
            debug!(%kind, raw_value = %raw_value, error = %err, "literal conversion failed");
            err
        })?;
        let children = if value_type.is_composite() {
            Some(Vec::new())
        } else {
            None
        };
        Ok(Self {
            kind,
            raw_value,
            value,
            children,
        })
    }

    /// Creates a node with the value type bound to `kind` (see [`NodeKind::value_type`]).
    pub fn of(kind: NodeKind, raw_value: impl Into<String>) -> Result<Self, ConversionError> {
        Self::new(kind.value_type(), kind, raw_value)
    }

    constructors! {
        text => Text,
        argument => Argument,
        method => Method,
        data_value => DataValue,
        unary_operator => UnaryOperator,
        binary_operator => BinaryOperator,
        plain_text => PlainText,
        boolean => Boolean,
        number => Number,
        integer => Integer,
        date => Date,
        constant => Constant,
        reporting_rate_type => ReportingRateType,
        program_variable => ProgramVariable,
        named_value => NamedValue,
        tag => Tag,
    }

    /// Grammar tag of this node.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The original lexical text.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Value converted from the raw text.
    pub fn value(&self) -> &NodeValue {
        &self.value
    }

    /// Borrows the converted value as `T`, or `None` if the node holds another type.
    pub fn value_as<T: FromNodeValue>(&self) -> Option<&T> {
        T::from_node_value(&self.value)
    }

    /// Value type this node was built with.
    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }

    /// Returns `true` if this node can hold children.
    pub fn is_composite(&self) -> bool {
        self.children.is_some()
    }

    /// Returns `true` if this node cannot hold children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Composite operations. On a leaf these behave as on a composite without children.
impl Node {
    /// Number of direct children.
    pub fn size(&self) -> usize {
        self.children().len()
    }

    /// Direct children in syntactic order.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Like [`Node::child`] but returns the violation instead of panicking.
    pub fn try_child(&self, index: usize) -> Result<&Node, PreconditionViolation> {
        self.children()
            .get(index)
            .ok_or(PreconditionViolation::ChildIndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Returns the child at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.size()`.
    pub fn child(&self, index: usize) -> &Node {
        match self.try_child(index) {
            Ok(child) => child,
            Err(err) => violated(err),
        }
    }

    /// Returns the `n`-th (zero-based) child whose kind is `kind`, scanning in child order.
    pub fn try_child_of_kind(&self, n: usize, kind: NodeKind) -> Result<&Node, PreconditionViolation> {
        let mut of_kind = self.children().iter().filter(|child| child.kind == kind);
        of_kind
            .nth(n)
            .ok_or_else(|| PreconditionViolation::NotEnoughChildrenOfKind {
                n,
                kind,
                found: self.children().iter().filter(|child| child.kind == kind).count(),
            })
    }

    /// Like [`Node::try_child_of_kind`].
    ///
    /// # Panics
    /// Panics if fewer than `n + 1` children have the requested kind.
    pub fn child_of_kind(&self, n: usize, kind: NodeKind) -> &Node {
        match self.try_child_of_kind(n, kind) {
            Ok(child) => child,
            Err(err) => violated(err),
        }
    }

    /// Like [`Node::add_child`] but returns the violation instead of panicking.
    pub fn try_add_child(&mut self, child: Node) -> Result<(), PreconditionViolation> {
        match self.children.as_mut() {
            Some(children) => {
                children.push(child);
                Ok(())
            }
            None => Err(PreconditionViolation::NotComposite { kind: self.kind }),
        }
    }

    /// Appends `child` to the end of the child sequence.
    ///
    /// # Panics
    /// Panics if `self` is a leaf.
    pub fn add_child(&mut self, child: Node) {
        if let Err(err) = self.try_add_child(child) {
            violated(err)
        }
    }

    /// Builder-style [`Node::add_child`].
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Replaces the child sequence with `rewriter(children)`, then transforms each resulting
    /// child the same way. Parents are rewritten before their children. Leaves are left untouched.
    pub fn transform<F>(&mut self, mut rewriter: F)
    where
        F: FnMut(Vec<Node>) -> Vec<Node>,
    {
        self.transform_with(&mut rewriter);
    }

    fn transform_with<F>(&mut self, rewriter: &mut F)
    where
        F: FnMut(Vec<Node>) -> Vec<Node>,
    {
        if let Some(children) = self.children.as_mut() {
            let before = children.len();
            *children = rewriter(mem::take(children));
            trace!(kind = %self.kind, before, after = children.len(), "rewrote child sequence");

            for child in children.iter_mut() {
                child.transform_with(rewriter);
            }
        }
    }
}

/// Traversal.
impl Node {
    /// Pre-order walk calling `visitor` on every node for which `filter` holds.
    /// Descendants are walked whether or not their ancestors passed the filter.
    pub fn visit<'ast, V, P>(&'ast self, visitor: V, filter: P)
    where
        V: FnMut(&'ast Node),
        P: FnMut(&'ast Node) -> bool,
    {
        Filtered::new(visitor, filter).visit_node(self);
    }

    /// Pre-order walk calling `visitor` on every node.
    pub fn visit_all<'ast, V>(&'ast self, visitor: V)
    where
        V: FnMut(&'ast Node),
    {
        self.visit(visitor, |_| true);
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }
}

fn violated(err: PreconditionViolation) -> ! {
    panic!("precondition violated: {}", err)
}
