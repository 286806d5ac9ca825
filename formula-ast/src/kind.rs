//! Grammar tags and the value types they bind to.

use std::fmt;

/// The syntactic role of a node, as decided by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A parenthesized sub-expression.
    Par,
    /// A positional argument of a function or method call.
    Argument,
    Function,
    Method,
    /// A data item reference such as `#{uid}`.
    DataItem,
    Variable,
    UnaryOperator,
    BinaryOperator,
    Boolean,
    Uid,
    Identifier,
    String,
    Number,
    Integer,
    Date,
    Null,
    Constant,
    NamedValue,
    ReportingRateType,
    ProgramVariable,
    Tag,
}

impl NodeKind {
    /// The tag in `SCREAMING_SNAKE_CASE`.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Par => "PAR",
            NodeKind::Argument => "ARGUMENT",
            NodeKind::Function => "FUNCTION",
            NodeKind::Method => "METHOD",
            NodeKind::DataItem => "DATA_ITEM",
            NodeKind::Variable => "VARIABLE",
            NodeKind::UnaryOperator => "UNARY_OPERATOR",
            NodeKind::BinaryOperator => "BINARY_OPERATOR",
            NodeKind::Boolean => "BOOLEAN",
            NodeKind::Uid => "UID",
            NodeKind::Identifier => "IDENTIFIER",
            NodeKind::String => "STRING",
            NodeKind::Number => "NUMBER",
            NodeKind::Integer => "INTEGER",
            NodeKind::Date => "DATE",
            NodeKind::Null => "NULL",
            NodeKind::Constant => "CONSTANT",
            NodeKind::NamedValue => "NAMED_VALUE",
            NodeKind::ReportingRateType => "REPORTING_RATE_TYPE",
            NodeKind::ProgramVariable => "PROGRAM_VARIABLE",
            NodeKind::Tag => "TAG",
        }
    }

    /// The value type a node of this kind is built with unless the parser asks for another one.
    pub fn value_type(self) -> ValueType {
        match self {
            NodeKind::Par | NodeKind::Function | NodeKind::Variable => ValueType::Text,
            NodeKind::Argument => ValueType::Argument,
            NodeKind::Method => ValueType::Method,
            NodeKind::DataItem => ValueType::DataValue,
            NodeKind::UnaryOperator => ValueType::UnaryOperator,
            NodeKind::BinaryOperator => ValueType::BinaryOperator,
            NodeKind::Boolean => ValueType::Boolean,
            NodeKind::Uid | NodeKind::Identifier | NodeKind::String => ValueType::PlainText,
            NodeKind::Number => ValueType::Number,
            NodeKind::Integer => ValueType::Integer,
            NodeKind::Date => ValueType::Date,
            NodeKind::Null | NodeKind::Constant => ValueType::Constant,
            NodeKind::NamedValue => ValueType::NamedValue,
            NodeKind::ReportingRateType => ValueType::ReportingRateType,
            NodeKind::ProgramVariable => ValueType::ProgramVariable,
            NodeKind::Tag => ValueType::Tag,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the raw text of a node is converted, and whether the node can hold children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Composite; text kept verbatim.
    Text,
    /// Composite; a 32-bit argument index.
    Argument,
    /// Composite; a named method.
    Method,
    /// Composite; a data value symbol.
    DataValue,
    /// Composite; a unary operator.
    UnaryOperator,
    /// Composite; a binary operator.
    BinaryOperator,
    /// Text kept verbatim.
    PlainText,
    /// `true` or `false`.
    Boolean,
    /// 64-bit floating point.
    Number,
    /// 32-bit signed integer.
    Integer,
    /// Local date-time without zone.
    Date,
    /// Carries no value.
    Constant,
    /// A reporting rate type.
    ReportingRateType,
    /// A program variable.
    ProgramVariable,
    /// A named constant value.
    NamedValue,
    /// A tag name.
    Tag,
}

impl ValueType {
    /// Composite nodes own an ordered sequence of children; all others are leaves.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            ValueType::Text
                | ValueType::Argument
                | ValueType::Method
                | ValueType::DataValue
                | ValueType::UnaryOperator
                | ValueType::BinaryOperator
        )
    }

    /// Name used in the tree dump.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Text => "Text",
            ValueType::Argument => "Argument",
            ValueType::Method => "Method",
            ValueType::DataValue => "DataValue",
            ValueType::UnaryOperator => "UnaryOperator",
            ValueType::BinaryOperator => "BinaryOperator",
            ValueType::PlainText => "PlainText",
            ValueType::Boolean => "Boolean",
            ValueType::Number => "Number",
            ValueType::Integer => "Integer",
            ValueType::Date => "Date",
            ValueType::Constant => "Constant",
            ValueType::ReportingRateType => "ReportingRateType",
            ValueType::ProgramVariable => "ProgramVariable",
            ValueType::NamedValue => "NamedValue",
            ValueType::Tag => "Tag",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_bindings() {
        assert!(NodeKind::BinaryOperator.value_type().is_composite());
        assert!(NodeKind::Function.value_type().is_composite());
        assert!(NodeKind::DataItem.value_type().is_composite());
        assert!(!NodeKind::Number.value_type().is_composite());
        assert!(!NodeKind::Null.value_type().is_composite());
        assert!(!NodeKind::Tag.value_type().is_composite());
    }

    #[test]
    fn test_name() {
        assert_eq!(NodeKind::ReportingRateType.to_string(), "REPORTING_RATE_TYPE");
        assert_eq!(NodeKind::DataItem.name(), "DATA_ITEM");
    }
}
