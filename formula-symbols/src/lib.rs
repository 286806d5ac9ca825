//! Closed symbol vocabularies used by expression nodes.
//!
//! Every vocabulary is a `#[repr(u8)]` enum whose discriminants run from `0` in declaration order.
//! The declaration order is the order in which the valid spellings are reported to the user.

#[macro_use]
mod macros;
pub mod operator;
pub mod reference;

use num_traits::FromPrimitive;
use std::fmt;
use thiserror::Error;

pub use operator::{BinaryOperator, UnaryOperator};
pub use reference::{DataValue, NamedMethod, NamedValue, ProgramVariable, ReportingRateType, Tag};

/// A member of a closed vocabulary with a user-facing spelling.
pub trait Symbol: FromPrimitive + Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Name of the vocabulary, used in diagnostics.
    const TYPE_NAME: &'static str;

    /// The spelling that denotes this symbol in source text.
    fn spelling(self) -> &'static str;

    /// All members in declaration order.
    fn variants() -> Vec<Self> {
        (0..=u8::MAX).map_while(Self::from_u8).collect()
    }

    /// All valid spellings in declaration order.
    fn vocabulary() -> Vec<&'static str> {
        Self::variants().into_iter().map(Self::spelling).collect()
    }

    /// Exact, case-sensitive reverse lookup of a spelling.
    fn from_spelling(raw: &str) -> Option<Self> {
        (0..=u8::MAX)
            .map_while(Self::from_u8)
            .find(|symbol| symbol.spelling() == raw)
    }

    /// Like [`Symbol::from_spelling`] but the error lists every valid spelling.
    fn lookup(raw: &str) -> Result<Self, InvalidLiteral> {
        Self::from_spelling(raw).ok_or_else(|| InvalidLiteral::new::<Self>(raw))
    }
}

/// Raised when a raw string is not a member of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Not a valid option for type {type_name}: {raw}\navailable options are: [{}]",
    .options.join(", ")
)]
pub struct InvalidLiteral {
    pub type_name: &'static str,
    pub raw: String,
    /// Every valid spelling, in declaration order.
    pub options: Vec<&'static str>,
}

impl InvalidLiteral {
    pub fn new<S: Symbol>(raw: impl ToString) -> Self {
        Self {
            type_name: S::TYPE_NAME,
            raw: raw.to_string(),
            options: S::vocabulary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variants_follow_declaration_order() {
        assert_eq!(
            UnaryOperator::variants(),
            vec![UnaryOperator::Plus, UnaryOperator::Minus, UnaryOperator::Not]
        );
        assert_eq!(Tag::vocabulary(), vec!["deGroup", "coGroup", "ouGroup"]);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(BinaryOperator::lookup("<="), Ok(BinaryOperator::Le));
        assert_eq!(DataValue::lookup("OUG"), Ok(DataValue::OrgUnitGroup));
        assert_eq!(
            ReportingRateType::lookup("ACTUAL_REPORTS"),
            Ok(ReportingRateType::ActualReports)
        );
        assert_eq!(ProgramVariable::from_spelling("Event_Date"), None);
    }

    #[test]
    fn test_from_spelling_agrees_with_variants() {
        for symbol in ProgramVariable::variants() {
            assert_eq!(ProgramVariable::from_spelling(symbol.spelling()), Some(symbol));
        }
        assert_eq!(BinaryOperator::from_spelling("||"), Some(BinaryOperator::Or));
        assert_eq!(BinaryOperator::from_spelling(""), None);
    }

    #[test]
    fn test_invalid_literal_message() {
        let err = UnaryOperator::lookup("~").unwrap_err();
        assert_eq!(err.type_name, "UnaryOperator");
        assert_eq!(err.raw, "~");
        assert_eq!(err.options, vec!["+", "-", "!"]);
        assert_eq!(
            err.to_string(),
            "Not a valid option for type UnaryOperator: ~\navailable options are: [+, -, !]"
        );
    }

    #[test]
    fn test_display_uses_spelling() {
        assert_eq!(BinaryOperator::And.to_string(), "&&");
        assert_eq!(NamedMethod::PeriodOffset.to_string(), "periodOffset");
        assert_eq!(ProgramVariable::EventDate.to_string(), "event_date");
    }

    #[test]
    fn test_spellings_are_unique() {
        fn assert_unique<S: Symbol>() {
            let vocabulary = S::vocabulary();
            for (i, spelling) in vocabulary.iter().enumerate() {
                assert!(
                    !vocabulary[i + 1..].contains(spelling),
                    "{} spells `{}` twice",
                    S::TYPE_NAME,
                    spelling
                );
            }
        }
        assert_unique::<UnaryOperator>();
        assert_unique::<BinaryOperator>();
        assert_unique::<NamedMethod>();
        assert_unique::<DataValue>();
        assert_unique::<ReportingRateType>();
        assert_unique::<ProgramVariable>();
        assert_unique::<NamedValue>();
        assert_unique::<Tag>();
    }
}
