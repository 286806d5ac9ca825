//! Conversion of raw lexical text into typed node values.
//!
//! Free-form literals fail with the parser's own error wrapped in [`ConversionError::Failure`].
//! Closed vocabularies fail with [`ConversionError::InvalidLiteral`], which lists every valid
//! spelling. Method names are the exception: they are looked up in a closed set but fail like a
//! free-form literal.

use crate::error::{ConversionError, ParseFailure};
use crate::kind::ValueType;
use crate::node::NodeValue;
use chrono::{NaiveDateTime, Timelike};
use formula_symbols::{
    BinaryOperator, DataValue, NamedMethod, NamedValue, ProgramVariable, ReportingRateType,
    Symbol, Tag, UnaryOperator,
};

/// ISO-8601 local date-time; the fraction of a second is optional.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_TIME_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Most digits a fraction of a second may have.
const MAX_FRACTION_DIGITS: usize = 9;

pub(crate) fn convert(value_type: ValueType, raw: &str) -> Result<NodeValue, ConversionError> {
    let value = match value_type {
        ValueType::Text => NodeValue::Text(raw.to_string()),
        ValueType::PlainText => NodeValue::PlainText(raw.to_string()),
        ValueType::Argument => NodeValue::Argument(parse_integer(raw)?),
        ValueType::Integer => NodeValue::Integer(parse_integer(raw)?),
        ValueType::Number => NodeValue::Number(parse_number(raw)?),
        ValueType::Boolean => NodeValue::Boolean(parse_boolean(raw)?),
        ValueType::Date => NodeValue::Date(parse_date(raw)?),
        ValueType::Constant => NodeValue::Constant,
        ValueType::Method => NodeValue::Method(NamedMethod::from_spelling(raw).ok_or_else(|| {
            ConversionError::failure(
                raw,
                NamedMethod::TYPE_NAME,
                ParseFailure::UnknownName {
                    type_name: NamedMethod::TYPE_NAME,
                    raw: raw.to_string(),
                },
            )
        })?),
        ValueType::DataValue => NodeValue::DataValue(DataValue::lookup(raw)?),
        ValueType::UnaryOperator => NodeValue::UnaryOperator(UnaryOperator::lookup(raw)?),
        ValueType::BinaryOperator => NodeValue::BinaryOperator(BinaryOperator::lookup(raw)?),
        ValueType::ReportingRateType => {
            NodeValue::ReportingRateType(ReportingRateType::lookup(raw)?)
        }
        ValueType::ProgramVariable => NodeValue::ProgramVariable(ProgramVariable::lookup(raw)?),
        ValueType::NamedValue => NodeValue::NamedValue(NamedValue::lookup(raw)?),
        ValueType::Tag => NodeValue::Tag(Tag::lookup(raw)?),
    };
    Ok(value)
}

fn parse_integer(raw: &str) -> Result<i32, ConversionError> {
    raw.parse::<i32>()
        .map_err(|err| ConversionError::failure(raw, "integer", err))
}

fn parse_boolean(raw: &str) -> Result<bool, ConversionError> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConversionError::failure(raw, "boolean", ParseFailure::Boolean))
    }
}

fn parse_number(raw: &str) -> Result<f64, ConversionError> {
    // Only `Infinity` and `NaN` are accepted as non-finite spellings.
    let unsigned = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
        && unsigned != "Infinity"
        && unsigned != "NaN"
    {
        return Err(ConversionError::failure(raw, "number", ParseFailure::NonFiniteSpelling));
    }
    raw.parse::<f64>()
        .map_err(|err| ConversionError::failure(raw, "number", err))
}

fn parse_date(raw: &str) -> Result<NaiveDateTime, ConversionError> {
    let rejected =
        |reason| ConversionError::failure(raw, "date-time", ParseFailure::DateLayout(reason));

    if !raw.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(rejected("the year must be written as four unsigned digits"));
    }
    if let Some((_, fraction)) = raw.split_once('.') {
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(rejected("the fraction of a second has more than nine digits"));
        }
    }

    let date = NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT)
        .or_else(|err| NaiveDateTime::parse_from_str(raw, DATE_TIME_MINUTES_FORMAT).map_err(|_| err))
        .map_err(|err| ConversionError::failure(raw, "date-time", err))?;
    // chrono represents a leap second as a nanosecond overflow.
    if date.nanosecond() >= 1_000_000_000 {
        return Err(rejected("leap seconds are not supported"));
    }
    Ok(date)
}
