use crate::vocab::xsd;
use crate::{ConstructionError, Uri};
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

/// Matches a trailing ISO 639-2 language marker, e.g. `@en` or `@nno`.
static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@[a-z]{2,3}$").unwrap());

/// The native value carried by a [`Literal`].
#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
    String(String),
    Boolean(bool),
    Int(i64),
    Float(f64),
}

impl Display for NativeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NativeValue::String(value) => f.write_str(value),
            NativeValue::Boolean(value) => value.fmt(f),
            NativeValue::Int(value) => value.fmt(f),
            NativeValue::Float(value) => value.fmt(f),
        }
    }
}

/// The annotation of a [`Literal`]. A literal has either a language tag, a datatype or neither.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralAnnotation {
    None,
    Language(String),
    Datatype(Uri),
}

/// An RDF literal.
///
/// Literals parsed from the wire keep their lexical form as a [`NativeValue::String`]. Literals
/// built from native values infer their datatype:
///
/// | native value          | datatype      |
/// |-----------------------|---------------|
/// | `bool`                | `xsd:boolean` |
/// | `i32` / `i64`         | `xsd:int`     |
/// | `f64`                 | `xsd:float`   |
/// | string                | `xsd:string`  |
/// | string ending in `@xx`| language tag  |
///
/// Two literals are equal iff their canonical forms (their [`Display`] output) are equal.
#[derive(Clone, Debug)]
pub struct Literal {
    value: NativeValue,
    annotation: LiteralAnnotation,
}

impl Literal {
    /// Creates a literal without language tag or datatype.
    pub fn new_simple(value: impl Into<String>) -> Self {
        Self {
            value: NativeValue::String(value.into()),
            annotation: LiteralAnnotation::None,
        }
    }

    pub fn new_language_tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: NativeValue::String(value.into()),
            annotation: LiteralAnnotation::Language(language.into()),
        }
    }

    pub fn new_typed(value: impl Into<String>, datatype: Uri) -> Self {
        Self {
            value: NativeValue::String(value.into()),
            annotation: LiteralAnnotation::Datatype(datatype),
        }
    }

    /// Builds a literal from a dynamically typed value.
    ///
    /// Booleans, numbers and strings follow the inference rules of [`Literal`]. Any other value
    /// is rejected instead of being mapped to some default.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, ConstructionError> {
        match value {
            serde_json::Value::Bool(value) => Ok(Self::from(*value)),
            serde_json::Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Ok(Self::from(value))
                } else if number.is_u64() {
                    Err(ConstructionError::IntegerOutOfRange(number.to_string()))
                } else {
                    number
                        .as_f64()
                        .map(Self::from)
                        .ok_or_else(|| ConstructionError::UnsupportedValue(number.to_string()))
                }
            }
            serde_json::Value::String(value) => Ok(Self::from(value.as_str())),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => {
                Err(ConstructionError::UnsupportedValue(value.to_string()))
            }
        }
    }

    pub fn value(&self) -> &NativeValue {
        &self.value
    }

    pub fn annotation(&self) -> &LiteralAnnotation {
        &self.annotation
    }

    pub fn language(&self) -> Option<&str> {
        match &self.annotation {
            LiteralAnnotation::Language(language) => Some(language),
            _ => None,
        }
    }

    pub fn datatype(&self) -> Option<&Uri> {
        match &self.annotation {
            LiteralAnnotation::Datatype(datatype) => Some(datatype),
            _ => None,
        }
    }

    fn with_inferred_type(value: NativeValue, datatype: &str) -> Self {
        Self {
            value,
            annotation: LiteralAnnotation::Datatype(Uri::new(datatype)),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.annotation {
            LiteralAnnotation::None => self.value.fmt(f),
            LiteralAnnotation::Language(language) => write!(f, "{}@{language}", self.value),
            LiteralAnnotation::Datatype(datatype) => write!(f, "{}^^{datatype}", self.value),
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::with_inferred_type(NativeValue::Boolean(value), xsd::BOOLEAN)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::with_inferred_type(NativeValue::Int(value), xsd::INT)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::with_inferred_type(NativeValue::Float(value), xsd::FLOAT)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        match LANGUAGE_TAG.find(value) {
            Some(tag) => Self::new_language_tagged(&value[..tag.start()], &tag.as_str()[1..]),
            None => Self::with_inferred_type(NativeValue::String(value.to_owned()), xsd::STRING),
        }
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<NativeValue> for Literal {
    fn from(value: NativeValue) -> Self {
        match value {
            NativeValue::String(value) => Self::from(value),
            NativeValue::Boolean(value) => Self::from(value),
            NativeValue::Int(value) => Self::from(value),
            NativeValue::Float(value) => Self::from(value),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use crate::Term;
    use serde_json::json;

    #[test]
    fn literal_formatting() {
        let cases = [
            (Literal::from(42_i32), "42^^<http://www.w3.org/2001/XMLSchema#int>"),
            (
                Literal::from(42.00001),
                "42.00001^^<http://www.w3.org/2001/XMLSchema#float>",
            ),
            (
                Literal::from(true),
                "true^^<http://www.w3.org/2001/XMLSchema#boolean>",
            ),
            (
                Literal::from(false),
                "false^^<http://www.w3.org/2001/XMLSchema#boolean>",
            ),
            (Literal::from("fisk@nno"), "fisk@nno"),
            (
                Literal::from("fisk"),
                "fisk^^<http://www.w3.org/2001/XMLSchema#string>",
            ),
            (Literal::new_simple("fisk"), "fisk"),
        ];

        for (literal, expected) in cases {
            assert_eq!(literal.to_string(), expected);
        }
    }

    #[test]
    fn literal_equality() {
        let cases = [
            (Literal::from(42_i32), Literal::from(42.00001)),
            (Literal::from(42_i32), Literal::from(true)),
            (Literal::from(true), Literal::from(false)),
            (Literal::from("fisk@nno"), Literal::from("fisk@no")),
            (Literal::from("fisk@no"), Literal::from("fisk")),
        ];

        for (a, b) in cases {
            assert_ne!(Term::from(a), Term::from(b));
        }
    }

    #[test]
    fn native_and_lexical_literals_agree() {
        let native = Literal::from(1_i64);
        let lexical = Literal::new_typed("1", Uri::new(xsd::INT));

        assert_eq!(native, lexical);
        assert_eq!(Term::from(native), Term::from(lexical));
        assert_ne!(
            Literal::from(true),
            Literal::new_typed("1", Uri::new(xsd::BOOLEAN))
        );
    }

    #[test]
    fn language_tag_is_stripped_from_value() {
        let literal = Literal::from("x@en");
        assert_eq!(literal.value(), &NativeValue::String("x".to_owned()));
        assert_eq!(literal.language(), Some("en"));
        assert_eq!(literal.datatype(), None);
    }

    #[test]
    fn language_tag_must_be_two_or_three_lowercase_letters() {
        for value in ["mail@e", "mail@example", "mail@EN", "a@b.com"] {
            let literal = Literal::from(value);
            assert_eq!(literal.language(), None, "{value}");
            assert_eq!(literal.datatype().map(Uri::as_str), Some(xsd::STRING));
        }
    }

    #[test]
    fn native_value_round_trip() {
        let values = [
            NativeValue::Boolean(true),
            NativeValue::Int(-7),
            NativeValue::Float(2.5),
            NativeValue::String("plain".to_owned()),
        ];

        for value in values {
            let literal = Literal::from(value.clone());
            assert_eq!(Term::from(literal).native_value(), Some(value));
        }
    }

    #[test]
    fn from_json_value_infers_datatype() -> Result<(), ConstructionError> {
        assert_eq!(
            Literal::from_json_value(&json!(true))?.datatype(),
            Some(&Uri::new(xsd::BOOLEAN))
        );
        assert_eq!(
            Literal::from_json_value(&json!(3))?.datatype(),
            Some(&Uri::new(xsd::INT))
        );
        assert_eq!(
            Literal::from_json_value(&json!(0.5))?.datatype(),
            Some(&Uri::new(xsd::FLOAT))
        );
        assert_eq!(
            Literal::from_json_value(&json!("hei@no"))?.language(),
            Some("no")
        );
        Ok(())
    }

    #[test]
    fn from_json_value_rejects_unsupported_values() {
        assert!(matches!(
            Literal::from_json_value(&json!([1, 2, 3])),
            Err(ConstructionError::UnsupportedValue(_))
        ));
        assert!(matches!(
            Literal::from_json_value(&json!(null)),
            Err(ConstructionError::UnsupportedValue(_))
        ));
        assert!(matches!(
            Literal::from_json_value(&json!({"a": 1})),
            Err(ConstructionError::UnsupportedValue(_))
        ));
        assert!(matches!(
            Literal::from_json_value(&json!(u64::MAX)),
            Err(ConstructionError::IntegerOutOfRange(_))
        ));
    }
}
