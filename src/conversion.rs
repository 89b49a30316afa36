//! Value conversion applied to every leaf of a filter document.
//!
//! A conversion receives the field name and the raw value exactly as
//! written, and returns the JSON value to place in the document. It must be
//! a pure function of its inputs.
//!
//! # Examples
//!
//! ```
//! use query_filter::{conversion, Parser};
//! use serde_json::{json, Value};
//!
//! let parser = Parser::with_conversion(conversion::from_fn(|_field, raw| {
//!     raw.parse::<i64>().map(Value::from)
//! }));
//!
//! let document = parser.parse("x:1|a:2").unwrap();
//! assert_eq!(Value::Object(document), json!({"$or": [{"x": 1}, {"a": 2}]}));
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde_json::{Number, Value};
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure reported by a [`Conversion`] for one leaf value.
#[derive(Debug, Error)]
#[error("cannot convert value '{value}' of field '{field}': {source}")]
pub struct ConversionError {
    field: String,
    value: String,
    source: BoxError,
}

impl ConversionError {
    pub fn new(field: impl Into<String>, value: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ConversionError {
            field: field.into(),
            value: value.into(),
            source: source.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The error raised by the conversion itself.
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

pub trait Conversion {
    fn convert(&self, field: &str, raw: &str) -> Result<Value, ConversionError>;
}

/// Adapts a closure into a [`Conversion`]. Built by [`from_fn`].
pub struct FnConversion<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

/// Use a closure `(field, raw) -> Result<Value, E>` as a conversion.
///
/// Errors returned by the closure are wrapped in a [`ConversionError`]
/// together with the field and value they concern.
pub fn from_fn<F, E>(f: F) -> FnConversion<F, E>
where
    F: Fn(&str, &str) -> Result<Value, E>,
    E: Into<BoxError>,
{
    FnConversion {
        f,
        _error: PhantomData,
    }
}

impl<F, E> Conversion for FnConversion<F, E>
where
    F: Fn(&str, &str) -> Result<Value, E>,
    E: Into<BoxError>,
{
    fn convert(&self, field: &str, raw: &str) -> Result<Value, ConversionError> {
        (self.f)(field, raw).map_err(|source| ConversionError::new(field, raw, source))
    }
}

impl<F, E> fmt::Debug for FnConversion<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnConversion")
    }
}

/// Leaves every value as the string it was written as.
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl Conversion for Raw {
    fn convert(&self, _field: &str, raw: &str) -> Result<Value, ConversionError> {
        Ok(Value::String(raw.to_string()))
    }
}

/// Infers scalar types from the raw text of a value.
///
/// - `true`, `True`, `false`, `False` → boolean
/// - `null`, `None` → null
/// - integers → JSON integer, decimals → JSON float
/// - anything else stays a string
#[derive(Debug, Clone, Copy, Default)]
pub struct Infer;

impl Conversion for Infer {
    fn convert(&self, _field: &str, raw: &str) -> Result<Value, ConversionError> {
        Ok(infer(raw))
    }
}

pub fn infer(raw: &str) -> Value {
    match raw {
        "true" | "True" => return Value::Bool(true),
        "false" | "False" => return Value::Bool(false),
        "null" | "None" => return Value::Null,
        _ => {}
    }

    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Value::from(n);
    }
    // Integers beyond u64 would lose digits as floats.
    if is_integer_literal(raw) {
        return Value::String(raw.to_string());
    }

    // Rust's float grammar also accepts "inf" and "NaN"; those are not
    // representable in JSON and stay strings.
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
