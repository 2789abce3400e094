//! Dynamic values handed to constraints
//!
//! Constraints are not generic over their input: a [`Value`] carries whatever
//! a record field or getter produced, and each constraint decides whether it
//! can check that kind of value. Numbers keep their signedness (`Int`, `UInt`)
//! or float-ness (`Float`) so [`Kind`] checks stay precise, while numeric
//! constraints normalise through [`Value::as_f64`].

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Record, ValidationError};

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed value extracted from a record.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Kind, Value};
///
/// assert_eq!(Value::from(10_u8).kind(), Kind::UInt);
/// assert_eq!(Value::from("john").as_str(), Some("john"));
/// assert!(Value::from(None::<i32>).is_nil());
/// assert_eq!(Value::from(10), Value::from(10.0));
/// ```
#[derive(Clone)]
pub enum Value<'a> {
    /// Absence of a value (`None`, JSON `null`).
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer of any width.
    Int(i64),
    /// An unsigned integer of any width.
    UInt(u64),
    /// A floating point number of any width.
    Float(f64),
    /// A string, borrowed from the record when possible.
    Str(Cow<'a, str>),
    /// An ordered sequence.
    List(Vec<Value<'a>>),
    /// A nested struct-like value.
    Record(&'a dyn Record),
}

impl<'a> Value<'a> {
    /// Wraps a record reference.
    pub fn record(record: &'a dyn Record) -> Self {
        Value::Record(record)
    }

    /// Returns true for [`Value::Nil`].
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the dynamic kind of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        Kind::of(self)
    }

    /// Returns the boolean, if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a `Str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Normalises any numeric variant to `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::UInt(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the elements, if this is a `List`.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the record, if this is a `Record`.
    #[must_use]
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            Value::Record(record) => Some(*record),
            _ => None,
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => std::ptr::addr_eq(*a, *b),
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Int(a), Value::UInt(b)) | (Value::UInt(b), Value::Int(a)) => {
                i128::from(*a) == i128::from(*b)
            }
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::UInt(n) => f.debug_tuple("UInt").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Record(record) => write!(f, "Record({})", record.type_name()),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Record(record) => f.write_str(record.type_name()),
        }
    }
}

// ============================================================================
// KIND
// ============================================================================

/// The dynamic type of a [`Value`].
///
/// Records are distinguished by their [`Record::type_name`], so
/// `Kind::Record("Person")` only matches values whose record reports that name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// See [`Value::Nil`].
    Nil,
    /// See [`Value::Bool`].
    Bool,
    /// See [`Value::Int`].
    Int,
    /// See [`Value::UInt`].
    UInt,
    /// See [`Value::Float`].
    Float,
    /// See [`Value::Str`].
    Str,
    /// See [`Value::List`].
    List,
    /// A record with the given type name.
    Record(&'static str),
}

impl Kind {
    /// Returns the kind of a value.
    #[must_use]
    pub fn of(value: &Value<'_>) -> Self {
        match value {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::UInt(_) => Kind::UInt,
            Value::Float(_) => Kind::Float,
            Value::Str(_) => Kind::Str,
            Value::List(_) => Kind::List,
            Value::Record(record) => Kind::Record(record.type_name()),
        }
    }

    /// Human-readable name, used in error params.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::UInt => "uint",
            Kind::Float => "float",
            Kind::Str => "string",
            Kind::List => "list",
            Kind::Record(name) => name,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// CONVERSIONS INTO VALUE
// ============================================================================

macro_rules! impl_from_number {
    ($variant:ident as $target:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value<'_> {
                #[inline]
                fn from(n: $t) -> Self {
                    Value::$variant(<$target>::from(n))
                }
            }

            impl From<&$t> for Value<'_> {
                #[inline]
                fn from(n: &$t) -> Self {
                    Value::$variant(<$target>::from(*n))
                }
            }
        )+
    };
}

impl_from_number!(Int as i64: i8, i16, i32, i64);
impl_from_number!(UInt as u64: u8, u16, u32, u64);
impl_from_number!(Float as f64: f32, f64);

impl From<isize> for Value<'_> {
    fn from(n: isize) -> Self {
        Value::Int(n as i64)
    }
}

impl From<&isize> for Value<'_> {
    fn from(n: &isize) -> Self {
        Value::Int(*n as i64)
    }
}

impl From<usize> for Value<'_> {
    fn from(n: usize) -> Self {
        Value::UInt(n as u64)
    }
}

impl From<&usize> for Value<'_> {
    fn from(n: &usize) -> Self {
        Value::UInt(*n as u64)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&bool> for Value<'_> {
    fn from(b: &bool) -> Self {
        Value::Bool(*b)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Str(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<&'a dyn Record> for Value<'a> {
    fn from(record: &'a dyn Record) -> Self {
        Value::Record(record)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Nil, Into::into)
    }
}

impl<'a, T> From<Vec<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// BORROWED CONVERSION
// ============================================================================

/// Borrowing conversion into a [`Value`].
///
/// `From<&T>` covers scalars and strings. Containers such as `Option<T>`,
/// `Vec<T>` and `[T]` go through this trait instead, which is what the
/// [`record!`](crate::record) macro calls for every field.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{Kind, ToValue};
///
/// let spouse: Option<String> = None;
/// assert!(spouse.to_value().is_nil());
///
/// let tags = vec!["a".to_string(), "b".to_string()];
/// assert_eq!(tags.to_value().kind(), Kind::List);
/// ```
pub trait ToValue {
    /// Converts a borrowed value without copying strings.
    fn to_value(&self) -> Value<'_>;
}

macro_rules! impl_to_value_copy {
    ($($t:ty),+) => {
        $(
            impl ToValue for $t {
                #[inline]
                fn to_value(&self) -> Value<'_> {
                    Value::from(*self)
                }
            }
        )+
    };
}

impl_to_value_copy!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool);

impl ToValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self.as_str()))
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(self.as_ref()))
    }
}

impl ToValue for Value<'_> {
    fn to_value(&self) -> Value<'_> {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_ref().map_or(Value::Nil, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

// ============================================================================
// EXTRACTION FROM VALUE
// ============================================================================

/// Typed extraction used by leaf constraints.
///
/// A failed extraction is a `type_mismatch` [`ValidationError`], never a panic.
pub trait FromValue<'v>: Sized {
    /// Extracts `Self` from a dynamic value.
    fn from_value(value: &'v Value<'_>) -> Result<Self, ValidationError>;
}

impl<'v> FromValue<'v> for &'v str {
    fn from_value(value: &'v Value<'_>) -> Result<Self, ValidationError> {
        match value {
            Value::Str(s) => Ok(s.as_ref()),
            other => Err(ValidationError::not_a_string(other)),
        }
    }
}

impl FromValue<'_> for f64 {
    fn from_value(value: &Value<'_>) -> Result<Self, ValidationError> {
        value
            .as_f64()
            .filter(|n| !n.is_nan())
            .ok_or_else(|| ValidationError::not_a_number(value))
    }
}

impl FromValue<'_> for bool {
    fn from_value(value: &Value<'_>) -> Result<Self, ValidationError> {
        value
            .as_bool()
            .ok_or_else(|| ValidationError::not_a_boolean(value))
    }
}

impl<'v> FromValue<'v> for &'v Value<'v> {
    fn from_value(value: &'v Value<'_>) -> Result<Self, ValidationError> {
        Ok(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Unit;

    impl Record for Unit {
        fn type_name(&self) -> &'static str {
            "Unit"
        }

        fn field(&self, _name: &str) -> Option<Value<'_>> {
            None
        }
    }

    #[test]
    fn numeric_kinds_are_preserved() {
        assert_eq!(Value::from(-3_i8).kind(), Kind::Int);
        assert_eq!(Value::from(3_u16).kind(), Kind::UInt);
        assert_eq!(Value::from(3_usize).kind(), Kind::UInt);
        assert_eq!(Value::from(1.5_f32).kind(), Kind::Float);
    }

    #[test]
    fn numbers_compare_by_value_across_kinds() {
        assert_eq!(Value::from(10_i32), Value::from(10_u64));
        assert_eq!(Value::from(10_i32), Value::from(10.0_f64));
        assert_ne!(Value::from(-1_i64), Value::from(u64::MAX));
        assert_ne!(Value::from(10), Value::from("10"));
    }

    #[test]
    fn records_compare_by_identity() {
        let a = Unit;
        let b = Unit;
        assert_eq!(Value::record(&a), Value::record(&a));
        assert_ne!(Value::record(&a), Value::record(&b));
        assert_eq!(Value::record(&a).kind(), Kind::Record("Unit"));
    }

    #[test]
    fn borrowed_container_conversions() {
        let name: Option<String> = None;
        assert!(name.to_value().is_nil());

        let name = Some("Ann".to_string());
        assert_eq!(name.to_value().as_str(), Some("Ann"));

        let tags = vec!["a".to_string(), "b".to_string()];
        let value = tags.to_value();
        assert_eq!(value.as_list().map(<[Value<'_>]>::len), Some(2));
        assert_eq!(value.to_string(), "[a, b]");

        let scores: Vec<Option<u8>> = vec![Some(1), None];
        assert_eq!(scores.to_value().to_string(), "[1, nil]");
        assert_eq!(scores[..].to_value(), scores.to_value());
    }

    #[test]
    fn borrowed_scalars_match_owned() {
        let name = String::from("Ann");
        assert_eq!(name.to_value(), Value::from(&name));
        assert_eq!(42_u32.to_value(), Value::from(42_u32));
    }

    #[test]
    fn nan_is_not_a_number() {
        let err = f64::from_value(&Value::from(f64::NAN)).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.param("expected"), Some("number"));
    }

    #[test]
    fn extraction_reports_type_mismatch() {
        let err = <&str>::from_value(&Value::from(5)).unwrap_err();
        assert_eq!(err.code, "type_mismatch");
        assert_eq!(err.param("actual"), Some("int"));

        let err = f64::from_value(&Value::from("x")).unwrap_err();
        assert_eq!(err.message, "This value should be a valid number");

        assert_eq!(f64::from_value(&Value::from(7_u8)).unwrap(), 7.0);
    }
}
