use crate::array::Array;
use crate::record::RecordValue;
use crate::r#type::Kind;
use crate::ValueError;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

const NANOS_PER_SEC: i128 = 1_000_000_000;
use std::fmt::{Display, Formatter};

/// Dynamic carrier of a single field value.
///
/// Integers travel as `i128` so every integer width of the same kind fits,
/// the concrete field type decides whether a value is in range on assignment.
/// Durations travel as signed nanoseconds for the same reason, both chrono
/// and std durations fit without loss.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i128),
    Float(f64),
    Char(char),
    Text(String),
    Time(DateTime<Utc>),
    Date(NaiveDate),
    Duration(i128),
    Optional(Option<Box<Value>>),
    Array(Array),
    Record(RecordValue),
}

impl Value {
    pub fn bool(bool: bool) -> Value {
        Value::Bool(bool)
    }

    pub fn int(int: i64) -> Value {
        Value::Int(int as i128)
    }

    pub fn float(float: f64) -> Value {
        Value::Float(float)
    }

    pub fn text(string: &str) -> Value {
        Value::Text(string.to_string())
    }

    pub fn time(time: DateTime<Utc>) -> Value {
        Value::Time(time)
    }

    pub fn date(date: NaiveDate) -> Value {
        Value::Date(date)
    }

    pub fn duration(delta: TimeDelta) -> Value {
        let nanos = delta.num_seconds() as i128 * NANOS_PER_SEC + delta.subsec_nanos() as i128;
        Value::Duration(nanos)
    }

    pub fn none() -> Value {
        Value::Optional(None)
    }

    pub fn some(value: Value) -> Value {
        Value::Optional(Some(Box::new(value)))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Char(_) => Kind::Char,
            Value::Text(_) => Kind::Text,
            Value::Time(_) => Kind::Time,
            Value::Date(_) => Kind::Date,
            Value::Duration(_) => Kind::Duration,
            Value::Optional(_) => Kind::Optional,
            Value::Array(_) => Kind::Array,
            Value::Record(_) => Kind::Record,
        }
    }

    /// Human readable description used in errors, the exact type where the value still knows it.
    pub fn describe(&self) -> String {
        match self {
            Value::Array(a) => format!("array of {}", a.element()),
            Value::Record(r) => format!("record {}", r.info()),
            v => v.kind().to_string(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::Optional(None))
    }

    /// Error for a value that arrived at a field of another kind.
    pub fn mismatch(&self, expected: Kind) -> ValueError {
        ValueError::KindMismatch {
            expected: expected.to_string(),
            found: self.describe(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(float) => write!(f, "{float}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Text(t) => write!(f, "{t:?}"),
            Value::Time(t) => write!(f, "{}", t.to_rfc3339()),
            Value::Date(d) => write!(f, "{d}"),
            Value::Duration(nanos) => match as_delta(*nanos) {
                Some(delta) => write!(f, "{delta}"),
                None => write!(f, "{nanos}ns"),
            },
            Value::Optional(None) => write!(f, "null"),
            Value::Optional(Some(v)) => write!(f, "{v}"),
            Value::Array(a) => write!(f, "{a}"),
            Value::Record(r) => write!(f, "{r}"),
        }
    }
}

/// Nanoseconds as a chrono delta, `None` beyond its range.
pub(crate) fn as_delta(nanos: i128) -> Option<TimeDelta> {
    let secs = i64::try_from(nanos.div_euclid(NANOS_PER_SEC)).ok()?;
    TimeDelta::new(secs, nanos.rem_euclid(NANOS_PER_SEC) as u32)
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::text(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::time(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Kind, Value};
    use chrono::{TimeDelta, TimeZone, Utc};

    #[test]
    fn value_equality() {
        assert_eq!(Value::int(42), Value::int(42));
        assert_ne!(Value::int(42), Value::int(7));

        assert_eq!(Value::float(3.314), Value::float(3.314));
        assert_ne!(Value::float(3.314), Value::float(2.71));

        assert_eq!(Value::bool(true), Value::bool(true));
        assert_ne!(Value::bool(true), Value::bool(false));

        assert_eq!(Value::text("Hello"), Value::text("Hello"));
        assert_ne!(Value::text("Hello"), Value::text("World"));

        assert_eq!(Value::none(), Value::none());
        assert_ne!(Value::none(), Value::some(Value::int(1)));
    }

    #[test]
    fn kinds() {
        assert_eq!(Value::int(3).kind(), Kind::Int);
        assert_eq!(Value::text("a").kind(), Kind::Text);
        assert_eq!(Value::none().kind(), Kind::Optional);
        assert_eq!(Value::some(Value::bool(true)).kind(), Kind::Optional);
        assert!(Value::none().is_none());
    }

    #[test]
    fn display() {
        let time = Utc.timestamp_opt(1553878048, 0).unwrap();
        assert_eq!(Value::time(time).to_string(), "2019-03-29T16:47:28+00:00");
        assert_eq!(Value::none().to_string(), "null");
        assert_eq!(Value::text("David").to_string(), "\"David\"");
        assert_eq!(Value::from(7).to_string(), "7");
        assert_eq!(Value::duration(TimeDelta::seconds(90)).to_string(), "PT90S");
        assert_eq!(
            Value::Duration(u64::MAX as i128 * 1_000_000_000).to_string(),
            "18446744073709551615000000000ns"
        );
    }

    #[test]
    fn negative_duration_keeps_sign() {
        let delta = TimeDelta::milliseconds(-1500);
        assert_eq!(Value::duration(delta), Value::Duration(-1_500_000_000));
    }

    #[test]
    fn mismatch_describes_found_kind() {
        let error = Value::text("x").mismatch(Kind::Int);
        assert_eq!(error.to_string(), "expected int value, found text");
    }
}
