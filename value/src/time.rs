use crate::value::{as_delta, Value};
use crate::{Kind, Reflect, TypeInfo, ValueError};
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use std::time::Duration;

impl Reflect for DateTime<Utc> {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<DateTime<Utc>>(Kind::Time)
    }

    fn to_value(&self) -> Value {
        Value::Time(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Time(t) => Ok(t),
            v => Err(v.mismatch(Kind::Time)),
        }
    }
}

/// Naive instants are read and written as UTC.
impl Reflect for NaiveDateTime {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<NaiveDateTime>(Kind::Time)
    }

    fn to_value(&self) -> Value {
        Value::Time(self.and_utc())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Time(t) => Ok(t.naive_utc()),
            v => Err(v.mismatch(Kind::Time)),
        }
    }
}

impl Reflect for TimeDelta {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<TimeDelta>(Kind::Duration)
    }

    fn to_value(&self) -> Value {
        Value::duration(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Duration(nanos) => as_delta(nanos).ok_or_else(|| ValueError::OutOfRange {
                value: format!("{nanos}ns"),
                target: "chrono::TimeDelta",
            }),
            v => Err(v.mismatch(Kind::Duration)),
        }
    }
}

impl Reflect for Duration {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<Duration>(Kind::Duration)
    }

    fn to_value(&self) -> Value {
        Value::Duration(self.as_nanos() as i128)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        let nanos = match value {
            Value::Duration(nanos) => nanos,
            v => return Err(v.mismatch(Kind::Duration)),
        };
        let secs = u64::try_from(nanos.div_euclid(1_000_000_000)).map_err(|_| ValueError::OutOfRange {
            value: format!("{nanos}ns"),
            target: "std::time::Duration",
        })?;
        Ok(Duration::new(secs, nanos.rem_euclid(1_000_000_000) as u32))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Reflect, Value, ValueError};
    use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};
    use std::time::Duration;

    #[test]
    fn naive_and_utc_share_kind() {
        let time = Utc.timestamp_opt(1553878048, 0).unwrap();
        let naive = NaiveDateTime::from_value(time.to_value()).unwrap();
        assert_eq!(naive, time.naive_utc());
        assert_eq!(DateTime::<Utc>::from_value(naive.to_value()), Ok(time));
    }

    #[test]
    fn durations() {
        let value = Duration::from_secs(90).to_value();
        assert_eq!(TimeDelta::from_value(value), Ok(TimeDelta::seconds(90)));
        assert_eq!(
            Duration::from_value(TimeDelta::milliseconds(1500).to_value()),
            Ok(Duration::from_millis(1500))
        );
    }

    #[test]
    fn negative_delta_does_not_fit_std() {
        assert!(Duration::from_value(TimeDelta::seconds(-1).to_value()).is_err());
        assert!(Duration::from_value(Value::int(3)).is_err());
    }

    #[test]
    fn longest_std_duration_is_kept() {
        let longest = Duration::new(u64::MAX, 999_999_999);
        assert_eq!(Duration::from_value(longest.to_value()), Ok(longest));
        assert_eq!(
            Duration::from_value(Duration::from_secs(u64::MAX).to_value()),
            Ok(Duration::from_secs(u64::MAX))
        );
    }

    #[test]
    fn std_duration_beyond_chrono_is_refused() {
        let error = TimeDelta::from_value(Duration::from_secs(u64::MAX).to_value()).unwrap_err();
        assert!(matches!(
            error,
            ValueError::OutOfRange { target: "chrono::TimeDelta", .. }
        ));
    }
}
