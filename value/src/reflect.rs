use crate::record::Record;
use crate::value::Value;
use crate::{Kind, TypeInfo, ValueError};
use std::any::Any;

/// A type that can live in a record field.
///
/// `type_info` names the exact type and its kind, `to_value` snapshots an
/// instance and `from_value` applies the assignment rules of the type: values
/// of the same kind are accepted and adjusted to the representation of
/// `Self`, everything else is refused.
pub trait Reflect: Sized + 'static {
    fn type_info() -> TypeInfo;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self, ValueError>;

    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

/// Object safe face of [`Reflect`], used where the concrete type is unknown.
pub trait Dynamic: Any {
    fn reflect_type(&self) -> TypeInfo;

    fn record(&self) -> Option<&dyn Record>;

    fn record_mut(&mut self) -> Option<&mut dyn Record>;
}

impl<T: Reflect> Dynamic for T {
    fn reflect_type(&self) -> TypeInfo {
        <T as Reflect>::type_info()
    }

    fn record(&self) -> Option<&dyn Record> {
        Reflect::as_record(self)
    }

    fn record_mut(&mut self) -> Option<&mut dyn Record> {
        Reflect::as_record_mut(self)
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::container::<Self>(Kind::Optional, T::type_info)
    }

    fn to_value(&self) -> Value {
        match self {
            None => Value::none(),
            Some(v) => Value::some(v.to_value()),
        }
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Optional(None) => Ok(None),
            Value::Optional(Some(v)) => T::from_value(*v).map(Some),
            v => Err(v.mismatch(Kind::Optional)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Dynamic, Kind, Reflect, Value};

    #[test]
    fn optional_round_trip() {
        assert_eq!(Some(5i32).to_value(), Value::some(Value::int(5)));
        assert_eq!(None::<i32>.to_value(), Value::none());
        assert_eq!(Option::<i64>::from_value(Value::none()), Ok(None));
        assert_eq!(
            Option::<i64>::from_value(Value::some(Value::int(3))),
            Ok(Some(3))
        );
    }

    #[test]
    fn optional_refuses_bare_value() {
        let error = Option::<String>::from_value(Value::text("x")).unwrap_err();
        assert_eq!(error, Value::text("x").mismatch(Kind::Optional));
    }

    #[test]
    fn primitives_are_no_records() {
        let mut number = 5u32;
        assert!(number.record().is_none());
        assert!(number.record_mut().is_none());
        assert_eq!(number.reflect_type(), <u32 as Reflect>::type_info());
    }
}
