use crate::value::Value;
use crate::{Kind, Reflect, TypeInfo, ValueError};
use chrono::NaiveDate;

impl Reflect for NaiveDate {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<NaiveDate>(Kind::Date)
    }

    fn to_value(&self) -> Value {
        Value::Date(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Date(d) => Ok(d),
            v => Err(v.mismatch(Kind::Date)),
        }
    }
}
