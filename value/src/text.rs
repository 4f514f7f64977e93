use crate::value::Value;
use crate::{Kind, Reflect, TypeInfo, ValueError};

impl Reflect for String {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<String>(Kind::Text)
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(t) => Ok(t),
            v => Err(v.mismatch(Kind::Text)),
        }
    }
}

impl Reflect for char {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<char>(Kind::Char)
    }

    fn to_value(&self) -> Value {
        Value::Char(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Char(c) => Ok(c),
            v => Err(v.mismatch(Kind::Char)),
        }
    }
}
