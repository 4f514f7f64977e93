use crate::value::Value;
use crate::{Kind, Reflect, TypeInfo, ValueError};

impl Reflect for f64 {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<f64>(Kind::Float)
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(f) => Ok(f),
            v => Err(v.mismatch(Kind::Float)),
        }
    }
}

impl Reflect for f32 {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<f32>(Kind::Float)
    }

    fn to_value(&self) -> Value {
        Value::Float(*self as f64)
    }

    // lossy by design of the representation, like an `as` cast
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(f) => Ok(f as f32),
            v => Err(v.mismatch(Kind::Float)),
        }
    }
}
