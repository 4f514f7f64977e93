use crate::value::Value;
use crate::{Kind, Reflect, TypeInfo, ValueError};

impl Reflect for bool {
    fn type_info() -> TypeInfo {
        TypeInfo::of::<bool>(Kind::Bool)
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok(b),
            v => Err(v.mismatch(Kind::Bool)),
        }
    }
}
