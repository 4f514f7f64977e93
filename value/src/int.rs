use crate::value::Value;
use crate::{Kind, Reflect, TypeInfo, ValueError};

// Every integer width shares the `Int` kind, assignment fails only when the
// carried value does not fit into the target width.
macro_rules! reflect_int {
    ($($type:ty),*) => {
        $(
            impl Reflect for $type {
                fn type_info() -> TypeInfo {
                    TypeInfo::of::<$type>(Kind::Int)
                }

                fn to_value(&self) -> Value {
                    Value::Int(*self as i128)
                }

                fn from_value(value: Value) -> Result<Self, ValueError> {
                    match value {
                        Value::Int(i) => <$type>::try_from(i).map_err(|_| ValueError::OutOfRange {
                            value: i.to_string(),
                            target: stringify!($type),
                        }),
                        v => Err(v.mismatch(Kind::Int)),
                    }
                }
            }
        )*
    };
}

reflect_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
