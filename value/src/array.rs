use crate::value::Value;
use crate::{Kind, Reflect, TypeInfo, ValueError};
use std::fmt::Formatter;

/// Values of a `Vec<T>` together with the exact element type they came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Array {
    element: TypeInfo,
    values: Vec<Value>,
}

impl Array {
    pub fn new(element: TypeInfo, values: Vec<Value>) -> Self {
        Array { element, values }
    }

    pub fn element(&self) -> TypeInfo {
        self.element
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",")
        )
    }
}

// Arrays only assign between identical element types, element-wise conversion is out of scope.
impl<T: Reflect> Reflect for Vec<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::container::<Self>(Kind::Array, T::type_info)
    }

    fn to_value(&self) -> Value {
        Value::Array(Array::new(
            T::type_info(),
            self.iter().map(Reflect::to_value).collect(),
        ))
    }

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Array(array) if array.element == T::type_info() => {
                array.values.into_iter().map(T::from_value).collect()
            }
            Value::Array(array) => Err(ValueError::TypeMismatch {
                expected: std::any::type_name::<Self>(),
                found: Value::Array(array).describe(),
            }),
            v => Err(v.mismatch(Kind::Array)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Kind, Reflect, Value};

    #[test]
    fn same_element_type() {
        let value = vec![1u8, 2, 3].to_value();
        assert_eq!(value.kind(), Kind::Array);
        let Value::Array(array) = &value else {
            panic!("expected an array, got {value}");
        };
        assert_eq!(array.values(), &[Value::int(1), Value::int(2), Value::int(3)]);
        assert_eq!(array.len(), 3);
        assert_eq!(Vec::<u8>::from_value(value), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn other_element_type_rejected() {
        let value = vec![1u8, 2, 3].to_value();
        assert!(Vec::<u16>::from_value(value).is_err());
        assert!(Vec::<u8>::from_value(Value::int(1)).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(vec![String::from("a")].to_value().to_string(), "[\"a\"]");
    }
}
