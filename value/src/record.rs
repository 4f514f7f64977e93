use crate::value::Value;
use crate::{Field, TypeInfo, ValueError};
use std::any::type_name;
use std::fmt::Formatter;

/// Positional view on a struct, usually derived with `#[derive(Record)]`.
///
/// Fields are addressed by declaration order. Reading a field produces an
/// owned [`Value`], writing one goes through the field type's
/// [`Reflect::from_value`](crate::Reflect::from_value) so the field type
/// decides which values it accepts.
pub trait Record {
    fn fields(&self) -> Vec<Field>;

    fn field_count(&self) -> usize {
        self.fields().len()
    }

    fn field(&self, index: usize) -> Option<Value>;

    fn set_field(&mut self, index: usize, value: Value) -> Result<(), ValueError>;
}

/// Snapshot of a record used when a whole record is itself a field value.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordValue {
    info: TypeInfo,
    values: Vec<Value>,
}

impl RecordValue {
    pub fn new(info: TypeInfo, values: Vec<Value>) -> Self {
        RecordValue { info, values }
    }

    pub fn info(&self) -> TypeInfo {
        self.info
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Unpacks the field values if the snapshot was taken from a `T`.
    pub fn expect<T: 'static>(value: Value) -> Result<std::vec::IntoIter<Value>, ValueError> {
        match value {
            Value::Record(record) if record.info.is::<T>() => Ok(record.values.into_iter()),
            v => Err(ValueError::TypeMismatch {
                expected: type_name::<T>(),
                found: v.describe(),
            }),
        }
    }
}

impl std::fmt::Display for RecordValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{{{}}}",
            self.info,
            self.values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
