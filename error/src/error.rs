use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("mapping only accepts a source record and a destination record reference, got {from} -> {to}")]
    Shape { from: String, to: String },

    #[error("records have different field counts: {from} has {from_fields}, {to} has {to_fields}")]
    FieldCountMismatch {
        from: String,
        from_fields: usize,
        to: String,
        to_fields: usize,
    },

    #[error("no conversion for field {index} `{field}`, register a function of type fn({from}) -> {to}")]
    MissingConversion {
        index: usize,
        field: &'static str,
        from: String,
        to: String,
    },

    #[error("field {index} `{field}` could not be assigned: {error}")]
    Rejected {
        index: usize,
        field: &'static str,
        #[source]
        error: ValueError,
    },

    #[error("invalid mapper configuration: {0}")]
    Config(String),
}

/// Raised when a dynamic value cannot become a concrete field type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    #[error("expected {expected} value, found {found}")]
    KindMismatch { expected: String, found: String },

    #[error("value {value} does not fit into {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("expected a value of type {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: String },

    #[error("record {record} has no field at position {index}")]
    NoField { record: &'static str, index: usize },

    #[error("record {record} is missing a value for field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
}

impl From<String> for MapError {
    fn from(s: String) -> Self {
        MapError::Config(s)
    }
}
