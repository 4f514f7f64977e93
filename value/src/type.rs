use std::fmt::{Display, Formatter};

/// Coarse structural category of a type.
///
/// Two fields of the same kind are assigned directly, two fields of different
/// kinds need a registered conversion.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Kind {
    Bool,
    Int,
    Float,
    Char,
    Text,
    Time,
    Date,
    Duration,
    Optional,
    Array,
    Record,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::Text => "text",
            Kind::Time => "time",
            Kind::Date => "date",
            Kind::Duration => "duration",
            Kind::Optional => "optional",
            Kind::Array => "array",
            Kind::Record => "record",
        };
        f.write_str(name)
    }
}
