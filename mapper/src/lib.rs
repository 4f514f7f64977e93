//! Positional struct to struct mapping.
//!
//! Two records with the same number of fields are copied position by
//! position. Fields of the same [`Kind`](value::Kind) are assigned directly,
//! fields of different kinds need a conversion function registered for the
//! exact source and destination types.

pub use builder::MapperBuilder;
pub use config::{MapperConfig, Strictness};
pub use error::{MapError, ValueError};
pub use mapper::Mapper;
pub use registry::{Conversion, Registry};
pub use value::{Dynamic, Kind, Record, Reflect, TypeInfo, Value};

mod builder;
mod config;
pub(crate) mod mapper;
mod registry;
