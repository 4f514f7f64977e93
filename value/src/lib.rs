//! Runtime type introspection for positional record mapping.
//!
//! A field type implements [`Reflect`], a struct that can be mapped field by
//! field implements [`Record`]. Both are usually derived:
//!
//! ```
//! use value::{Record, Reflect};
//!
//! #[derive(Reflect, Clone, Copy, Debug, PartialEq)]
//! struct Epoch(i64);
//!
//! #[derive(Record)]
//! struct Wire {
//!     name: String,
//!     address: Option<String>,
//!     time: Epoch,
//! }
//!
//! let wire = Wire { name: "David".into(), address: None, time: Epoch(1553878048) };
//! assert_eq!(wire.field_count(), 3);
//! assert_eq!(wire.field(2), Some(value::Value::int(1553878048)));
//! ```

pub use array::Array;
pub use error::ValueError;
pub use info::{Field, TypeInfo};
pub use r#macro::{Record, Reflect};
pub use r#type::Kind;
pub use record::{Record, RecordValue};
pub use reflect::{Dynamic, Reflect};
pub use value::Value;

mod array;
mod bool;
mod date;
mod float;
mod info;
mod int;
mod record;
mod reflect;
mod text;
mod time;
mod r#type;
pub(crate) mod value;
