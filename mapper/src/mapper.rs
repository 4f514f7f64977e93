use crate::builder::MapperBuilder;
use crate::config::MapperConfig;
use crate::registry::Registry;
use error::MapError;
use tracing::{debug, trace};
use value::{Dynamic, Field, Kind, Reflect, TypeInfo, Value, ValueError};

/// Copies the fields of one record into another by position.
///
/// Fields of the same kind are assigned directly, fields of different kinds go
/// through a conversion registered for the exact pair of types. A field without
/// such a conversion keeps its value unless the mapper is strict.
///
/// ```
/// use chrono::{DateTime, TimeZone, Utc};
/// use mapper::Mapper;
/// use value::{Record, Reflect};
///
/// #[derive(Reflect, Clone, Copy)]
/// struct Epoch(i64);
///
/// #[derive(Record)]
/// struct Wire {
///     name: String,
///     time: Epoch,
/// }
///
/// #[derive(Record, Default)]
/// struct Entity {
///     full_name: String,
///     time: DateTime<Utc>,
/// }
///
/// let mut mapper = Mapper::new();
/// mapper.register_mapping_function(|e: Epoch| Utc.timestamp_opt(e.0, 0).unwrap());
///
/// let wire = Wire { name: "David".into(), time: Epoch(1553878048) };
/// let entity: Entity = mapper.map_into(&wire).unwrap();
/// assert_eq!(entity.full_name, "David");
/// assert_eq!(entity.time.to_rfc3339(), "2019-03-29T16:47:28+00:00");
/// ```
#[derive(Debug, Default)]
pub struct Mapper {
    registry: Registry,
    config: MapperConfig,
}

impl Mapper {
    pub fn new() -> Self {
        Mapper::default()
    }

    pub fn builder() -> MapperBuilder {
        MapperBuilder::new()
    }

    pub(crate) fn from_parts(registry: Registry, config: MapperConfig) -> Self {
        Mapper { registry, config }
    }

    /// Registers a conversion used for fields typed `In` at the source and `Out` at the destination.
    pub fn register_mapping_function<In, Out, F>(&mut self, func: F) -> &mut Self
    where
        In: Reflect,
        Out: Reflect,
        F: Fn(In) -> Out + Send + Sync + 'static,
    {
        debug!(
            "registering conversion {} -> {}",
            In::type_info(),
            Out::type_info()
        );
        self.registry.register(func);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Maps `source` into the record behind `destination`.
    ///
    /// Fails before touching the destination if either side is not a record or
    /// the field counts differ.
    pub fn map(&self, source: &dyn Dynamic, destination: &mut dyn Dynamic) -> Result<(), MapError> {
        let from = source.reflect_type();
        let to = destination.reflect_type();
        let (Some(source), Some(destination)) = (source.record(), destination.record_mut())
        else {
            return Err(MapError::Shape {
                from: describe(&from),
                to: describe(&to),
            });
        };

        let source_fields = source.fields();
        let destination_fields = destination.fields();
        if source_fields.len() != destination_fields.len() {
            return Err(MapError::FieldCountMismatch {
                from: from.to_string(),
                from_fields: source_fields.len(),
                to: to.to_string(),
                to_fields: destination_fields.len(),
            });
        }
        debug!("mapping {} -> {} ({} fields)", from, to, source_fields.len());

        let mut assignments = Vec::with_capacity(source_fields.len());
        for (index, (src, dst)) in source_fields.iter().zip(&destination_fields).enumerate() {
            let Some(value) = source.field(index) else {
                self.reject(index, dst, ValueError::NoField { record: from.name(), index })?;
                continue;
            };
            if let Some(value) = self.resolve(index, src, dst, value)? {
                assignments.push((index, dst, value));
            }
        }

        for (index, dst, value) in assignments {
            if let Err(error) = destination.set_field(index, value) {
                self.reject(index, dst, error)?;
            }
        }
        Ok(())
    }

    /// Same as [`Mapper::map`].
    pub fn map_struct(&self, source: &dyn Dynamic, destination: &mut dyn Dynamic) -> Result<(), MapError> {
        self.map(source, destination)
    }

    /// Maps `source` into a fresh default `D`.
    pub fn map_into<D: Reflect + Default>(&self, source: &dyn Dynamic) -> Result<D, MapError> {
        let mut destination = D::default();
        self.map(source, &mut destination)?;
        Ok(destination)
    }

    /// The value to assign to the destination field, `None` for a skipped field.
    fn resolve(&self, index: usize, src: &Field, dst: &Field, value: Value) -> Result<Option<Value>, MapError> {
        let (ty, value) = dereference(src.ty, value);

        if ty.kind() == dst.ty.kind() {
            trace!("field {} `{}` assigned directly ({} -> {})", index, dst.name, ty, dst.ty);
            return Ok(Some(value));
        }

        match self.registry.lookup(&ty, &dst.ty) {
            Some(conversion) => {
                trace!("field {} `{}` converted with {:?}", index, dst.name, conversion);
                match conversion.apply(value) {
                    Ok(converted) => Ok(Some(converted)),
                    Err(error) => self.reject(index, dst, error).map(|_| None),
                }
            }
            None if self.config.is_strict() => Err(MapError::MissingConversion {
                index,
                field: dst.name,
                from: ty.to_string(),
                to: dst.ty.to_string(),
            }),
            None => {
                debug!(
                    "skipping field {} `{}`: no conversion from {} to {}",
                    index, dst.name, ty, dst.ty
                );
                Ok(None)
            }
        }
    }

    fn reject(&self, index: usize, dst: &Field, error: ValueError) -> Result<(), MapError> {
        if self.config.is_strict() {
            return Err(MapError::Rejected {
                index,
                field: dst.name,
                error,
            });
        }
        debug!("skipping field {} `{}`: {}", index, dst.name, error);
        Ok(())
    }
}

/// A present optional is replaced by its content, one level deep.
fn dereference(ty: TypeInfo, value: Value) -> (TypeInfo, Value) {
    match (ty.kind(), ty.element(), value) {
        (Kind::Optional, Some(element), Value::Optional(Some(inner))) => (element, *inner),
        (_, _, value) => (ty, value),
    }
}

fn describe(info: &TypeInfo) -> String {
    format!("{} ({})", info, info.kind())
}
