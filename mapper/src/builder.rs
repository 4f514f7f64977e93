use crate::config::{MapperConfig, Strictness};
use crate::mapper::Mapper;
use crate::registry::Registry;
use value::Reflect;

/// Collects conversions and settings, `build` freezes them into a [`Mapper`].
#[derive(Debug, Default)]
pub struct MapperBuilder {
    registry: Registry,
    config: MapperConfig,
}

impl MapperBuilder {
    pub fn new() -> Self {
        MapperBuilder::default()
    }

    pub fn register<In, Out, F>(mut self, func: F) -> Self
    where
        In: Reflect,
        Out: Reflect,
        F: Fn(In) -> Out + Send + Sync + 'static,
    {
        self.registry.register(func);
        self
    }

    pub fn config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.config.strictness = strictness;
        self
    }

    pub fn strict(self) -> Self {
        self.strictness(Strictness::Strict)
    }

    pub fn build(self) -> Mapper {
        Mapper::from_parts(self.registry, self.config)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{MapperConfig, Strictness};
    use crate::mapper::Mapper;
    use value::{Reflect, TypeInfo};

    #[test]
    fn build_keeps_order_and_config() {
        let mapper = Mapper::builder()
            .register(|i: i64| i as f64)
            .register(|f: f64| f.to_string())
            .strictness(Strictness::Strict)
            .build();

        let types = mapper
            .registry()
            .iter()
            .map(|c| (c.input(), c.output()))
            .collect::<Vec<(TypeInfo, TypeInfo)>>();
        assert_eq!(
            types,
            vec![
                (i64::type_info(), f64::type_info()),
                (f64::type_info(), String::type_info())
            ]
        );
        assert_eq!(mapper.config(), &MapperConfig::strict());
    }

    #[test]
    fn config_replaces_strictness() {
        let mapper = Mapper::builder()
            .strict()
            .config(MapperConfig::default())
            .build();
        assert!(!mapper.config().is_strict());
    }
}
