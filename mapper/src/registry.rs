use std::fmt::{Debug, Formatter};
use value::{Reflect, TypeInfo, Value, ValueError};

type ConversionFn = Box<dyn Fn(Value) -> Result<Value, ValueError> + Send + Sync>;

/// A registered conversion from one exact type to another.
pub struct Conversion {
    from: TypeInfo,
    to: TypeInfo,
    func: ConversionFn,
}

impl Conversion {
    pub fn new<In, Out, F>(func: F) -> Self
    where
        In: Reflect,
        Out: Reflect,
        F: Fn(In) -> Out + Send + Sync + 'static,
    {
        Conversion {
            from: In::type_info(),
            to: Out::type_info(),
            func: Box::new(move |value: Value| -> Result<Value, ValueError> {
                Ok(func(In::from_value(value)?).to_value())
            }),
        }
    }

    pub fn input(&self) -> TypeInfo {
        self.from
    }

    pub fn output(&self) -> TypeInfo {
        self.to
    }

    pub fn matches(&self, from: &TypeInfo, to: &TypeInfo) -> bool {
        self.from == *from && self.to == *to
    }

    pub fn apply(&self, value: Value) -> Result<Value, ValueError> {
        (self.func)(value)
    }
}

impl Debug for Conversion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Conversion({} -> {})", self.from, self.to)
    }
}

/// Conversions in registration order, only ever appended to.
#[derive(Default, Debug)]
pub struct Registry {
    conversions: Vec<Conversion>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    pub fn register<In, Out, F>(&mut self, func: F)
    where
        In: Reflect,
        Out: Reflect,
        F: Fn(In) -> Out + Send + Sync + 'static,
    {
        self.conversions.push(Conversion::new(func));
    }

    /// First conversion registered for exactly this pair of types.
    pub fn lookup(&self, from: &TypeInfo, to: &TypeInfo) -> Option<&Conversion> {
        self.conversions.iter().find(|c| c.matches(from, to))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Conversion> {
        self.conversions.iter()
    }

    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }
}
