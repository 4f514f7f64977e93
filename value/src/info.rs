use crate::Kind;
use std::any::{type_name, TypeId};
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

/// Runtime identity of a field type.
///
/// Two infos are equal when they describe the same Rust type, the kind and the
/// name only travel along for dispatch and diagnostics.
#[derive(Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
    kind: Kind,
    element: Option<fn() -> TypeInfo>,
}

impl TypeInfo {
    pub fn of<T: ?Sized + 'static>(kind: Kind) -> Self {
        TypeInfo {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            kind,
            element: None,
        }
    }

    /// Info of a container whose values hold elements described by `element`.
    pub fn container<T: ?Sized + 'static>(kind: Kind, element: fn() -> TypeInfo) -> Self {
        TypeInfo {
            element: Some(element),
            ..TypeInfo::of::<T>(kind)
        }
    }

    /// Info of a named wrapper around `inner`, keeping the kind and element of the wrapped type.
    pub fn wrapping<T: ?Sized + 'static>(inner: TypeInfo) -> Self {
        TypeInfo {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            kind: inner.kind,
            element: inner.element,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without module paths, `chrono::DateTime<chrono::Utc>` becomes `DateTime<Utc>`.
    pub fn short_name(&self) -> String {
        let mut short = String::with_capacity(self.name.len());
        let mut segment = String::new();
        for c in self.name.chars() {
            match c {
                ':' => segment.clear(),
                '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                    short.push_str(&segment);
                    segment.clear();
                    short.push(c);
                }
                _ => segment.push(c),
            }
        }
        short.push_str(&segment);
        short
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn element(&self) -> Option<TypeInfo> {
        self.element.map(|element| element())
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// One position of a record shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: TypeInfo,
}

impl Field {
    pub fn new(name: &'static str, ty: TypeInfo) -> Self {
        Field { name, ty }
    }
}
