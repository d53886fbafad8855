use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Outcome of decoding a closed enumeration from a raw string.
///
/// Unrecognized values degrade to a documented default rather than failing,
/// but the degradation is tagged so callers can surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<T> {
    Recognized(T),
    Defaulted(T),
}

impl<T> Decoded<T> {
    pub fn value(self) -> T {
        match self {
            Decoded::Recognized(value) | Decoded::Defaulted(value) => value,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Decoded::Defaulted(_))
    }
}
