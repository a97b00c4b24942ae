//! Enumerated-constant descriptors from the external registry.

/// One enumerated type: its name and the ordered set of symbolic members.
///
/// Consumed as an opaque table; the generator never validates symbols
/// against any real library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: String,
    pub symbols: Vec<String>,
}
