/// A structural type derived from a resolved schema.
///
/// Descriptors exist for documentation only; generated clients never
/// validate payloads against them.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    String,
    Number,
    Boolean,
    Null,
    Array(Box<TypeDescriptor>),
    /// An object with declared properties, in declaration order.
    Object(Vec<FieldDescriptor>),
    /// An object without declared properties.
    AnyObject,
    /// Anything the inferencer could not classify.
    Unknown,
}

/// One field of an object descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Property name as declared in the document.
    pub name: String,
    pub field_type: TypeDescriptor,
    pub required: bool,
}
