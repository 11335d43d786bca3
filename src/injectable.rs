//! Capability traits and the field descriptors records expose

use std::any::{self, Any, TypeId};

use crate::handle::{Handle, Shared};

/// A record that can receive injected fields
///
/// Implementations return their field table in declaration order, one entry
/// per field. The [`injectable!`](crate::injectable) macro generates
/// conforming impls together with the struct itself; hand-written impls work
/// the same way and may additionally mark fields non-writable by listing
/// them without a slot.
pub trait Injectable: Send + Sync + 'static {
    /// The record's field table, in declaration order
    fn injection_fields(&mut self) -> Vec<Field<'_>>;

    /// Surface the post-injection capability when the type opts in
    fn as_post_inject(&mut self) -> Option<&mut dyn PostInject> {
        None
    }
}

/// Zero-argument callback run after a record is fully wired
///
/// For a single-target injection the callback runs as soon as that record's
/// fields are all assigned; during a bulk pass it is deferred until every
/// registered record is wired.
pub trait PostInject {
    fn post_inject(&mut self);
}

/// One entry of a record's field table
///
/// Lives only for the duration of processing one field.
pub struct Field<'a> {
    /// Field name, used in error reporting
    pub name: &'static str,
    /// Raw annotation; `""` means the field requests nothing
    pub tag: &'static str,
    /// Where to store the resolved dependency. `None` marks the field
    /// non-writable, which skips it even when tagged.
    pub slot: Option<&'a mut dyn Slot>,
}

/// A writable field position that accepts a type-erased handle
pub trait Slot {
    /// Declared dependency type the slot stores
    fn expected_type(&self) -> TypeId;

    /// Name of the declared dependency type
    fn expected_type_name(&self) -> &'static str;

    /// Store the handle's instance; false when the types do not line up
    fn assign(&mut self, handle: &Handle) -> bool;
}

impl<T: Any + Send + Sync> Slot for Option<Shared<T>> {
    fn expected_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn expected_type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn assign(&mut self, handle: &Handle) -> bool {
        match handle.downcast::<T>() {
            Some(instance) => {
                *self = Some(instance);
                true
            }
            None => false,
        }
    }
}
