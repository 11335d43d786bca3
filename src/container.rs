//! The dependency registry and the injection engine that drives it

use std::any::TypeId;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{WireError, WireResult};
use crate::handle::Handle;
use crate::injectable::Field;
use crate::set::HandleSet;
use crate::tag::parse_field_tag;

/// The dependency registry
///
/// Holds every registered instance indexed by name and by exact type, plus
/// the set of registered records that can themselves receive fields.
/// Registration takes `&mut self`; injection passes take `&self` and only
/// mutate the per-instance cells. There is no internal synchronization
/// beyond those cells: callers register everything up front and coordinate
/// any cross-thread use themselves.
#[derive(Default)]
pub struct Container {
    /// Registered instances by name, for injection by explicit name
    by_name: HashMap<String, Handle>,
    /// Registered instances by exact type, for automatic injection
    by_type: HashMap<TypeId, Handle>,
    /// Every record handle added so far, one entry per distinct instance
    injectables: HandleSet,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance
    ///
    /// An empty name leaves the instance reachable only through automatic,
    /// type-keyed resolution. Either way the instance is also stored under
    /// its exact type, and the last registration of a type wins there.
    /// Record handles additionally join the injectable set, once per
    /// distinct instance no matter how often they are registered.
    /// Registration cannot fail.
    pub fn add(&mut self, handle: Handle, name: &str) {
        trace!(
            name,
            type_name = handle.type_name(),
            record = handle.is_record(),
            "registering dependency"
        );

        if !name.is_empty() {
            self.by_name.insert(name.to_string(), handle.clone());
        }

        // The most recent registration of a type wins the type map
        self.by_type.insert(handle.type_id(), handle.clone());

        if handle.is_record() {
            self.injectables.insert(handle);
        }
    }

    /// Look up a dependency by name
    ///
    /// Consults only the name map; anonymously registered instances are
    /// never returned here.
    pub fn get(&self, name: &str) -> Option<Handle> {
        self.by_name.get(name).cloned()
    }

    /// Inject the registry's dependencies into one target
    ///
    /// The target must be a record handle; anything else fails with
    /// [`WireError::NotInjectable`]. Fields are processed in declaration
    /// order and the first failing field aborts the call; fields already
    /// assigned keep their values, later fields stay untouched. On full
    /// success the record's post-injection hook, when present, runs exactly
    /// once.
    pub fn inject_into(&self, target: &Handle) -> WireResult<()> {
        self.inject_handle(target, true)
    }

    /// Inject every registered record, then run hooks
    ///
    /// Equivalent to [`Container::inject_into`] over each distinct record in
    /// the injectable set (unspecified order) with hooks deferred: the first
    /// failure aborts the pass and no hook runs at all, while full success
    /// runs every hook after the whole set is wired. Hooks therefore only
    /// ever observe completely-wired instances, mutually-referencing ones
    /// included.
    pub fn perform_injections(&self) -> WireResult<()> {
        debug!(count = self.injectables.len(), "starting bulk injection pass");

        for handle in self.injectables.iter() {
            self.inject_handle(handle, false)?;
        }

        // Hooks run only once the entire set is wired
        for handle in self.injectables.iter() {
            if let Some(vtable) = handle.vtable() {
                (vtable.hook)(handle.raw());
            }
        }

        Ok(())
    }

    fn inject_handle(&self, target: &Handle, run_hook: bool) -> WireResult<()> {
        let Some(vtable) = target.vtable() else {
            return Err(WireError::NotInjectable {
                type_name: target.type_name(),
            });
        };

        (vtable.walk)(target.raw(), self)?;

        if run_hook {
            (vtable.hook)(target.raw());
        }

        Ok(())
    }

    /// Resolve and assign a single field, or skip it
    ///
    /// Untagged fields and tagged fields without a writable slot are left
    /// untouched.
    pub(crate) fn wire_field(&self, owner: &'static str, field: Field<'_>) -> WireResult<()> {
        let Some(tag) = parse_field_tag(field.tag) else {
            return Ok(());
        };

        let Some(slot) = field.slot else {
            return Ok(());
        };

        if tag.auto {
            let Some(dependency) = self.by_type.get(&slot.expected_type()) else {
                return Err(WireError::MissingTyped {
                    expected: slot.expected_type_name(),
                    owner,
                    field: field.name,
                });
            };
            // The type map is keyed by exact type, so the slot always accepts
            slot.assign(dependency);
            trace!(owner, field = field.name, "assigned dependency by type");
        } else {
            let Some(dependency) = self.by_name.get(tag.name) else {
                return Err(WireError::MissingNamed {
                    name: tag.name.to_string(),
                    owner,
                    field: field.name,
                });
            };
            if !slot.assign(dependency) {
                return Err(WireError::SlotMismatch {
                    name: tag.name.to_string(),
                    owner,
                    field: field.name,
                    expected: slot.expected_type_name(),
                });
            }
            trace!(
                owner,
                field = field.name,
                name = tag.name,
                "assigned dependency by name"
            );
        }

        Ok(())
    }
}
