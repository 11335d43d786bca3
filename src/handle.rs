//! Shared instance handles and their type-erased registered form

use parking_lot::RwLock;
use std::any::{self, Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::container::Container;
use crate::error::{WireError, WireResult};
use crate::injectable::Injectable;

/// Shared, lockable handle to an instance
///
/// Every value the container touches is held this way; assigning a
/// dependency into a field clones the `Arc`, so all holders observe the
/// same underlying instance.
pub type Shared<T> = Arc<RwLock<T>>;

/// Wrap a value in the shared handle form the container works with
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}

type WalkFn = fn(&Arc<dyn Any + Send + Sync>, &Container) -> WireResult<()>;
type HookFn = fn(&Arc<dyn Any + Send + Sync>);

/// Monomorphized entry points for an injectable record type
#[derive(Clone, Copy)]
pub(crate) struct RecordVtable {
    /// Walk the record's field table, resolving each field on the container
    pub(crate) walk: WalkFn,
    /// Run the record's post-injection hook, when the type opts in
    pub(crate) hook: HookFn,
}

/// A type-erased registered instance
///
/// Carries the shared allocation plus the identity of the wrapped type.
/// Handles created with [`Handle::record`] additionally carry the entry
/// points that let the engine inject into the record without knowing its
/// type.
#[derive(Clone)]
pub struct Handle {
    instance: Arc<dyn Any + Send + Sync>,
    type_id: TypeId,
    type_name: &'static str,
    vtable: Option<RecordVtable>,
}

impl Handle {
    /// Erase a dependency that only ever sits on the providing side
    pub fn of<T: Any + Send + Sync>(instance: Shared<T>) -> Self {
        Handle {
            instance,
            type_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            vtable: None,
        }
    }

    /// Erase an injectable record, eligible to receive fields itself
    pub fn record<T: Injectable>(instance: Shared<T>) -> Self {
        Handle {
            instance,
            type_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            vtable: Some(RecordVtable {
                walk: walk_fields::<T>,
                hook: run_hook::<T>,
            }),
        }
    }

    /// Identity of the wrapped `T`
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Human-readable name of the wrapped `T`
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether this handle can itself receive injected fields
    pub fn is_record(&self) -> bool {
        self.vtable.is_some()
    }

    /// Recover the typed shared handle, if `T` matches the wrapped type
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Shared<T>> {
        self.instance.clone().downcast::<RwLock<T>>().ok()
    }

    /// Address of the shared allocation; the identity key for dedup
    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.instance) as *const () as usize
    }

    pub(crate) fn vtable(&self) -> Option<RecordVtable> {
        self.vtable
    }

    pub(crate) fn raw(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.instance
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("type_name", &self.type_name)
            .field("record", &self.is_record())
            .finish()
    }
}

/// Walk `T`'s field table under its write lock, resolving each field
///
/// The lock is held for the whole walk; resolution only clones handles out
/// of the container, so a record whose field refers back to itself still
/// never locks twice.
fn walk_fields<T: Injectable>(
    instance: &Arc<dyn Any + Send + Sync>,
    container: &Container,
) -> WireResult<()> {
    let Some(cell) = instance.downcast_ref::<RwLock<T>>() else {
        return Err(WireError::NotInjectable {
            type_name: any::type_name::<T>(),
        });
    };

    let owner = any::type_name::<T>();
    let mut guard = cell.write();
    for field in guard.injection_fields() {
        container.wire_field(owner, field)?;
    }

    Ok(())
}

fn run_hook<T: Injectable>(instance: &Arc<dyn Any + Send + Sync>) {
    if let Some(cell) = instance.downcast_ref::<RwLock<T>>() {
        let mut guard = cell.write();
        if let Some(hook) = guard.as_post_inject() {
            hook.post_inject();
        }
    }
}
