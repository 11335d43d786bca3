//! Field-level dependency wiring for already-constructed services
//!
//! Dependencies are registered with a [`Container`] under a name, under
//! their exact type, or both, and are then assigned directly into the
//! annotated fields of target records. The container never creates, scopes,
//! or destroys anything: it wires instances the caller already built, in a
//! single flat pass over the registrations, and runs each record's
//! post-injection hook once wiring is complete. Mutually-referencing
//! records need no special treatment: every field assignment is a handle
//! clone, so a bulk pass wires cycles without ever recursing.
//!
//! ```
//! use solder::{injectable, shared, Container, Handle, Shared};
//!
//! injectable! {
//!     pub struct Greeter {
//!         #[wire("greeting")]
//!         greeting: Option<Shared<String>>,
//!     }
//! }
//!
//! let mut container = Container::new();
//! container.add(Handle::of(shared("hello".to_string())), "greeting");
//!
//! let greeter = shared(Greeter { greeting: None });
//! container.add(Handle::record(greeter.clone()), "Greeter");
//! container.perform_injections()?;
//!
//! let wired = greeter.read();
//! let greeting = wired.greeting.as_ref().expect("wired");
//! assert_eq!(*greeting.read(), "hello");
//! # Ok::<(), solder::WireError>(())
//! ```

#[macro_use]
mod macros;

pub mod container;
pub mod error;
pub mod handle;
pub mod injectable;
pub mod tag;

mod set;

#[cfg(feature = "config")]
pub mod config;

pub use container::Container;
pub use error::{WireError, WireResult};
pub use handle::{shared, Handle, Shared};
pub use injectable::{Field, Injectable, PostInject, Slot};
pub use tag::{parse_field_tag, FieldTag};

#[cfg(feature = "config")]
pub use config::{AliasConfig, WiringConfig};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::{
        shared, Container, Field, Handle, Injectable, PostInject, Shared, Slot, WireError,
        WireResult,
    };
}
