//! Core types for keyed service registration.
//!
//! This crate holds the building blocks shared by every capability in the
//! container: the binding tables that map an optional key to an instance or
//! factory, the keys themselves, the errors raised during resolution and
//! the traits that tie a capability to its table.

/// Per-capability binding tables with singleton caching.
pub mod bindings;
/// Registry errors.
pub mod error;
/// Self-registration trait for implementation modules.
pub mod implementation;
/// Binding keys.
pub mod key;

pub use bindings::{Bindings, Capability, Factory, Provider};
pub use error::RegistryError;
pub use implementation::ImplementationRegistry;
pub use key::ServiceKey;
