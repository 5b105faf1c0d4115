//! Service container and composition root for the keyed service demo.
//!
//! `container` provides the two-phase `ServiceCollection`/`ServiceProvider`
//! pair; `factory_registry` wires the holiday services into it.

pub mod container;
pub mod factory_registry;

pub use container::{ServiceCollection, ServiceProvider};
pub use factory_registry::{build_service_provider, configure_services};
