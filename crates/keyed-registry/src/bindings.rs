//! Binding tables for a single capability.
//!
//! A [`Bindings`] table stores at most one default binding and any number
//! of keyed bindings for one capability type `T`. Every binding has
//! singleton lifetime: instances are stored as-is, factories run once on
//! first resolution and their result is cached for later lookups.
//!
//! `R` is the resolver handed to factories, normally the container that owns
//! the table, so a factory can resolve the bindings it depends on.

use crate::{RegistryError, ServiceKey};
use std::cell::{Cell, OnceCell};
use std::collections::HashMap;
use std::sync::Arc;

/// Factory producing an instance of `T` from the resolver `R`.
pub type Factory<R, T> = Box<dyn Fn(&R) -> Result<Arc<T>, RegistryError>>;

/// How a binding obtains its instance.
pub enum Provider<R, T: ?Sized> {
	/// An instance created before registration.
	Instance(Arc<T>),
	/// A factory run lazily on first resolution.
	Factory(Factory<R, T>),
}

impl<R, T: ?Sized> Provider<R, T> {
	/// Wraps a closure as a factory provider.
	pub fn factory<F>(factory: F) -> Self
	where
		F: Fn(&R) -> Result<Arc<T>, RegistryError> + 'static,
	{
		Provider::Factory(Box::new(factory))
	}
}

/// Accessor tying a capability type to its table inside the resolver `R`.
///
/// Implemented once per capability by the container, so lookups go straight
/// to the right field instead of through runtime type inspection.
pub trait Capability<R>: 'static {
	/// Returns the capability's table.
	fn bindings(registry: &R) -> &Bindings<R, Self>;

	/// Returns the capability's table for registration.
	fn bindings_mut(registry: &mut R) -> &mut Bindings<R, Self>;
}

/// A registered binding and its cached singleton.
struct Binding<R, T: ?Sized> {
	provider: Provider<R, T>,
	instance: OnceCell<Arc<T>>,
	resolving: Cell<bool>,
}

impl<R, T: ?Sized> Binding<R, T> {
	fn new(provider: Provider<R, T>) -> Self {
		Self {
			provider,
			instance: OnceCell::new(),
			resolving: Cell::new(false),
		}
	}

	fn resolve(
		&self,
		capability: &'static str,
		key: &ServiceKey,
		resolver: &R,
	) -> Result<Arc<T>, RegistryError> {
		if let Some(instance) = self.instance.get() {
			return Ok(Arc::clone(instance));
		}

		let factory = match &self.provider {
			Provider::Instance(instance) => return Ok(Arc::clone(instance)),
			Provider::Factory(factory) => factory,
		};

		if self.resolving.replace(true) {
			return Err(RegistryError::CircularDependency {
				capability,
				key: key.clone(),
			});
		}

		tracing::debug!(capability, key = %key, "Running factory");
		let result = factory(resolver);
		self.resolving.set(false);

		let instance = result?;
		Ok(Arc::clone(self.instance.get_or_init(|| instance)))
	}
}

/// Default and keyed bindings for one capability.
pub struct Bindings<R, T: ?Sized> {
	capability: &'static str,
	default: Option<Binding<R, T>>,
	keyed: HashMap<String, Binding<R, T>>,
}

impl<R, T: ?Sized> Bindings<R, T> {
	/// Creates an empty table for the named capability.
	///
	/// The name only appears in logs and error messages.
	pub fn new(capability: &'static str) -> Self {
		Self {
			capability,
			default: None,
			keyed: HashMap::new(),
		}
	}

	/// The capability name used in diagnostics.
	pub fn capability(&self) -> &'static str {
		self.capability
	}

	/// Binds the default (unkeyed) provider, replacing any previous one.
	pub fn bind_default(&mut self, provider: Provider<R, T>) {
		if self.default.replace(Binding::new(provider)).is_some() {
			tracing::debug!(
				capability = self.capability,
				key = %ServiceKey::Default,
				"Replaced existing binding"
			);
		} else {
			tracing::debug!(
				capability = self.capability,
				key = %ServiceKey::Default,
				"Registered binding"
			);
		}
	}

	/// Binds a provider under `key`, replacing any previous one for that key.
	pub fn bind_keyed(
		&mut self,
		key: impl Into<String>,
		provider: Provider<R, T>,
	) -> Result<(), RegistryError> {
		let key = key.into();
		if key.is_empty() {
			return Err(RegistryError::EmptyKey {
				capability: self.capability,
			});
		}

		let display_key = ServiceKey::named(key.as_str());
		if self.keyed.insert(key, Binding::new(provider)).is_some() {
			tracing::debug!(capability = self.capability, key = %display_key, "Replaced existing binding");
		} else {
			tracing::debug!(capability = self.capability, key = %display_key, "Registered binding");
		}
		Ok(())
	}

	/// Resolves the binding for `key`.
	///
	/// There is no fallback between the default and keyed bindings: a key
	/// without a registration of its own is a `MissingBinding` error.
	pub fn resolve(&self, key: &ServiceKey, resolver: &R) -> Result<Arc<T>, RegistryError> {
		let binding = match key {
			ServiceKey::Default => self.default.as_ref(),
			ServiceKey::Named(name) => self.keyed.get(name),
		};

		match binding {
			Some(binding) => {
				tracing::trace!(capability = self.capability, key = %key, "Resolving binding");
				binding.resolve(self.capability, key, resolver)
			}
			None => Err(RegistryError::MissingBinding {
				capability: self.capability,
				key: key.clone(),
				available: self.keys(),
			}),
		}
	}

	/// Whether a binding exists for `key`.
	pub fn contains(&self, key: &ServiceKey) -> bool {
		match key {
			ServiceKey::Default => self.default.is_some(),
			ServiceKey::Named(name) => self.keyed.contains_key(name),
		}
	}

	/// The registered named keys, sorted.
	pub fn keys(&self) -> Vec<String> {
		let mut keys: Vec<String> = self.keyed.keys().cloned().collect();
		keys.sort();
		keys
	}
}
