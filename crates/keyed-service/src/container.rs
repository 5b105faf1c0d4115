//! Service container with keyed bindings.
//!
//! Registration and resolution are split across two types. A
//! [`ServiceCollection`] accepts registrations and is consumed by
//! [`ServiceCollection::build`], which hands back a read-only
//! [`ServiceProvider`]. Nothing can be registered once resolution starts.

use keyed_holidays::{HolidayService, HolidaysProvider};
use keyed_registry::{Bindings, Capability, Provider, RegistryError, ServiceKey};
use std::sync::Arc;

/// Resolves registered services.
///
/// Holds one binding table per capability. Every binding is a singleton, so
/// repeated resolutions of the same (capability, key) pair share one `Arc`.
pub struct ServiceProvider {
	holidays_providers: Bindings<ServiceProvider, dyn HolidaysProvider>,
	holiday_services: Bindings<ServiceProvider, HolidayService>,
}

impl Capability<ServiceProvider> for dyn HolidaysProvider {
	fn bindings(registry: &ServiceProvider) -> &Bindings<ServiceProvider, Self> {
		&registry.holidays_providers
	}

	fn bindings_mut(registry: &mut ServiceProvider) -> &mut Bindings<ServiceProvider, Self> {
		&mut registry.holidays_providers
	}
}

impl Capability<ServiceProvider> for HolidayService {
	fn bindings(registry: &ServiceProvider) -> &Bindings<ServiceProvider, Self> {
		&registry.holiday_services
	}

	fn bindings_mut(registry: &mut ServiceProvider) -> &mut Bindings<ServiceProvider, Self> {
		&mut registry.holiday_services
	}
}

impl ServiceProvider {
	fn new() -> Self {
		Self {
			holidays_providers: Bindings::new("HolidaysProvider"),
			holiday_services: Bindings::new("HolidayService"),
		}
	}

	/// Resolves the default binding of `T`.
	///
	/// Keyed bindings of `T` are never used in its place.
	pub fn resolve<T>(&self) -> Result<Arc<T>, RegistryError>
	where
		T: Capability<ServiceProvider> + ?Sized,
	{
		T::bindings(self).resolve(&ServiceKey::Default, self)
	}

	/// Resolves the binding of `T` registered under exactly `key`.
	pub fn resolve_keyed<T>(&self, key: &str) -> Result<Arc<T>, RegistryError>
	where
		T: Capability<ServiceProvider> + ?Sized,
	{
		T::bindings(self).resolve(&ServiceKey::named(key), self)
	}

	/// The keys `T` is registered under, sorted.
	pub fn keys<T>(&self) -> Vec<String>
	where
		T: Capability<ServiceProvider> + ?Sized,
	{
		T::bindings(self).keys()
	}
}

/// Collects registrations before the provider is built.
///
/// Registering the same (capability, key) pair twice keeps the later
/// registration.
pub struct ServiceCollection {
	services: ServiceProvider,
}

impl ServiceCollection {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self {
			services: ServiceProvider::new(),
		}
	}

	/// Registers `instance` as the default binding of `T`.
	pub fn register_default<T>(&mut self, instance: Arc<T>) -> &mut Self
	where
		T: Capability<ServiceProvider> + ?Sized,
	{
		T::bindings_mut(&mut self.services).bind_default(Provider::Instance(instance));
		self
	}

	/// Registers a factory for the default binding of `T`.
	///
	/// The factory runs on first resolution and may resolve other bindings.
	pub fn register_default_factory<T, F>(&mut self, factory: F) -> &mut Self
	where
		T: Capability<ServiceProvider> + ?Sized,
		F: Fn(&ServiceProvider) -> Result<Arc<T>, RegistryError> + 'static,
	{
		T::bindings_mut(&mut self.services).bind_default(Provider::factory(factory));
		self
	}

	/// Registers `instance` for `T` under `key`.
	///
	/// Fails with `EmptyKey` when `key` is empty.
	pub fn register_keyed<T>(
		&mut self,
		key: impl Into<String>,
		instance: Arc<T>,
	) -> Result<&mut Self, RegistryError>
	where
		T: Capability<ServiceProvider> + ?Sized,
	{
		T::bindings_mut(&mut self.services).bind_keyed(key, Provider::Instance(instance))?;
		Ok(self)
	}

	/// Registers a factory for `T` under `key`.
	pub fn register_keyed_factory<T, F>(
		&mut self,
		key: impl Into<String>,
		factory: F,
	) -> Result<&mut Self, RegistryError>
	where
		T: Capability<ServiceProvider> + ?Sized,
		F: Fn(&ServiceProvider) -> Result<Arc<T>, RegistryError> + 'static,
	{
		T::bindings_mut(&mut self.services).bind_keyed(key, Provider::factory(factory))?;
		Ok(self)
	}

	/// Finishes registration and returns the provider.
	pub fn build(self) -> ServiceProvider {
		tracing::debug!(
			holidays_providers = ?self.services.keys::<dyn HolidaysProvider>(),
			"Built service provider"
		);
		self.services
	}
}

impl Default for ServiceCollection {
	fn default() -> Self {
		Self::new()
	}
}
