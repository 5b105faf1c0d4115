//! Composition root for the holiday services.
//!
//! Registers the default holidays provider, every keyed provider
//! implementation and the `HolidayService` consumer, then builds the
//! provider used by the binary.

use crate::container::{ServiceCollection, ServiceProvider};
use keyed_holidays::implementations::{japan, us};
use keyed_holidays::{HolidayService, HolidaysProvider};
use keyed_registry::{ImplementationRegistry, RegistryError};
use std::sync::Arc;

/// Key of the provider `HolidayService` is built with.
pub const HOLIDAY_SERVICE_KEY: &str = us::Registry::NAME;

/// Registers all services on a fresh collection.
pub fn configure_services() -> Result<ServiceCollection, RegistryError> {
	let mut services = ServiceCollection::new();

	// Default provider, created on first use
	services.register_default_factory::<dyn HolidaysProvider, _>(|_| {
		Ok(japan::create_provider())
	});

	// Auto-register all keyed provider implementations
	for (name, factory) in keyed_holidays::get_all_implementations() {
		tracing::debug!("Registering holidays provider implementation: {}", name);
		services.register_keyed::<dyn HolidaysProvider>(name, factory())?;
	}

	services.register_default_factory::<HolidayService, _>(|provider| {
		let holidays = provider.resolve_keyed::<dyn HolidaysProvider>(HOLIDAY_SERVICE_KEY)?;
		Ok(Arc::new(HolidayService::new(holidays)))
	});

	Ok(services)
}

/// Builds the service provider with every registration in place.
pub fn build_service_provider() -> Result<ServiceProvider, RegistryError> {
	Ok(configure_services()?.build())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_all_implementations_registered() {
		let provider = build_service_provider().unwrap();

		assert_eq!(
			provider.keys::<dyn HolidaysProvider>(),
			vec!["JP".to_string(), "US".to_string()]
		);
	}

	#[test]
	fn test_default_provider_is_japan() {
		let provider = build_service_provider().unwrap();

		let default = provider.resolve::<dyn HolidaysProvider>().unwrap();

		assert_eq!(default.holiday_name(), "天皇誕生日");
	}

	#[test]
	fn test_holiday_service_uses_us_provider() {
		let provider = build_service_provider().unwrap();

		let service = provider.resolve::<HolidayService>().unwrap();
		let us_provider = provider.resolve_keyed::<dyn HolidaysProvider>("US").unwrap();

		assert_eq!(HOLIDAY_SERVICE_KEY, "US");
		assert_eq!(
			service.announcement(),
			format!("Holiday: {}", us_provider.holiday_name())
		);
	}

	#[test]
	fn test_keyed_bindings_are_singletons() {
		let provider = build_service_provider().unwrap();

		let first = provider.resolve_keyed::<dyn HolidaysProvider>("JP").unwrap();
		let second = provider.resolve_keyed::<dyn HolidaysProvider>("JP").unwrap();
		let default = provider.resolve::<dyn HolidaysProvider>().unwrap();

		assert!(Arc::ptr_eq(&first, &second));
		// The default binding owns its own instance
		assert!(!Arc::ptr_eq(&first, &default));
	}

	#[test]
	fn test_unregistered_region_fails() {
		let provider = build_service_provider().unwrap();

		let result = provider.resolve_keyed::<dyn HolidaysProvider>("FR");

		assert!(matches!(result, Err(RegistryError::MissingBinding { .. })));
	}
}
