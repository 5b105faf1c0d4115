//! Holidays provider for the United States.

use crate::{HolidaysProvider, HolidaysProviderRegistry};
use keyed_registry::ImplementationRegistry;
use std::sync::Arc;

/// Provider returning Independence Day.
#[derive(Debug, Default, Clone, Copy)]
pub struct UsHolidaysProvider;

impl HolidaysProvider for UsHolidaysProvider {
	fn holiday_name(&self) -> String {
		"Independence Day".to_string()
	}
}

/// Factory function to create the US provider.
pub fn create_provider() -> Arc<dyn HolidaysProvider> {
	Arc::new(UsHolidaysProvider)
}

/// Registry for the US provider.
pub struct Registry;

impl ImplementationRegistry for Registry {
	const NAME: &'static str = "US";
	type Factory = crate::HolidaysProviderFactory;

	fn factory() -> Self::Factory {
		create_provider
	}
}

impl HolidaysProviderRegistry for Registry {}
