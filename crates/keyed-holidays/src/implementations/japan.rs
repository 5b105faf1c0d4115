//! Holidays provider for Japan.

use crate::{HolidaysProvider, HolidaysProviderRegistry};
use keyed_registry::ImplementationRegistry;
use std::sync::Arc;

/// Provider returning the Emperor's Birthday.
#[derive(Debug, Default, Clone, Copy)]
pub struct JapanHolidaysProvider;

impl HolidaysProvider for JapanHolidaysProvider {
	fn holiday_name(&self) -> String {
		"天皇誕生日".to_string()
	}
}

/// Factory function to create the Japan provider.
pub fn create_provider() -> Arc<dyn HolidaysProvider> {
	Arc::new(JapanHolidaysProvider)
}

/// Registry for the Japan provider.
pub struct Registry;

impl ImplementationRegistry for Registry {
	const NAME: &'static str = "JP";
	type Factory = crate::HolidaysProviderFactory;

	fn factory() -> Self::Factory {
		create_provider
	}
}

impl HolidaysProviderRegistry for Registry {}
