//! Errors raised by the registry.

use crate::ServiceKey;
use thiserror::Error;

/// Errors that can occur while registering or resolving services.
///
/// None of these are transient: registrations are static, so every variant
/// points at a wiring mistake.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// No binding exists for the requested capability and key.
	#[error(
		"No binding registered for {capability} with key {key} (registered keys: [{}])",
		.available.join(", ")
	)]
	MissingBinding {
		capability: &'static str,
		key: ServiceKey,
		available: Vec<String>,
	},
	/// A keyed registration used an empty key.
	#[error("Empty key used to register {capability}")]
	EmptyKey { capability: &'static str },
	/// A factory resolved the binding it is producing.
	#[error("Circular dependency while resolving {capability} with key {key}")]
	CircularDependency {
		capability: &'static str,
		key: ServiceKey,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_binding_message_lists_keys() {
		let error = RegistryError::MissingBinding {
			capability: "HolidaysProvider",
			key: ServiceKey::named("FR"),
			available: vec!["JP".to_string(), "US".to_string()],
		};

		assert_eq!(
			error.to_string(),
			"No binding registered for HolidaysProvider with key 'FR' (registered keys: [JP, US])"
		);
	}

	#[test]
	fn test_missing_default_message() {
		let error = RegistryError::MissingBinding {
			capability: "HolidayService",
			key: ServiceKey::Default,
			available: vec![],
		};

		assert!(error.to_string().contains("HolidayService with key <default>"));
	}
}
