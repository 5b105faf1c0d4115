//! Binding keys for registry lookups.

use std::fmt;

/// Identifies one binding within a capability's table.
///
/// `Default` is the unkeyed registration; `Named` holds the string key of a
/// keyed one. Named keys are compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceKey {
	/// The unkeyed binding.
	Default,
	/// A binding registered under a string key.
	Named(String),
}

impl ServiceKey {
	/// Creates a named key.
	pub fn named(key: impl Into<String>) -> Self {
		Self::Named(key.into())
	}

	/// Returns the string key, or `None` for the default binding.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ServiceKey::Default => None,
			ServiceKey::Named(key) => Some(key),
		}
	}
}

impl fmt::Display for ServiceKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ServiceKey::Default => write!(f, "<default>"),
			ServiceKey::Named(key) => write!(f, "'{}'", key),
		}
	}
}

impl From<&str> for ServiceKey {
	fn from(key: &str) -> Self {
		Self::named(key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(ServiceKey::Default.to_string(), "<default>");
		assert_eq!(ServiceKey::named("US").to_string(), "'US'");
	}

	#[test]
	fn test_as_str() {
		assert_eq!(ServiceKey::Default.as_str(), None);
		assert_eq!(ServiceKey::from("JP").as_str(), Some("JP"));
	}

	#[test]
	fn test_keys_are_case_sensitive() {
		assert_ne!(ServiceKey::named("us"), ServiceKey::named("US"));
	}
}
