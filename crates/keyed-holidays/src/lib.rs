//! Holidays capability for the keyed service demo.
//!
//! This module defines the `HolidaysProvider` interface, the regional
//! implementations bound under their country keys, and the `HolidayService`
//! consumer that announces the holiday of the provider it was built with.

use keyed_registry::ImplementationRegistry;
use std::io::Write;
use std::sync::Arc;

/// Re-export implementations
pub mod implementations {
	pub mod japan;
	pub mod us;
}

/// Trait defining the interface for holidays providers.
///
/// Implementations are stateless and bound in the container under a country
/// key, for example `"JP"` or `"US"`.
#[cfg_attr(test, mockall::automock)]
pub trait HolidaysProvider: Send + Sync {
	/// Returns the name of the provider's holiday.
	fn holiday_name(&self) -> String;
}

/// Type alias for holidays provider factory functions.
pub type HolidaysProviderFactory = fn() -> Arc<dyn HolidaysProvider>;

/// Registry trait for holidays provider implementations.
pub trait HolidaysProviderRegistry: ImplementationRegistry<Factory = HolidaysProviderFactory> {}

/// Get all registered holidays provider implementations.
///
/// Returns a vector of (key, factory) tuples. The key is the one the
/// composition root binds the implementation under.
pub fn get_all_implementations() -> Vec<(&'static str, HolidaysProviderFactory)> {
	use implementations::{japan, us};

	vec![
		(japan::Registry::NAME, japan::Registry::factory()),
		(us::Registry::NAME, us::Registry::factory()),
	]
}

/// Announces the holiday of a single provider.
///
/// The provider is fixed at construction; the service has no way to switch
/// to another one afterwards.
pub struct HolidayService {
	provider: Arc<dyn HolidaysProvider>,
}

impl HolidayService {
	/// Creates a new HolidayService around an already resolved provider.
	pub fn new(provider: Arc<dyn HolidaysProvider>) -> Self {
		Self { provider }
	}

	/// Formats the announcement line.
	pub fn announcement(&self) -> String {
		format!("Holiday: {}", self.provider.holiday_name())
	}

	/// Writes the announcement line to `out`.
	pub fn announce<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
		tracing::debug!("Announcing holiday");
		writeln!(out, "{}", self.announcement())
	}
}
