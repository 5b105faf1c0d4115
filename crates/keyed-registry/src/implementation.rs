//! Registry trait for self-registering implementations.
//!
//! Implementation modules expose a `Registry` struct implementing this trait
//! so the composition root can bind every implementation under its key
//! without naming each one.

/// Base trait for implementation registries.
///
/// Each capability crate defines its own factory type and a sub-trait
/// fixing `Factory` to it, for example `HolidaysProviderRegistry`.
pub trait ImplementationRegistry {
	/// The key this implementation is bound under, for example `"JP"`.
	const NAME: &'static str;

	/// The factory function type this implementation provides.
	type Factory;

	/// Get the factory function for this implementation.
	fn factory() -> Self::Factory;
}
