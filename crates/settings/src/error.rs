//! Error types and the injected error callback.
//!
//! Setting failures are never raised. They are rendered through
//! [`SettingError`]'s `Display` impl and handed to the registry's
//! [`Reporter`], after which the failing entry point returns its failure
//! value and the caller decides how to continue.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

/// Error callback held by a registry for its whole lifetime.
pub type ErrorFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Failures reported while consuming arguments or validating dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingError {
	/// Colon-list syntax used on a setting without list support.
	#[error("'{name}' does not accept multiple arguments")]
	MultipleArgumentsUnsupported { name: String },

	/// Property syntax used on a setting without property support.
	#[error("'{name}' does not accept property style arguments")]
	PropertyStyleUnsupported { name: String },

	/// The setting needs a value but no tokens remained.
	#[error("missing argument for '{name}'")]
	MissingArgument { name: String },

	/// A token is not one of the accepted values.
	#[error("'{arg}' is not a valid choice for '{name}'")]
	InvalidChoice { name: String, arg: String },

	/// A token could not be parsed as an integer.
	#[error("'{arg}' is not a valid number for '{name}'")]
	InvalidNumber { name: String, arg: String },

	/// An integer fell outside the accepted range.
	#[error("'{value}' is out of range for '{name}' (expected {min}..={max})")]
	OutOfRange { name: String, value: i64, min: i64, max: i64 },

	/// A property token had an empty key.
	#[error("'{arg}' is not a valid property for '{name}' (expected key=value)")]
	InvalidProperty { name: String, arg: String },

	/// A list item that plain syntax would read as the next option.
	#[error("'{arg}' looks like an option and cannot be a value for '{name}'")]
	OptionLikeValue { name: String, arg: String },

	/// An active setting's prerequisite does not hold.
	#[error("incomplete option {name} (requires {requires})")]
	IncompleteOption { name: String, requires: String },
}

/// Registration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// Two settings share the same name.
	#[error("duplicate setting name: {0}")]
	DuplicateName(String),
}

/// Wraps the error callback so every failure path reports the same way.
#[derive(Clone)]
pub struct Reporter {
	sink: ErrorFn,
}

impl Reporter {
	/// Creates a reporter forwarding messages to `f`.
	pub fn new(f: impl Fn(&str) + Send + Sync + 'static) -> Self {
		Self { sink: Arc::new(f) }
	}

	/// A reporter that drops every message.
	pub fn silent() -> Self {
		Self::new(|_| {})
	}

	/// Renders `err` and hands it to the callback.
	pub fn report(&self, err: &dyn fmt::Display) {
		let msg = err.to_string();
		tracing::debug!(error = %msg, "setting error reported");
		(self.sink)(&msg);
	}

	/// Reports `err`, then returns `value`.
	pub fn error_and_value<T>(&self, err: SettingError, value: T) -> T {
		self.report(&err);
		value
	}
}

impl fmt::Debug for Reporter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Reporter").finish_non_exhaustive()
	}
}

/// Collects reported messages in order.
///
/// Cloning shares the underlying buffer, so a log can hand out a
/// [`Reporter`] and still be inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct ErrorLog {
	messages: Arc<Mutex<Vec<String>>>,
}

impl ErrorLog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a reporter appending to this log.
	pub fn reporter(&self) -> Reporter {
		let messages = Arc::clone(&self.messages);
		Reporter::new(move |msg| messages.lock().push(msg.to_string()))
	}

	/// Returns a copy of every message reported so far.
	pub fn messages(&self) -> Vec<String> {
		self.messages.lock().clone()
	}

	/// Removes and returns every message reported so far.
	pub fn take(&self) -> Vec<String> {
		std::mem::take(&mut *self.messages.lock())
	}

	pub fn len(&self) -> usize {
		self.messages.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.lock().is_empty()
	}
}
