//! The grammar a setting variant applies to its arguments.
//!
//! A [`SettingKind`] only decides what tokens mean. It never stores state:
//! the storage strategy hands it the current value through a
//! [`SetContext`] and applies whatever [`Consumed`] value it returns. This is
//! what lets the mutable and immutable registries share identical
//! consumption semantics.

use std::fmt;

use crate::error::{Reporter, SettingError};
use crate::value::SettingValue;

/// Read-only view of the setting being consumed into.
#[derive(Debug, Clone, Copy)]
pub struct SetContext<'a> {
	name: &'a str,
	current: &'a SettingValue,
	reporter: &'a Reporter,
}

impl<'a> SetContext<'a> {
	pub fn new(name: &'a str, current: &'a SettingValue, reporter: &'a Reporter) -> Self {
		Self { name, current, reporter }
	}

	/// Name of the setting, used in error messages.
	pub fn name(&self) -> &'a str {
		self.name
	}

	/// Value held before this consumption.
	pub fn current(&self) -> &'a SettingValue {
		self.current
	}

	pub fn reporter(&self) -> &'a Reporter {
		self.reporter
	}

	/// Reports `err` through the registry callback, then returns `value`.
	pub fn error_and_value<T>(&self, err: SettingError, value: T) -> T {
		self.reporter.error_and_value(err, value)
	}
}

/// Outcome of a successful consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consumed {
	/// Value to store in the setting.
	pub value: SettingValue,
	/// Tokens left unconsumed.
	pub rest: Vec<String>,
}

impl Consumed {
	pub fn new(value: impl Into<SettingValue>, rest: &[String]) -> Self {
		Self {
			value: value.into(),
			rest: rest.to_vec(),
		}
	}

	/// A consumption that used every token it was given.
	pub fn all(value: impl Into<SettingValue>) -> Self {
		Self {
			value: value.into(),
			rest: Vec::new(),
		}
	}
}

/// Grammar of one setting variant.
///
/// Only [`try_to_set`](Self::try_to_set) and [`unparse`](Self::unparse) are
/// required. Variants without list or property syntax inherit entry points
/// that report the canned "does not accept" message and fail.
pub trait SettingKind: fmt::Debug + Send + Sync {
	/// Built-in default value.
	fn default_value(&self) -> SettingValue;

	/// Consumes a prefix of `args`, the tokens following the setting's name.
	fn try_to_set(&self, cx: &SetContext<'_>, args: &[String]) -> Option<Consumed>;

	/// Consumes `name:a,b` syntax; `args` is already split on the delimiter.
	fn try_to_set_colon(&self, cx: &SetContext<'_>, _args: &[String]) -> Option<Consumed> {
		cx.error_and_value(
			SettingError::MultipleArgumentsUnsupported {
				name: cx.name().to_string(),
			},
			None,
		)
	}

	/// Consumes `name=value` syntax; `args` is empty for a bare `name`.
	fn try_to_set_property(&self, cx: &SetContext<'_>, _args: &[String]) -> Option<Consumed> {
		cx.error_and_value(
			SettingError::PropertyStyleUnsupported {
				name: cx.name().to_string(),
			},
			None,
		)
	}

	/// Tokens, starting with `name`, that recreate `value` through
	/// [`try_to_set`](Self::try_to_set).
	fn unparse(&self, name: &str, value: &SettingValue) -> Vec<String>;

	fn help_syntax(&self, name: &str) -> String {
		name.to_string()
	}

	/// Accepted values, for tools that list them.
	fn choices(&self) -> Vec<String> {
		Vec::new()
	}
}
