//! Built-in setting variants.
//!
//! Each variant is a [`SettingKind`](crate::SettingKind) and has a matching
//! shorthand constructor on [`SettingDef`].

mod boolean;
mod choice;
mod int;
mod multi;
mod property;
mod string;

pub use boolean::BooleanKind;
pub use choice::ChoiceKind;
pub use int::IntKind;
pub use multi::MultiStringKind;
pub use property::PropertyKind;
pub use string::StringKind;

use crate::def::SettingDef;

impl SettingDef {
	/// A flag that is off until named.
	pub fn boolean(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self::new(name, description, BooleanKind)
	}

	/// An integer with a default.
	pub fn int(name: impl Into<String>, description: impl Into<String>, default: i64) -> Self {
		Self::new(name, description, IntKind::new(default))
	}

	/// An integer restricted to `min..=max`.
	pub fn int_in_range(name: impl Into<String>, description: impl Into<String>, default: i64, min: i64, max: i64) -> Self {
		Self::new(name, description, IntKind::new(default).with_range(min, max))
	}

	/// A single string; `arg` is the placeholder shown in help.
	pub fn string(
		name: impl Into<String>,
		arg: impl Into<String>,
		default: impl Into<String>,
		description: impl Into<String>,
	) -> Self {
		Self::new(name, description, StringKind::new(arg, default))
	}

	/// An accumulating list of strings.
	pub fn multi_string(name: impl Into<String>, arg: impl Into<String>, description: impl Into<String>) -> Self {
		Self::new(name, description, MultiStringKind::new(arg))
	}

	/// One value out of `choices`.
	pub fn choice(
		name: impl Into<String>,
		arg: impl Into<String>,
		description: impl Into<String>,
		choices: impl IntoIterator<Item = impl Into<String>>,
		default: impl Into<String>,
	) -> Self {
		Self::new(name, description, ChoiceKind::new(arg, choices, default))
	}

	/// Accumulated `key=value` properties.
	pub fn property(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self::new(name, description, PropertyKind)
	}
}
