//! The capability set shared by both storage strategies.
//!
//! [`SettingInfo`] is the read-only half every setting exposes. [`Setting`]
//! adds the consumption protocol and builder operations; its receivers are
//! taken by value so each strategy picks what "self" is: a `&mut` borrow for
//! the mutable registry (builders hand the same setting back) and an owned
//! snapshot handle for the immutable one (builders hand back a new one).
//! [`Settings`] holds the registry-level algorithms written once over
//! [`SettingInfo`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;

use crate::collision::{self, Collision};
use crate::def::{ArgStyle, Dependency, SettingDef};
use crate::error::{Reporter, SettingError};
use crate::value::SettingValue;

/// Names that mark a whole category of settings rather than one option.
pub const CATEGORY_MARKERS: &[&str] = &["-X", "-Y", "-P"];

const ADVANCED_PREFIX: &str = "-X";
const PRIVATE_PREFIX: &str = "-Y";
const DEBUG_SUFFIX: &str = "-debug";

/// Read-only view of a setting.
pub trait SettingInfo {
	fn def(&self) -> &SettingDef;

	fn reporter(&self) -> &Reporter;

	fn name(&self) -> &str {
		self.def().name()
	}

	fn help_description(&self) -> &str {
		self.def().description()
	}

	fn abbreviations(&self) -> &[String] {
		self.def().abbreviations()
	}

	fn dependencies(&self) -> &[Dependency] {
		self.def().dependencies()
	}

	fn value(&self) -> &SettingValue {
		self.def().value()
	}

	fn is_default(&self) -> bool {
		self.def().is_default()
	}

	fn is_internal_only(&self) -> bool {
		self.def().is_internal_only()
	}

	fn deprecation_message(&self) -> Option<&str> {
		self.def().deprecation_message()
	}

	fn help_syntax(&self) -> String {
		self.def().resolved_help_syntax()
	}

	fn choices(&self) -> Vec<String> {
		self.def().kind().choices()
	}

	/// Tokens that recreate the current value; empty while still at default.
	fn unparse(&self) -> Vec<String> {
		if self.is_default() {
			return Vec::new();
		}
		self.def().kind().unparse(self.name(), self.value())
	}

	/// Checks both the name and every abbreviation.
	fn respond_to(&self, label: &str) -> bool {
		self.name() == label || self.abbreviations().iter().any(|a| a == label)
	}

	fn is_category(&self) -> bool {
		CATEGORY_MARKERS.contains(&self.name())
	}

	fn is_advanced(&self) -> bool {
		!self.is_category() && self.name().starts_with(ADVANCED_PREFIX)
	}

	fn is_private(&self) -> bool {
		!self.is_category() && self.name().starts_with(PRIVATE_PREFIX)
	}

	fn is_standard(&self) -> bool {
		!self.is_category() && !self.is_advanced() && !self.is_private()
	}

	fn is_for_debug(&self) -> bool {
		self.name().ends_with(DEBUG_SUFFIX)
	}

	fn is_deprecated(&self) -> bool {
		self.deprecation_message().is_some()
	}

	/// Orders by name alone.
	fn compare<S: SettingInfo + ?Sized>(&self, other: &S) -> Ordering {
		self.name().cmp(other.name())
	}

	/// Two settings are the same iff names and values are equal.
	fn same_setting<S: SettingInfo + ?Sized>(&self, other: &S) -> bool {
		self.name() == other.name() && self.value() == other.value()
	}

	/// `name = value`, with an empty value shown as `""`.
	fn describe(&self) -> String {
		if self.value().is_empty() {
			format!("{} = \"\"", self.name())
		} else {
			format!("{} = {}", self.name(), self.value())
		}
	}

	fn error_and_value<T>(&self, err: SettingError, value: T) -> T {
		self.reporter().error_and_value(err, value)
	}
}

impl<T: SettingInfo + ?Sized> SettingInfo for &T {
	fn def(&self) -> &SettingDef {
		(**self).def()
	}

	fn reporter(&self) -> &Reporter {
		(**self).reporter()
	}
}

impl<T: SettingInfo + ?Sized> SettingInfo for &mut T {
	fn def(&self) -> &SettingDef {
		(**self).def()
	}

	fn reporter(&self) -> &Reporter {
		(**self).reporter()
	}
}

/// Consumption protocol and builder operations.
///
/// Every entry point returns `None` after reporting through the registry's
/// callback; callers must not treat tokens as consumed in that case.
pub trait Setting: SettingInfo + Sized {
	/// Payload of a successful consumption.
	type Applied;

	/// Runs the entry point for `style`.
	fn consume(self, style: ArgStyle, args: &[String]) -> Option<Self::Applied>;

	/// Consumes a prefix of the tokens following this setting's name.
	fn try_to_set(self, args: &[String]) -> Option<Self::Applied> {
		self.consume(ArgStyle::Plain, args)
	}

	/// Consumes `name:a,b`, with `args` already split on the delimiter.
	fn try_to_set_colon(self, args: &[String]) -> Option<Self::Applied> {
		self.consume(ArgStyle::Colon, args)
	}

	/// Consumes `name=value`, or bare `name` with no args.
	fn try_to_set_property(self, args: &[String]) -> Option<Self::Applied> {
		self.consume(ArgStyle::Property, args)
	}

	/// Sets from a single properties-file value.
	fn try_to_set_from_property_value(self, s: &str) -> Option<Self::Applied> {
		self.try_to_set(&[s.to_string()])
	}

	#[must_use]
	fn with_abbreviation(self, label: &str) -> Self;

	#[must_use]
	fn with_help_syntax(self, help: &str) -> Self;

	#[must_use]
	fn with_deprecation_message(self, msg: &str) -> Self;

	/// Hides the setting from visible and help listings.
	#[must_use]
	fn internal_only(self) -> Self;
}

/// A registry of settings.
pub trait Settings {
	/// What iteration and lookup hand out.
	type Setting<'a>: SettingInfo
	where
		Self: 'a;

	/// Callback every failure is reported through.
	fn reporter(&self) -> &Reporter;

	/// Every setting, in registration order.
	fn all_settings(&self) -> impl Iterator<Item = Self::Setting<'_>>;

	/// Settings minus internal-only ones.
	fn visible_settings(&self) -> Vec<Self::Setting<'_>> {
		self.all_settings().filter(|s| !s.is_internal_only()).collect()
	}

	/// Visible settings that left their default.
	fn user_set_settings(&self) -> Vec<Self::Setting<'_>> {
		self.all_settings()
			.filter(|s| !s.is_internal_only() && !s.is_default())
			.collect()
	}

	/// First setting responding to `label`, by name or abbreviation.
	fn lookup_setting(&self, label: &str) -> Option<Self::Setting<'_>> {
		self.all_settings().find(|s| s.respond_to(label))
	}

	/// Checks every prerequisite of every visible non-default setting.
	///
	/// Each unmet prerequisite is reported; checking continues past the first
	/// failure.
	fn check_dependencies(&self) -> bool {
		let mut satisfied = true;
		for setting in self.user_set_settings() {
			for dep in setting.dependencies() {
				let prerequisite = self.lookup_setting(&dep.setting);
				let holds = prerequisite.as_ref().is_some_and(|p| p.value().to_string() == dep.value);
				if !holds {
					let requires = prerequisite.as_ref().map_or_else(|| dep.setting.clone(), |p| p.name().to_string());
					self.reporter().report(&SettingError::IncompleteOption {
						name: setting.name().to_string(),
						requires,
					});
					satisfied = false;
				}
			}
		}
		satisfied
	}

	/// Visible settings compared as unordered sets.
	fn settings_eq(&self, other: &Self) -> bool {
		let mine = self.visible_settings();
		let theirs = other.visible_settings();
		if mine.len() != theirs.len() {
			return false;
		}
		let index: FxHashMap<&str, &SettingValue> = theirs.iter().map(|s| (s.name(), s.value())).collect();
		mine.iter().all(|s| index.get(s.name()).is_some_and(|v| *v == s.value()))
	}

	/// Order-independent hash of the visible settings.
	fn settings_hash<H: Hasher>(&self, state: &mut H) {
		let mut visible = self.visible_settings();
		visible.sort_by(|a, b| a.compare(b));
		visible.len().hash(state);
		for setting in &visible {
			setting.name().hash(state);
			setting.value().hash(state);
		}
	}

	/// User-set settings sorted by name.
	fn sorted_user_set_settings(&self) -> Vec<Self::Setting<'_>> {
		let mut settings = self.user_set_settings();
		settings.sort_by(|a, b| a.compare(b));
		settings
	}

	/// Multi-line listing of user-set settings.
	fn fmt_verbose(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Settings {{")?;
		for setting in self.sorted_user_set_settings() {
			writeln!(f, "  {}", setting.describe())?;
		}
		writeln!(f, "}}")
	}

	/// Single-line listing of user-set settings.
	fn to_concise_string(&self) -> String {
		let parts: Vec<String> = self.sorted_user_set_settings().iter().map(|s| s.describe()).collect();
		format!("({})", parts.join(" "))
	}

	/// Names and abbreviations claimed by more than one setting.
	fn abbreviation_collisions(&self) -> Vec<Collision> {
		collision::detect(self.all_settings())
	}
}
