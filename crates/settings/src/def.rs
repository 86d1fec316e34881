use std::fmt;
use std::sync::Arc;

use crate::error::Reporter;
use crate::kind::{Consumed, SetContext, SettingKind};
use crate::value::SettingValue;

/// A prerequisite: `setting` must currently render as `value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
	/// Name (or abbreviation) of the prerequisite setting.
	pub setting: String,
	/// Required string form of its value.
	pub value: String,
}

/// Which consumption entry point to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgStyle {
	/// `name arg...`
	Plain,
	/// `name:a,b`
	Colon,
	/// `name=value` or bare `name`
	Property,
}

/// Definition and current state of one setting.
///
/// Registries of both strategies are built from these. The builder methods
/// consume and return the definition so catalogs can be written as one
/// expression per setting.
#[derive(Clone)]
pub struct SettingDef {
	name: String,
	description: String,
	abbreviations: Vec<String>,
	dependencies: Vec<Dependency>,
	help_syntax: Option<String>,
	deprecation: Option<String>,
	internal_only: bool,
	kind: Arc<dyn SettingKind>,
	value: SettingValue,
	is_default: bool,
}

impl SettingDef {
	pub fn new(name: impl Into<String>, description: impl Into<String>, kind: impl SettingKind + 'static) -> Self {
		Self::from_kind(name, description, Arc::new(kind))
	}

	pub fn from_kind(name: impl Into<String>, description: impl Into<String>, kind: Arc<dyn SettingKind>) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			abbreviations: Vec::new(),
			dependencies: Vec::new(),
			help_syntax: None,
			deprecation: None,
			internal_only: false,
			value: kind.default_value(),
			kind,
			is_default: true,
		}
	}

	pub fn abbreviation(mut self, label: impl Into<String>) -> Self {
		self.add_abbreviation(label.into());
		self
	}

	pub fn help_syntax(mut self, help: impl Into<String>) -> Self {
		self.help_syntax = Some(help.into());
		self
	}

	pub fn deprecated(mut self, msg: impl Into<String>) -> Self {
		self.deprecation = Some(msg.into());
		self
	}

	pub fn depends_on(mut self, setting: impl Into<String>, value: impl Into<String>) -> Self {
		self.dependencies.push(Dependency {
			setting: setting.into(),
			value: value.into(),
		});
		self
	}

	pub fn internal_only(mut self) -> Self {
		self.internal_only = true;
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn abbreviations(&self) -> &[String] {
		&self.abbreviations
	}

	pub fn dependencies(&self) -> &[Dependency] {
		&self.dependencies
	}

	pub fn deprecation_message(&self) -> Option<&str> {
		self.deprecation.as_deref()
	}

	pub fn is_internal_only(&self) -> bool {
		self.internal_only
	}

	pub fn kind(&self) -> &dyn SettingKind {
		&*self.kind
	}

	pub fn value(&self) -> &SettingValue {
		&self.value
	}

	pub fn is_default(&self) -> bool {
		self.is_default
	}

	/// Explicit help syntax if one was given, otherwise the variant's.
	pub fn resolved_help_syntax(&self) -> String {
		match &self.help_syntax {
			Some(help) => help.clone(),
			None => self.kind.help_syntax(&self.name),
		}
	}

	pub(crate) fn add_abbreviation(&mut self, label: String) {
		if !self.abbreviations.contains(&label) {
			self.abbreviations.push(label);
		}
	}

	pub(crate) fn set_help_syntax(&mut self, help: String) {
		self.help_syntax = Some(help);
	}

	pub(crate) fn set_deprecation(&mut self, msg: String) {
		self.deprecation = Some(msg);
	}

	pub(crate) fn set_internal_only(&mut self) {
		self.internal_only = true;
	}

	/// Runs the entry point for `style` against the current value.
	///
	/// Nothing is stored; the caller applies the returned value.
	pub(crate) fn consume(&self, reporter: &Reporter, style: ArgStyle, args: &[String]) -> Option<Consumed> {
		let cx = SetContext::new(&self.name, &self.value, reporter);
		match style {
			ArgStyle::Plain => self.kind.try_to_set(&cx, args),
			ArgStyle::Colon => self.kind.try_to_set_colon(&cx, args),
			ArgStyle::Property => self.kind.try_to_set_property(&cx, args),
		}
	}

	/// Stores `value` and leaves the default state for good.
	pub(crate) fn apply(&mut self, value: SettingValue) {
		tracing::debug!(setting = %self.name, value = %value, "setting applied");
		self.value = value;
		self.is_default = false;
	}
}

impl fmt::Debug for SettingDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SettingDef")
			.field("name", &self.name)
			.field("kind", &self.kind)
			.field("value", &self.value)
			.field("is_default", &self.is_default)
			.finish()
	}
}
