//! Mutable storage strategy.
//!
//! Settings carry their state directly and consumption writes it in place.
//! Mutation goes through `&mut` borrows of the registry, so one registry
//! serves one tokenizing pass at a time.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::collision::{self, LabelTable};
use crate::contract::{Setting, SettingInfo, Settings};
use crate::def::{ArgStyle, SettingDef};
use crate::error::{RegistryError, Reporter};

#[cfg(test)]
mod tests;

/// A registry whose settings are updated in place.
#[derive(Debug)]
pub struct MutableSettings {
	settings: Vec<MutableSetting>,
	reporter: Reporter,
	labels: Arc<Mutex<LabelTable>>,
}

/// A setting owned by a [`MutableSettings`].
#[derive(Debug)]
pub struct MutableSetting {
	def: SettingDef,
	reporter: Reporter,
	/// Shared with the owning registry.
	labels: Arc<Mutex<LabelTable>>,
}

impl MutableSettings {
	/// Creates an empty registry reporting through `reporter`.
	pub fn new(reporter: Reporter) -> Self {
		Self {
			settings: Vec::new(),
			reporter,
			labels: Arc::default(),
		}
	}

	/// Creates a registry holding `defs` in order.
	pub fn with_settings(reporter: Reporter, defs: impl IntoIterator<Item = SettingDef>) -> Result<Self, RegistryError> {
		let mut registry = Self::new(reporter);
		for def in defs {
			registry.insert(def)?;
		}
		collision::warn_all("mutable", &registry.abbreviation_collisions());
		Ok(registry)
	}

	/// Registers `def` and returns it for further configuration.
	pub fn add(&mut self, def: SettingDef) -> Result<&mut MutableSetting, RegistryError> {
		let name = def.name().to_string();
		self.insert(def)?;

		let collisions: Vec<_> = self
			.abbreviation_collisions()
			.into_iter()
			.filter(|c| c.shadowed == name)
			.collect();
		collision::warn_all("mutable", &collisions);

		let last = self.settings.len() - 1;
		Ok(&mut self.settings[last])
	}

	fn insert(&mut self, def: SettingDef) -> Result<(), RegistryError> {
		if self.settings.iter().any(|s| s.name() == def.name()) {
			return Err(RegistryError::DuplicateName(def.name().to_string()));
		}
		self.labels.lock().push(def.name(), def.abbreviations());
		self.settings.push(MutableSetting {
			def,
			reporter: self.reporter.clone(),
			labels: Arc::clone(&self.labels),
		});
		Ok(())
	}

	/// Mutable counterpart of [`Settings::lookup_setting`].
	pub fn lookup_setting_mut(&mut self, label: &str) -> Option<&mut MutableSetting> {
		self.settings.iter_mut().find(|s| s.respond_to(label))
	}

	pub fn iter(&self) -> impl Iterator<Item = &MutableSetting> {
		self.settings.iter()
	}

	pub fn len(&self) -> usize {
		self.settings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.settings.is_empty()
	}
}

impl Clone for MutableSettings {
	fn clone(&self) -> Self {
		let mut registry = Self::new(self.reporter.clone());
		for setting in &self.settings {
			registry.labels.lock().push(setting.name(), setting.abbreviations());
			registry.settings.push(MutableSetting {
				def: setting.def.clone(),
				reporter: setting.reporter.clone(),
				labels: Arc::clone(&registry.labels),
			});
		}
		registry
	}
}

impl Settings for MutableSettings {
	type Setting<'a> = &'a MutableSetting;

	fn reporter(&self) -> &Reporter {
		&self.reporter
	}

	fn all_settings(&self) -> impl Iterator<Item = &MutableSetting> {
		self.settings.iter()
	}
}

impl PartialEq for MutableSettings {
	fn eq(&self, other: &Self) -> bool {
		self.settings_eq(other)
	}
}

impl Eq for MutableSettings {}

impl Hash for MutableSettings {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.settings_hash(state);
	}
}

impl fmt::Display for MutableSettings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.fmt_verbose(f)
	}
}

impl SettingInfo for MutableSetting {
	fn def(&self) -> &SettingDef {
		&self.def
	}

	fn reporter(&self) -> &Reporter {
		&self.reporter
	}
}

impl<'a> Setting for &'a mut MutableSetting {
	type Applied = Vec<String>;

	fn consume(self, style: ArgStyle, args: &[String]) -> Option<Vec<String>> {
		let consumed = self.def.consume(&self.reporter, style, args)?;
		self.def.apply(consumed.value);
		Some(consumed.rest)
	}

	fn with_abbreviation(self, label: &str) -> Self {
		self.def.add_abbreviation(label.to_string());
		let collisions = self.labels.lock().add_abbreviation(self.def.name(), label);
		collision::warn_all("mutable", &collisions);
		self
	}

	fn with_help_syntax(self, help: &str) -> Self {
		self.def.set_help_syntax(help.to_string());
		self
	}

	fn with_deprecation_message(self, msg: &str) -> Self {
		self.def.set_deprecation(msg.to_string());
		self
	}

	fn internal_only(self) -> Self {
		self.def.set_internal_only();
		self
	}
}

impl PartialEq for MutableSetting {
	fn eq(&self, other: &Self) -> bool {
		self.same_setting(other)
	}
}

impl Eq for MutableSetting {}

impl Hash for MutableSetting {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name().hash(state);
		self.value().hash(state);
	}
}

impl PartialOrd for MutableSetting {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for MutableSetting {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.compare(other).then_with(|| self.value().cmp(other.value()))
	}
}

impl fmt::Display for MutableSetting {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.describe())
	}
}
