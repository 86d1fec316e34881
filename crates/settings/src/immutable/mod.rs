//! Immutable storage strategy.
//!
//! A registry is a snapshot. Consumption and builder operations never touch
//! it; they return a new snapshot with one member replaced. Unchanged
//! members are shared between snapshots, and snapshots can be read from any
//! number of threads.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collision;
use crate::contract::{Setting, SettingInfo, Settings};
use crate::def::{ArgStyle, SettingDef};
use crate::error::{RegistryError, Reporter};
use crate::mutable::MutableSettings;

#[cfg(test)]
mod tests;

/// A snapshot of settings.
///
/// Cloning is cheap and yields the same snapshot.
#[derive(Clone)]
pub struct ImmutableSettings {
	inner: Arc<Snapshot>,
}

struct Snapshot {
	settings: Vec<Arc<SettingDef>>,
	reporter: Reporter,
}

/// A setting within one particular snapshot.
///
/// Operations that change the setting return a handle into a new snapshot,
/// reachable through [`owner`](Self::owner).
#[derive(Clone)]
pub struct ImmutableSetting {
	owner: ImmutableSettings,
	index: usize,
}

impl ImmutableSettings {
	/// Creates a snapshot holding `defs` in order.
	pub fn new(reporter: Reporter, defs: impl IntoIterator<Item = SettingDef>) -> Result<Self, RegistryError> {
		let mut settings: Vec<Arc<SettingDef>> = Vec::new();
		for def in defs {
			if settings.iter().any(|s| s.name() == def.name()) {
				return Err(RegistryError::DuplicateName(def.name().to_string()));
			}
			settings.push(Arc::new(def));
		}
		let snapshot = Self::from_parts(settings, reporter);
		collision::warn_all("immutable", &snapshot.abbreviation_collisions());
		Ok(snapshot)
	}

	/// A snapshot with no settings.
	pub fn empty(reporter: Reporter) -> Self {
		Self::from_parts(Vec::new(), reporter)
	}

	fn from_parts(settings: Vec<Arc<SettingDef>>, reporter: Reporter) -> Self {
		Self {
			inner: Arc::new(Snapshot { settings, reporter }),
		}
	}

	/// A new snapshot with `def` registered after the existing settings.
	pub fn with_setting(&self, def: SettingDef) -> Result<Self, RegistryError> {
		if self.inner.settings.iter().any(|s| s.name() == def.name()) {
			return Err(RegistryError::DuplicateName(def.name().to_string()));
		}
		let name = def.name().to_string();
		let mut settings = self.inner.settings.clone();
		settings.push(Arc::new(def));
		let snapshot = Self::from_parts(settings, self.inner.reporter.clone());

		let collisions: Vec<_> = snapshot
			.abbreviation_collisions()
			.into_iter()
			.filter(|c| c.shadowed == name)
			.collect();
		collision::warn_all("immutable", &collisions);
		Ok(snapshot)
	}

	/// A new snapshot with the member at `index` replaced by `def`.
	fn replaced(&self, index: usize, def: SettingDef) -> Self {
		let mut settings = self.inner.settings.clone();
		settings[index] = Arc::new(def);
		Self::from_parts(settings, self.inner.reporter.clone())
	}

	/// Whether both values are the very same snapshot.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}

	pub fn len(&self) -> usize {
		self.inner.settings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.settings.is_empty()
	}
}

impl Settings for ImmutableSettings {
	type Setting<'a> = ImmutableSetting;

	fn reporter(&self) -> &Reporter {
		&self.inner.reporter
	}

	fn all_settings(&self) -> impl Iterator<Item = ImmutableSetting> {
		(0..self.len()).map(|index| ImmutableSetting {
			owner: self.clone(),
			index,
		})
	}
}

impl From<&MutableSettings> for ImmutableSettings {
	fn from(registry: &MutableSettings) -> Self {
		let settings = registry.iter().map(|s| Arc::new(s.def().clone())).collect();
		Self::from_parts(settings, registry.reporter().clone())
	}
}

impl PartialEq for ImmutableSettings {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other) || self.settings_eq(other)
	}
}

impl Eq for ImmutableSettings {}

impl Hash for ImmutableSettings {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.settings_hash(state);
	}
}

impl fmt::Display for ImmutableSettings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.fmt_verbose(f)
	}
}

impl fmt::Debug for ImmutableSettings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.inner.settings.iter()).finish()
	}
}

impl ImmutableSetting {
	/// The snapshot this handle points into.
	pub fn owner(&self) -> &ImmutableSettings {
		&self.owner
	}

	/// A handle to an edited copy of this setting in a new snapshot.
	fn updated(&self, edit: impl FnOnce(&mut SettingDef)) -> Self {
		let mut def = self.def().clone();
		edit(&mut def);
		Self {
			owner: self.owner.replaced(self.index, def),
			index: self.index,
		}
	}
}

impl SettingInfo for ImmutableSetting {
	fn def(&self) -> &SettingDef {
		&self.owner.inner.settings[self.index]
	}

	fn reporter(&self) -> &Reporter {
		&self.owner.inner.reporter
	}
}

impl Setting for ImmutableSetting {
	type Applied = (ImmutableSettings, Vec<String>);

	fn consume(self, style: ArgStyle, args: &[String]) -> Option<Self::Applied> {
		let consumed = self.def().consume(self.reporter(), style, args)?;
		let mut def = self.def().clone();
		def.apply(consumed.value);
		Some((self.owner.replaced(self.index, def), consumed.rest))
	}

	fn with_abbreviation(self, label: &str) -> Self {
		let updated = self.updated(|def| def.add_abbreviation(label.to_string()));
		let collisions = collision::involving(updated.owner.abbreviation_collisions(), updated.name(), label);
		collision::warn_all("immutable", &collisions);
		updated
	}

	fn with_help_syntax(self, help: &str) -> Self {
		self.updated(|def| def.set_help_syntax(help.to_string()))
	}

	fn with_deprecation_message(self, msg: &str) -> Self {
		self.updated(|def| def.set_deprecation(msg.to_string()))
	}

	fn internal_only(self) -> Self {
		self.updated(SettingDef::set_internal_only)
	}
}

impl PartialEq for ImmutableSetting {
	fn eq(&self, other: &Self) -> bool {
		self.same_setting(other)
	}
}

impl Eq for ImmutableSetting {}

impl Hash for ImmutableSetting {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name().hash(state);
		self.value().hash(state);
	}
}

impl PartialOrd for ImmutableSetting {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for ImmutableSetting {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.compare(other).then_with(|| self.value().cmp(other.value()))
	}
}

impl fmt::Display for ImmutableSetting {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.describe())
	}
}

impl fmt::Debug for ImmutableSetting {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ImmutableSetting")
			.field("index", &self.index)
			.field("def", self.def())
			.finish()
	}
}
