//! Diagnostics for labels claimed by more than one setting.
//!
//! Lookup is first-match-wins in registration order, so a later setting
//! whose name or abbreviation is already taken can never be reached through
//! that label. Registries keep such settings and record the collision here.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::contract::SettingInfo;

/// Distinguishes the type of label that collided.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeyKind {
	/// The setting's name.
	Name,
	/// One of the setting's abbreviations.
	Abbreviation,
}

impl fmt::Display for KeyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			KeyKind::Name => write!(f, "name"),
			KeyKind::Abbreviation => write!(f, "abbreviation"),
		}
	}
}

/// A label that resolves to an earlier setting than the one declaring it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
	/// What kind of label the shadowed setting declared.
	pub kind: KeyKind,
	/// The colliding label.
	pub key: String,
	/// Setting that lookup returns for `key`.
	pub winner: String,
	/// Setting that declared `key` but is not reachable through it.
	pub shadowed: String,
}

impl fmt::Display for Collision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} {:?} of {} is shadowed by {}",
			self.kind, self.key, self.shadowed, self.winner
		)
	}
}

/// Walks `settings` in lookup order and records every shadowed label.
pub fn detect<S: SettingInfo>(settings: impl IntoIterator<Item = S>) -> Vec<Collision> {
	let mut table = LabelTable::default();
	for setting in settings {
		table.push(setting.name(), setting.abbreviations());
	}
	table.collisions()
}

/// Collisions on `label` that the setting `name` takes part in.
pub(crate) fn involving(collisions: Vec<Collision>, name: &str, label: &str) -> Vec<Collision> {
	collisions
		.into_iter()
		.filter(|c| c.key == label && (c.winner == name || c.shadowed == name))
		.collect()
}

/// Names and abbreviations of a registry's settings, in lookup order.
///
/// Lets a single setting check its registry for collisions when it gains an
/// abbreviation after registration.
#[derive(Debug, Clone, Default)]
pub(crate) struct LabelTable {
	entries: Vec<(String, Vec<String>)>,
}

impl LabelTable {
	pub(crate) fn push(&mut self, name: &str, abbreviations: &[String]) {
		self.entries.push((name.to_string(), abbreviations.to_vec()));
	}

	/// Records `label` for `name` and returns the collisions it takes part in.
	pub(crate) fn add_abbreviation(&mut self, name: &str, label: &str) -> Vec<Collision> {
		if let Some((_, labels)) = self.entries.iter_mut().find(|(n, _)| n == name)
			&& !labels.iter().any(|l| l == label)
		{
			labels.push(label.to_string());
		}
		involving(self.collisions(), name, label)
	}

	pub(crate) fn collisions(&self) -> Vec<Collision> {
		let mut owners: FxHashMap<&str, &str> = FxHashMap::default();
		let mut collisions = Vec::new();

		for (name, abbreviations) in &self.entries {
			let labels = std::iter::once((KeyKind::Name, name.as_str()))
				.chain(abbreviations.iter().map(|a| (KeyKind::Abbreviation, a.as_str())));

			for (kind, label) in labels {
				match owners.get(label) {
					Some(owner) if *owner != name.as_str() => collisions.push(Collision {
						kind,
						key: label.to_string(),
						winner: owner.to_string(),
						shadowed: name.clone(),
					}),
					Some(_) => {}
					None => {
						owners.insert(label, name);
					}
				}
			}
		}

		collisions
	}
}

/// Logs each collision; lookup behavior is unchanged.
pub(crate) fn warn_all(registry: &'static str, collisions: &[Collision]) {
	for c in collisions {
		tracing::warn!(
			registry,
			kind = %c.kind,
			key = %c.key,
			winner = %c.winner,
			shadowed = %c.shadowed,
			"setting label collision; first registered wins",
		);
	}
}
