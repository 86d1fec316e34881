//! Shared parsing utilities for setting arguments.
//!
//! Used by the built-in variants for their token grammars and by drivers to
//! suggest a close match for an unknown label.

use crate::contract::{SettingInfo, Settings};

/// Maximum edit distance for [`suggest_setting`].
const SUGGEST_DISTANCE: usize = 3;

/// Parse a boolean value from common string representations.
pub fn parse_bool(value: &str) -> Option<bool> {
	match value.to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Some(true),
		"false" | "0" | "no" | "off" => Some(false),
		_ => None,
	}
}

/// Parse an integer value.
pub fn parse_int(value: &str) -> Option<i64> {
	value.trim().parse::<i64>().ok()
}

/// Splits `key=value` (or a bare `key`) into its parts.
///
/// Returns `None` when the key is empty.
pub fn parse_property(value: &str) -> Option<(&str, Option<&str>)> {
	let (key, val) = match value.split_once('=') {
		Some((key, val)) => (key, Some(val)),
		None => (value, None),
	};
	(!key.is_empty()).then_some((key, val))
}

/// Suggests a visible setting name close to `label`.
pub fn suggest_setting<S: Settings>(settings: &S, label: &str) -> Option<String> {
	settings
		.visible_settings()
		.iter()
		.map(|s| s.name().to_string())
		.min_by_key(|name| strsim::levenshtein(label, name))
		.filter(|name| strsim::levenshtein(label, name) <= SUGGEST_DISTANCE)
}
