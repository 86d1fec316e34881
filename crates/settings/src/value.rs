//! Setting values.

use std::fmt;

/// The current value of a setting.
///
/// Every built-in variant stores its value as one of these. The string form
/// produced by [`Display`](fmt::Display) is what dependency checks compare
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingValue {
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// String value.
	String(String),
	/// Ordered list of strings.
	List(Vec<String>),
}

impl SettingValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			SettingValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			SettingValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			SettingValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the items if this is a `List` variant.
	pub fn as_list(&self) -> Option<&[String]> {
		match self {
			SettingValue::List(v) => Some(v),
			_ => None,
		}
	}

	/// Returns true for an empty string or an empty list.
	pub fn is_empty(&self) -> bool {
		match self {
			SettingValue::String(v) => v.is_empty(),
			SettingValue::List(v) => v.is_empty(),
			SettingValue::Bool(_) | SettingValue::Int(_) => false,
		}
	}
}

impl fmt::Display for SettingValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SettingValue::Bool(v) => write!(f, "{v}"),
			SettingValue::Int(v) => write!(f, "{v}"),
			SettingValue::String(v) => f.write_str(v),
			SettingValue::List(v) => f.write_str(&v.join(",")),
		}
	}
}

impl From<bool> for SettingValue {
	fn from(v: bool) -> Self {
		SettingValue::Bool(v)
	}
}

impl From<i64> for SettingValue {
	fn from(v: i64) -> Self {
		SettingValue::Int(v)
	}
}

impl From<String> for SettingValue {
	fn from(v: String) -> Self {
		SettingValue::String(v)
	}
}

impl From<&str> for SettingValue {
	fn from(v: &str) -> Self {
		SettingValue::String(v.to_string())
	}
}

impl From<Vec<String>> for SettingValue {
	fn from(v: Vec<String>) -> Self {
		SettingValue::List(v)
	}
}
