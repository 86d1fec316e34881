use super::multi::{extended, operand_count, reject_option_like};
use crate::error::SettingError;
use crate::kind::{Consumed, SetContext, SettingKind};
use crate::parse::parse_property;
use crate::value::SettingValue;

/// Accumulated `key=value` (or bare `key`) entries.
///
/// Keys may not start with `-` in any syntax, so every entry survives a
/// replay of `unparse` through plain syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyKind;

impl PropertyKind {
	/// Validates every entry, reporting the first malformed one.
	fn entries(cx: &SetContext<'_>, args: &[String]) -> Option<Vec<String>> {
		reject_option_like(cx, args)?;
		let mut entries = Vec::with_capacity(args.len());
		for arg in args {
			match parse_property(arg) {
				Some((key, Some(value))) => entries.push(format!("{key}={value}")),
				Some((key, None)) => entries.push(key.to_string()),
				None => {
					return cx.error_and_value(
						SettingError::InvalidProperty {
							name: cx.name().to_string(),
							arg: arg.clone(),
						},
						None,
					);
				}
			}
		}
		Some(entries)
	}

	fn missing(cx: &SetContext<'_>) -> Option<Consumed> {
		cx.error_and_value(
			SettingError::MissingArgument {
				name: cx.name().to_string(),
			},
			None,
		)
	}
}

impl SettingKind for PropertyKind {
	fn default_value(&self) -> SettingValue {
		SettingValue::List(Vec::new())
	}

	fn try_to_set(&self, cx: &SetContext<'_>, args: &[String]) -> Option<Consumed> {
		let n = operand_count(args);
		if n == 0 {
			return Self::missing(cx);
		}
		let (taken, rest) = args.split_at(n);
		let entries = Self::entries(cx, taken)?;
		Some(Consumed::new(extended(cx.current(), entries), rest))
	}

	fn try_to_set_property(&self, cx: &SetContext<'_>, args: &[String]) -> Option<Consumed> {
		if args.is_empty() {
			return Self::missing(cx);
		}
		let entries = Self::entries(cx, args)?;
		Some(Consumed::all(extended(cx.current(), entries)))
	}

	fn unparse(&self, name: &str, value: &SettingValue) -> Vec<String> {
		match value.as_list() {
			Some(items) if !items.is_empty() => std::iter::once(name.to_string()).chain(items.iter().cloned()).collect(),
			_ => Vec::new(),
		}
	}

	fn help_syntax(&self, name: &str) -> String {
		format!("{name} <key=value>")
	}
}
