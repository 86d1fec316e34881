use crate::error::SettingError;
use crate::kind::{Consumed, SetContext, SettingKind};
use crate::parse::parse_bool;
use crate::value::SettingValue;

/// A flag that is off until named.
///
/// Plain syntax consumes no tokens. Property syntax accepts an explicit
/// boolean (`-flag=false`) or a bare `-flag`.
///
/// An explicit `false` leaves the default state but unparses to nothing:
/// plain syntax cannot spell `false`, and replaying no tokens leaves a fresh
/// setting at its default, which is already `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanKind;

impl SettingKind for BooleanKind {
	fn default_value(&self) -> SettingValue {
		SettingValue::Bool(false)
	}

	fn try_to_set(&self, _cx: &SetContext<'_>, args: &[String]) -> Option<Consumed> {
		Some(Consumed::new(true, args))
	}

	fn try_to_set_property(&self, cx: &SetContext<'_>, args: &[String]) -> Option<Consumed> {
		match args {
			[] => Some(Consumed::all(true)),
			[arg] => match parse_bool(arg) {
				Some(v) => Some(Consumed::all(v)),
				None => cx.error_and_value(
					SettingError::InvalidChoice {
						name: cx.name().to_string(),
						arg: arg.clone(),
					},
					None,
				),
			},
			_ => cx.error_and_value(
				SettingError::InvalidChoice {
					name: cx.name().to_string(),
					arg: args.join(","),
				},
				None,
			),
		}
	}

	fn unparse(&self, name: &str, value: &SettingValue) -> Vec<String> {
		match value.as_bool() {
			Some(true) => vec![name.to_string()],
			_ => Vec::new(),
		}
	}
}
