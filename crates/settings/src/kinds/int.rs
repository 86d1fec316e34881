use crate::error::SettingError;
use crate::kind::{Consumed, SetContext, SettingKind};
use crate::parse::parse_int;
use crate::value::SettingValue;

/// An integer taking one token, optionally bounded.
#[derive(Debug, Clone, Copy)]
pub struct IntKind {
	default: i64,
	range: Option<(i64, i64)>,
}

impl IntKind {
	pub fn new(default: i64) -> Self {
		Self { default, range: None }
	}

	/// Restricts accepted values to `min..=max`.
	pub fn with_range(mut self, min: i64, max: i64) -> Self {
		self.range = Some((min, max));
		self
	}

	fn parse_arg(&self, cx: &SetContext<'_>, arg: &str) -> Option<i64> {
		let Some(n) = parse_int(arg) else {
			return cx.error_and_value(
				SettingError::InvalidNumber {
					name: cx.name().to_string(),
					arg: arg.to_string(),
				},
				None,
			);
		};
		match self.range {
			Some((min, max)) if n < min || n > max => cx.error_and_value(
				SettingError::OutOfRange {
					name: cx.name().to_string(),
					value: n,
					min,
					max,
				},
				None,
			),
			_ => Some(n),
		}
	}
}

impl SettingKind for IntKind {
	fn default_value(&self) -> SettingValue {
		SettingValue::Int(self.default)
	}

	fn try_to_set(&self, cx: &SetContext<'_>, args: &[String]) -> Option<Consumed> {
		let Some((arg, rest)) = args.split_first() else {
			return cx.error_and_value(
				SettingError::MissingArgument {
					name: cx.name().to_string(),
				},
				None,
			);
		};
		let n = self.parse_arg(cx, arg)?;
		Some(Consumed::new(n, rest))
	}

	fn try_to_set_property(&self, cx: &SetContext<'_>, args: &[String]) -> Option<Consumed> {
		match args {
			[arg] => self.parse_arg(cx, arg).map(Consumed::all),
			[] => cx.error_and_value(
				SettingError::MissingArgument {
					name: cx.name().to_string(),
				},
				None,
			),
			_ => cx.error_and_value(
				SettingError::MultipleArgumentsUnsupported {
					name: cx.name().to_string(),
				},
				None,
			),
		}
	}

	fn unparse(&self, name: &str, value: &SettingValue) -> Vec<String> {
		vec![name.to_string(), value.to_string()]
	}

	fn help_syntax(&self, name: &str) -> String {
		format!("{name} <n>")
	}
}
