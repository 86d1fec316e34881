use crate::error::SettingError;
use crate::kind::{Consumed, SetContext, SettingKind};
use crate::value::SettingValue;

/// A single string taking one token.
#[derive(Debug, Clone)]
pub struct StringKind {
	arg: String,
	default: String,
}

impl StringKind {
	/// `arg` names the value placeholder shown in help output.
	pub fn new(arg: impl Into<String>, default: impl Into<String>) -> Self {
		Self {
			arg: arg.into(),
			default: default.into(),
		}
	}
}

impl SettingKind for StringKind {
	fn default_value(&self) -> SettingValue {
		SettingValue::String(self.default.clone())
	}

	fn try_to_set(&self, cx: &SetContext<'_>, args: &[String]) -> Option<Consumed> {
		match args.split_first() {
			Some((arg, rest)) => Some(Consumed::new(arg.as_str(), rest)),
			None => cx.error_and_value(
				SettingError::MissingArgument {
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
		format!("{name} <{}>", self.arg)
	}
}
