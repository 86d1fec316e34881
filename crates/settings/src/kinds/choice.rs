use crate::error::SettingError;
use crate::kind::{Consumed, SetContext, SettingKind};
use crate::value::SettingValue;

/// One value out of a fixed list.
#[derive(Debug, Clone)]
pub struct ChoiceKind {
	arg: String,
	choices: Vec<String>,
	default: String,
}

impl ChoiceKind {
	pub fn new(arg: impl Into<String>, choices: impl IntoIterator<Item = impl Into<String>>, default: impl Into<String>) -> Self {
		Self {
			arg: arg.into(),
			choices: choices.into_iter().map(Into::into).collect(),
			default: default.into(),
		}
	}

	fn pick(&self, cx: &SetContext<'_>, arg: &str) -> Option<String> {
		if self.choices.iter().any(|c| c == arg) {
			return Some(arg.to_string());
		}
		cx.error_and_value(
			SettingError::InvalidChoice {
				name: cx.name().to_string(),
				arg: arg.to_string(),
			},
			None,
		)
	}
}

impl SettingKind for ChoiceKind {
	fn default_value(&self) -> SettingValue {
		SettingValue::String(self.default.clone())
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
		let choice = self.pick(cx, arg)?;
		Some(Consumed::new(choice, rest))
	}

	fn try_to_set_colon(&self, cx: &SetContext<'_>, args: &[String]) -> Option<Consumed> {
		match args {
			[arg] => self.pick(cx, arg).map(Consumed::all),
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
		format!("{name}:<{}>", self.arg)
	}

	fn choices(&self) -> Vec<String> {
		self.choices.clone()
	}
}
