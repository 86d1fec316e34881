use crate::error::SettingError;
use crate::kind::{Consumed, SetContext, SettingKind};
use crate::value::SettingValue;

/// A list of strings that accumulates across occurrences.
///
/// Plain syntax consumes tokens up to the next one starting with `-`;
/// colon syntax appends every non-empty item. Items starting with `-` are
/// rejected in colon syntax too, since `unparse` replays through plain
/// syntax.
#[derive(Debug, Clone)]
pub struct MultiStringKind {
	arg: String,
}

impl MultiStringKind {
	pub fn new(arg: impl Into<String>) -> Self {
		Self { arg: arg.into() }
	}
}

/// `current` followed by `items`.
pub(super) fn extended(current: &SettingValue, items: impl IntoIterator<Item = String>) -> Vec<String> {
	let mut list = current.as_list().map(<[String]>::to_vec).unwrap_or_default();
	list.extend(items);
	list
}

/// Number of leading tokens that are not themselves flags.
pub(super) fn operand_count(args: &[String]) -> usize {
	args.iter().take_while(|a| !a.starts_with('-')).count()
}

/// Reports the first item plain syntax would take for the next option.
pub(super) fn reject_option_like<'a>(cx: &SetContext<'_>, items: impl IntoIterator<Item = &'a String>) -> Option<()> {
	match items.into_iter().find(|a| a.starts_with('-')) {
		Some(arg) => cx.error_and_value(
			SettingError::OptionLikeValue {
				name: cx.name().to_string(),
				arg: arg.clone(),
			},
			None,
		),
		None => Some(()),
	}
}

impl SettingKind for MultiStringKind {
	fn default_value(&self) -> SettingValue {
		SettingValue::List(Vec::new())
	}

	fn try_to_set(&self, cx: &SetContext<'_>, args: &[String]) -> Option<Consumed> {
		let n = operand_count(args);
		if n == 0 {
			return cx.error_and_value(
				SettingError::MissingArgument {
					name: cx.name().to_string(),
				},
				None,
			);
		}
		let (taken, rest) = args.split_at(n);
		Some(Consumed::new(extended(cx.current(), taken.iter().cloned()), rest))
	}

	fn try_to_set_colon(&self, cx: &SetContext<'_>, args: &[String]) -> Option<Consumed> {
		let items: Vec<String> = args.iter().filter(|a| !a.is_empty()).cloned().collect();
		reject_option_like(cx, &items)?;
		if items.is_empty() {
			return cx.error_and_value(
				SettingError::MissingArgument {
					name: cx.name().to_string(),
				},
				None,
			);
		}
		Some(Consumed::all(extended(cx.current(), items)))
	}

	fn unparse(&self, name: &str, value: &SettingValue) -> Vec<String> {
		match value.as_list() {
			Some(items) if !items.is_empty() => std::iter::once(name.to_string()).chain(items.iter().cloned()).collect(),
			_ => Vec::new(),
		}
	}

	fn help_syntax(&self, name: &str) -> String {
		format!("{name}:<{}>", self.arg)
	}
}
