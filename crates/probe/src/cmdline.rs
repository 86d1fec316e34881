//! Tokenizing loop shared by both registry strategies.
//!
//! A token not starting with `-` is a residual operand. `label:a,b` runs the
//! colon entry point, `label=value` the property entry point, whichever
//! delimiter comes first. Any other token runs the plain entry point, which
//! receives every remaining token and decides how many it takes.

use argset_settings::{ArgStyle, ImmutableSettings, MutableSettings, Setting, Settings, suggest_setting};

#[cfg(test)]
mod tests;

/// How a single token addresses the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
	Operand(&'a str),
	Flag {
		label: &'a str,
		style: ArgStyle,
		/// Arguments carried inside the token itself.
		inline: Vec<String>,
	},
}

pub fn classify(token: &str) -> Token<'_> {
	if !token.starts_with('-') {
		return Token::Operand(token);
	}
	let Some(at) = token.find([':', '=']) else {
		return Token::Flag {
			label: token,
			style: ArgStyle::Plain,
			inline: Vec::new(),
		};
	};
	let (label, tail) = (&token[..at], &token[at + 1..]);
	if token.as_bytes()[at] == b':' {
		Token::Flag {
			label,
			style: ArgStyle::Colon,
			inline: tail.split(',').map(str::to_string).collect(),
		}
	} else {
		Token::Flag {
			label,
			style: ArgStyle::Property,
			inline: vec![tail.to_string()],
		}
	}
}

/// Feeds `args` through an in-place registry.
///
/// Returns the residual operands, or `None` once a token fails.
pub fn process_mutable(settings: &mut MutableSettings, args: &[String]) -> Option<Vec<String>> {
	drive(args, |label, style, args| match settings.lookup_setting_mut(label) {
		Some(setting) => setting.consume(style, args),
		None => {
			bad_option(&*settings, label);
			None
		}
	})
}

/// Feeds `args` through a snapshot registry.
///
/// Returns the final snapshot and the residual operands, or `None` once a
/// token fails. `settings` itself is never changed.
pub fn process_immutable(settings: ImmutableSettings, args: &[String]) -> Option<(ImmutableSettings, Vec<String>)> {
	let mut current = settings;
	let residual = drive(args, |label, style, args| {
		let Some(setting) = current.lookup_setting(label) else {
			bad_option(&current, label);
			return None;
		};
		let (next, rest) = setting.consume(style, args)?;
		current = next;
		Some(rest)
	})?;
	Some((current, residual))
}

fn drive(
	args: &[String],
	mut apply: impl FnMut(&str, ArgStyle, &[String]) -> Option<Vec<String>>,
) -> Option<Vec<String>> {
	let mut residual = Vec::new();
	let mut pending = args.to_vec();

	while let Some((head, tail)) = pending.split_first() {
		let next = match classify(head) {
			Token::Operand(operand) => {
				residual.push(operand.to_string());
				tail.to_vec()
			}
			Token::Flag {
				label,
				style: ArgStyle::Plain,
				..
			} => apply(label, ArgStyle::Plain, tail).or_else(|| stopped(label))?,
			Token::Flag { label, style, inline } => {
				let mut rest = apply(label, style, &inline).or_else(|| stopped(label))?;
				rest.extend_from_slice(tail);
				rest
			}
		};
		pending = next;
	}

	Some(residual)
}

fn stopped(label: &str) -> Option<Vec<String>> {
	tracing::debug!(label, "argument processing stopped");
	None
}

fn bad_option<S: Settings>(settings: &S, label: &str) {
	let msg = match suggest_setting(settings, label) {
		Some(candidate) => format!("bad option: '{label}' (did you mean '{candidate}'?)"),
		None => format!("bad option: '{label}'"),
	};
	settings.reporter().report(&msg);
}
