//! Grouped listing of the visible settings.

use std::fmt::Write;

use argset_settings::{SettingInfo, Settings};


const SYNTAX_WIDTH: usize = 28;

pub fn render<S: Settings>(settings: &S) -> String {
	let mut visible = settings.visible_settings();
	visible.sort_by(|a, b| a.compare(b));

	let groups = [
		("Standard settings", visible.iter().filter(|s| s.is_standard()).collect::<Vec<_>>()),
		("Advanced settings", visible.iter().filter(|s| s.is_advanced()).collect()),
		("Private settings", visible.iter().filter(|s| s.is_private()).collect()),
	];

	let mut out = String::new();
	for (title, members) in groups {
		if members.is_empty() {
			continue;
		}
		if !out.is_empty() {
			out.push('\n');
		}
		let _ = writeln!(out, "{title}:");
		for setting in members {
			let _ = writeln!(
				out,
				"  {:<width$} {}",
				setting.help_syntax(),
				setting.help_description(),
				width = SYNTAX_WIDTH
			);
			let choices = setting.choices();
			if !choices.is_empty() {
				let _ = writeln!(out, "  {:<width$} Choices: {}", "", choices.join(", "), width = SYNTAX_WIDTH);
			}
			if let Some(msg) = setting.deprecation_message() {
				let _ = writeln!(out, "  {:<width$} Deprecated: {msg}", "", width = SYNTAX_WIDTH);
			}
		}
	}
	out
}
