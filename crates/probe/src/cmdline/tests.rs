use argset_settings::{ErrorLog, SettingInfo};
use pretty_assertions::assert_eq;

use super::*;
use crate::catalog;

fn args(tokens: &[&str]) -> Vec<String> {
	tokens.iter().map(|t| t.to_string()).collect()
}

fn mutable(log: &ErrorLog) -> MutableSettings {
	MutableSettings::with_settings(log.reporter(), catalog::definitions()).unwrap()
}

fn immutable(log: &ErrorLog) -> ImmutableSettings {
	ImmutableSettings::new(log.reporter(), catalog::definitions()).unwrap()
}

#[test]
fn classifies_tokens() {
	assert_eq!(classify("Main.scala"), Token::Operand("Main.scala"));
	assert_eq!(
		classify("-verbose"),
		Token::Flag {
			label: "-verbose",
			style: ArgStyle::Plain,
			inline: vec![],
		}
	);
	assert_eq!(
		classify("-Xplugin:a.jar,b.jar"),
		Token::Flag {
			label: "-Xplugin",
			style: ArgStyle::Colon,
			inline: args(&["a.jar", "b.jar"]),
		}
	);
	assert_eq!(
		classify("-D=key=value"),
		Token::Flag {
			label: "-D",
			style: ArgStyle::Property,
			inline: args(&["key=value"]),
		}
	);
	assert_eq!(
		classify("-target:jvm=11"),
		Token::Flag {
			label: "-target",
			style: ArgStyle::Colon,
			inline: args(&["jvm=11"]),
		}
	);
}

#[test]
fn mutable_pass_collects_values_and_operands() {
	let log = ErrorLog::new();
	let mut settings = mutable(&log);

	let residual = process_mutable(
		&mut settings,
		&args(&[
			"-verbose",
			"A.scala",
			"-encoding",
			"latin1",
			"B.scala",
			"-Xplugin:p1.jar,p2.jar",
			"-Xmaxerrs=5",
			"--deprecation",
		]),
	);

	assert_eq!(residual, Some(args(&["A.scala", "B.scala"])));
	assert_eq!(
		settings.to_concise_string(),
		"(-Xmaxerrs = 5 -Xplugin = p1.jar,p2.jar -deprecation = true -encoding = latin1 -verbose = true)"
	);
	assert!(log.is_empty());
}

#[test]
fn plain_multi_string_stops_at_next_flag() {
	let log = ErrorLog::new();
	let mut settings = mutable(&log);

	let residual = process_mutable(&mut settings, &args(&["-Xplugin", "a.jar", "b.jar", "-nowarn", "C.scala"]));

	assert_eq!(residual, Some(args(&["C.scala"])));
	assert_eq!(settings.lookup_setting("-Xplugin").unwrap().unparse(), args(&["-Xplugin", "a.jar", "b.jar"]));
	assert!(!settings.lookup_setting("-nowarn").unwrap().is_default());
}

#[test]
fn unknown_option_is_reported_with_suggestion() {
	let log = ErrorLog::new();
	let mut settings = mutable(&log);

	let residual = process_mutable(&mut settings, &args(&["-verbos", "-nowarn"]));

	assert_eq!(residual, None);
	assert!(settings.lookup_setting("-nowarn").unwrap().is_default());
	assert_eq!(log.take(), vec!["bad option: '-verbos' (did you mean '-verbose'?)"]);
}

#[test]
fn unknown_option_without_close_match() {
	let log = ErrorLog::new();
	let mut settings = mutable(&log);

	assert_eq!(process_mutable(&mut settings, &args(&["-completely-unrelated"])), None);
	assert_eq!(log.take(), vec!["bad option: '-completely-unrelated'"]);
}

#[test]
fn processing_stops_at_first_failure() {
	let log = ErrorLog::new();
	let mut settings = mutable(&log);

	let residual = process_mutable(&mut settings, &args(&["-target:jvm-9", "-verbose", "-Xmaxerrs", "lots"]));

	assert_eq!(residual, None);
	assert!(settings.user_set_settings().is_empty());
	assert_eq!(log.take(), vec!["'jvm-9' is not a valid choice for '-target'"]);
}

#[test]
fn immutable_pass_leaves_input_snapshot_untouched() {
	let log = ErrorLog::new();
	let initial = immutable(&log);

	let (updated, residual) =
		process_immutable(initial.clone(), &args(&["-Ydebug", "X.scala", "-Ytyper-debug", "-D", "a=1", "b"])).unwrap();

	assert_eq!(residual, args(&["X.scala"]));
	assert_eq!(initial.to_concise_string(), "()");
	assert_eq!(updated.to_concise_string(), "(-D = a=1,b -Ydebug = true -Ytyper-debug = true)");
	assert!(updated.check_dependencies());
	assert!(log.is_empty());
}

#[test]
fn strategies_agree() {
	let tokens = args(&["-d", "out", "-target:jvm-17", "-Werror", "Main.scala", "-Xmaxwarns", "7"]);

	let log = ErrorLog::new();
	let mut in_place = mutable(&log);
	let residual = process_mutable(&mut in_place, &tokens).unwrap();
	let (snapshot, snapshot_residual) = process_immutable(immutable(&log), &tokens).unwrap();

	assert_eq!(residual, snapshot_residual);
	assert_eq!(in_place.to_string(), snapshot.to_string());
	assert_eq!(ImmutableSettings::from(&in_place), snapshot);
}

#[test]
fn dependency_failure_is_reported_after_processing() {
	let log = ErrorLog::new();
	let mut settings = mutable(&log);

	assert_eq!(process_mutable(&mut settings, &args(&["-Ytyper-debug"])), Some(vec![]));
	assert!(!settings.check_dependencies());
	assert_eq!(log.take(), vec!["incomplete option -Ytyper-debug (requires -Ydebug)"]);
}

#[test]
fn property_setting_accepts_its_advertised_syntax() {
	let log = ErrorLog::new();
	let mut settings = mutable(&log);
	assert_eq!(settings.lookup_setting("-D").unwrap().help_syntax(), "-D=<key>=<value>");

	assert_eq!(process_mutable(&mut settings, &args(&["-D=foo=bar", "-D", "baz"])), Some(vec![]));
	assert_eq!(settings.lookup_setting("-D").unwrap().unparse(), args(&["-D", "foo=bar", "baz"]));
	assert!(log.is_empty());

	assert_eq!(process_mutable(&mut settings, &args(&["-Dfoo=bar"])), None);
	assert_eq!(log.take(), vec!["bad option: '-Dfoo' (did you mean '-D'?)"]);
}
