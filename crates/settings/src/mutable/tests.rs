use pretty_assertions::assert_eq;

use super::*;
use crate::{ErrorLog, SettingValue};

fn args(tokens: &[&str]) -> Vec<String> {
	tokens.iter().map(|t| t.to_string()).collect()
}

fn sample(log: &ErrorLog) -> MutableSettings {
	MutableSettings::with_settings(
		log.reporter(),
		[
			SettingDef::boolean("-foo", "Foo").abbreviation("-f"),
			SettingDef::string("-bar", "bar", "", "Bar"),
			SettingDef::boolean("-Xinternal", "Internal").internal_only(),
		],
	)
	.unwrap()
}

#[test]
fn lookup_by_name_and_abbreviation() {
	let log = ErrorLog::new();
	let settings = sample(&log);

	assert_eq!(settings.lookup_setting("-foo").map(|s| s.name()), Some("-foo"));
	assert_eq!(settings.lookup_setting("-f").map(|s| s.name()), Some("-foo"));
	assert!(settings.lookup_setting("-missing").is_none());
	assert!(log.is_empty());
}

#[test]
fn add_returns_the_registered_setting() {
	let log = ErrorLog::new();
	let mut settings = MutableSettings::new(log.reporter());

	let added: *const MutableSetting = settings
		.add(SettingDef::int("-Xmaxwarns", "Maximum warnings", 100))
		.unwrap()
		.with_abbreviation("-mw")
		.with_help_syntax("-Xmaxwarns <count>");

	let found = settings.lookup_setting("-mw").unwrap();
	assert!(std::ptr::eq(added, found));
	assert_eq!(found.help_syntax(), "-Xmaxwarns <count>");
}

#[test]
fn builder_operations_mutate_in_place() {
	let log = ErrorLog::new();
	let mut settings = sample(&log);

	let bar = settings.lookup_setting_mut("-bar").unwrap();
	let before: *const MutableSetting = &*bar;
	let after: *const MutableSetting = bar.with_deprecation_message("use -baz").internal_only();

	assert!(std::ptr::eq(before, after));
	let bar = settings.lookup_setting("-bar").unwrap();
	assert!(bar.is_deprecated());
	assert!(bar.is_internal_only());
}

#[test]
fn duplicate_names_are_rejected() {
	let log = ErrorLog::new();
	let mut settings = sample(&log);

	let err = settings.add(SettingDef::boolean("-foo", "Again")).unwrap_err();

	assert_eq!(err, RegistryError::DuplicateName("-foo".to_string()));
	assert_eq!(settings.len(), 3);
}

#[test]
fn try_to_set_updates_in_place() {
	let log = ErrorLog::new();
	let mut settings = sample(&log);

	let rest = settings.lookup_setting_mut("-bar").unwrap().try_to_set(&args(&["x", "y"]));

	assert_eq!(rest, Some(args(&["y"])));
	let bar = settings.lookup_setting("-bar").unwrap();
	assert_eq!(bar.value(), &SettingValue::from("x"));
	assert!(!bar.is_default());
}

#[test]
fn visible_and_user_set_views() {
	let log = ErrorLog::new();
	let mut settings = MutableSettings::with_settings(
		log.reporter(),
		[
			SettingDef::boolean("-A", "A").internal_only(),
			SettingDef::boolean("-B", "B"),
			SettingDef::boolean("-C", "C"),
		],
	)
	.unwrap();
	settings.lookup_setting_mut("-A").unwrap().try_to_set(&[]).unwrap();
	settings.lookup_setting_mut("-C").unwrap().try_to_set(&[]).unwrap();

	let visible: Vec<String> = settings.visible_settings().iter().map(|s| s.name().to_string()).collect();
	let user_set: Vec<String> = settings.user_set_settings().iter().map(|s| s.name().to_string()).collect();

	assert_eq!(visible, vec!["-B", "-C"]);
	assert_eq!(user_set, vec!["-C"]);
}

#[test]
fn equality_ignores_internal_settings() {
	let log = ErrorLog::new();
	let base = sample(&log);

	let mut internal = base.clone();
	internal.lookup_setting_mut("-Xinternal").unwrap().try_to_set(&[]).unwrap();
	assert_eq!(base, internal);

	let mut visible = base.clone();
	visible.lookup_setting_mut("-foo").unwrap().try_to_set(&[]).unwrap();
	assert_ne!(base, visible);
}

#[test]
fn equal_registries_hash_alike() {
	use std::collections::hash_map::DefaultHasher;

	fn hash_of(settings: &MutableSettings) -> u64 {
		let mut hasher = DefaultHasher::new();
		settings.hash(&mut hasher);
		hasher.finish()
	}

	let log = ErrorLog::new();
	let a = sample(&log);
	let mut b = MutableSettings::with_settings(
		log.reporter(),
		[
			SettingDef::boolean("-Xinternal", "Internal").internal_only(),
			SettingDef::string("-bar", "bar", "", "Bar"),
			SettingDef::boolean("-foo", "Foo"),
		],
	)
	.unwrap();
	b.lookup_setting_mut("-Xinternal").unwrap().try_to_set(&[]).unwrap();

	assert_eq!(a, b);
	assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn printing() {
	let log = ErrorLog::new();
	let mut settings = sample(&log);
	assert_eq!(settings.to_string(), "Settings {\n}\n");
	assert_eq!(settings.to_concise_string(), "()");

	settings.lookup_setting_mut("-foo").unwrap().try_to_set(&[]).unwrap();
	settings.lookup_setting_mut("-bar").unwrap().try_to_set(&args(&["x"])).unwrap();

	assert_eq!(settings.to_string(), "Settings {\n  -bar = x\n  -foo = true\n}\n");
	assert_eq!(settings.to_concise_string(), "(-bar = x -foo = true)");
}

#[test]
fn empty_value_prints_quoted() {
	let log = ErrorLog::new();
	let mut settings = sample(&log);

	settings.lookup_setting_mut("-bar").unwrap().try_to_set(&args(&[""])).unwrap();

	assert_eq!(settings.lookup_setting("-bar").unwrap().to_string(), "-bar = \"\"");
}

#[test]
fn setting_equality_uses_name_and_value_only() {
	let log = ErrorLog::new();
	let a = sample(&log);
	let b = MutableSettings::with_settings(
		log.reporter(),
		[SettingDef::boolean("-foo", "Different description")
			.abbreviation("-other")
			.depends_on("-bar", "x")],
	)
	.unwrap();

	let left = a.lookup_setting("-foo").unwrap();
	let right = b.lookup_setting("-foo").unwrap();
	assert_eq!(left, right);
	assert_eq!(left.cmp(right), std::cmp::Ordering::Equal);
	assert!(a.lookup_setting("-bar").unwrap() < left);
}

#[test]
fn late_abbreviation_is_checked_for_collisions() {
	let log = ErrorLog::new();
	let mut settings = sample(&log);

	let bar = settings.lookup_setting_mut("-bar").unwrap().with_abbreviation("-f");
	assert_eq!(bar.abbreviations(), &["-f".to_string()]);

	let expected = vec![crate::Collision {
		kind: crate::KeyKind::Abbreviation,
		key: "-f".to_string(),
		winner: "-foo".to_string(),
		shadowed: "-bar".to_string(),
	}];
	assert_eq!(settings.labels.lock().collisions(), expected);
	assert_eq!(settings.abbreviation_collisions(), expected);
	assert_eq!(settings.lookup_setting("-f").map(|s| s.name()), Some("-foo"));
	assert!(log.is_empty());
}

#[test]
fn cloned_registry_tracks_labels_separately() {
	let log = ErrorLog::new();
	let original = sample(&log);
	let mut copy = original.clone();

	copy.lookup_setting_mut("-bar").unwrap().with_abbreviation("-f");
	assert_eq!(copy.labels.lock().collisions().len(), 1);
	assert!(original.labels.lock().collisions().is_empty());
	assert!(original.lookup_setting("-bar").unwrap().abbreviations().is_empty());
}
