use pretty_assertions::assert_eq;

use super::*;
use crate::{ErrorLog, SettingValue};

fn args(tokens: &[&str]) -> Vec<String> {
	tokens.iter().map(|t| t.to_string()).collect()
}

fn sample(log: &ErrorLog) -> ImmutableSettings {
	ImmutableSettings::new(
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
fn try_to_set_returns_a_new_snapshot() {
	let log = ErrorLog::new();
	let original = sample(&log);

	let (updated, rest) = original
		.lookup_setting("-bar")
		.unwrap()
		.try_to_set(&args(&["x", "y"]))
		.unwrap();

	assert_eq!(rest, args(&["y"]));
	assert!(!updated.ptr_eq(&original));
	assert_eq!(updated.lookup_setting("-bar").unwrap().value(), &SettingValue::from("x"));

	let untouched = original.lookup_setting("-bar").unwrap();
	assert_eq!(untouched.value(), &SettingValue::from(""));
	assert!(untouched.is_default());
	assert_ne!(original, updated);
}

#[test]
fn failed_consumption_leaves_no_snapshot() {
	let log = ErrorLog::new();
	let original = sample(&log);

	let result = original.lookup_setting("-bar").unwrap().try_to_set(&[]);

	assert!(result.is_none());
	assert!(original.user_set_settings().is_empty());
	assert_eq!(log.take(), vec!["missing argument for '-bar'"]);
}

#[test]
fn builder_operations_return_a_new_setting() {
	let log = ErrorLog::new();
	let original = sample(&log);
	let foo = original.lookup_setting("-foo").unwrap();

	let renamed = foo.clone().with_abbreviation("-fo").with_help_syntax("-foo[=bool]");

	assert!(!renamed.owner().ptr_eq(foo.owner()));
	assert_eq!(renamed.abbreviations(), args(&["-f", "-fo"]).as_slice());
	assert_eq!(renamed.help_syntax(), "-foo[=bool]");
	assert_eq!(foo.abbreviations(), args(&["-f"]).as_slice());
	assert_eq!(foo.help_syntax(), "-foo");
	assert!(original.lookup_setting("-fo").is_none());
	assert!(renamed.owner().lookup_setting("-fo").is_some());
}

#[test]
fn internal_only_builder() {
	let log = ErrorLog::new();
	let original = sample(&log);

	let hidden = original
		.lookup_setting("-bar")
		.unwrap()
		.with_deprecation_message("use -baz")
		.internal_only();

	assert!(hidden.is_internal_only());
	assert!(hidden.is_deprecated());
	assert_eq!(hidden.owner().visible_settings().len(), 1);
	assert_eq!(original.visible_settings().len(), 2);
}

#[test]
fn snapshots_chain() {
	let log = ErrorLog::new();
	let mut settings = sample(&log);
	let history = vec![settings.clone()];

	for (label, tokens) in [("-f", vec![]), ("-bar", args(&["out"]))] {
		let (next, rest) = settings.lookup_setting(label).unwrap().try_to_set(&tokens).unwrap();
		assert!(rest.is_empty());
		settings = next;
	}

	assert_eq!(settings.to_concise_string(), "(-bar = out -foo = true)");
	assert_eq!(history[0].to_concise_string(), "()");
	assert!(log.is_empty());
}

#[test]
fn with_setting_rejects_duplicates() {
	let log = ErrorLog::new();
	let settings = sample(&log);

	let err = settings.with_setting(SettingDef::boolean("-bar", "Again")).unwrap_err();
	assert_eq!(err, RegistryError::DuplicateName("-bar".to_string()));

	let extended = settings.with_setting(SettingDef::boolean("-baz", "Baz")).unwrap();
	assert_eq!(extended.len(), 4);
	assert_eq!(settings.len(), 3);
}

#[test]
fn equality_ignores_internal_settings() {
	let log = ErrorLog::new();
	let base = sample(&log);

	let (internal, _) = base.lookup_setting("-Xinternal").unwrap().try_to_set(&[]).unwrap();
	assert_eq!(base, internal);

	let (visible, _) = base.lookup_setting("-foo").unwrap().try_to_set(&[]).unwrap();
	assert_ne!(base, visible);
}

#[test]
fn snapshot_of_mutable_registry() {
	let log = ErrorLog::new();
	let mut mutable = MutableSettings::with_settings(
		log.reporter(),
		[
			SettingDef::boolean("-foo", "Foo"),
			SettingDef::string("-bar", "bar", "", "Bar"),
		],
	)
	.unwrap();
	mutable.lookup_setting_mut("-foo").unwrap().try_to_set(&[]).unwrap();

	let snapshot = ImmutableSettings::from(&mutable);
	mutable.lookup_setting_mut("-bar").unwrap().try_to_set(&args(&["later"])).unwrap();

	assert_eq!(snapshot.to_concise_string(), "(-foo = true)");
	assert_eq!(mutable.to_concise_string(), "(-bar = later -foo = true)");
}

#[test]
fn snapshots_are_shareable_across_threads() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<ImmutableSettings>();
	assert_send_sync::<ImmutableSetting>();

	let log = ErrorLog::new();
	let settings = sample(&log);
	let reader = settings.clone();
	let printed = std::thread::spawn(move || reader.to_concise_string()).join().unwrap();
	assert_eq!(printed, "()");
}

#[test]
fn late_abbreviation_collision_is_visible_on_the_new_snapshot() {
	let log = ErrorLog::new();
	let original = sample(&log);

	let bar = original.lookup_setting("-bar").unwrap().with_abbreviation("-f");
	assert_eq!(
		bar.owner().abbreviation_collisions(),
		vec![crate::Collision {
			kind: crate::KeyKind::Abbreviation,
			key: "-f".to_string(),
			winner: "-foo".to_string(),
			shadowed: "-bar".to_string(),
		}]
	);
	assert!(original.abbreviation_collisions().is_empty());
	assert_eq!(bar.owner().lookup_setting("-f").map(|s| s.name().to_string()), Some("-foo".to_string()));
	assert!(log.is_empty());
}
