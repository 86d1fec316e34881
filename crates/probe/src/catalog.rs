//! Settings understood by the probe, modeled on a compiler front end.

use argset_settings::SettingDef;

pub fn definitions() -> Vec<SettingDef> {
	vec![
		SettingDef::boolean("-verbose", "Output messages about what the compiler is doing."),
		SettingDef::boolean("-deprecation", "Emit warning and location for usages of deprecated APIs.")
			.abbreviation("--deprecation"),
		SettingDef::boolean("-nowarn", "Generate no warnings.").abbreviation("--no-warnings"),
		SettingDef::string("-encoding", "encoding", "UTF-8", "Specify character encoding used by source files."),
		SettingDef::string("-d", "directory|jar", ".", "Destination for generated classfiles."),
		SettingDef::choice(
			"-target",
			"target",
			"Target platform for object files.",
			["jvm-1.8", "jvm-11", "jvm-17", "jvm-21"],
			"jvm-1.8",
		),
		SettingDef::property("-D", "Set a system property.").help_syntax("-D=<key>=<value>"),
		SettingDef::boolean("-Werror", "Fail the compilation if there are any warnings."),
		SettingDef::boolean("-Xfatal-warnings", "Fail the compilation if there are any warnings.")
			.deprecated("use -Werror instead"),
		SettingDef::multi_string("-Xplugin", "paths", "Load a plugin from each classpath."),
		SettingDef::int_in_range("-Xmaxerrs", "Maximum errors to print.", 100, 0, 10_000),
		SettingDef::int_in_range("-Xmaxwarns", "Maximum warnings to print.", 100, 0, 10_000),
		SettingDef::boolean("-Ydebug", "Increase the quantity of debugging output."),
		SettingDef::boolean("-Ytyper-debug", "Trace all type assignments.").depends_on("-Ydebug", "true"),
		SettingDef::boolean("-Ystatistics-internal", "Collect statistics for internal tooling.").internal_only(),
	]
}
