//! Settings registry.
//!
//! A registry is a set of named settings consumed from command-line style
//! arguments. Two storage strategies share one contract:
//!
//! - [`MutableSettings`]: settings carry their state and are updated in place.
//! - [`ImmutableSettings`]: every update produces a new snapshot and leaves
//!   the previous one untouched.
//!
//! Both expose the same lookup (by name or abbreviation), visible and
//! user-set views, dependency validation, equality and printing through
//! [`Settings`], and the same consumption protocol through [`Setting`]:
//!
//! - [`try_to_set`](Setting::try_to_set): `-name arg...`
//! - [`try_to_set_colon`](Setting::try_to_set_colon): `-name:a,b`
//! - [`try_to_set_property`](Setting::try_to_set_property): `-name=value`
//!
//! Failures are reported through the registry's [`Reporter`] and surface to
//! the caller as `None`.
//!
//! ```
//! use argset_settings::{ErrorLog, MutableSettings, Setting, SettingDef, Settings};
//!
//! let log = ErrorLog::new();
//! let mut settings = MutableSettings::with_settings(
//! 	log.reporter(),
//! 	[SettingDef::boolean("-verbose", "Print progress").abbreviation("-v")],
//! )
//! .unwrap();
//!
//! let verbose = settings.lookup_setting_mut("-v").unwrap();
//! assert_eq!(verbose.try_to_set(&[]), Some(vec![]));
//! assert_eq!(settings.to_concise_string(), "(-verbose = true)");
//! assert!(log.is_empty());
//! ```

pub mod collision;
pub mod contract;
pub mod def;
pub mod error;
pub mod immutable;
pub mod kind;
pub mod kinds;
pub mod mutable;
pub mod parse;
pub mod value;

pub use collision::{Collision, KeyKind};
pub use contract::{CATEGORY_MARKERS, Setting, SettingInfo, Settings};
pub use def::{ArgStyle, Dependency, SettingDef};
pub use error::{ErrorFn, ErrorLog, RegistryError, Reporter, SettingError};
pub use immutable::{ImmutableSetting, ImmutableSettings};
pub use kind::{Consumed, SetContext, SettingKind};
pub use kinds::{BooleanKind, ChoiceKind, IntKind, MultiStringKind, PropertyKind, StringKind};
pub use mutable::{MutableSetting, MutableSettings};
pub use parse::suggest_setting;
pub use value::SettingValue;
