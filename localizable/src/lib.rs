//! Typed accessors for localized strings.
//!
//! Declare the closed set of translatable messages as an enum inside a module and let
//! [`localizable`] generate one accessor per key. Variants without fields become lazily
//! initialized statics, variants with fields become functions whose arguments are
//! appended to the key, separated by spaces.
//!
//! ```ignore
//! use localizable::localizable;
//!
//! fn localize(key: String) -> String {
//!     // Look `key` up in your translation resources.
//!     key
//! }
//!
//! #[localizable(localize = super::localize)]
//! pub mod strings {
//!     #[allow(non_camel_case_types, dead_code)]
//!     enum Keys {
//!         next,
//!         news(String),
//!         smth(String, String),
//!     }
//! }
//!
//! assert_eq!(*strings::next, "next");
//! assert_eq!(strings::news("today"), "news today");
//! assert_eq!(strings::smth(1, "two"), "smth 1 two");
//! ```
//!
//! The lookup function is not provided here: any `fn(String) -> String` in scope will do.
//! Locale selection and translation files are the application's business.

pub use localizable_macros::localizable;
