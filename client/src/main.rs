//! Example client for `#[localizable]`.
//!
//! Keys are resolved against a small in-memory English table whose templates refer
//! to values by position (`{0}`, `{1}`). Run with `RUST_LOG=debug` to see lookups.

use std::collections::HashMap;
use std::sync::LazyLock;

use localizable::localizable;

static ENGLISH: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("login_error", "Wrong user name or password."),
        ("login_welcome", "Welcome back, {0}!"),
        ("inbox_summary", "{0} has {1} unread messages."),
    ])
});

/// Resolve a generated key: the first word selects the template, the rest are its values.
fn localize(key: String) -> String {
    let mut words = key.split(' ');
    let name = words.next().unwrap_or_default();
    let values: Vec<&str> = words.collect();

    let Some(template) = ENGLISH.get(name) else {
        tracing::warn!(key = %key, "no translation, falling back to key");
        return key;
    };
    tracing::debug!(name, values = values.len(), "resolved translation");

    values
        .iter()
        .enumerate()
        .fold(template.to_string(), |text, (index, value)| text.replace(&format!("{{{index}}}"), value))
}

#[localizable]
mod strings {
    use super::localize;

    #[allow(non_camel_case_types, dead_code)]
    enum Keys {
        login_error,
        login_welcome(String),
        inbox_summary(String, u32),
        logout,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    println!("{}", *strings::login_error);
    println!("{}", strings::login_welcome("ada"));
    println!("{}", strings::inbox_summary("ada", 3));
    println!("{}", *strings::logout);
}
