use indexmap::IndexMap;

use cruet::case::{
    pascal::to_pascal_case, screaming_snake::to_screaming_snake_case,
    snake::to_snake_case, title::to_title_case,
};

use crate::constants::defaults;
use crate::request::BuildRequest;

/// Ordered token -> replacement mapping for one build. Tokens are substituted
/// as plain substrings, longest key first (see [`crate::rewrite`]).
pub type PlaceholderTable = IndexMap<String, String>;

/// Normalizes a human name to its slug: lowercase, whitespace and invalid
/// characters collapsed to single hyphens, underscores preserved. The slug is
/// the canonical directory and file base name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// PascalCase class name for a pre-validated human name.
pub fn class_name(name: &str) -> String {
    to_pascal_case(&slugify(name))
}

/// Builds the placeholder table for one request: casing variants derived from
/// the name, merged with explicit request fields. Explicit values always win
/// over derived or default values for the same logical field.
///
/// Assumes a non-empty, pre-validated name; see
/// [`crate::validation::validate_request`].
pub fn derive_placeholders(request: &BuildRequest) -> PlaceholderTable {
    let slug = slugify(&request.name);
    let pascal_snake = to_title_case(&slug).replace(' ', "_");

    let mut table = PlaceholderTable::new();

    table.insert("Plugin_Stub".to_string(), pascal_snake.clone());
    table.insert("PluginStub".to_string(), to_pascal_case(&slug));
    // Legacy duplicate of Plugin_Stub kept for template compatibility.
    table.insert("Plugin_stub".to_string(), pascal_snake);
    table.insert("plugin_stub".to_string(), to_snake_case(&slug));
    table.insert("PLUGIN_STUB".to_string(), to_screaming_snake_case(&slug));
    table.insert("Plugin Stub".to_string(), to_title_case(&slug));
    table.insert("plugin-stub".to_string(), slug);

    // Namespaces keep '/' verbatim so multi-segment values survive into
    // generated code untouched.
    table.insert(
        crate::constants::NAMESPACE_TOKEN.to_string(),
        field(&request.namespace, defaults::NAMESPACE),
    );
    table.insert(
        "plugin_description".to_string(),
        field(&request.description, defaults::DESCRIPTION),
    );
    table.insert("plugin_license".to_string(), field(&request.license, defaults::LICENSE));
    table.insert("plugin_uri".to_string(), field(&request.uri, defaults::PLUGIN_URI));
    table.insert(
        "plugin_author_name".to_string(),
        field(&request.author_name, defaults::AUTHOR_NAME),
    );
    table.insert(
        "plugin_author_email".to_string(),
        field(&request.author_email, defaults::AUTHOR_EMAIL),
    );
    table.insert(
        "plugin_author_uri".to_string(),
        field(&request.author_uri, defaults::AUTHOR_URI),
    );
    table.insert("plugin_requires".to_string(), field(&request.requires, ""));
    table.insert(
        "plugin_is_settings_included".to_string(),
        if request.include_settings_module { "yes" } else { "no" }.to_string(),
    );

    table
}

fn field(value: &Option<String>, default: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
