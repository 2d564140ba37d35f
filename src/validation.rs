use regex::Regex;
use url::Url;

use crate::constants::limits;
use crate::error::{Error, Result};
use crate::request::BuildRequest;

/// Charset allowed in a human plugin name.
const NAME_PATTERN: &str = r"^[a-zA-Z0-9\s\-_]+$";

/// A name must slugify to something: at least one letter or digit, or the
/// derived directory and file base names would be empty.
const NAME_ALNUM_PATTERN: &str = r"[a-zA-Z0-9]";

/// Namespace segments start with a capital letter; multi-segment namespaces
/// use forward slashes (e.g. "Acme/Tools").
const NAMESPACE_PATTERN: &str = r"^[A-Z][A-Za-z0-9_]*(/[A-Z][A-Za-z0-9_]*)*$";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// The closed set of field rules a build request field can be checked
/// against. Evaluated by [`check_field`]; adding a rule kind means extending
/// this enum, there is no dynamic rule lookup.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Value must be present and non-blank.
    Required,
    /// Value must not exceed the given number of characters.
    MaxLength(usize),
    /// Value must match the regex, failing with the given message.
    Pattern { pattern: &'static str, message: &'static str },
    /// Value must parse as an absolute URL.
    Uri,
    /// Value must look like an email address.
    Email,
}

/// Checks one field value against a rule set, stopping at the first failure.
///
/// An absent or blank value passes every rule except `Required`.
pub fn check_field(field: &str, value: Option<&str>, rules: &[Rule]) -> Result<()> {
    let trimmed = value.map(str::trim).filter(|v| !v.is_empty());

    for rule in rules {
        match (rule, trimmed) {
            (Rule::Required, None) => {
                return Err(validation_error(field, format!("{field} is required")));
            }
            (Rule::Required, Some(_)) => {}
            (_, None) => {}
            (Rule::MaxLength(max), Some(value)) => {
                if value.chars().count() > *max {
                    return Err(validation_error(
                        field,
                        format!("{field} must be at most {max} characters"),
                    ));
                }
            }
            (Rule::Pattern { pattern, message }, Some(value)) => {
                let re = Regex::new(pattern).map_err(|e| {
                    Error::Other(anyhow::anyhow!("Invalid validation pattern: {}", e))
                })?;
                if !re.is_match(value) {
                    return Err(validation_error(field, (*message).to_string()));
                }
            }
            (Rule::Uri, Some(value)) => {
                if Url::parse(value).is_err() {
                    return Err(validation_error(
                        field,
                        format!("{field} must be a valid URL"),
                    ));
                }
            }
            (Rule::Email, Some(value)) => {
                let re = Regex::new(EMAIL_PATTERN).map_err(|e| {
                    Error::Other(anyhow::anyhow!("Invalid validation pattern: {}", e))
                })?;
                if !re.is_match(value) {
                    return Err(validation_error(
                        field,
                        format!("{field} must be a valid email address"),
                    ));
                }
            }
        }
    }
    Ok(())
}

/// Validates every field of a build request.
///
/// This runs before any filesystem stage: a name containing traversal
/// sequences is rejected here, long before PathGuard sees it.
pub fn validate_request(request: &BuildRequest) -> Result<()> {
    check_field(
        "name",
        Some(request.name.as_str()),
        &[
            Rule::Required,
            Rule::MaxLength(limits::MAX_PLUGIN_NAME_LENGTH),
            Rule::Pattern {
                pattern: NAME_PATTERN,
                message: "name may only contain letters, digits, spaces, hyphens and underscores",
            },
            Rule::Pattern {
                pattern: NAME_ALNUM_PATTERN,
                message: "name must contain at least one letter or digit",
            },
        ],
    )?;
    check_field(
        "namespace",
        request.namespace.as_deref(),
        &[
            Rule::MaxLength(limits::MAX_NAMESPACE_LENGTH),
            Rule::Pattern {
                pattern: NAMESPACE_PATTERN,
                message: "namespace segments must start with a capital letter and use '/' between segments",
            },
        ],
    )?;
    check_field(
        "description",
        request.description.as_deref(),
        &[Rule::MaxLength(limits::MAX_DESCRIPTION_LENGTH)],
    )?;
    check_field(
        "license",
        request.license.as_deref(),
        &[Rule::MaxLength(limits::MAX_LICENSE_LENGTH)],
    )?;
    check_field("uri", request.uri.as_deref(), &[Rule::Uri])?;
    check_field(
        "author_name",
        request.author_name.as_deref(),
        &[Rule::MaxLength(limits::MAX_AUTHOR_NAME_LENGTH)],
    )?;
    check_field("author_email", request.author_email.as_deref(), &[Rule::Email])?;
    check_field("author_uri", request.author_uri.as_deref(), &[Rule::Uri])?;
    Ok(())
}

fn validation_error(field: &str, message: String) -> Error {
    Error::ValidationError { field: field.to_string(), message }
}
