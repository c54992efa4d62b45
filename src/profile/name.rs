/// Name used whenever a caller supplies no usable profile name.
pub const DEFAULT_PROFILE_NAME: &str = "Default";

/// Canonical registry key for a profile name.
///
/// Missing or blank names map to [`DEFAULT_PROFILE_NAME`]; anything else is
/// trimmed of surrounding whitespace. Case is preserved, so `"A"` and `"a"`
/// are distinct profiles.
pub fn sanitize_profile_name<'a>(requested: impl Into<Option<&'a str>>) -> String {
    let trimmed = requested.into().map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return DEFAULT_PROFILE_NAME.to_string();
    }

    trimmed.to_string()
}
