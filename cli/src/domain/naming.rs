//! Box-name sanitising applied by callers before creating a box.

use crate::domain::error::BoxError;

/// Trim the name and replace each remaining whitespace character with `-`.
///
/// # Errors
///
/// Returns [`BoxError::EmptyName`] if nothing is left after trimming.
pub fn sanitize_box_name(name: &str) -> Result<String, BoxError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BoxError::EmptyName);
    }
    Ok(trimmed
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect())
}
