//! Parsers for the text emitted by `distrobox` and the app-listing helper.
//!
//! Malformed lines are skipped, never reported: an upstream format change
//! degrades to an empty result instead of an error.

use boxbuddy_common::{ContainerRecord, ImageCandidate, LocalAppRecord};

/// Header line printed by `distrobox create -C`.
pub const CATALOG_HEADER: &str = "Images";

/// Desktop-entry field codes that only make sense to a launcher.
const FIELD_CODES: &[&str] = &["%f", "%F", "%u", "%U"];

// ── Containers ────────────────────────────────────────────────────────────────

/// Parse `distrobox list --no-color` output.
///
/// The first line is the column header and is always discarded. Rows need
/// more than three `|`-separated fields: id, name, status, image.
#[must_use]
pub fn parse_container_list(output: &str) -> Vec<ContainerRecord> {
    output
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_container_line)
        .collect()
}

fn parse_container_line(line: &str) -> Option<ContainerRecord> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    let [id, name, status, image, ..] = fields.as_slice() else {
        tracing::trace!(line, "skipping short container row");
        return None;
    };
    Some(ContainerRecord::new(id, name, status, image))
}

// ── Local apps ────────────────────────────────────────────────────────────────

/// Parse the helper script output: `desktop-file;icon;name;exec` per line.
///
/// Lines that do not split into exactly four fields are dropped.
#[must_use]
pub fn parse_local_apps(output: &str) -> Vec<LocalAppRecord> {
    let lines: Vec<&str> = output.lines().collect();
    if let [only] = lines.as_slice()
        && only.contains("No such file")
    {
        return Vec::new();
    }

    lines
        .into_iter()
        .filter(|line| line.contains(';'))
        .filter_map(parse_app_line)
        .collect()
}

fn parse_app_line(line: &str) -> Option<LocalAppRecord> {
    let fields: Vec<&str> = line.split(';').collect();
    let [desktop_file, icon, name, exec] = fields.as_slice() else {
        tracing::trace!(line, fields = fields.len(), "skipping malformed app row");
        return None;
    };
    Some(LocalAppRecord {
        desktop_file: desktop_file.trim().to_string(),
        icon: icon.trim().to_string(),
        name: name.trim().to_string(),
        exec: strip_field_codes(exec),
    })
}

/// Remove `%f`, `%F`, `%u` and `%U` tokens from a desktop-entry Exec line.
///
/// ```
/// use boxbuddy_cli::domain::listing::strip_field_codes;
/// assert_eq!(strip_field_codes("myapp %U"), "myapp");
/// ```
#[must_use]
pub fn strip_field_codes(exec: &str) -> String {
    exec.split(' ')
        .filter(|token| !FIELD_CODES.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

// ── Image catalog ─────────────────────────────────────────────────────────────

/// Parse `distrobox create -C` output, dropping the header and blank lines.
#[must_use]
pub fn parse_image_catalog(output: &str) -> Vec<ImageCandidate> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != CATALOG_HEADER)
        .map(ImageCandidate::new)
        .collect()
}

/// Sort by guessed distro. Stable, so ties keep catalog order.
#[must_use]
pub fn sort_by_distro(mut images: Vec<ImageCandidate>) -> Vec<ImageCandidate> {
    images.sort_by(|a, b| a.distro.cmp(&b.distro));
    images
}

/// Sort by the `"Distro - image"` display label.
#[must_use]
pub fn sort_by_label(mut images: Vec<ImageCandidate>) -> Vec<ImageCandidate> {
    images.sort_by_cached_key(ImageCandidate::label);
    images
}

/// Resolve a catalog label (`"Ubuntu - docker.io/library/ubuntu:22.04"`) or a
/// bare image reference to the image reference.
#[must_use]
pub fn image_from_label(selection: &str) -> &str {
    selection.split_whitespace().last().unwrap_or("")
}
