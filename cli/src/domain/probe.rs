//! "Is this tool installed?" heuristics over `which` output.
//!
//! `which` behaves differently across host distributions, so absence is
//! detected from the text alone:
//!
//! - Fedora prints `which: no <tool> in (<PATH>)` on stderr.
//! - Debian prints nothing at all and exits non-zero.
//!
//! The empty-output rule cannot tell "not installed" apart from a probe that
//! legitimately printed nothing. It is kept as-is because it matches how the
//! supported hosts behave, but it is environment-fragile.

/// Return `true` if a `which <tool>` probe indicates the tool is on `PATH`.
#[must_use]
pub fn tool_present(tool: &str, stdout: &str, stderr: &str) -> bool {
    let not_found = format!("no {tool} in");
    if stdout.contains(&not_found) || stderr.contains(&not_found) {
        return false;
    }
    if stdout.trim().is_empty() && stderr.trim().is_empty() {
        return false;
    }
    true
}
