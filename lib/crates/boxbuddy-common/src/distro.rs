//! Distribution-name heuristic for OCI image references.
//!
//! Pure functions only. The guess is best-effort: images from private
//! registries or with custom names fall through to [`UNKNOWN_DISTRO`].

/// Known distribution tokens, in match-priority order.
pub const KNOWN_DISTROS: &[&str] = &[
    "ubuntu",
    "debian",
    "centos",
    "oracle",
    "fedora",
    "arch",
    "alma",
    "slackware",
    "gentoo",
    "kali",
    "alpine",
    "clearlinux",
    "void",
    "amazon",
    "rocky",
    "redhat",
    "opensuse",
    "mageia",
];

/// Sentinel for images with no recognisable token. Sorts after every real name.
pub const UNKNOWN_DISTRO: &str = "zunknown";

/// Guess the distribution an image is based on.
///
/// The segment after the final `/` is checked first (`docker.io/library/ubuntu:22.04`
/// → `ubuntu`), then the whole reference (`opensuse.example/leap:15` → `opensuse`).
#[must_use]
pub fn guess_distro(image: &str) -> &'static str {
    let last_segment = image.rsplit('/').next().unwrap_or(image);
    first_token_in(last_segment)
        .or_else(|| first_token_in(image))
        .unwrap_or(UNKNOWN_DISTRO)
}

fn first_token_in(haystack: &str) -> Option<&'static str> {
    KNOWN_DISTROS.iter().copied().find(|d| haystack.contains(d))
}

/// Title-cased name for display; `"Unknown"` for the sentinel.
#[must_use]
pub fn display_name(distro: &str) -> String {
    if distro == UNKNOWN_DISTRO {
        return "Unknown".to_string();
    }
    let mut chars = distro.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Bullet colour shown next to a box of the given distro.
#[must_use]
pub fn distro_colour(distro: &str) -> (u8, u8, u8) {
    match distro {
        "ubuntu" => (0xff, 0x44, 0x00),
        "debian" => (0xda, 0x55, 0x55),
        "centos" => (0xff, 0x66, 0x00),
        "oracle" => (0xff, 0x00, 0x00),
        "fedora" => (0x00, 0x00, 0xff),
        "arch" => (0x12, 0xaa, 0xff),
        "alma" => (0xda, 0xda, 0xda),
        "slackware" => (0x61, 0x45, 0xa7),
        "gentoo" => (0xda, 0xaa, 0xda),
        "alpine" => (0x21, 0x47, 0xea),
        "clearlinux" => (0x56, 0xbb, 0xff),
        "void" => (0xab, 0xff, 0x12),
        "amazon" => (0xde, 0x54, 0x12),
        "rocky" => (0x91, 0xff, 0x91),
        "redhat" => (0xff, 0x66, 0x62),
        "opensuse" => (0xda, 0xff, 0x00),
        "mageia" => (0xb6, 0x12, 0xb6),
        // kali and anything unrecognised
        _ => (0x00, 0x00, 0x00),
    }
}
