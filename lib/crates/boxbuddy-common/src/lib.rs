pub mod distro;
pub mod types;

pub use distro::{KNOWN_DISTROS, UNKNOWN_DISTRO, display_name, distro_colour, guess_distro};
pub use types::*;
