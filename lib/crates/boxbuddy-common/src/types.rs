use serde::{Deserialize, Serialize};

use crate::distro::{display_name, guess_distro};

/// One distrobox-managed container, as reported by `distrobox list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRecord {
    /// Container id from the runtime (podman/docker short id).
    pub id: String,
    /// User-assigned box name, unique per host.
    pub name: String,
    /// Best-effort distribution name guessed from `image_url`.
    pub distro: String,
    /// OCI image reference the box was created from.
    pub image_url: String,
    /// Free-text state reported by distrobox, e.g. `"Up 2 hours"`.
    pub status: String,
}

impl ContainerRecord {
    /// Build a record from the four listing fields, guessing the distro.
    #[must_use]
    pub fn new(id: &str, name: &str, status: &str, image_url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            distro: guess_distro(image_url).to_string(),
            image_url: image_url.to_string(),
            status: status.to_string(),
        }
    }
}

/// A desktop application found inside a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalAppRecord {
    /// Path of the `.desktop` file inside the container.
    pub desktop_file: String,
    /// Icon name from the desktop entry.
    pub icon: String,
    /// Human-readable application name.
    pub name: String,
    /// Exec line with file/URL field codes removed.
    pub exec: String,
}

/// A pullable base image from the distrobox catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCandidate {
    pub image: String,
    pub distro: String,
}

impl ImageCandidate {
    #[must_use]
    pub fn new(image: &str) -> Self {
        Self {
            image: image.to_string(),
            distro: guess_distro(image).to_string(),
        }
    }

    /// Display label, e.g. `"Ubuntu - docker.io/library/ubuntu:22.04"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", display_name(&self.distro), self.image)
    }
}
