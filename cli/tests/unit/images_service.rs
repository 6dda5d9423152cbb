//! Image catalog services.

use boxbuddy_cli::application::services::images::{catalog_by_distro, catalog_by_label};

use crate::helpers::{MockCommandRunner, gateway};

const CATALOG: &str = "Images\n\
docker.io/library/ubuntu:24.04\n\
myregistry.example/foo:bar\n\
\n\
quay.io/fedora/fedora:40\n\
docker.io/library/ubuntu:22.04\n\
docker.io/library/alpine:3.19\n";

fn images(list: &[boxbuddy_common::ImageCandidate]) -> Vec<&str> {
    list.iter().map(|i| i.image.as_str()).collect()
}

#[tokio::test]
async fn by_label_sorts_alphabetically_by_display_label() {
    let runner = MockCommandRunner::with_stdout(CATALOG);
    let catalog = catalog_by_label(&gateway(&runner)).await.expect("catalog");
    assert_eq!(
        images(&catalog),
        [
            "docker.io/library/alpine:3.19",
            "quay.io/fedora/fedora:40",
            "docker.io/library/ubuntu:22.04",
            "docker.io/library/ubuntu:24.04",
            "myregistry.example/foo:bar",
        ]
    );
    assert_eq!(runner.command_lines(), ["distrobox create -C"]);
}

#[tokio::test]
async fn by_distro_keeps_catalog_order_within_a_distro() {
    let runner = MockCommandRunner::with_stdout(CATALOG);
    let catalog = catalog_by_distro(&gateway(&runner)).await.expect("catalog");
    assert_eq!(
        images(&catalog),
        [
            "docker.io/library/alpine:3.19",
            "quay.io/fedora/fedora:40",
            "docker.io/library/ubuntu:24.04",
            "docker.io/library/ubuntu:22.04",
            "myregistry.example/foo:bar",
        ]
    );
}

#[tokio::test]
async fn unknown_images_sort_last_by_distro() {
    let runner = MockCommandRunner::with_stdout(CATALOG);
    let catalog = catalog_by_distro(&gateway(&runner)).await.expect("catalog");
    assert_eq!(catalog.last().map(|i| i.distro.as_str()), Some("zunknown"));
}

#[tokio::test]
async fn identical_output_gives_equal_catalogs() {
    let runner = MockCommandRunner::with_stdout(CATALOG);
    let gw = gateway(&runner);
    let first = catalog_by_label(&gw).await.expect("first");
    let second = catalog_by_label(&gw).await.expect("second");
    assert_eq!(first, second);
}

#[tokio::test]
async fn header_only_catalog_is_empty() {
    let runner = MockCommandRunner::with_stdout("Images\n");
    assert!(catalog_by_label(&gateway(&runner)).await.expect("catalog").is_empty());
}
