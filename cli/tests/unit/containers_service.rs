//! Box listing and lifecycle services over a mocked runner.

use boxbuddy_cli::application::ports::CreateSpec;
use boxbuddy_cli::application::services::containers::{
    create_container, delete_container, distrobox_installed, ensure_distrobox, list_containers,
};
use boxbuddy_cli::domain::error::BoxError;

use crate::helpers::{MockCommandRunner, err_out, gateway, out};

const LISTING: &str = "ID           | NAME   | STATUS     | IMAGE\n\
abc123       | mybox  | Up 2 hours | docker.io/library/ubuntu:22.04\n\
def456       | fedbox | Exited (0) | registry.fedoraproject.org/fedora-toolbox:39\n";

// ── Presence check ───────────────────────────────────────────────────────────

#[tokio::test]
async fn distrobox_found_when_which_prints_path() {
    let runner = MockCommandRunner::with_stdout("/usr/bin/distrobox\n");
    assert!(distrobox_installed(&gateway(&runner)).await);
    ensure_distrobox(&gateway(&runner)).await.expect("present");
}

#[tokio::test]
async fn distrobox_missing_on_fedora_which_message() {
    let runner = MockCommandRunner::responding(|_, _| {
        Ok(err_out("/usr/bin/which: no distrobox in (/usr/bin)"))
    });
    let err = ensure_distrobox(&gateway(&runner))
        .await
        .expect_err("missing");
    assert!(matches!(
        err.downcast_ref::<BoxError>(),
        Some(BoxError::DistroboxNotInstalled)
    ));
}

#[tokio::test]
async fn distrobox_missing_on_silent_which() {
    let runner = MockCommandRunner::new_ok();
    assert!(!distrobox_installed(&gateway(&runner)).await);
}

#[tokio::test]
async fn distrobox_missing_when_which_cannot_spawn() {
    let runner = MockCommandRunner::new_err("which: not found");
    assert!(!distrobox_installed(&gateway(&runner)).await);
}

// ── Listing ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_containers_parses_records() {
    let runner = MockCommandRunner::with_stdout(LISTING);
    let boxes = list_containers(&gateway(&runner)).await.expect("list");
    assert_eq!(boxes.len(), 2);
    assert_eq!(boxes[0].id, "abc123");
    assert_eq!(boxes[0].name, "mybox");
    assert_eq!(boxes[0].distro, "ubuntu");
    assert_eq!(boxes[0].status, "Up 2 hours");
    assert_eq!(boxes[1].distro, "fedora");
}

#[tokio::test]
async fn list_containers_header_only_is_empty() {
    let runner = MockCommandRunner::with_stdout("ID | NAME | STATUS | IMAGE\n");
    let boxes = list_containers(&gateway(&runner)).await.expect("list");
    assert!(boxes.is_empty());
}

#[tokio::test]
async fn list_containers_propagates_spawn_error() {
    let runner = MockCommandRunner::new_err("boom");
    assert!(list_containers(&gateway(&runner)).await.is_err());
}

// ── Create / delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn create_without_init_runs_single_command() {
    let runner = MockCommandRunner::with_stdout("Creating 'mybox' using image ubuntu");
    let spec = CreateSpec {
        name: "mybox",
        image: "ubuntu:22.04",
    };
    let outcome = create_container(&gateway(&runner), &spec, false)
        .await
        .expect("create");
    assert!(outcome.init.is_none());
    assert_eq!(outcome.create, out("Creating 'mybox' using image ubuntu"));
    assert_eq!(
        runner.command_lines(),
        ["distrobox create -n mybox -i ubuntu:22.04 -Y"]
    );
}

#[tokio::test]
async fn create_with_init_enters_box_afterwards() {
    let runner = MockCommandRunner::new_ok();
    let spec = CreateSpec {
        name: "mybox",
        image: "ubuntu:22.04",
    };
    let outcome = create_container(&gateway(&runner), &spec, true)
        .await
        .expect("create");
    assert!(outcome.init.is_some());
    assert_eq!(
        runner.command_lines(),
        [
            "distrobox create -n mybox -i ubuntu:22.04 -Y",
            "setsid distrobox enter mybox -- ls",
        ]
    );
}

#[tokio::test]
async fn create_failure_output_is_returned_not_raised() {
    let runner = MockCommandRunner::responding(|_, _| Ok(err_out("Error: image pull failed")));
    let spec = CreateSpec {
        name: "mybox",
        image: "bogus",
    };
    let outcome = create_container(&gateway(&runner), &spec, false)
        .await
        .expect("raw output, not an error");
    assert_eq!(outcome.create.stderr, "Error: image pull failed");
}

#[tokio::test]
async fn delete_force_removes_box() {
    let runner = MockCommandRunner::new_ok();
    delete_container(&gateway(&runner), "mybox")
        .await
        .expect("delete");
    assert_eq!(runner.command_lines(), ["distrobox rm mybox -f"]);
}
