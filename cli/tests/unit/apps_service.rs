//! App listing, export and launch services.

use boxbuddy_cli::application::services::apps::{export_app, list_apps, run_app};
use boxbuddy_cli::application::ports::ScriptInstaller;
use boxbuddy_cli::infra::assets::{HelperScript, LIST_APPS_SCRIPT};

use crate::helpers::{BrokenScript, FixedScript, MockCommandRunner, Mode, gateway};

const APPS: &str = "firefox.desktop;firefox;Firefox;firefox %u\n\
broken line without separators\n\
gimp.desktop;gimp;GIMP\n\
org.gnome.gedit.desktop;gedit;Text Editor;gedit %U\n";

#[tokio::test]
async fn list_apps_runs_helper_inside_box() {
    let runner = MockCommandRunner::with_stdout(APPS);
    let script = FixedScript("/home/u/.local/share/boxbuddy/boxbuddy-list-local-apps.sh");
    list_apps(&gateway(&runner), &script, "mybox")
        .await
        .expect("list");
    assert_eq!(
        runner.command_lines(),
        ["distrobox enter mybox -- /home/u/.local/share/boxbuddy/boxbuddy-list-local-apps.sh"]
    );
}

#[tokio::test]
async fn list_apps_keeps_only_four_field_rows() {
    let runner = MockCommandRunner::with_stdout(APPS);
    let apps = list_apps(&gateway(&runner), &FixedScript("/s.sh"), "mybox")
        .await
        .expect("list");
    let names: Vec<&str> = apps.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Firefox", "Text Editor"]);
    assert_eq!(apps[0].exec, "firefox");
    assert_eq!(apps[1].exec, "gedit");
    assert_eq!(apps[1].desktop_file, "org.gnome.gedit.desktop");
}

#[tokio::test]
async fn list_apps_missing_directory_is_empty() {
    let runner = MockCommandRunner::with_stdout(
        "ls: cannot access '/usr/share/applications': No such file or directory\n",
    );
    let apps = list_apps(&gateway(&runner), &FixedScript("/s.sh"), "mybox")
        .await
        .expect("list");
    assert!(apps.is_empty());
}

#[tokio::test]
async fn list_apps_fails_before_running_when_script_cannot_install() {
    let runner = MockCommandRunner::with_stdout(APPS);
    let err = list_apps(&gateway(&runner), &BrokenScript, "mybox")
        .await
        .expect_err("install fails");
    assert!(format!("{err:#}").contains("read-only file system"));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn list_apps_installs_real_helper_script() {
    let dir = tempfile::tempdir().expect("tempdir");
    let installer = HelperScript::in_dir(dir.path());
    let runner = MockCommandRunner::with_stdout(APPS);
    list_apps(&gateway(&runner), &installer, "mybox")
        .await
        .expect("list");
    let script = dir.path().join(LIST_APPS_SCRIPT);
    assert!(script.exists());
    assert_eq!(installer.install().expect("reinstall"), script);
    assert_eq!(
        runner.command_lines(),
        [format!("distrobox enter mybox -- {}", script.display())]
    );
}

#[tokio::test]
async fn export_app_runs_distrobox_export_in_box() {
    let runner = MockCommandRunner::new_ok();
    export_app(&gateway(&runner), "mybox", "firefox.desktop")
        .await
        .expect("export");
    assert_eq!(
        runner.command_lines(),
        ["distrobox enter mybox -- distrobox-export -a firefox.desktop"]
    );
}

#[test]
fn run_app_launches_detached_with_split_args() {
    let runner = MockCommandRunner::new_ok();
    run_app(&gateway(&runner), "mybox", "gedit --new-window").expect("run");
    assert_eq!(
        runner.calls(),
        [(
            Mode::Detached,
            "distrobox enter mybox -- gedit --new-window".to_string()
        )]
    );
}

#[test]
fn run_app_rejects_blank_exec() {
    let runner = MockCommandRunner::new_ok();
    assert!(run_app(&gateway(&runner), "mybox", "   ").is_err());
    assert!(runner.calls().is_empty());
}
