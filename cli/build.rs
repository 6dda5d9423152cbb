/// Rebuild when the embedded helper scripts change.
///
/// `include_dir!()` does not register its inputs with cargo on stable,
/// so edits under `assets/` would otherwise be missed by incremental builds.
fn main() {
    println!("cargo::rerun-if-changed=assets");
}
