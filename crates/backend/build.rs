use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Stages the workspace-level config.toml next to the compiled binary so
// the executable-directory lookup in shared::config finds it under
// `cargo run` as well as in a packaged install.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let source = workspace_root().join("config.toml");
    if !source.exists() {
        // Embedded defaults apply; nothing to stage.
        return;
    }

    let dest = profile_dir().join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        println!(
            "cargo:warning=could not stage config.toml into {}: {}",
            dest.display(),
            e
        );
    }
}

fn workspace_root() -> PathBuf {
    // crates/backend -> crates -> workspace root
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("backend crate sits two levels under the workspace root")
        .to_path_buf()
}

fn profile_dir() -> PathBuf {
    // OUT_DIR looks like target/<profile>/build/backend-<hash>/out; the
    // binary itself lands in target/<profile>.
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("OUT_DIR sits under the profile directory")
        .to_path_buf()
}
