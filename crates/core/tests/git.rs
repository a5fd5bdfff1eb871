//! Git fetching against a stand-in `git` placed first on `PATH`.
//!
//! Kept to a single test: `PATH` is process-wide.
#![cfg(unix)]

use std::{
    env,
    fs::{self, read_to_string, write},
    os::unix::fs::PermissionsExt,
};

use color_onboard_core::{FontFile, FontSource, pipeline::fetch};

#[test]
fn test_git_clone_then_pull() {
    let bin = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    let log = bin.path().join("git.log");

    // records `<cwd>|<args>` and creates the checkout on clone
    let fake_git = format!(
        "#!/bin/sh\nprintf '%s|%s\\n' \"$(pwd -P)\" \"$*\" >> '{}'\n\
         if [ \"$1\" = clone ]; then mkdir -p \"$3\"; fi\n",
        log.display()
    );
    let git = bin.path().join("git");
    write(&git, fake_git).unwrap();
    fs::set_permissions(&git, fs::Permissions::from_mode(0o755)).unwrap();

    let path = env::var_os("PATH").unwrap_or_default();
    let mut paths = vec![bin.path().to_path_buf()];
    paths.extend(env::split_paths(&path));
    // SAFETY: the only test in this binary, no other thread reads the environment
    unsafe { env::set_var("PATH", env::join_paths(paths).unwrap()) };

    let fonts = [FontFile::new(
        "fonts/ink/ttf/BlakaInk-Regular.ttf",
        "ofl/blakaink/BlakaInk-Regular.ttf",
    )];
    let source = FontSource::git("git@example.com:x/Blaka.git", "blaka_ink", &fonts);
    let scratch_dir = fs::canonicalize(scratch.path()).unwrap();
    let checkout = scratch_dir.join("blaka_ink");

    let calls = || -> Vec<String> {
        read_to_string(&log).map(|s| s.lines().map(str::to_owned).collect()).unwrap_or_default()
    };

    // first run clones from the scratch directory
    assert_eq!(fetch(&source, &scratch_dir, true).unwrap(), checkout);
    assert!(checkout.is_dir());
    assert_eq!(
        calls(),
        vec![format!("{}|clone git@example.com:x/Blaka.git blaka_ink", scratch_dir.display())]
    );

    // later runs pull inside the checkout
    assert_eq!(fetch(&source, &scratch_dir, true).unwrap(), checkout);
    assert_eq!(calls().len(), 2);
    assert_eq!(calls()[1], format!("{}|pull", checkout.display()));

    // refresh off leaves the checkout alone
    assert_eq!(fetch(&source, &scratch_dir, false).unwrap(), checkout);
    assert_eq!(calls().len(), 2);
}
