use std::{path::PathBuf, process::Command};

/// Run git in the package directory; `None` outside a checkout or without git
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string())
}

fn main() {
    // Source tarballs carry no git metadata; --version then omits the revision
    println!("cargo:rerun-if-env-changed=POSTFEED_BUILD_REVISION");
    if let Ok(revision) = std::env::var("POSTFEED_BUILD_REVISION") {
        println!("cargo:rustc-env=_GIT_INFO={revision}");
        return;
    }

    let Some(git_dir) = git(&["rev-parse", "--git-dir"]).map(PathBuf::from) else {
        return;
    };

    // HEAD moves on checkout; the branch ref it names moves on commit
    println!("cargo:rerun-if-changed={}", git_dir.join("HEAD").display());
    if let Some(branch_ref) = git(&["symbolic-ref", "-q", "HEAD"]) {
        let ref_path = git_dir.join(branch_ref);
        if ref_path.exists() {
            println!("cargo:rerun-if-changed={}", ref_path.display());
        }
    }
    let packed_refs = git_dir.join("packed-refs");
    if packed_refs.exists() {
        println!("cargo:rerun-if-changed={}", packed_refs.display());
    }

    if let Some(revision) = git(&["describe", "--always", "--tags", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={revision}");
    }
}
