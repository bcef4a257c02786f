//! Links the firmware against `link.ld` when building for the bare-metal target.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=link.ld");
    println!("cargo:rerun-if-changed=build.rs");

    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("none") {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into());
        println!("cargo:rustc-link-search={manifest_dir}");
        println!("cargo:rustc-link-arg-bins=-Tlink.ld");
    }
}
