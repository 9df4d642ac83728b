// File: crates/dashboard-core/build.rs
// Summary: Links the Windows system libraries Skia needs when the `png` feature is on.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let png = std::env::var_os("CARGO_FEATURE_PNG").is_some();
    let windows = std::env::var("CARGO_CFG_TARGET_OS").map(|os| os == "windows").unwrap_or(false);
    if png && windows {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
