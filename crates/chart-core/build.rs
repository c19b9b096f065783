// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by Skia's DirectWrite font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
