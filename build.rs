use std::env;

fn main() {
    // Pick the default log level at compile time based on build profile
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());

    // Cargo reports custom profiles as their base; the release profile with debug info is "profiling"
    let is_profiling = env::var("DEBUG").map(|d| d != "false" && d != "0").unwrap_or(false);

    println!("cargo::rustc-check-cfg=cfg(log_profile, values(\"release\", \"profiling\", \"debug\"))");

    match profile.as_str() {
        "release" if is_profiling => {
            // Minimal logging for profiling builds
            println!("cargo:rustc-cfg=log_profile=\"profiling\"");
        }
        "release" => {
            // Errors only in release builds
            println!("cargo:rustc-cfg=log_profile=\"release\"");
        }
        _ => {
            // Full logging for debug builds
            println!("cargo:rustc-cfg=log_profile=\"debug\"");
        }
    }

    println!("cargo:rerun-if-env-changed=PROFILE");
}
