fn main() {
    let python_enabled = std::env::var_os("CARGO_FEATURE_PYTHON").is_some();
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    // The `python` feature builds a Python extension module; on macOS the
    // interpreter symbols are resolved at import time, not at link time.
    if python_enabled && target_os == "macos" {
        println!("cargo:rustc-cdylib-link-arg=-undefined");
        println!("cargo:rustc-cdylib-link-arg=dynamic_lookup");
    }
}
