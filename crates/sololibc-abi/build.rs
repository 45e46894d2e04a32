fn main() {
    println!("cargo:rerun-if-changed=version_scripts/sololibc.map");
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_MANGLED_EXPORTS");
    // With mangled exports there is nothing for the map to name.
    if std::env::var_os("CARGO_FEATURE_MANGLED_EXPORTS").is_some() {
        return;
    }
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let version_script = format!("{manifest_dir}/version_scripts/sololibc.map");
    if std::path::Path::new(&version_script).exists() {
        println!("cargo:rustc-cdylib-link-arg=-Wl,--version-script={version_script}");
    }
}
