//! Embeds the compile time of the `healthcalc` crate.

fn main() {
    println!("cargo:rerun-if-changed=src");

    let built_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=HEALTHCALC_BUILT_AT={built_at}");
}
