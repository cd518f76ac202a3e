use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NavLinkEntry {
    href: String,
    label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CallToAction {
    label: String,
    href: String,
    #[serde(default)]
    variant: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SiteManifest {
    schema_version: u32,
    title: String,
    #[serde(default)]
    description: String,
    redirect_path: String,
    min_password_len: usize,
    #[serde(default)]
    cta: Option<CallToAction>,
    #[serde(default)]
    nav_links: Vec<NavLinkEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("site.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: SiteManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != SCHEMA_VERSION {
        panic!(
            "site config schema mismatch in {}: expected {SCHEMA_VERSION} found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize site config");
    let generated = format!(
        "/// Build-time generated site configuration JSON.\n\
pub const SITE_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("site_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
