use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Timings {
    modal_transition_ms: u32,
    tab_fade_ms: u32,
    notification_display_ms: u32,
    notification_fade_ms: u32,
    compose_delay_ms: u32,
    ripple_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeedAssignee {
    name: String,
    role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeedField {
    name: String,
    value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DealSeed {
    title: String,
    #[serde(default)]
    assignees: Vec<SeedAssignee>,
    #[serde(default)]
    files: Vec<String>,
    #[serde(default)]
    custom_fields: Vec<SeedField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DealConfig {
    schema_version: u32,
    timings: Timings,
    deal: DealSeed,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("deal.config.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: DealConfig = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if config.schema_version != 1 {
        panic!(
            "config schema mismatch in {}: expected 1 found {}",
            path.display(),
            config.schema_version
        );
    }
    let timings = &config.timings;
    for (key, value) in [
        ("modal_transition_ms", timings.modal_transition_ms),
        ("tab_fade_ms", timings.tab_fade_ms),
        ("notification_display_ms", timings.notification_display_ms),
        ("notification_fade_ms", timings.notification_fade_ms),
        ("ripple_ms", timings.ripple_ms),
    ] {
        if value == 0 {
            panic!("timing `{key}` in {} must be non-zero", path.display());
        }
    }

    if timings.notification_display_ms < timings.notification_fade_ms {
        panic!(
            "notification_display_ms must not be shorter than notification_fade_ms in {}",
            path.display()
        );
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize deal config");
    let generated = format!(
        "/// Build-time generated deal dashboard configuration JSON.\n\
pub const DEAL_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("deal_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
