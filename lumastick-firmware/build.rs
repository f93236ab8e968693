//! Build script for lumastick-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time
//! - Generates `board_config.rs` with the loop configuration

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

#[path = "build/diagnostics.rs"]
mod diagnostics;

use diagnostics::format_error_lines;

/// Accepted debounce window range (ms)
const DEBOUNCE_RANGE: (i64, i64) = (1, 2000);
/// Accepted frame interval range (ms)
const FRAME_INTERVAL_RANGE: (i64, i64) = (1, 1000);

/// Values used when a key is absent
const DEFAULT_DEBOUNCE_MS: i64 = 200;
const DEFAULT_FRAME_INTERVAL_MS: i64 = 10;
const DEFAULT_BORDER_OVERLAY: bool = false;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/diagnostics.rs");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}

/// Validated board settings
struct BoardConfig {
    debounce_ms: i64,
    frame_interval_ms: i64,
    border_overlay: bool,
}

/// Validate board.toml configuration at compile time
fn validate_config() -> BoardConfig {
    // Re-run if board.toml changes
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the lumastick-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let debounce_ms = read_integer(
        &config,
        "input",
        "debounce_ms",
        DEFAULT_DEBOUNCE_MS,
        DEBOUNCE_RANGE,
        &mut errors,
    );
    let frame_interval_ms = read_integer(
        &config,
        "display",
        "frame_interval_ms",
        DEFAULT_FRAME_INTERVAL_MS,
        FRAME_INTERVAL_RANGE,
        &mut errors,
    );
    let border_overlay = read_bool(
        &config,
        "display",
        "border_overlay",
        DEFAULT_BORDER_OVERLAY,
        &mut errors,
    );

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=board.toml validated successfully");

    BoardConfig {
        debounce_ms,
        frame_interval_ms,
        border_overlay,
    }
}

/// Read an integer key, falling back to `default` when absent
fn read_integer(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: i64,
    (min, max): (i64, i64),
    errors: &mut Vec<String>,
) -> i64 {
    match config.get(section).and_then(|s| s.get(key)) {
        None => default,
        Some(toml::Value::Integer(v)) => {
            if *v < min || *v > max {
                errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            }
            *v
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            default
        }
    }
}

/// Read a boolean key, falling back to `default` when absent
fn read_bool(
    config: &toml::Value,
    section: &str,
    key: &str,
    default: bool,
    errors: &mut Vec<String>,
) -> bool {
    match config.get(section).and_then(|s| s.get(key)) {
        None => default,
        Some(toml::Value::Boolean(v)) => *v,
        Some(_) => {
            errors.push(format!("[{}] {} must be true or false", section, key));
            default
        }
    }
}

/// Write `board_config.rs` into OUT_DIR
fn generate_config(config: &BoardConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let source = format!(
        "/// Loop configuration generated from board.toml\n\
         pub const LOOP_CONFIG: LoopConfig = LoopConfig {{\n\
         \x20   debounce_window_ms: {},\n\
         \x20   frame_interval_ms: {},\n\
         \x20   border_overlay: {},\n\
         }};\n",
        config.debounce_ms, config.frame_interval_ms, config.border_overlay
    );
    fs::write(out_dir.join("board_config.rs"), source).unwrap();
}
