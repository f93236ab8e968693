//! Board configuration
//!
//! `LOOP_CONFIG` is generated by build.rs from board.toml.

use lumastick_core::config::LoopConfig;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

const _: () = assert!(
    LOOP_CONFIG.validate().is_ok(),
    "board.toml: loop timing out of range"
);
