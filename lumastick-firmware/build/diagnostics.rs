//! Box-drawn diagnostics for build.rs
//!
//! Standalone so the formatting can be tested with
//! `rustc --edition 2021 --test build/diagnostics.rs`.

/// Inner width of the diagnostic box, in characters
const BOX_WIDTH: usize = 64;

/// Format error message lines with box drawing
///
/// Long lines are cut to fit the box. Cuts count characters, not bytes, so
/// multi-byte text in parser messages cannot split a code point.
pub fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > BOX_WIDTH {
                format!("{}...", line.chars().take(BOX_WIDTH - 3).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
