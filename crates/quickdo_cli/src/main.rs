//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quickdo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("quickdo_core ping={}", quickdo_core::ping());
    println!("quickdo_core version={}", quickdo_core::core_version());
}
