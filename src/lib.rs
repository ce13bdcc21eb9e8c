// -- Lint policy ---------------------------------------------------------
// Crate-wide lints. Cargo.toml mirrors these for tools that read it.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Editor scene viewport: a free-fly camera rendered offscreen and shown in
//! an egui window.
//!
//! # Key entry points
//!
//! - [`panel::ViewportPanel`] - the scene window, driven once per frame via
//!   `new` / `handle_event` / `update` / `show`
//! - [`renderer::SceneRenderer`] - what the panel renders through
//! - [`gpu::WgpuSceneRenderer`] - the wgpu implementation
//! - [`options::Options`] - camera, viewport and key binding configuration
//! - [`panel::Editor`] - viewport plus outline, inspector and window menu
//!
//! # Frame lifecycle
//!
//! Everything runs on the main thread, in order: every queued
//! [`input::InputEvent`] goes through `handle_event`, then `update` moves
//! the camera and renders into the offscreen target, then `show` draws the
//! window and measures the panel size and focus used by the next `update`.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod panel;
pub mod renderer;
pub mod scene;

pub use error::ViewportError;
