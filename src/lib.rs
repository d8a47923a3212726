// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Arcball virtual camera for an interactive textured-sphere viewer.
//!
//! The viewer shows one textured object at the origin inside a skybox. The
//! user orbits it by dragging (the pointer grabs a virtual trackball),
//! zooms with the scroll wheel, and can let a released drag coast or turn
//! on a slow turntable spin.
//!
//! # Key entry points
//!
//! - [`camera::VirtualCamera`] - the arcball camera state machine
//! - [`input::InputProcessor`] - platform events to [`camera::CameraCommand`]s
//! - [`renderer::FramePlanner`] - camera state to per-draw uniform blocks
//! - [`options::Options`] - runtime configuration (camera, display,
//!   keybindings) with TOML presets
//!
//! # Frame loop
//!
//! ```ignore
//! let mut camera = VirtualCamera::new(Vec2::new(800.0, 600.0));
//! let mut input = InputProcessor::new();
//! let mut clock = FrameTiming::default();
//!
//! // for each window event:
//! if let Some(cmd) = input.handle_event(event) {
//!     camera.execute(cmd);
//! }
//!
//! // once per frame:
//! camera.update(clock.tick());
//! planner.plan(&camera, &projection, &objects, &mut sink);
//! ```
//!
//! The camera has no GPU dependencies; mesh tessellation, texture loading,
//! and pipeline construction belong to the host.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;

pub use camera::{CameraCommand, VirtualCamera};
pub use error::OrbviewError;
pub use options::Options;
