#![cfg_attr(not(test), no_std)]

//! Swipe-driven page navigation for a two-track "book" display.
//!
//! An upper and a lower sequence of page elements are stepped through by
//! swipes on the upper or lower half of the screen. [`controller`] holds the
//! index state machine and its boundary policies, [`throttle`] rate-limits
//! accepted swipes, [`input`] classifies pointers into screen regions,
//! [`render`] describes what should be visible, and [`app`] wires everything
//! to the host's collaborators.

pub mod app;
pub mod config;
pub mod controller;
pub mod input;
pub mod render;
pub mod throttle;

pub use app::{PageTurner, TurnError, TurnOutcome};
pub use config::{
    BoundaryMode, ConfigError, ControllerConfig, SwipeMapping, ThrottleConfig, TurnerConfig,
};
pub use controller::{NavDirection, PageIndexController, Region};
pub use input::{DisplayGeometry, Pointer, PointerSource, RegionClassifier, SwipeDirection};
pub use render::{AudioCue, Cover, DisplayState, DisplaySurface};
pub use throttle::{InputThrottle, Rejected};
