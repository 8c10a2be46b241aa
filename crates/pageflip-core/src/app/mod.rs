//! Swipe session: pointer classification, throttling, index stepping and
//! display sync wired to the host's collaborators.

use log::{debug, info, warn};

use crate::{
    config::{ConfigError, SwipeMapping, TurnerConfig},
    controller::{NavDirection, PageIndexController, Region},
    input::{DisplayGeometry, PointerSource, RegionClassifier, SwipeDirection},
    render::{AudioCue, DisplayState, DisplaySurface, present},
    throttle::InputThrottle,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnOutcome {
    /// The page pair changed (or was re-pinned at a boundary) and was pushed
    /// to the display.
    Turned(DisplayState),
    /// Dropped by the cooldown.
    Throttled,
    /// No finger was down when the gesture fired.
    NoPointer,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TurnError<E> {
    Display(E),
}

pub struct PageTurner<SC, DS, AC>
where
    SC: PointerSource + DisplayGeometry,
    DS: DisplaySurface,
    AC: AudioCue,
{
    screen: SC,
    surface: DS,
    audio: AC,
    throttle: InputThrottle,
    mapping: SwipeMapping,
    sound_enabled: bool,
}

include!("input.rs");
include!("runtime.rs");
