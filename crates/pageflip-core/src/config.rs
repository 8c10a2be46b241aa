//! Construction-time configuration for controllers and sessions.

use crate::{
    controller::{NavDirection, Region},
    input::SwipeDirection,
};

const DEFAULT_COOLDOWN_MS: u64 = 1_000;

/// Boundary policy applied when an index reaches the first or last page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoundaryMode {
    /// Indices cycle modulo the track length. No covers.
    Wrap,
    /// Indices clamp to the first/last page and the other track is pulled along.
    /// Both tracks must have the same length.
    ClampSync,
    /// `-1` and `len` act as front/back cover sentinels.
    CoverSentinel,
    /// Like [`BoundaryMode::CoverSentinel`], but stepping past the last page
    /// starts over at page zero.
    CoverWrap,
    /// Like [`BoundaryMode::ClampSync`], with sync targets taken from the other
    /// track's own length.
    LengthMismatchTolerant,
}

impl BoundaryMode {
    pub const ALL: [Self; 5] = [
        Self::Wrap,
        Self::ClampSync,
        Self::CoverSentinel,
        Self::CoverWrap,
        Self::LengthMismatchTolerant,
    ];

    /// Whether the mode shows dedicated cover elements.
    pub const fn has_covers(self) -> bool {
        matches!(self, Self::CoverSentinel | Self::CoverWrap)
    }

    /// Physical swipe mapping used by the scripts each mode was built for.
    ///
    /// The free-wrapping object carousel advances on a right swipe; the book
    /// and page variants advance on a left swipe.
    pub const fn default_mapping(self) -> SwipeMapping {
        match self {
            Self::Wrap => SwipeMapping::RightAdvances,
            _ => SwipeMapping::LeftAdvances,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::ClampSync => "clamp-sync",
            Self::CoverSentinel => "cover-sentinel",
            Self::CoverWrap => "cover-wrap",
            Self::LengthMismatchTolerant => "length-mismatch-tolerant",
        }
    }
}

/// Which physical swipe moves forward through the deck.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwipeMapping {
    LeftAdvances,
    RightAdvances,
}

impl SwipeMapping {
    pub const fn direction(self, swipe: SwipeDirection) -> NavDirection {
        match (self, swipe) {
            (Self::LeftAdvances, SwipeDirection::Left)
            | (Self::RightAdvances, SwipeDirection::Right) => NavDirection::Forward,
            (Self::LeftAdvances, SwipeDirection::Right)
            | (Self::RightAdvances, SwipeDirection::Left) => NavDirection::Backward,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A track was configured with no elements.
    EmptyTrack(Region),
    /// [`BoundaryMode::ClampSync`] requires tracks of equal length.
    LengthMismatch { upper: u16, lower: u16 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControllerConfig {
    pub mode: BoundaryMode,
    pub upper_len: u16,
    pub lower_len: u16,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mode: BoundaryMode::CoverSentinel,
            upper_len: 1,
            lower_len: 1,
        }
    }
}

impl ControllerConfig {
    pub const fn new(mode: BoundaryMode, upper_len: u16, lower_len: u16) -> Self {
        Self {
            mode,
            upper_len,
            lower_len,
        }
    }

    pub const fn with_mode(mut self, mode: BoundaryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upper_len == 0 {
            return Err(ConfigError::EmptyTrack(Region::Upper));
        }
        if self.lower_len == 0 {
            return Err(ConfigError::EmptyTrack(Region::Lower));
        }
        if matches!(self.mode, BoundaryMode::ClampSync) && self.upper_len != self.lower_len {
            return Err(ConfigError::LengthMismatch {
                upper: self.upper_len,
                lower: self.lower_len,
            });
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThrottleConfig {
    /// Time after an accepted swipe during which further swipes are dropped.
    /// `0` disables throttling.
    pub cooldown_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}

impl ThrottleConfig {
    pub const fn disabled() -> Self {
        Self { cooldown_ms: 0 }
    }

    pub const fn with_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }
}

/// Everything a [`crate::app::PageTurner`] session needs besides its collaborators.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TurnerConfig {
    pub controller: ControllerConfig,
    pub throttle: ThrottleConfig,
    pub mapping: SwipeMapping,
    pub sound_enabled: bool,
}

impl Default for TurnerConfig {
    fn default() -> Self {
        Self::for_controller(ControllerConfig::default())
    }
}

impl TurnerConfig {
    /// Session defaults for a controller: the mode's own swipe mapping, the
    /// default cooldown and the page-turn sound on.
    pub const fn for_controller(controller: ControllerConfig) -> Self {
        Self {
            controller,
            throttle: ThrottleConfig {
                cooldown_ms: DEFAULT_COOLDOWN_MS,
            },
            mapping: controller.mode.default_mapping(),
            sound_enabled: true,
        }
    }

    pub const fn with_throttle(mut self, throttle: ThrottleConfig) -> Self {
        self.throttle = throttle;
        self
    }

    pub const fn with_mapping(mut self, mapping: SwipeMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub const fn with_sound_enabled(mut self, sound_enabled: bool) -> Self {
        self.sound_enabled = sound_enabled;
        self
    }
}
