//! Upper/lower page index state machine.
//!
//! Both indices are kept as signed integers so the cover modes can use `-1`
//! (front cover) and `len` (back cover) as sentinels. Every transition lands
//! back inside `[-1, len]` for cover modes and `[0, len)` otherwise.

mod step;


use crate::{
    config::{BoundaryMode, ConfigError, ControllerConfig},
    render::{Cover, DisplayState},
};

use step::{Lane, step};

pub(crate) const FRONT_COVER_INDEX: i32 = -1;

/// Screen half a swipe landed on, and the element track it drives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Region {
    Upper,
    Lower,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavDirection {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageIndexController {
    config: ControllerConfig,
    upper: i32,
    lower: i32,
}

impl PageIndexController {
    /// Builds a controller already placed on the mode's start position.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut controller = Self {
            config,
            upper: 0,
            lower: 0,
        };
        controller.initialize();
        Ok(controller)
    }

    /// Resets to the start position: the front cover for cover modes, page
    /// zero on both tracks otherwise.
    pub fn initialize(&mut self) -> DisplayState {
        let start = if self.config.mode.has_covers() {
            FRONT_COVER_INDEX
        } else {
            0
        };
        self.upper = start;
        self.lower = start;
        self.display_state()
    }

    /// Steps the index of `region` and applies the mode's sync rule to the
    /// other track.
    pub fn advance(&mut self, region: Region, direction: NavDirection) -> DisplayState {
        let upper = Lane::new(self.upper, self.config.upper_len);
        let lower = Lane::new(self.lower, self.config.lower_len);

        match region {
            Region::Upper => {
                let (upper, lower) = step(self.config.mode, direction, upper, lower);
                self.upper = upper;
                self.lower = lower;
            }
            Region::Lower => {
                let (lower, upper) = step(self.config.mode, direction, lower, upper);
                self.upper = upper;
                self.lower = lower;
            }
        }

        self.display_state()
    }

    pub fn display_state(&self) -> DisplayState {
        if self.is_front_cover() {
            return DisplayState::Cover(Cover::Front);
        }
        if self.is_back_cover() {
            return DisplayState::Cover(Cover::Back);
        }

        DisplayState::Pages {
            upper: self.upper as u16,
            lower: self.lower as u16,
        }
    }

    /// Raw `(upper, lower)` indices including cover sentinels.
    pub const fn indices(&self) -> (i32, i32) {
        (self.upper, self.lower)
    }

    pub const fn index(&self, region: Region) -> i32 {
        match region {
            Region::Upper => self.upper,
            Region::Lower => self.lower,
        }
    }

    pub const fn is_front_cover(&self) -> bool {
        self.config.mode.has_covers() && (self.upper < 0 || self.lower < 0)
    }

    pub const fn is_back_cover(&self) -> bool {
        self.config.mode.has_covers()
            && (self.upper >= self.config.upper_len as i32
                || self.lower >= self.config.lower_len as i32)
    }

    pub const fn mode(&self) -> BoundaryMode {
        self.config.mode
    }

    pub const fn config(&self) -> ControllerConfig {
        self.config
    }
}
