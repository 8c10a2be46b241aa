//! Cooldown gate in front of a [`PageIndexController`].
//!
//! Overlapping gesture callbacks can report the same swipe twice. After an
//! accepted navigation the gate stays closed until `cooldown_ms` has passed
//! since that acceptance; rejected attempts do not extend the window.

use log::debug;

use crate::{
    config::ThrottleConfig,
    controller::{NavDirection, PageIndexController, Region},
    render::DisplayState,
};

/// Navigation dropped because a cooldown was running.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rejected;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InputThrottle {
    controller: PageIndexController,
    config: ThrottleConfig,
    accepting_input: bool,
    reopen_at_ms: u64,
}

impl InputThrottle {
    pub const fn new(controller: PageIndexController, config: ThrottleConfig) -> Self {
        Self {
            controller,
            config,
            accepting_input: true,
            reopen_at_ms: 0,
        }
    }

    /// Forwards to [`PageIndexController::advance`] unless a cooldown is active.
    pub fn try_advance(
        &mut self,
        region: Region,
        direction: NavDirection,
        now_ms: u64,
    ) -> Result<DisplayState, Rejected> {
        if !self.poll(now_ms) {
            debug!(
                "nav: throttled region={:?} direction={:?} remaining_ms={}",
                region,
                direction,
                self.reopen_at_ms.saturating_sub(now_ms)
            );
            return Err(Rejected);
        }

        let state = self.controller.advance(region, direction);
        if self.config.cooldown_ms > 0 {
            self.accepting_input = false;
            self.reopen_at_ms = now_ms.saturating_add(self.config.cooldown_ms);
        }
        Ok(state)
    }

    /// Re-opens the gate once the cooldown has elapsed. Returns whether input
    /// is accepted at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if !self.accepting_input && now_ms >= self.reopen_at_ms {
            self.accepting_input = true;
        }
        self.accepting_input
    }

    pub const fn cooldown_active(&self, now_ms: u64) -> bool {
        !self.accepting_input && now_ms < self.reopen_at_ms
    }

    pub fn clear_cooldown(&mut self) {
        self.accepting_input = true;
    }

    pub const fn controller(&self) -> &PageIndexController {
        &self.controller
    }

    /// Direct access for resets; does not touch the cooldown.
    pub fn controller_mut(&mut self) -> &mut PageIndexController {
        &mut self.controller
    }

    pub const fn config(&self) -> ThrottleConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoundaryMode, ControllerConfig};

    fn throttle(cooldown_ms: u64) -> InputThrottle {
        let controller =
            PageIndexController::new(ControllerConfig::new(BoundaryMode::Wrap, 4, 4)).unwrap();
        InputThrottle::new(controller, ThrottleConfig::default().with_cooldown_ms(cooldown_ms))
    }

    #[test]
    fn second_call_inside_window_is_rejected() {
        let mut gate = throttle(1_000);

        assert_eq!(
            gate.try_advance(Region::Upper, NavDirection::Forward, 5_000),
            Ok(DisplayState::Pages { upper: 1, lower: 0 })
        );
        assert_eq!(
            gate.try_advance(Region::Upper, NavDirection::Forward, 5_000),
            Err(Rejected)
        );
        assert_eq!(gate.controller().indices(), (1, 0));

        assert_eq!(
            gate.try_advance(Region::Upper, NavDirection::Forward, 6_000),
            Ok(DisplayState::Pages { upper: 2, lower: 0 })
        );
    }

    #[test]
    fn rejected_calls_do_not_extend_window() {
        let mut gate = throttle(1_000);
        gate.try_advance(Region::Lower, NavDirection::Forward, 0).unwrap();

        assert!(gate.try_advance(Region::Lower, NavDirection::Forward, 400).is_err());
        assert!(gate.try_advance(Region::Lower, NavDirection::Forward, 999).is_err());
        assert!(gate.cooldown_active(999));
        assert!(!gate.cooldown_active(1_000));
        assert!(gate.try_advance(Region::Lower, NavDirection::Forward, 1_000).is_ok());
    }

    #[test]
    fn clear_cooldown_reopens_immediately() {
        let mut gate = throttle(1_000);
        gate.try_advance(Region::Upper, NavDirection::Backward, 10).unwrap();
        assert!(gate.cooldown_active(11));

        gate.clear_cooldown();
        assert!(!gate.cooldown_active(11));
        assert!(gate.try_advance(Region::Upper, NavDirection::Backward, 11).is_ok());
        assert_eq!(gate.controller().indices(), (2, 0));
    }

    #[test]
    fn zero_cooldown_never_rejects() {
        let mut gate = throttle(0);
        for _ in 0..8 {
            assert!(gate.try_advance(Region::Upper, NavDirection::Forward, 0).is_ok());
        }
        assert_eq!(gate.controller().indices(), (0, 0));
    }
}
