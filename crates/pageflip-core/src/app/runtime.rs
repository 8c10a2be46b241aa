impl<SC, DS, AC> PageTurner<SC, DS, AC>
where
    SC: PointerSource + DisplayGeometry,
    DS: DisplaySurface,
    AC: AudioCue,
{
    pub fn new(
        screen: SC,
        surface: DS,
        audio: AC,
        config: TurnerConfig,
    ) -> Result<Self, ConfigError> {
        let controller = PageIndexController::new(config.controller)?;

        Ok(Self {
            screen,
            surface,
            audio,
            throttle: InputThrottle::new(controller, config.throttle),
            mapping: config.mapping,
            sound_enabled: config.sound_enabled,
        })
    }

    /// Puts the deck on its start position and syncs the display. Call once
    /// before delivering gestures; calling again restarts the book.
    pub fn initialize(&mut self) -> Result<DisplayState, TurnError<DS::Error>> {
        let state = self.throttle.controller_mut().initialize();
        self.throttle.clear_cooldown();

        let config = self.throttle.controller().config();
        info!(
            "nav: initialize mode={} upper_len={} lower_len={} state={:?}",
            config.mode.label(),
            config.upper_len,
            config.lower_len,
            state
        );

        self.sync_display(state)?;
        Ok(state)
    }

    /// Drives one region directly, bypassing pointer classification.
    ///
    /// An accepted turn always plays the cue and arms the cooldown, even when
    /// the display sync then fails; the new state is kept and the error
    /// returned. [`Self::resync`] pushes it again.
    pub fn navigate(
        &mut self,
        region: Region,
        direction: NavDirection,
        now_ms: u64,
    ) -> Result<TurnOutcome, TurnError<DS::Error>> {
        let Ok(state) = self.throttle.try_advance(region, direction, now_ms) else {
            return Ok(TurnOutcome::Throttled);
        };

        let (upper, lower) = self.throttle.controller().indices();
        debug!(
            "nav: advance mode={} region={:?} direction={:?} upper={} lower={} state={:?}",
            self.throttle.controller().mode().label(),
            region,
            direction,
            upper,
            lower,
            state
        );

        if self.sound_enabled {
            self.audio.play();
        }
        self.sync_display(state)?;
        Ok(TurnOutcome::Turned(state))
    }

    /// Pushes the current state to the display without stepping or playing
    /// the cue. Does not consult the cooldown.
    pub fn resync(&mut self) -> Result<DisplayState, TurnError<DS::Error>> {
        let state = self.display_state();
        self.sync_display(state)?;
        Ok(state)
    }

    /// Expires the cooldown once its window has passed. Returns whether input
    /// is accepted at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.throttle.poll(now_ms)
    }

    pub fn clear_cooldown(&mut self) {
        self.throttle.clear_cooldown();
    }

    pub fn cooldown_active(&self, now_ms: u64) -> bool {
        self.throttle.cooldown_active(now_ms)
    }

    pub fn display_state(&self) -> DisplayState {
        self.throttle.controller().display_state()
    }

    pub fn controller(&self) -> &PageIndexController {
        self.throttle.controller()
    }

    pub fn screen(&self) -> &SC {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut SC {
        &mut self.screen
    }

    pub fn surface(&self) -> &DS {
        &self.surface
    }

    pub fn audio(&self) -> &AC {
        &self.audio
    }

    fn sync_display(&mut self, state: DisplayState) -> Result<(), TurnError<DS::Error>> {
        present(&mut self.surface, state).map_err(|err| {
            warn!("nav: display sync failed state={:?}", state);
            TurnError::Display(err)
        })
    }
}
