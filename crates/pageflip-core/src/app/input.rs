impl<SC, DS, AC> PageTurner<SC, DS, AC>
where
    SC: PointerSource + DisplayGeometry,
    DS: DisplaySurface,
    AC: AudioCue,
{
    /// Gesture callback for a swipe towards the left edge.
    pub fn swipe_left(&mut self, now_ms: u64) -> Result<TurnOutcome, TurnError<DS::Error>> {
        self.apply_swipe(SwipeDirection::Left, now_ms)
    }

    /// Gesture callback for a swipe towards the right edge.
    pub fn swipe_right(&mut self, now_ms: u64) -> Result<TurnOutcome, TurnError<DS::Error>> {
        self.apply_swipe(SwipeDirection::Right, now_ms)
    }

    /// Tap-to-turn callback.
    ///
    /// A tap on either half turns the tapped region forward, whatever the
    /// session's swipe mapping.
    pub fn touch(&mut self, now_ms: u64) -> Result<TurnOutcome, TurnError<DS::Error>> {
        let Some(region) = self.classify() else {
            debug!("nav: touch ignored reason=no_pointer");
            return Ok(TurnOutcome::NoPointer);
        };

        self.navigate(region, NavDirection::Forward, now_ms)
    }

    fn apply_swipe(
        &mut self,
        swipe: SwipeDirection,
        now_ms: u64,
    ) -> Result<TurnOutcome, TurnError<DS::Error>> {
        let Some(region) = self.classify() else {
            debug!("nav: swipe ignored swipe={:?} reason=no_pointer", swipe);
            return Ok(TurnOutcome::NoPointer);
        };

        let direction = self.mapping.direction(swipe);
        debug!(
            "nav: swipe={:?} region={:?} direction={:?}",
            swipe, region, direction
        );
        self.navigate(region, direction, now_ms)
    }

    fn classify(&self) -> Option<Region> {
        RegionClassifier::from_geometry(&self.screen).classify(&self.screen)
    }
}
