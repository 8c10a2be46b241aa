use pageflip_core::render::AudioCue;

/// Page-turn cue that counts how often it was triggered.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PageTurnCue {
    plays: u32,
}

impl PageTurnCue {
    pub const fn new() -> Self {
        Self { plays: 0 }
    }

    pub const fn plays(&self) -> u32 {
        self.plays
    }
}

impl AudioCue for PageTurnCue {
    fn play(&mut self) {
        self.plays = self.plays.saturating_add(1);
    }
}
