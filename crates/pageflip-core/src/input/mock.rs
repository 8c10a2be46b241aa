use heapless::Vec;

use super::{DisplayGeometry, Pointer, PointerSource};

const MOCK_MAX_POINTERS: usize = 4;

/// No-hardware screen used during bring-up and in tests.
#[derive(Debug, Clone, Default)]
pub struct MockScreen {
    height_px: u32,
    pointers: Vec<Pointer, MOCK_MAX_POINTERS>,
}

impl MockScreen {
    pub const fn new(height_px: u32) -> Self {
        Self {
            height_px,
            pointers: Vec::new(),
        }
    }

    /// Adds a finger; extra fingers beyond capacity are ignored.
    pub fn with_pointer(mut self, pointer: Pointer) -> Self {
        let _ = self.pointers.push(pointer);
        self
    }

    pub fn set_pointers(&mut self, pointers: &[Pointer]) {
        self.pointers.clear();
        for pointer in pointers.iter().take(MOCK_MAX_POINTERS) {
            let _ = self.pointers.push(*pointer);
        }
    }
}

impl PointerSource for MockScreen {
    fn active_pointers(&self) -> &[Pointer] {
        &self.pointers
    }
}

impl DisplayGeometry for MockScreen {
    fn height_px(&self) -> u32 {
        self.height_px
    }
}
