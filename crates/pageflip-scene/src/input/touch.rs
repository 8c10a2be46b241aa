use heapless::Vec;
use pageflip_core::input::{DisplayGeometry, Pointer, PointerSource};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TouchError {
    /// More fingers than the screen tracks.
    TooManyPointers,
}

/// Fingers currently down on the screen, oldest first, plus the display height.
#[derive(Debug, Clone)]
pub struct TouchScreen<const P: usize> {
    height_px: u32,
    pointers: Vec<Pointer, P>,
}

impl<const P: usize> TouchScreen<P> {
    pub const fn new(height_px: u32) -> Self {
        Self {
            height_px,
            pointers: Vec::new(),
        }
    }

    pub fn finger_down(&mut self, pointer: Pointer) -> Result<(), TouchError> {
        self.pointers
            .push(pointer)
            .map_err(|_| TouchError::TooManyPointers)
    }

    /// Lifts the finger at `slot`; later fingers keep their order.
    pub fn finger_up(&mut self, slot: usize) -> Option<Pointer> {
        (slot < self.pointers.len()).then(|| self.pointers.remove(slot))
    }

    pub fn lift_all(&mut self) {
        self.pointers.clear();
    }

    /// Orientation changes report a new height.
    pub fn set_height_px(&mut self, height_px: u32) {
        self.height_px = height_px;
    }
}

impl<const P: usize> PointerSource for TouchScreen<P> {
    fn active_pointers(&self) -> &[Pointer] {
        &self.pointers
    }
}

impl<const P: usize> DisplayGeometry for TouchScreen<P> {
    fn height_px(&self) -> u32 {
        self.height_px
    }
}
