//! Pointer input and screen-region classification.

pub mod mock;

use crate::controller::Region;

/// Physical swipe direction reported by the gesture source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// One active finger, in screen pixels with the origin at the bottom left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Gesture source exposing the fingers currently on the screen, oldest first.
pub trait PointerSource {
    fn active_pointers(&self) -> &[Pointer];
}

/// Display geometry query.
pub trait DisplayGeometry {
    fn height_px(&self) -> u32;

    /// Line separating the upper and lower regions.
    fn midline(&self) -> f32 {
        midline_for_height(self.height_px()) as f32
    }
}

/// `height / 2` rounded half-to-even, matching the engine's integer rounding.
pub const fn midline_for_height(height_px: u32) -> u32 {
    let half = height_px / 2;
    if height_px % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    }
}

/// Maps a pointer to the screen half it is on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionClassifier {
    midline: f32,
}

impl RegionClassifier {
    pub const fn new(midline: f32) -> Self {
        Self { midline }
    }

    pub fn from_geometry<G>(geometry: &G) -> Self
    where
        G: DisplayGeometry + ?Sized,
    {
        Self::new(geometry.midline())
    }

    pub const fn midline(&self) -> f32 {
        self.midline
    }

    pub fn region_for(&self, pointer: Pointer) -> Region {
        if pointer.y >= self.midline {
            Region::Upper
        } else {
            Region::Lower
        }
    }

    /// Region of the first active pointer, or `None` when no finger is down.
    pub fn classify<P>(&self, source: &P) -> Option<Region>
    where
        P: PointerSource + ?Sized,
    {
        source
            .active_pointers()
            .first()
            .map(|pointer| self.region_for(*pointer))
    }
}
