use heapless::Vec;
use log::debug;
use pageflip_core::{
    controller::Region,
    render::{Cover, DisplaySurface},
};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SceneError {
    /// The deck was built with more elements than the scene can hold.
    CapacityExceeded {
        region: Region,
        requested: u16,
        capacity: usize,
    },
    /// A page outside the track was asked to become visible.
    PageOutOfRange { region: Region, index: u16 },
}

/// Active flags of the upper and lower page elements plus the two covers.
///
/// Elements start active, the way they are authored in the scene; the
/// session's first sync hides everything it does not need.
#[derive(Debug, Clone)]
pub struct SceneDeck<const N: usize> {
    upper: Vec<bool, N>,
    lower: Vec<bool, N>,
    front_cover: bool,
    back_cover: bool,
}

impl<const N: usize> SceneDeck<N> {
    pub fn new(upper_len: u16, lower_len: u16) -> Result<Self, SceneError> {
        Ok(Self {
            upper: active_track(Region::Upper, upper_len)?,
            lower: active_track(Region::Lower, lower_len)?,
            front_cover: false,
            back_cover: false,
        })
    }

    pub fn track(&self, region: Region) -> &[bool] {
        match region {
            Region::Upper => &self.upper,
            Region::Lower => &self.lower,
        }
    }

    pub fn visible_count(&self, region: Region) -> usize {
        self.track(region).iter().filter(|active| **active).count()
    }

    /// The single visible element of a track, if exactly one is visible.
    pub fn visible_page(&self, region: Region) -> Option<u16> {
        if self.visible_count(region) != 1 {
            return None;
        }
        self.track(region)
            .iter()
            .position(|active| *active)
            .map(|index| index as u16)
    }

    pub const fn cover(&self) -> Option<Cover> {
        match (self.front_cover, self.back_cover) {
            (true, _) => Some(Cover::Front),
            (false, true) => Some(Cover::Back),
            (false, false) => None,
        }
    }

    fn track_mut(&mut self, region: Region) -> &mut Vec<bool, N> {
        match region {
            Region::Upper => &mut self.upper,
            Region::Lower => &mut self.lower,
        }
    }
}

impl<const N: usize> DisplaySurface for SceneDeck<N> {
    type Error = SceneError;

    fn hide_all(&mut self, region: Region) -> Result<(), Self::Error> {
        for active in self.track_mut(region).iter_mut() {
            *active = false;
        }
        Ok(())
    }

    fn show_page(&mut self, region: Region, index: u16) -> Result<(), Self::Error> {
        let slot = self
            .track_mut(region)
            .get_mut(usize::from(index))
            .ok_or(SceneError::PageOutOfRange { region, index })?;
        *slot = true;
        Ok(())
    }

    fn show_cover(&mut self, cover: Option<Cover>) -> Result<(), Self::Error> {
        if cover != self.cover() {
            debug!("scene: cover {:?} -> {:?}", self.cover(), cover);
        }
        self.front_cover = matches!(cover, Some(Cover::Front));
        self.back_cover = matches!(cover, Some(Cover::Back));
        Ok(())
    }
}

fn active_track<const N: usize>(region: Region, len: u16) -> Result<Vec<bool, N>, SceneError> {
    let mut track = Vec::new();
    track
        .resize(usize::from(len), true)
        .map_err(|()| SceneError::CapacityExceeded {
            region,
            requested: len,
            capacity: N,
        })?;
    Ok(track)
}
