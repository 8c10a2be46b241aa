//! What the display should show, and the collaborators that show it.

use crate::controller::Region;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cover {
    Front,
    Back,
}

/// Visible element per track, or a cover that hides both tracks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisplayState {
    Cover(Cover),
    Pages { upper: u16, lower: u16 },
}

/// Host-owned page elements whose visibility the session toggles.
pub trait DisplaySurface {
    type Error;

    /// Hide every element of one track.
    fn hide_all(&mut self, region: Region) -> Result<(), Self::Error>;

    /// Make one element of a track visible.
    fn show_page(&mut self, region: Region, index: u16) -> Result<(), Self::Error>;

    /// Show `cover` and hide the other one; `None` hides both.
    fn show_cover(&mut self, cover: Option<Cover>) -> Result<(), Self::Error>;
}

/// Page-turn sound.
pub trait AudioCue {
    fn play(&mut self);
}

/// Pushes `state` to the surface, leaving at most one element visible per track.
pub fn present<S>(surface: &mut S, state: DisplayState) -> Result<(), S::Error>
where
    S: DisplaySurface + ?Sized,
{
    surface.hide_all(Region::Upper)?;
    surface.hide_all(Region::Lower)?;

    match state {
        DisplayState::Cover(cover) => surface.show_cover(Some(cover)),
        DisplayState::Pages { upper, lower } => {
            surface.show_cover(None)?;
            surface.show_page(Region::Upper, upper)?;
            surface.show_page(Region::Lower, lower)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct CallLog {
        calls: Vec<String>,
    }

    impl DisplaySurface for CallLog {
        type Error = ();

        fn hide_all(&mut self, region: Region) -> Result<(), Self::Error> {
            self.calls.push(format!("hide {region:?}"));
            Ok(())
        }

        fn show_page(&mut self, region: Region, index: u16) -> Result<(), Self::Error> {
            self.calls.push(format!("show {region:?} {index}"));
            Ok(())
        }

        fn show_cover(&mut self, cover: Option<Cover>) -> Result<(), Self::Error> {
            self.calls.push(format!("cover {cover:?}"));
            Ok(())
        }
    }

    #[test]
    fn pages_hide_everything_before_showing() {
        let mut log = CallLog::default();
        present(&mut log, DisplayState::Pages { upper: 2, lower: 0 }).unwrap();
        assert_eq!(
            log.calls,
            [
                "hide Upper",
                "hide Lower",
                "cover None",
                "show Upper 2",
                "show Lower 0",
            ]
        );
    }

    #[test]
    fn cover_leaves_tracks_hidden() {
        let mut log = CallLog::default();
        present(&mut log, DisplayState::Cover(Cover::Back)).unwrap();
        assert_eq!(log.calls, ["hide Upper", "hide Lower", "cover Some(Back)"]);
    }
}
