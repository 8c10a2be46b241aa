use pageflip_core::{
    app::{PageTurner, TurnOutcome},
    config::{BoundaryMode, ControllerConfig, ThrottleConfig, TurnerConfig},
    controller::Region,
    input::Pointer,
    render::{Cover, DisplayState},
};

use crate::{
    input::touch::TouchScreen,
    platform::{audio::PageTurnCue, display::SceneDeck},
};

const DECK_CAPACITY: usize = 16;
const SCREEN_HEIGHT: u32 = 1920;

type SceneTurner = PageTurner<TouchScreen<4>, SceneDeck<DECK_CAPACITY>, PageTurnCue>;

fn session(config: TurnerConfig) -> SceneTurner {
    let deck = SceneDeck::new(config.controller.upper_len, config.controller.lower_len)
        .expect("deck fits");
    let mut turner = PageTurner::new(
        TouchScreen::new(SCREEN_HEIGHT),
        deck,
        PageTurnCue::new(),
        config,
    )
    .expect("valid config");
    turner.initialize().expect("initialize");
    turner
}

fn hold(turner: &mut SceneTurner, y: f32) {
    let screen = turner.screen_mut();
    screen.lift_all();
    screen.finger_down(Pointer::new(540.0, y)).expect("one finger");
}

fn assert_scene_matches(turner: &SceneTurner) {
    let deck = turner.surface();
    match turner.display_state() {
        DisplayState::Cover(cover) => {
            assert_eq!(deck.cover(), Some(cover));
            assert_eq!(deck.visible_count(Region::Upper), 0);
            assert_eq!(deck.visible_count(Region::Lower), 0);
        }
        DisplayState::Pages { upper, lower } => {
            assert_eq!(deck.cover(), None);
            assert_eq!(deck.visible_page(Region::Upper), Some(upper));
            assert_eq!(deck.visible_page(Region::Lower), Some(lower));
        }
    }
}

#[test]
fn cover_wrap_book_reads_through_and_starts_over() {
    let config = TurnerConfig::for_controller(ControllerConfig::new(BoundaryMode::CoverWrap, 5, 5))
        .with_throttle(ThrottleConfig::disabled());
    let mut book = session(config);
    assert_eq!(book.surface().cover(), Some(Cover::Front));

    hold(&mut book, 1500.0);
    let mut upper_trail = Vec::new();
    for _ in 0..6 {
        book.swipe_left(0).unwrap();
        upper_trail.push(book.controller().index(Region::Upper));
        assert_scene_matches(&book);
    }

    assert_eq!(upper_trail, [0, 1, 2, 3, 4, 0]);
    assert_eq!(book.surface().visible_page(Region::Upper), Some(0));
    assert_eq!(book.audio().plays(), 6);
}

#[test]
fn scene_tracks_controller_in_every_mode() {
    let swipes_y = [1500.0, 300.0, 1500.0, 1500.0, 300.0, 300.0, 300.0, 1500.0];

    for mode in BoundaryMode::ALL {
        let lower_len = if mode == BoundaryMode::ClampSync { 4 } else { 3 };
        let config = TurnerConfig::for_controller(ControllerConfig::new(mode, 4, lower_len))
            .with_throttle(ThrottleConfig::disabled());
        let mut turner = session(config);
        assert_scene_matches(&turner);

        for round in 0..4 {
            for (step, y) in swipes_y.iter().enumerate() {
                hold(&mut turner, *y);
                let outcome = if (round + step) % 3 == 0 {
                    turner.swipe_right(0)
                } else {
                    turner.swipe_left(0)
                };
                assert!(matches!(outcome, Ok(TurnOutcome::Turned(_))), "{mode:?}");
                assert_scene_matches(&turner);
            }
        }
    }
}

#[test]
fn lifted_finger_leaves_scene_alone() {
    let config =
        TurnerConfig::for_controller(ControllerConfig::new(BoundaryMode::CoverSentinel, 3, 3));
    let mut book = session(config);
    hold(&mut book, 1500.0);
    book.swipe_left(10).unwrap();
    book.screen_mut().lift_all();

    assert_eq!(book.swipe_left(5_000), Ok(TurnOutcome::NoPointer));
    assert_eq!(book.display_state(), DisplayState::Pages { upper: 0, lower: 0 });
    assert_eq!(book.audio().plays(), 1);
}

#[test]
fn duplicate_gesture_callbacks_turn_once() {
    let config =
        TurnerConfig::for_controller(ControllerConfig::new(BoundaryMode::CoverSentinel, 3, 3));
    let mut book = session(config);
    hold(&mut book, 200.0);

    assert!(matches!(book.swipe_left(2_000), Ok(TurnOutcome::Turned(_))));
    assert_eq!(book.swipe_left(2_000), Ok(TurnOutcome::Throttled));
    assert_eq!(book.controller().indices(), (0, 0));
    assert_eq!(book.audio().plays(), 1);

    assert!(matches!(book.swipe_left(3_000), Ok(TurnOutcome::Turned(_))));
    assert_eq!(book.controller().indices(), (0, 1));
    assert_scene_matches(&book);
}

#[test]
fn second_finger_does_not_change_region() {
    let config = TurnerConfig::for_controller(ControllerConfig::new(BoundaryMode::Wrap, 3, 3))
        .with_throttle(ThrottleConfig::disabled());
    let mut carousel = session(config);
    hold(&mut carousel, 300.0);
    carousel
        .screen_mut()
        .finger_down(Pointer::new(0.0, 1800.0))
        .unwrap();

    carousel.swipe_right(0).unwrap();
    assert_eq!(carousel.controller().indices(), (0, 1));
}
