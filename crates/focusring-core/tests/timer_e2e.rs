//! End-to-end timer flow through the public API.
//!
//! Drives full default-length sessions tick by tick, the way a host's
//! one-second scheduler would.

use focusring_core::{Event, PomodoroTimer, SessionType, TimerConfig};

fn run_to_completion(timer: &mut PomodoroTimer) -> Event {
    loop {
        if let Some(event) = timer.tick() {
            return event;
        }
    }
}

#[test]
fn default_cycle_reaches_long_break_on_fourth_focus() {
    let mut timer = PomodoroTimer::new(TimerConfig::default());
    timer.start();

    for round in 1..=4u32 {
        assert_eq!(timer.session(), SessionType::Focus);
        assert_eq!(timer.total_secs(), 1500);

        let (expected_next, expected_duration) = if round == 4 {
            (SessionType::LongBreak, 900)
        } else {
            (SessionType::ShortBreak, 300)
        };

        match run_to_completion(&mut timer) {
            Event::SessionCompleted {
                finished,
                next,
                next_duration_secs,
                ..
            } => {
                assert_eq!(finished, SessionType::Focus);
                assert_eq!(next, expected_next);
                assert_eq!(next_duration_secs, expected_duration);
            }
            other => panic!("expected SessionCompleted, got {other:?}"),
        }

        // the break is already loaded at full length and still ticking
        assert_eq!(timer.counts().focus, round);
        assert_eq!(timer.remaining_secs(), timer.total_secs());
        assert_eq!(timer.total_secs(), expected_duration);
        assert!(timer.is_running());

        match run_to_completion(&mut timer) {
            Event::SessionCompleted { finished, next, .. } => {
                assert_eq!(finished, expected_next);
                assert_eq!(next, SessionType::Focus);
            }
            other => panic!("expected SessionCompleted, got {other:?}"),
        }
    }

    let counts = timer.counts();
    assert_eq!(counts.focus, 4);
    assert_eq!(counts.short_break, 3);
    assert_eq!(counts.long_break, 1);
}

#[test]
fn pausing_mid_session_freezes_the_countdown() {
    let mut timer = PomodoroTimer::new(TimerConfig::default());
    timer.start();
    for _ in 0..100 {
        timer.tick();
    }
    assert_eq!(timer.remaining_secs(), 1400);

    timer.pause();
    assert!(!timer.is_running());
    // the host stops scheduling ticks here; nothing moves
    assert_eq!(timer.remaining_secs(), 1400);

    timer.toggle();
    assert!(timer.is_running());
    timer.tick();
    assert_eq!(timer.remaining_secs(), 1399);
}

#[test]
fn manual_mode_jumps_do_not_disturb_the_cadence() {
    let mut timer = PomodoroTimer::new(TimerConfig::default());
    timer.start();

    // one focus completed, short break loaded
    run_to_completion(&mut timer);
    // the user bails out of the break and jumps back to focus
    timer.select_mode(SessionType::Focus);
    assert_eq!(timer.total_secs(), 1500);
    assert_eq!(timer.counts().short_break, 0);

    // the second focus completion is still number 2 of 4
    match run_to_completion(&mut timer) {
        Event::SessionCompleted { next, .. } => assert_eq!(next, SessionType::ShortBreak),
        other => panic!("expected SessionCompleted, got {other:?}"),
    }
    assert_eq!(timer.counts().focus, 2);
}
