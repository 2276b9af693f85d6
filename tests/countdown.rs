use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use egg_timer::prelude::*;
use lipgloss_extras::lipgloss;
use std::time::{Duration, Instant};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn shell() -> Shell {
    Shell::new(Timer::new(Duration::from_secs(3)).unwrap())
}

#[test]
fn test_init_uses_default_countdown() {
    let (app, cmd) = <App as BubbleTeaModel>::init();
    assert!(cmd.is_none());
    assert_eq!(app.timer().target(), Duration::from_secs(3));

    let view = lipgloss::strip_ansi(&BubbleTeaModel::view(&app));
    assert!(view.contains("Egg timer"));
    // The help line names every control; only the button should remain.
    let body = view.replace(&KeyMap::new().short_help(), "");
    assert!(body.contains("start"));
    assert!(!body.contains("stop"));
    assert!(!body.contains("reset"));
}

#[test]
fn test_keyboard_walkthrough() {
    let (mut app, _) = <App as BubbleTeaModel>::init();

    assert!(BubbleTeaModel::update(&mut app, key(KeyCode::Enter)).is_some());
    assert_eq!(app.timer().state(), TimerState::Running);

    BubbleTeaModel::update(&mut app, key(KeyCode::Char('p')));
    assert!(!app.timer().is_running());

    BubbleTeaModel::update(&mut app, key(KeyCode::Char('r')));
    assert_eq!(app.timer().state(), TimerState::Idle);

    assert!(BubbleTeaModel::update(&mut app, key(KeyCode::Char('q'))).is_some());
}

#[test]
fn test_full_countdown_through_shell() {
    let mut shell = shell();
    let t0 = Instant::now();
    shell.handle(Event::FrameTick { now: t0 });
    assert_eq!(shell.frame().control, Control::Start);

    shell.handle(Event::ButtonPressed {
        control: Control::Start,
    });

    let mut now = t0;
    let mut frames = 0;
    loop {
        now += Duration::from_millis(16);
        frames += 1;
        match shell.handle(Event::FrameTick { now }) {
            Flow::Redraw => assert_eq!(shell.frame().control, Control::Stop),
            Flow::Idle => break,
            Flow::Exit(_) => unreachable!(),
        }
        assert!(shell.timer().elapsed() <= shell.timer().target());
    }

    assert_eq!(frames, 188); // ceil(3000 / 16)
    assert_eq!(shell.frame().control, Control::Reset);
    assert_eq!(shell.frame().progress, 1.0);

    shell.handle(Event::ButtonPressed {
        control: Control::Reset,
    });
    assert_eq!(shell.frame().state, TimerState::Idle);
    assert_eq!(shell.frame().control, Control::Start);
}

#[test]
fn test_restarting_finished_timer_flickers_for_one_frame() {
    let mut shell = shell();
    let t0 = Instant::now();
    shell.handle(Event::FrameTick { now: t0 });
    shell.handle(Event::ButtonPressed {
        control: Control::Start,
    });
    shell.handle(Event::FrameTick {
        now: t0 + Duration::from_secs(3),
    });
    assert_eq!(shell.frame().state, TimerState::Finished);

    let flow = shell.handle(Event::ButtonPressed {
        control: Control::Start,
    });
    assert!(matches!(flow, Flow::Redraw));
    assert_eq!(shell.frame().control, Control::Stop);

    let flow = shell.handle(Event::FrameTick {
        now: t0 + Duration::from_secs(3),
    });
    assert!(matches!(flow, Flow::Idle));
    assert_eq!(shell.frame().control, Control::Reset);
    assert_eq!(shell.timer().elapsed(), Duration::from_secs(3));
}
