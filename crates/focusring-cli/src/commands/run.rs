//! The tick loop: the host side of the timer.
//!
//! Schedules one tick per second while the timer is running, redraws the
//! countdown line, and rings the terminal bell when a session completes.

use std::io::Write;
use std::time::Duration;

use clap::{Args, ValueEnum};
use focusring_core::{Config, Event, PomodoroTimer, SessionType};

#[derive(Clone, Copy, ValueEnum)]
pub enum Mode {
    Focus,
    Short,
    Long,
}

impl From<Mode> for SessionType {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Focus => SessionType::Focus,
            Mode::Short => SessionType::ShortBreak,
            Mode::Long => SessionType::LongBreak,
        }
    }
}

#[derive(Args)]
pub struct RunArgs {
    /// Session type to start with
    #[arg(long, value_enum, default_value = "focus")]
    mode: Mode,
    /// Stop after this many completed sessions
    #[arg(long)]
    sessions: Option<u32>,
    /// Skip the completion bell
    #[arg(long)]
    mute: bool,
    /// Emit events as JSON lines instead of redrawing the countdown
    #[arg(long)]
    json: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    config.timer.validate()?;
    let chime = config.sound.enabled && !args.mute;

    let mut timer = PomodoroTimer::new(config.timer);
    if !matches!(args.mode, Mode::Focus) {
        emit(&args, timer.select_mode(args.mode.into()))?;
    }
    if let Some(event) = timer.start() {
        emit(&args, event)?;
    }

    if args.sessions == Some(0) {
        timer.pause();
        emit(&args, timer.snapshot())?;
        return Ok(());
    }

    let mut completed = 0u32;
    render(&args, &timer);

    // One tick per second. A pause would simply stop the rescheduling, so
    // the running flag is re-checked before every tick.
    while timer.is_running() {
        std::thread::sleep(Duration::from_secs(1));
        if !timer.is_running() {
            break;
        }
        if let Some(event) = timer.tick() {
            if chime {
                ring_bell();
            }
            if let Event::SessionCompleted {
                finished,
                next,
                next_duration_secs,
                ..
            } = &event
            {
                announce(&args, *finished, *next, *next_duration_secs);
            }
            emit(&args, event)?;
            completed += 1;
            if args.sessions.is_some_and(|limit| completed >= limit) {
                timer.pause();
                break;
            }
        }
        render(&args, &timer);
    }

    if !args.json {
        println!();
    }
    Ok(())
}

fn emit(args: &RunArgs, event: Event) -> Result<(), Box<dyn std::error::Error>> {
    if args.json {
        println!("{}", serde_json::to_string(&event)?);
    }
    Ok(())
}

fn render(args: &RunArgs, timer: &PomodoroTimer) {
    if args.json {
        return;
    }
    let counts = timer.counts();
    print!(
        "\r{:<11} {}  {}  focus {}  short {}  long {} ",
        timer.session().label(),
        format_clock(timer.remaining_secs()),
        progress_bar(timer.progress(), 24),
        counts.focus,
        counts.short_break,
        counts.long_break,
    );
    let _ = std::io::stdout().flush();
}

fn announce(args: &RunArgs, finished: SessionType, next: SessionType, duration_secs: u32) {
    if args.json {
        return;
    }
    println!(
        "\n{} done -> {} ({})",
        finished.label(),
        next.label(),
        format_clock(duration_secs)
    );
}

/// `MM:SS` readout, same shape as the countdown display.
fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Textual stand-in for the circular progress arc: filled share equals
/// the remaining fraction, draining left to right as time passes.
fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Terminal bell standing in for the completion chime. A silent or
/// detached terminal must not stall the session transition, so failures
/// are ignored.
fn ring_bell() {
    let mut out = std::io::stdout();
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_mm_ss() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(1500), "25:00");
    }

    #[test]
    fn progress_bar_drains_with_time() {
        assert_eq!(progress_bar(1.0, 4), "[####]");
        assert_eq!(progress_bar(0.5, 4), "[##--]");
        assert_eq!(progress_bar(0.0, 4), "[----]");
    }
}
