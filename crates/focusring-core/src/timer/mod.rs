mod countdown;
mod pomodoro;
mod session;

pub use countdown::{CountdownEngine, Tick};
pub use pomodoro::PomodoroTimer;
pub use session::{NextSession, SessionController, SessionCounts, SessionType};
