/// One focus session: 25 minutes
pub const SESSION_SECS: u32 = 25 * 60;

/// Where the countdown is in its life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Not counting, time remaining
    Idle,
    /// Counting down
    Running,
    /// Counted down to zero; only reset leaves this phase
    Expired,
}

/// Countdown focus timer.
///
/// `seconds_remaining` stays within `0..=SESSION_SECS`; hitting zero forces
/// the countdown off. The timer itself has no clock — the owner feeds it
/// one `tick()` per elapsed second while it reports `is_running()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTimer {
    seconds_remaining: u32,
    running: bool,
}

impl FocusTimer {
    pub fn new() -> Self {
        FocusTimer {
            seconds_remaining: SESSION_SECS,
            running: false,
        }
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> TimerPhase {
        if self.seconds_remaining == 0 {
            TimerPhase::Expired
        } else if self.running {
            TimerPhase::Running
        } else {
            TimerPhase::Idle
        }
    }

    /// Whether start would do anything. Drives the disabled control state.
    pub fn can_start(&self) -> bool {
        self.phase() == TimerPhase::Idle
    }

    /// Start the countdown. Returns true only when the timer actually
    /// entered `Running`, so the caller can acquire its tick source exactly
    /// once per entry.
    pub fn start(&mut self) -> bool {
        if !self.can_start() {
            return false;
        }
        self.running = true;
        true
    }

    /// Pause, keeping the remaining time. Returns true if the timer was
    /// running (the caller's cue to tear its tick source down).
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Back to a fresh idle session, from any phase.
    pub fn reset(&mut self) {
        self.seconds_remaining = SESSION_SECS;
        self.running = false;
    }

    /// One elapsed second. Ignored unless running; clamps at zero and stops
    /// the countdown there.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.running = false;
        }
    }

    /// `MM:SS`, zero-padded
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.seconds_remaining / 60,
            self.seconds_remaining % 60
        )
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        FocusTimer::new()
    }
}
