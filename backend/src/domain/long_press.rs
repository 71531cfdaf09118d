//! Long-press detection for history rows.
//!
//! `Idle → Armed(row, generation) → Fired(row) → Idle`. The frontend schedules
//! a timer for each armed press and reports back with the generation it was
//! given; a stale timer from an earlier press never fires.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum PressState {
    #[default]
    Idle,
    Armed { row: String, generation: u64 },
    Fired { row: String },
}

/// How a press ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressRelease {
    /// Released before the threshold: an ordinary tap on `row`
    Tap(String),
    /// The long press already fired; the release is not a tap
    Handled(String),
    /// No press in progress
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct LongPressDetector {
    state: PressState,
    next_generation: u64,
}

impl LongPressDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a press on `row`, replacing any press in progress.
    /// Returns the generation the caller's timer must report back.
    pub fn press_start(&mut self, row: &str) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.state = PressState::Armed {
            row: row.to_string(),
            generation,
        };
        generation
    }

    /// The threshold timer elapsed. Returns the row if this press is still armed.
    pub fn timer_fired(&mut self, generation: u64) -> Option<String> {
        match &self.state {
            PressState::Armed {
                row,
                generation: armed,
            } if *armed == generation => {
                let row = row.clone();
                self.state = PressState::Fired { row: row.clone() };
                Some(row)
            }
            _ => None,
        }
    }

    /// Pointer/touch released
    pub fn press_end(&mut self) -> PressRelease {
        match std::mem::take(&mut self.state) {
            PressState::Armed { row, .. } => PressRelease::Tap(row),
            PressState::Fired { row } => PressRelease::Handled(row),
            PressState::Idle => PressRelease::Ignored,
        }
    }

    /// Pointer left the row or the touch was cancelled
    pub fn press_cancel(&mut self) {
        self.state = PressState::Idle;
    }

    pub fn reset(&mut self) {
        self.press_cancel();
    }

    /// Generation of the press waiting on its timer, if any
    pub fn armed_generation(&self) -> Option<u64> {
        match self.state {
            PressState::Armed { generation, .. } => Some(generation),
            _ => None,
        }
    }
}
