use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use quiz_core::session::Cue;
use services::FeedbackSink;

/// Rings the terminal bell for feedback cues. Muting can be flipped while a quiz runs.
#[derive(Debug)]
pub struct BellFeedback {
    muted: AtomicBool,
}

impl BellFeedback {
    pub fn new(muted: bool) -> Self {
        Self {
            muted: AtomicBool::new(muted),
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    /// Flip the mute flag and return the new state.
    pub fn toggle_mute(&self) -> bool {
        !self.muted.fetch_xor(true, Ordering::Relaxed)
    }
}

fn rings(cue: Cue) -> usize {
    match cue {
        Cue::Correct => 1,
        Cue::Incorrect => 2,
        Cue::Advance => 0,
        Cue::Celebrate => 3,
    }
}

impl FeedbackSink for BellFeedback {
    fn cue(&self, cue: Cue) {
        let muted = self.is_muted();
        tracing::trace!(?cue, muted, "feedback cue");
        let count = rings(cue);
        if muted || count == 0 {
            return;
        }
        // Audio is best effort; a closed stderr only loses the bell.
        let mut err = std::io::stderr().lock();
        let _ = err.write_all("\x07".repeat(count).as_bytes());
        let _ = err.flush();
    }
}
