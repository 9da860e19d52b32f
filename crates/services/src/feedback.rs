use quiz_core::session::Cue;

/// Receives audio/visual feedback cues as transitions happen.
///
/// Cues are fire-and-forget; a sink must not block or call back into the controller.
pub trait FeedbackSink: Send + Sync {
    fn cue(&self, cue: Cue);
}

/// Sink that ignores every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn cue(&self, _cue: Cue) {}
}
