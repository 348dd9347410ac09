use crate::foundation::core::{Canvas, Fps, SessionId};

/// Which protocol a session speaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionMode {
    /// Play the stream to completion; restarts never notify the server.
    Playback,
    /// Playback plus drag mutations; a restart closes the previous server session first.
    #[default]
    Interactive,
}

/// Lifecycle phase of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No stream is being read.
    #[default]
    Idle,
    /// A stream is open and frames are being presented.
    Streaming,
    /// A close notification is being sent.
    Closing,
}

/// Session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOpts {
    /// Protocol variant.
    pub mode: SessionMode,
    /// Output surface size.
    pub canvas: Canvas,
    /// Frame rate handed to the renderer.
    pub fps: Fps,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            mode: SessionMode::Interactive,
            canvas: Canvas::default(),
            fps: Fps { num: 60, den: 1 },
        }
    }
}

/// Mutable per-session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Server-assigned id, captured from the first frame that carries one.
    pub id: Option<SessionId>,
    /// A drag is in progress.
    pub pointer_engaged: bool,
    /// A mutation request is outstanding.
    pub in_flight: bool,
    /// Current lifecycle phase.
    pub phase: SessionPhase,
    /// Generation of the most recently opened stream; older readers stop when it moves on.
    pub generation: u64,
}

impl SessionState {
    /// Store `id` unless one is already known. Returns `true` when it was stored.
    pub fn capture_id(&mut self, id: Option<&SessionId>) -> bool {
        match (&self.id, id) {
            (None, Some(id)) => {
                self.id = Some(id.clone());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/state.rs"]
mod tests;
