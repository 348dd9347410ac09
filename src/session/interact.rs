use crate::coords::surface::SurfaceGeometry;
use crate::foundation::core::Point;
use crate::foundation::error::FramecastResult;
use crate::render::backend::SceneRenderer;
use crate::session::state::SessionMode;
use crate::session::stream::StreamSession;
use crate::transport::FrameTransport;

/// Result of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// The server answered and the returned frame was presented.
    Applied {
        /// Scene-space position that was sent.
        scene: Point,
    },
    /// Another mutation was still outstanding; the position was discarded.
    Dropped,
    /// The reply arrived after the session was closed or restarted and was not presented.
    Stale,
    /// No drag in progress, no session id yet, or a playback-only session.
    Ignored,
}

/// Turns pointer events into mutation round-trips on a [`StreamSession`].
///
/// At most one mutation is outstanding; moves arriving meanwhile are dropped, not queued.
pub struct InteractionController<'s, T, R> {
    session: &'s StreamSession<T, R>,
    geometry: SurfaceGeometry,
}

impl<'s, T: FrameTransport, R: SceneRenderer> InteractionController<'s, T, R> {
    /// Drive `session` from pointer events reported in `geometry`'s coordinate space.
    pub fn new(session: &'s StreamSession<T, R>, geometry: SurfaceGeometry) -> Self {
        Self { session, geometry }
    }

    /// Update the surface placement (e.g. after a window resize).
    pub fn set_geometry(&mut self, geometry: SurfaceGeometry) {
        self.geometry = geometry;
    }

    /// Scene-space position of a pointer event.
    pub fn to_scene(&self, client: Point) -> Point {
        let surface = self.geometry.to_surface(client);
        self.session.builder().mapper().to_scene(surface)
    }

    /// Engage the pointer, then handle the position like [`Self::drag_move`].
    pub async fn drag_start(&self, x: f64, y: f64) -> FramecastResult<DragOutcome> {
        self.session.set_pointer_engaged(true);
        self.drag_move(x, y).await
    }

    /// Send the pointer position to the server and present the frame it answers with.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn drag_move(&self, x: f64, y: f64) -> FramecastResult<DragOutcome> {
        if self.session.mode() == SessionMode::Playback {
            return Ok(DragOutcome::Ignored);
        }
        let state = self.session.state();
        if !state.pointer_engaged {
            return Ok(DragOutcome::Ignored);
        }
        let Some(id) = state.id else {
            tracing::debug!("no session id yet");
            return Ok(DragOutcome::Ignored);
        };
        let Some(_in_flight) = self.session.begin_request() else {
            tracing::debug!("mutation in flight, dropping move");
            return Ok(DragOutcome::Dropped);
        };

        let scene = self.to_scene(Point::new(x, y));
        let raw = self.session.transport().mutate(&id, scene.x, scene.y).await?;
        let now = self.session.state();
        if now.generation != state.generation || now.id.as_ref() != Some(&id) {
            tracing::debug!(%id, "session moved on, discarding reply");
            return Ok(DragOutcome::Stale);
        }
        self.session.present_bytes(&raw)?;
        Ok(DragOutcome::Applied { scene })
    }

    /// Release the pointer. An outstanding request still completes.
    pub fn drag_end(&self) {
        self.session.set_pointer_engaged(false);
    }

    /// Best-effort close of the current session; failures are only logged.
    pub async fn unload(&self) {
        self.session.set_pointer_engaged(false);
        self.session.close().await;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/interact.rs"]
mod tests;
