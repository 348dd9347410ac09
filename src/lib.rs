//! Framecast is a streaming client for server-computed vector animations.
//!
//! A server evaluates an animation and streams one JSON frame per chunk. Framecast decodes each
//! frame, maps its shapes from scene space into pixels, resolves their paint and hands the
//! result to a renderer:
//!
//! - Decode messages with [`decode_frame`]
//! - Build and present them with a [`SceneBuilder`] and any [`SceneRenderer`]
//! - Drive a whole run with a [`StreamSession`] over a [`FrameTransport`]
//! - Turn pointer drags into server-side edits with an [`InteractionController`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Scene, device and pointer coordinate spaces.
pub mod coords;
/// Frame sinks.
pub mod encode;
/// Wire frames and recorded animations.
pub mod frame;
/// Paint values and colour-list resolution.
pub mod paint;
/// Renderers.
pub mod render;
/// Frame -> primitive assembly.
pub mod scene;
/// Streaming and interactive sessions.
pub mod session;
/// Server endpoints.
pub mod transport;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Color, Fps, FrameIndex, Point, SessionId,
};
pub use crate::foundation::error::{FramecastError, FramecastResult};

pub use crate::coords::mapper::CoordinateMapper;
pub use crate::coords::surface::SurfaceGeometry;
pub use crate::encode::png::PngSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::frame::decode::decode_frame;
pub use crate::frame::model::{
    ElementDescriptor, FrameDescriptor, LineCap, LineJoin, VMobjectDescriptor,
};
pub use crate::frame::record::RecordedAnimation;
pub use crate::paint::model::{GradientStop, Paint};
pub use crate::paint::resolve::resolve_paint;
pub use crate::render::backend::{FrameRGBA, SceneRenderer};
pub use crate::render::cpu::{ColorRange, CpuRenderer, CpuRendererOpts};
pub use crate::render::recording::RecordingRenderer;
pub use crate::scene::builder::SceneBuilder;
pub use crate::scene::primitive::{BuiltScene, DrawablePrimitive};
pub use crate::session::interact::{DragOutcome, InteractionController};
pub use crate::session::state::{SessionMode, SessionOpts, SessionPhase, SessionState};
pub use crate::session::stream::{StreamOutcome, StreamSession};
pub use crate::transport::http::{HttpTransport, HttpTransportOpts};
pub use crate::transport::memory::{Chunk, MemoryTransport, TransportCall};
pub use crate::transport::{FrameStream, FrameTransport};
