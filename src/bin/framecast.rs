use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use framecast::{
    Canvas, ColorRange, CpuRenderer, CpuRendererOpts, DragOutcome, Fps, HttpTransport,
    HttpTransportOpts, InteractionController, PngSequenceSink, RecordedAnimation, SceneBuilder,
    SceneRenderer, SessionMode, SessionOpts, StreamSession, SurfaceGeometry,
};

#[derive(Parser, Debug)]
#[command(name = "framecast", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stream an animation from a server and write every frame as a PNG.
    Play(PlayArgs),
    /// Render a recorded animation document to PNGs.
    Render(RenderArgs),
    /// Print the primitives built from one frame message as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Server base URL (defaults to $FRAMECAST_SERVER or http://127.0.0.1:3000).
    #[arg(long)]
    server: Option<String>,

    /// Output directory for PNG frames.
    #[arg(long)]
    out: PathBuf,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Nominal frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Range of colour channels sent by the server.
    #[arg(long, value_enum, default_value_t = ColorRangeChoice::Unit)]
    color_range: ColorRangeChoice,

    /// Plain playback: never close or mutate the server session.
    #[arg(long)]
    playback: bool,

    /// Pointer positions (surface pixels, `X,Y`) dragged through once the stream ends.
    #[arg(long, value_parser = parse_point)]
    drag: Vec<(f64, f64)>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Recorded animation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for PNG frames.
    #[arg(long)]
    out: PathBuf,

    /// Range of colour channels in the recording.
    #[arg(long, value_enum, default_value_t = ColorRangeChoice::Unit)]
    color_range: ColorRangeChoice,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// One frame message as JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorRangeChoice {
    Unit,
    Byte,
}

impl From<ColorRangeChoice> for ColorRange {
    fn from(c: ColorRangeChoice) -> Self {
        match c {
            ColorRangeChoice::Unit => Self::Unit,
            ColorRangeChoice::Byte => Self::Byte,
        }
    }
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok((x, y))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let mut transport_opts = HttpTransportOpts::default();
    if let Some(server) = args.server {
        transport_opts.base_url = server;
    }
    let transport = HttpTransport::new(transport_opts)?;

    let canvas = Canvas::new(args.width, args.height)?;
    let opts = SessionOpts {
        mode: if args.playback {
            SessionMode::Playback
        } else {
            SessionMode::Interactive
        },
        canvas,
        fps: Fps::from_f64(args.fps)?,
    };
    let renderer = CpuRenderer::new(CpuRendererOpts {
        color_range: args.color_range.into(),
    });
    let session = StreamSession::new(transport, renderer, opts)?;
    session.attach_surface(Box::new(PngSequenceSink::new(&args.out)))?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;

    rt.block_on(async {
        let outcome = session.start().await.context("stream animation")?;
        tracing::info!(?outcome, id = ?session.id(), "stream finished");

        if !args.drag.is_empty() {
            let ctl = InteractionController::new(&session, SurfaceGeometry::unscaled(canvas));
            for (i, &(x, y)) in args.drag.iter().enumerate() {
                let outcome = if i == 0 {
                    ctl.drag_start(x, y).await
                } else {
                    ctl.drag_move(x, y).await
                };
                match outcome {
                    Ok(DragOutcome::Applied { scene }) => {
                        tracing::info!(x = scene.x, y = scene.y, "drag applied");
                    }
                    Ok(other) => tracing::info!(?other, "drag not sent"),
                    Err(e) => tracing::warn!(error = %e, "drag failed"),
                }
            }
            ctl.drag_end();
        }

        session.close().await;
        anyhow::Ok(())
    })?;

    session.finish()?;
    eprintln!("wrote frames to {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let recording = RecordedAnimation::from_path(&args.in_path)
        .with_context(|| format!("load recording '{}'", args.in_path.display()))?;

    let mut renderer = CpuRenderer::new(CpuRendererOpts {
        color_range: args.color_range.into(),
    });
    renderer.configure(recording.canvas(), recording.fps())?;
    renderer.attach_surface(Box::new(PngSequenceSink::new(&args.out)))?;

    let builder = SceneBuilder::new(recording.canvas());
    for (i, frame) in recording.frames().iter().enumerate() {
        builder
            .present(frame, &mut renderer)
            .with_context(|| format!("render frame {i}"))?;
    }
    renderer.finish()?;

    eprintln!(
        "wrote {} frames to {}",
        recording.len(),
        args.out.display()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let raw = std::fs::read(&args.in_path)
        .with_context(|| format!("read frame '{}'", args.in_path.display()))?;
    let frame = framecast::decode_frame(&raw)?;
    let scene = SceneBuilder::new(Canvas::new(args.width, args.height)?).build(&frame)?;
    let json = serde_json::to_string_pretty(&scene).context("serialize scene")?;
    println!("{json}");
    Ok(())
}
