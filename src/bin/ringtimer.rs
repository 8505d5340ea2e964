use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use ringtimer::{
    AnimationControl as _, AnimationEvent, BackgroundView, Canvas, Fps, RingView, Rgba8,
    SceneSettings, Scheduler, TimeInput, TimerBoard,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "ringtimer", version)]
struct Cli {
    /// Scene settings JSON; missing keys keep their defaults.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log state transitions (overridden by `RUST_LOG`).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count a timer down on a simulated clock, logging the display and ring events.
    Run(RunArgs),
    /// Simulate a timer for a while and write its ring as a PNG.
    Frame(FrameArgs),
    /// Print how an `HHMMSS` entry is displayed.
    Format(FormatArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Timer length as up to six `HHMMSS` digits.
    #[arg(long)]
    time: String,

    /// Frames per second (default: settings, then `RINGTIMER_FPS`, then 60).
    #[arg(long)]
    fps: Option<u32>,

    /// Stop the timer after this many seconds.
    #[arg(long, requires = "resume_after")]
    pause_at: Option<f64>,

    /// Resume this many seconds after pausing.
    #[arg(long, requires = "pause_at")]
    resume_after: Option<f64>,

    /// Reset the timer this many seconds in and wait for the ring to refill.
    #[arg(long)]
    reset_at: Option<f64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Timer length as up to six `HHMMSS` digits.
    #[arg(long)]
    time: String,

    /// Seconds to simulate before capturing.
    #[arg(long)]
    at: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Square canvas edge in px (default: derived from the settings' viewport).
    #[arg(long)]
    size: Option<u32>,

    /// Draw the blob background under the ring.
    #[arg(long)]
    background: bool,
}

#[derive(Parser, Debug)]
struct FormatArgs {
    /// Up to six `HHMMSS` digits.
    time: String,

    /// Milliseconds already counted.
    #[arg(long, default_value_t = 0)]
    elapsed_ms: i64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "ringtimer=debug,info" } else { "info" })
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let settings = load_settings(cli.settings.as_deref())?;
    match cli.cmd {
        Command::Run(args) => cmd_run(args, &settings),
        Command::Frame(args) => cmd_frame(args, &settings),
        Command::Format(args) => cmd_format(args),
    }
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<SceneSettings> {
    match path {
        Some(path) => SceneSettings::from_json_path(path)
            .with_context(|| format!("load settings '{}'", path.display())),
        None => Ok(SceneSettings::default()),
    }
}

fn parse_time(raw: &str) -> anyhow::Result<TimeInput> {
    let time = TimeInput::parse(raw).with_context(|| format!("parse --time '{raw}'"))?;
    if time.total_ms() == 0 {
        anyhow::bail!("--time '{raw}' is zero; nothing to count down");
    }
    Ok(time)
}

/// Scripted pause for `run`.
#[derive(Clone, Copy, Debug)]
enum PauseScript {
    None,
    Pending { at_ms: u64, resume_after_ms: u64 },
    Paused { resume_at_ms: u64 },
    Done,
}

fn cmd_run(args: RunArgs, settings: &SceneSettings) -> anyhow::Result<()> {
    let time = parse_time(&args.time)?;
    let fps = Fps::new(args.fps.unwrap_or(settings.fps), 1).context("--fps")?;

    let mut board = TimerBoard::new();
    let id = board
        .iter()
        .next()
        .map(|t| t.id.clone())
        .context("timer board is empty")?;
    if let Some(t) = board.get_mut(&id) {
        t.time = time.clone();
    }

    let ring = RingView::new(id.clone(), time.total_ms() as f64 / 1000.0, settings)?;
    let mut scheduler = Scheduler::new();
    ring.mount(&mut scheduler);

    let mut script = match (args.pause_at, args.resume_after) {
        (Some(at), Some(after)) => PauseScript::Pending {
            at_ms: (at * 1000.0) as u64,
            resume_after_ms: (after * 1000.0) as u64,
        },
        _ => PauseScript::None,
    };
    let mut reset_at_ms = args.reset_at.map(|s| (s * 1000.0) as u64);
    let mut last_display = String::new();

    tracing::info!(%id, time = %time.raw_display(), fps = fps.num, "timer started");
    start(&mut board, &mut scheduler, &id, 0);

    for n in 0u64.. {
        let now_f = fps.timestamp_ms(0.0, n);
        let now = now_f as u64;

        match script {
            PauseScript::Pending {
                at_ms,
                resume_after_ms,
            } if now >= at_ms => {
                if let Some(t) = board.get_mut(&id) {
                    t.stop(now);
                }
                scheduler.pause(&id);
                tracing::info!(now_ms = now, "paused");
                script = PauseScript::Paused {
                    resume_at_ms: now + resume_after_ms,
                };
            }
            PauseScript::Paused { resume_at_ms } if now >= resume_at_ms => {
                tracing::info!(now_ms = now, "resumed");
                start(&mut board, &mut scheduler, &id, now);
                script = PauseScript::Done;
            }
            _ => {}
        }

        if let Some(at) = reset_at_ms
            && now >= at
        {
            if let Some(t) = board.get_mut(&id) {
                t.reset();
            }
            scheduler.reset(&id);
            tracing::info!(now_ms = now, "reset");
            reset_at_ms = None;
            script = PauseScript::Done;
        }

        let events = scheduler.tick(now_f);

        if let Some(t) = board.get_mut(&id)
            && !t.is_resetting
        {
            if t.is_running && t.remaining_ms(now) <= 0 {
                t.stop(now);
                tracing::info!(now_ms = now, "time's up");
            }
            let shown = t.display(now)?;
            if shown != last_display {
                tracing::info!(remaining = %shown);
                last_display = shown;
            }
        }

        for event in &events {
            board.apply_event(event, now);
            match event {
                AnimationEvent::Completed(done) => {
                    tracing::info!(id = %done, now_ms = now, "ring emptied");
                    return Ok(());
                }
                AnimationEvent::ResetFinished(done) => {
                    tracing::info!(id = %done, now_ms = now, "ring refilled");
                    return Ok(());
                }
            }
        }

        if !scheduler.is_loop_active() && !matches!(script, PauseScript::Paused { .. }) {
            anyhow::bail!("frame loop stopped before the ring finished");
        }
    }
    Ok(())
}

fn start(board: &mut TimerBoard, scheduler: &mut Scheduler, id: &str, now: u64) {
    if let Some(t) = board.get_mut(id) {
        t.start(now);
    }
    scheduler.start(id);
}

fn cmd_frame(args: FrameArgs, settings: &SceneSettings) -> anyhow::Result<()> {
    let time = parse_time(&args.time)?;
    if !args.at.is_finite() || args.at < 0.0 {
        anyhow::bail!("--at must be a non-negative number of seconds");
    }
    let canvas = match args.size {
        Some(size) => Canvas::square(size)?,
        None => settings.ring_canvas()?,
    };

    let mut ring_settings = settings.clone();
    if args.background {
        ring_settings.clear_color = Rgba8::new(0, 0, 0, 0);
    }
    let ring = RingView::with_canvas(
        "frame",
        time.total_ms() as f64 / 1000.0,
        canvas,
        &ring_settings,
    )?;
    let background = args
        .background
        .then(|| BackgroundView::with_canvas(canvas, settings))
        .transpose()?;

    let mut scheduler = Scheduler::new();
    if let Some(bg) = &background {
        bg.mount(&mut scheduler);
    }
    ring.mount(&mut scheduler);
    scheduler.start(ring.id());

    let fps = settings.frame_rate()?;
    let end_ms = args.at * 1000.0;
    for n in 0u64.. {
        let now = fps.timestamp_ms(0.0, n);
        if now > end_ms || !scheduler.is_loop_active() {
            break;
        }
        scheduler.tick(now);
    }

    let frame = match &background {
        Some(bg) => {
            let mut out = bg.frame();
            out.composite_over(&ring.frame(), 1.0)?;
            out
        }
        None => ring.frame(),
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame
        .write_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_format(args: FormatArgs) -> anyhow::Result<()> {
    let time = TimeInput::parse(&args.time).with_context(|| format!("parse '{}'", args.time))?;
    println!("raw      {}", time.raw_display());
    println!(
        "running  {}",
        ringtimer::format_timer_running(time.as_str(), args.elapsed_ms)?
    );
    println!(
        "compact  {}",
        ringtimer::format_timer_compact(time.as_str(), args.elapsed_ms)?
    );
    println!("ms       {}", time.total_ms());
    Ok(())
}
