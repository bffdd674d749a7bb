use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use gestura::controller::session::GestureSession;
use gestura::overlay::status_overlay::{FpsMeter, LogOverlay, Overlay};
use gestura::sensor::landmark_source::{self, DetectorSettings, LandmarkSource, ReplaySource};

#[derive(Debug, Parser)]
#[command(name = "gestura")]
#[command(about = "Static hand gesture recognition over recorded hand landmarks")]
struct Cli {
    /// JSON Lines landmark recording to replay
    #[arg(long)]
    input: PathBuf,

    /// Min detection confidence
    #[arg(long = "min-det", default_value_t = 0.7)]
    min_det: f32,

    /// Min tracking confidence
    #[arg(long = "min-trk", default_value_t = 0.6)]
    min_trk: f32,

    /// Window size for decision smoothing
    #[arg(long, default_value_t = 7)]
    smooth: usize,

    /// Frame width used to scale normalized landmarks
    #[arg(long, default_value_t = 960, value_parser = clap::value_parser!(u32).range(1..=i32::MAX as i64))]
    width: u32,

    /// Frame height used to scale normalized landmarks
    #[arg(long, default_value_t = 540, value_parser = clap::value_parser!(u32).range(1..=i32::MAX as i64))]
    height: u32,

    /// Replay rate, 0 replays as fast as possible
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Stats output path on exit
    #[arg(long, default_value = "stats/session_stats.json")]
    save: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let frames = landmark_source::read_recording(&cli.input)?;

    let settings = DetectorSettings {
        min_detection_confidence: cli.min_det,
        min_tracking_confidence: cli.min_trk,
    };
    let mut source = ReplaySource::new(settings, cli.width, cli.height);

    let mut session = GestureSession::new(cli.smooth);
    log::info!("Smoothing over {} frames", session.window_size());

    let mut overlay = LogOverlay::default();
    let mut fps_meter = FpsMeter::new();

    // Pace the replay like a capture loop limited to the requested frame rate
    let frame_budget = (cli.fps > 0).then(|| Duration::from_micros(1_000_000 / cli.fps as u64));

    for (index, frame) in frames.iter().enumerate() {
        let started = Instant::now();

        let hand = match source.detect(frame) {
            Ok(hand) => hand,
            Err(e) => {
                log::warn!("Skipping frame {}: {}", index, e);
                continue;
            }
        };

        let outcome = session.process(hand.as_ref());

        let fps = fps_meter.tick();
        overlay.present(
            hand.as_ref().map(|h| &h.landmarks),
            outcome.decision.gesture,
            outcome.decision.confidence,
            fps,
        );

        if let Some(budget) = frame_budget {
            if let Some(remaining) = budget.checked_sub(started.elapsed()) {
                thread::sleep(remaining);
            }
        }
    }

    // Save session stats
    let stats = session.finish();
    stats
        .save(&cli.save)
        .with_context(|| format!("Failed to save session stats to {}", cli.save.display()))?;
    log::info!("Session stats saved to {}", cli.save.display());

    Ok(())
}
