// Replay Runtime - drives the glade scene from a recorded input session
//
// Each frame of the script supplies the XR input events that arrived since
// the previous frame. The runtime queues them, steps the game once and
// prints the resulting frame report as JSON on stdout, so sessions can be
// diffed and asserted on without a headset.

mod script;

use std::{io::Write, path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use engine::profile;
use glade_vr::{FrameReport, Game, GameOptions, time::Time};

const DEFAULT_FRAME_SECONDS: f32 = 1.0 / 72.0;

#[derive(Parser)]
#[command(name = "replay_runtime")]
#[command(about = "Replay a recorded XR input session through the glade scene")]
struct Args {
    /// Session script (JSON) to replay
    script: PathBuf,

    /// Game options file (JSON)
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<usize>,

    /// Seconds per frame for frames that do not set their own delta
    #[arg(long, default_value_t = DEFAULT_FRAME_SECONDS)]
    delta: f32,

    /// Pretty-print each frame report
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct FrameOutput<'a> {
    #[serde(flatten)]
    report: &'a FrameReport,
    rendered_objects: usize,
}

/// Rejects negative, non-finite and out-of-range frame times.
fn frame_duration(seconds: f32) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f32(seconds).with_context(|| format!("invalid delta {}", seconds))
}

fn main() -> anyhow::Result<()> {
    engine::logging::init_logging("GLADE_LOG");

    let args = Args::parse();

    let options = match &args.options {
        Some(path) => GameOptions::from_file(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => GameOptions::default(),
    };

    let session = script::load(&args.script)?;
    let frame_limit = args.frames.unwrap_or(session.frames.len());
    info!(
        "Replaying {} of {} frames from {}",
        frame_limit.min(session.frames.len()),
        session.frames.len(),
        args.script.display()
    );

    let mut game = Game::new(options);
    let mut time = Time::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for (index, frame) in session.frames.into_iter().take(frame_limit).enumerate() {
        let delta = frame_duration(frame.delta.unwrap_or(args.delta))
            .with_context(|| format!("frame {}", index))?;

        let events = frame
            .into_input_events()
            .with_context(|| format!("frame {}", index))?;
        game.queue_events(events);

        time = time.advance(delta);
        let report = profile!("frame", game.update(&time));

        let output = FrameOutput {
            report: &report,
            rendered_objects: game.render().len(),
        };
        if args.pretty {
            serde_json::to_writer_pretty(&mut out, &output)?;
        } else {
            serde_json::to_writer(&mut out, &output)?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    info!("Replay finished after {:?}", time.total);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(0.5).unwrap(), Duration::from_millis(500));
        assert_eq!(frame_duration(0.0).unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_frame_duration_rejects_unrepresentable_deltas() {
        for seconds in [-1.0, f32::NAN, f32::INFINITY, 1e30] {
            let err = frame_duration(seconds).unwrap_err();
            assert!(err.to_string().contains("invalid delta"), "{}", err);
        }
    }
}
