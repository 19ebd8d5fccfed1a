//! Tilt Ball entry point
//!
//! Native host: plays the UI layer's role. Lays out the field, feeds the
//! synthetic gravity sensor through the adapter and prints every published
//! position as a JSON line.
//!
//! Usage: `tilt-ball [settings.json]`

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::mpsc;

use serde::Serialize;
use tilt_ball::source::TiltSource;
use tilt_ball::{SampleAdapter, SampleOutcome, Settings};

/// One rendered frame worth of output
#[derive(Serialize)]
struct Frame {
    timestamp: i64,
    x: f32,
    y: f32,
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Tilt Ball (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Output failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> io::Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut adapter = SampleAdapter::from_settings(settings);
    adapter.subscribe(move |pos| {
        // Receiver outlives the adapter
        let _ = tx.send(pos);
    });

    adapter.init_field(settings.field_width, settings.field_height, settings.ball_size);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut published = 0u32;
    let mut rejected = 0u32;
    let mut wall_hits = 0u32;

    // Initial centered position
    for pos in rx.try_iter() {
        write_frame(&mut out, 0, pos.x, pos.y)?;
    }

    for sample in TiltSource::new(&settings.source) {
        match adapter.on_sample(&sample) {
            SampleOutcome::Published(_, contacts) => {
                published += 1;
                if contacts.any() {
                    wall_hits += 1;
                }
            }
            SampleOutcome::Rejected => rejected += 1,
            SampleOutcome::Bootstrapped | SampleOutcome::Ignored => {}
        }
        for pos in rx.try_iter() {
            write_frame(&mut out, sample.timestamp, pos.x, pos.y)?;
        }
    }

    out.flush()?;
    log::info!(
        "Done: {} positions published, {} wall hits, {} samples rejected, final {}",
        published,
        wall_hits,
        rejected,
        adapter.position()
    );
    Ok(())
}

fn write_frame(out: &mut impl Write, timestamp: i64, x: f32, y: f32) -> io::Result<()> {
    let line = serde_json::to_string(&Frame { timestamp, x, y }).map_err(io::Error::other)?;
    writeln!(out, "{}", line)
}
