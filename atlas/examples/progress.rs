//! Drives a few progress bars from a host-side timer loop and prints the
//! rendered markup for each tick.
//!
//! Run with `cargo run --example progress`; debug logs go to `progress.log`.

use std::thread;
use std::time::Duration;

use atlas::logging::init_file_logger;
use atlas::{Kind, Mode, ProgressBar, ProgressValue};
use log::LevelFilter;

// Fixed increments so every run prints the same frames.
const STEPS: [f64; 6] = [12.0, 27.5, 8.0, 30.0, 14.0, 21.0];

fn main() {
    if let Err(e) = init_file_logger("progress.log", LevelFilter::Debug) {
        eprintln!("logging disabled: {e}");
    }

    let mut progress = 0.0_f64;
    let mut buffer = 10.0_f64;

    for step in STEPS {
        progress = (progress + step).min(100.0);
        if progress > buffer {
            buffer = (progress + (100.0 - progress) / 2.0).min(100.0);
        }

        println!("--- progress {progress:.1}, buffer {buffer:.1}");
        let bars = [
            ProgressBar::new()
                .mode(Mode::Determinate)
                .value(progress)
                .buffer(buffer),
            ProgressBar::new().kind(Kind::Circular).mode(Mode::Determinate).value(progress),
            ProgressBar::new().mode(Mode::Indeterminate),
            ProgressBar::new()
                .mode(Mode::Determinate)
                .value(ProgressValue::range(10.0, 80.0)),
        ];
        for bar in &bars {
            println!("{}", bar.render().to_markup());
        }

        thread::sleep(Duration::from_millis(250));
    }
}
