//! Slideswitch demo: drive the demonstration board headlessly and report
//! what it would paint.

#![allow(clippy::uninlined_format_args, clippy::needless_pass_by_value)]

use clap::Parser;
use slideswitch::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Frame interval used when advancing animations.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "slideswitch-demo")]
#[command(about = "Run the slide switch demonstration board")]
#[command(version)]
struct Cli {
    /// Build the board from a YAML file instead of the built-in demo
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Give every switch random highlight and shadow colors
    #[arg(short, long)]
    shuffle: bool,

    /// Click the switch at this row (repeatable)
    #[arg(long = "click")]
    clicks: Vec<usize>,

    /// Switch everything off before clicking
    #[arg(long)]
    all_off: bool,

    /// Animation frames to run after clicking
    #[arg(short, long, default_value = "10")]
    frames: usize,

    /// Print the recorded draw commands as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("slideswitch-demo: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = match &cli.config {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            log::info!("loading board from {}", path.display());
            SwitchBoard::from_config(&BoardConfig::from_yaml(&source)?)?
        }
        None => SwitchBoard::demo(),
    };

    if cli.shuffle {
        let mut colors = random_colors(2 * board.len())?.into_iter();
        board.shuffle_colors(&mut || colors.next().unwrap_or(Color::BLACK));
    }

    if cli.all_off {
        board.all_off();
    }

    for &index in &cli.clicks {
        if !board.click(index) {
            log::warn!("row {} did not toggle", index);
        }
    }

    let mut moving_frames = 0;
    for _ in 0..cli.frames {
        if !board.tick(FRAME) {
            break;
        }
        moving_frames += 1;
    }
    log::info!("animated for {} frames", moving_frames);

    let mut canvas = RecordingCanvas::new();
    board.render(&mut canvas);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(canvas.commands())?);
    } else {
        for entry in board.entries() {
            let state = if entry.switch.is_checked() { "on" } else { "off" };
            let moving = if entry.switch.is_animating() {
                " (sliding)"
            } else {
                ""
            };
            println!(
                "{:<16} {:<3} offset {:>6.1}{}",
                entry.label,
                state,
                entry.switch.offset(),
                moving
            );
        }
        println!("{} draw commands", canvas.command_count());
    }

    Ok(())
}

/// Draw `count` opaque colors from the operating system's random source.
fn random_colors(count: usize) -> Result<Vec<Color>, getrandom::Error> {
    let mut bytes = vec![0u8; count * 3];
    getrandom::getrandom(&mut bytes)?;
    Ok(bytes
        .chunks_exact(3)
        .map(|c| Color::from_rgb8(c[0], c[1], c[2]))
        .collect())
}
