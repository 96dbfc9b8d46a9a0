use clap::{Parser, Subcommand};
use std::io::BufRead;
use thumbstick::config::{self, MovementAxis};
use thumbstick::events::{PointerSample, SampleKind};
use thumbstick::geometry::Point;
use thumbstick::joystick::Joystick;
use thumbstick::tracker::Tracker;

#[derive(Parser, Debug)]
#[command(
    name = "thumbstick",
    version,
    about = "Feed pointer samples to a virtual joystick and print its readings",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Container width in pixels
    #[arg(long, default_value_t = 200)]
    width: u32,

    /// Container height in pixels
    #[arg(long, default_value_t = 200)]
    height: u32,

    /// Override the configured stick ratio
    #[arg(long)]
    stick_ratio: Option<f64>,

    /// Override the configured movement axis (free, horizontal_only, vertical_only)
    #[arg(long)]
    axis: Option<MovementAxis>,

    /// Keep the stick in place when the pointer is released
    #[arg(long)]
    no_recenter: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Write the default options file and print its path.
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let path = config::write_default_options()?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut options = config::load_or_default();
    if let Some(ratio) = cli.stick_ratio {
        options.stick_ratio = ratio;
    }
    if let Some(axis) = cli.axis {
        options.movement_axis = axis;
    }
    if cli.no_recenter {
        options.auto_recenter = false;
    }

    let joystick = Joystick::for_bounds(cli.width, cli.height, options)?;
    log::info!(
        "Tracking a radius {} container centered at ({}, {})",
        joystick.radius(),
        joystick.center().x,
        joystick.center().y
    );
    let mut tracker = Tracker::new(joystick);

    // Commands: down X Y | move X Y | up [X Y] | resize W H | quit
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            command => {
                if let Err(e) = run_command(&mut tracker, command) {
                    log::error!("{}", e);
                }
            }
        }
    }

    Ok(())
}

fn run_command(tracker: &mut Tracker, command: &str) -> anyhow::Result<()> {
    let mut words = command.split_whitespace();
    let verb = words.next().unwrap_or_default();

    if verb == "resize" {
        let width = next_number(&mut words, "width")?;
        let height = next_number(&mut words, "height")?;
        tracker.joystick_mut().resize(width, height)?;
        print_state(tracker);
        return Ok(());
    }

    let kind: SampleKind = verb
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown command '{}'", verb))?;
    let at = if kind == SampleKind::Up && words.clone().next().is_none() {
        // A bare "up" releases wherever the stick currently is.
        tracker.joystick().stick()
    } else {
        Point::new(next_number(&mut words, "x")?, next_number(&mut words, "y")?)
    };
    tracker.handle(PointerSample::new(kind, at));
    print_state(tracker);
    Ok(())
}

fn next_number<T: std::str::FromStr>(
    words: &mut std::str::SplitWhitespace,
    name: &str,
) -> anyhow::Result<T> {
    let word = words
        .next()
        .ok_or_else(|| anyhow::anyhow!("Missing {}", name))?;
    word.parse()
        .map_err(|_| anyhow::anyhow!("Invalid {} '{}'", name, word))
}

fn print_state(tracker: &Tracker) {
    let reading = tracker.reading();
    let stick = tracker.joystick().stick();
    println!(
        "angle={} strength={} direction={} stick=({}, {})",
        reading.angle, reading.strength, reading.direction, stick.x, stick.y
    );
}
