use anyhow::{Context, Result};
use clap::Parser;
use duckyscript::keyboard::{PtyKeyboard, TraceKeyboard};
use duckyscript::logging::init_logging;
use duckyscript::{Engine, Keyboard, read_script};
use std::io::Write;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "ducky",
    about = "Run a Ducky Script against a keyboard sink",
    version
)]
struct Args {
    /// Path to the script file
    #[arg(short, long)]
    script: String,

    /// Program to type into, run inside a PTY. Without it the script is a
    /// dry run and every keyboard call is printed to stdout.
    #[arg(short, long)]
    command: Option<String>,

    /// Arguments to pass to the program
    #[arg(trailing_var_arg = true)]
    args: Vec<String>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let script = read_script(&args.script)?;

    match &args.command {
        Some(program) => {
            let keyboard = PtyKeyboard::spawn(program, args.args.as_slice(), |data| {
                let mut stdout = std::io::stdout();
                let _ = stdout.write_all(data);
                let _ = stdout.flush();
            })
            .context("Failed to start program")?;
            info!(program = program.as_str(), "spawned program in PTY");

            // Give the program time to start up before typing into it.
            tokio::time::sleep(Duration::from_millis(100)).await;
            run(keyboard, &script, Duration::from_millis(500)).await?;
        }
        None => run(TraceKeyboard::stdout(), &script, Duration::ZERO).await?,
    }

    Ok(())
}

/// Execute `script`, then wait `settle` before dropping the keyboard so a
/// program has time to print its response to the last keystrokes.
async fn run(keyboard: impl Keyboard + 'static, script: &str, settle: Duration) -> Result<()> {
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, releasing held keys");
            on_interrupt.cancel();
        }
    });

    let mut engine = Engine::new(keyboard).with_cancellation(cancel);
    engine
        .execute(script)
        .await
        .context("Failed to execute script")?;

    tokio::time::sleep(settle).await;
    Ok(())
}
