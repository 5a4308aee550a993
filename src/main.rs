use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::{ArgGroup, Parser};
use rpncalc::{DEFAULT_DELIMITER, evaluate};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// rpncalc is a reverse Polish notation calculator.
///
/// Example: `rpncalc 3 3 2 '*' + sqrt` prints `3.0`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["code", "interactive"])))]
struct Args {
    /// Delimiter separating the tokens of an expression. Given without a
    /// value, tokens are separated by any run of whitespace.
    #[arg(short, long, default_value = DEFAULT_DELIMITER, num_args = 0..=1, default_missing_value = "")]
    delimiter: String,

    /// Starts an interactive shell that evaluates one expression per line.
    #[arg(short, long)]
    interactive: bool,

    /// The expression. Multiple arguments are joined with spaces.
    #[arg(allow_negative_numbers = true)]
    code: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();
    debug!(interactive = args.interactive, delimiter = %args.delimiter, "starting");

    if args.interactive {
        interactive(args.delimiter).await;
        println!("Bye");
        // The input thread may still be blocked reading stdin.
        std::process::exit(0);
    }

    let code = args.code.join(" ");
    match evaluate(code.as_str(), &args.delimiter) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the shell on stdin until it ends or Ctrl+C is pressed.
async fn interactive(delimiter: String) {
    let mut session = tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        shell(stdin.lock(), &mut io::stdout(), &delimiter)
    });

    let finished = tokio::select! {
        joined = &mut session => Some(joined),
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => {
                debug!("interrupted");
                println!();
                return;
            },
            Err(e) => {
                warn!(%e, "failed to listen for Ctrl+C");
                None
            },
        },
    };

    let joined = match finished {
        Some(joined) => joined,
        None => session.await,
    };
    match joined {
        Ok(Ok(())) => {},
        Ok(Err(e)) => debug!(%e, "interactive session failed"),
        Err(e) => debug!(%e, "interactive session panicked"),
    }
}

/// Reads and evaluates one expression per line until input ends or an
/// evaluation fails.
fn shell<R: BufRead, W: Write>(input: R, output: &mut W, delimiter: &str) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, ">>> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        debug!(%line, "evaluating");
        match evaluate(line.as_str(), delimiter) {
            Ok(value) => writeln!(output, "{value}")?,
            Err(e) => {
                warn!(%e, "evaluation failed");
                return Ok(());
            },
        }
    }
}
