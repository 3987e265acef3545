//! RotorCrypt command-line front end.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! rotorcrypt
//!
//! # Batch mode
//! rotorcrypt -r "I II III" -p MCK -m "Hello World"
//!
//! # Batch mode with statistics and per-letter signal path
//! rotorcrypt -r "I II III" -p MCK -m "Hello" --verbose --trace
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use rotorcrypt::catalog;
use rotorcrypt::{EncodingResult, EnigmaMachine, MachineConfig, RotorCryptError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Three-rotor cipher machine
#[derive(Parser, Debug)]
#[command(name = "rotorcrypt")]
#[command(about = "Encode/decode messages with a three-rotor cipher machine")]
#[command(version)]
struct Args {
    /// Rotor types, left to right (e.g. "I II III")
    #[arg(short, long)]
    rotors: Option<String>,

    /// Initial rotor positions, left to right (e.g. "MCK")
    #[arg(short, long)]
    positions: Option<String>,

    /// Message to encode/decode
    #[arg(short, long)]
    message: Option<String>,

    /// Show configuration and statistics
    #[arg(short, long)]
    verbose: bool,

    /// Print the signal path of every letter
    #[arg(short, long)]
    trace: bool,

    /// Emit all encoded letters in upper case
    #[arg(long)]
    no_preserve_case: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let result = match (&args.rotors, &args.positions, &args.message) {
        (Some(rotors), Some(positions), Some(message)) => {
            MachineConfig::from_args(rotors, positions)
                .and_then(|config| batch_mode(&args, &config, message))
        }
        (None, None, None) => interactive_mode(&args),
        _ => {
            eprintln!(
                "Error: for batch mode, all of --rotors, --positions and --message are required"
            );
            let _ = Args::command().print_help();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Encoding failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn batch_mode(args: &Args, config: &MachineConfig, message: &str) -> Result<(), RotorCryptError> {
    let mut machine = config.build()?;
    tracing::info!(%config, "Batch mode");

    let output = encode(args, &mut machine, message)?;
    if args.verbose {
        println!("Rotors: {}", config.rotors.join(" "));
        println!("Initial positions: {}", config.positions);
        println!("Input message: {}", message);
        print_stats(&machine, &output);
        println!("Output: {}", output.encoded_message);
    } else {
        println!("{}", output.encoded_message);
    }
    Ok(())
}

fn interactive_mode(args: &Args) -> Result<(), RotorCryptError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("=== RotorCrypt ===");
    println!();
    println!(
        "Available rotor types: {}",
        catalog::rotor_names().collect::<Vec<_>>().join(", ")
    );

    let rotors = loop {
        let Some(line) = prompt(&mut lines, "Enter 3 rotor types (e.g., 'I II III'): ") else {
            return Ok(());
        };
        match MachineConfig::parse_rotors(&line) {
            Ok(rotors) => break rotors,
            Err(e) => println!("Error: {}", e),
        }
    };

    let positions = loop {
        let Some(line) = prompt(&mut lines, "Enter initial positions (e.g., 'MCK'): ") else {
            return Ok(());
        };
        match MachineConfig::normalize_positions(&line) {
            Ok(positions) => break positions,
            Err(e) => println!("Error: {}", e),
        }
    };

    let config = MachineConfig { rotors, positions };
    let mut machine = config.build()?;
    println!();
    println!("Machine initialized: {}", config);
    println!("Enter messages to encode/decode (Ctrl+D to exit):");
    println!();

    while let Some(message) = prompt(&mut lines, "Message: ") {
        if message.trim().is_empty() {
            continue;
        }
        let output = encode(args, &mut machine, &message)?;
        println!("Encoded:  {}", output.encoded_message);
        print_stats(&machine, &output);
        println!();
    }

    println!();
    println!("Goodbye!");
    Ok(())
}

/// Encodes a message, printing each letter's path first when tracing.
fn encode(
    args: &Args,
    machine: &mut EnigmaMachine<'_>,
    message: &str,
) -> Result<EncodingResult, RotorCryptError> {
    if args.trace {
        let mut preview = machine.clone();
        for c in message.chars().filter(char::is_ascii_alphabetic) {
            println!("{}", preview.encode_letter_traced(c.to_ascii_uppercase())?);
        }
    }
    machine.encode_message(message, !args.no_preserve_case)
}

fn print_stats(machine: &EnigmaMachine<'_>, output: &EncodingResult) {
    println!("Letters processed: {}", output.letters_processed);
    println!("Rotor steps (L-C-R): {}", output.rotor_steps);
    println!("Final rotor positions: {}", machine.positions());
}

/// Prints `text` and reads one line. `None` on end of input.
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, text: &str) -> Option<String> {
    print!("{}", text);
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Failed to read input");
            None
        }
        None => None,
    }
}
