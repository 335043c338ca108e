//! RV32 reference interpreter CLI.
//!
//! This binary is the entry point for running and inspecting flat program images. It performs:
//! 1. **Run:** Load an image, execute it until halt or a step bound, then dump the final state.
//! 2. **Disasm:** Print the address, raw word and assembly text of every word in an image.
//!
//! Exit status for `run`: 0 after a debug-break halt, 2 when the step bound is
//! reached, 1 on a fatal trap or a load/configuration error.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use rv32_core::config::Config;
use rv32_core::sim::loader::{self, LoadError};
use rv32_core::{RunExit, Simulator, disassemble};

/// Exit status when the step bound stops the run.
const EXIT_STEP_LIMIT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "rv32",
    author,
    version,
    about = "RV32 reference interpreter",
    long_about = "Run or disassemble flat little-endian RV32 images.\n\nExamples:\n  rv32 run prog.bin\n  rv32 run prog.bin --max-steps 1000 --json\n  rv32 run prog.bin --config sim.json --trace\n  rv32 disasm prog.bin --base 0x100"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute an image until it halts or the step bound is reached.
    Run {
        /// Flat binary image of little-endian 32-bit words.
        image: PathBuf,

        /// JSON configuration file; flags below override its values.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address at which the image is loaded.
        #[arg(long, value_parser = parse_u32)]
        base: Option<u32>,

        /// Address of the first instruction executed.
        #[arg(long, value_parser = parse_u32)]
        start_pc: Option<u32>,

        /// Maximum number of instructions to execute.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Memory capacity in bytes.
        #[arg(long, value_parser = parse_usize)]
        memory: Option<usize>,

        /// Make x0 read as zero and ignore writes to it.
        #[arg(long)]
        hardwire_zero: bool,

        /// Log every executed instruction (forces `trace` level).
        #[arg(long)]
        trace: bool,

        /// Print the final state and statistics as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Disassemble an image.
    Disasm {
        /// Flat binary image of little-endian 32-bit words.
        image: PathBuf,

        /// Address of the first word, used for the address column.
        #[arg(long, value_parser = parse_u32, default_value = "0")]
        base: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            image,
            config,
            base,
            start_pc,
            max_steps,
            memory,
            hardwire_zero,
            trace,
            json,
        } => {
            let overrides = Overrides {
                base,
                start_pc,
                max_steps,
                memory,
                hardwire_zero,
                trace,
            };
            resolve_config(config.as_deref(), &overrides).and_then(|config| {
                init_logging(config.general.trace_instructions);
                cmd_run(&image, &config, json)
            })
        }
        Commands::Disasm { image, base } => {
            init_logging(false);
            cmd_disasm(&image, base)
        }
    };

    result.unwrap_or_else(|e| {
        init_logging(false);
        error!("{e}");
        ExitCode::FAILURE
    })
}

/// Installs the `tracing` subscriber on stderr; later calls are no-ops.
///
/// The filter comes from `RUST_LOG` (default `warn`); `trace` forces `trace`.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Reads the configuration file, if any, and applies the command-line overrides.
fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<Config, LoadError> {
    let mut config = match path {
        Some(path) => loader::load_config(path)?,
        None => Config::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Default)]
struct Overrides {
    base: Option<u32>,
    start_pc: Option<u32>,
    max_steps: Option<u64>,
    memory: Option<usize>,
    hardwire_zero: bool,
    trace: bool,
}

impl Overrides {
    fn apply(&self, config: &mut Config) {
        if let Some(base) = self.base {
            config.general.load_base = base;
        }
        if let Some(pc) = self.start_pc {
            config.general.start_pc = pc;
        }
        if self.max_steps.is_some() {
            config.general.max_steps = self.max_steps;
        }
        if let Some(capacity) = self.memory {
            config.memory.capacity = capacity;
        }
        config.isa.hardwire_zero |= self.hardwire_zero;
        config.general.trace_instructions |= self.trace;
    }
}

/// Loads `image`, runs it and prints the final state.
fn cmd_run(image: &Path, config: &Config, json: bool) -> Result<ExitCode, LoadError> {
    let mut sim = Simulator::new(config)?;
    let _ = sim.load_image(image)?;

    let outcome = sim.run();
    let snapshot = sim.inspect();
    let stats = sim.stats();

    let (label, code) = match &outcome {
        Ok(RunExit::Halted) => ("halted".to_string(), ExitCode::SUCCESS),
        Ok(RunExit::StepLimit) => ("step-limit".to_string(), ExitCode::from(EXIT_STEP_LIMIT)),
        Err(trap) => (trap.to_string(), ExitCode::FAILURE),
    };

    if json {
        let report = serde_json::json!({
            "exit": label,
            "fatal": outcome.is_err(),
            "state": snapshot,
            "stats": stats,
        });
        println!("{report:#}");
    } else {
        if outcome.is_err() {
            println!("[!] FATAL TRAP: {label}");
        } else {
            println!("[*] Exit: {label}");
        }
        print!("{snapshot}");
        println!("{stats}");
        if let Some(last) = stats.last_fault() {
            println!("last fault               {last}");
        }
    }

    Ok(code)
}

/// Prints one line per word: address, raw encoding and assembly text.
fn cmd_disasm(image: &Path, base: u32) -> Result<ExitCode, LoadError> {
    let words = loader::load_image(image)?;
    let mut addr = base;
    for word in words {
        println!("{addr:08x}:  {word:08x}  {}", disassemble(word));
        addr = addr.wrapping_add(4);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parses a decimal or `0x`-prefixed hexadecimal address.
fn parse_u32(s: &str) -> Result<u32, String> {
    let (digits, radix) = split_radix(s);
    u32::from_str_radix(&digits, radix).map_err(|e| format!("invalid address '{s}': {e}"))
}

/// Parses a decimal or `0x`-prefixed hexadecimal byte count.
fn parse_usize(s: &str) -> Result<usize, String> {
    let (digits, radix) = split_radix(s);
    usize::from_str_radix(&digits, radix).map_err(|e| format!("invalid size '{s}': {e}"))
}

/// Strips `_` separators and an optional `0x` prefix, returning the digits and their radix.
fn split_radix(s: &str) -> (String, u32) {
    let cleaned = s.replace('_', "").to_ascii_lowercase();
    cleaned
        .strip_prefix("0x")
        .map_or_else(|| (cleaned.clone(), 10), |hex| (hex.to_string(), 16))
}
