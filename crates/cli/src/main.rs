//! Gate-level MIPS pipeline simulator CLI.
//!
//! This binary provides a single entry point for batch runs. It performs:
//! 1. **Configuration:** built-in defaults or a JSON file, with command-line overrides.
//! 2. **Program Loading:** pre-encoded instruction words, one per line.
//! 3. **Execution:** pulses the machine until it halts or hits the pulse limit.
//! 4. **Reporting:** console output, halt cause, optional register dump and statistics.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::core::cpu::trap::TrapCause;
use mipsim_core::isa::{abi, disasm};
use mipsim_core::sim::Simulator;
use mipsim_core::{Cpu, SimError};

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Gate-level 5-stage pipelined MIPS simulator",
    long_about = "Runs a pre-encoded MIPS program on a pipeline built from single-bit gates.\n\nExamples:\n  mipsim run -f hello.txt\n  mipsim run -f echo.txt --input \"hi there\" --dump\n  RUST_LOG=mipsim_core=trace mipsim run -f prog.txt --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it exits, traps or reaches the pulse limit.
    Run {
        /// Program file: one 32-bit word per line, binary or 0x-prefixed hex.
        #[arg(short, long)]
        file: String,

        /// JSON configuration file (defaults are used when omitted).
        #[arg(short, long)]
        config: Option<String>,

        /// Pulse limit (overrides the configuration).
        #[arg(short, long)]
        pulses: Option<u64>,

        /// Text queued as console input before the first pulse.
        #[arg(short, long)]
        input: Option<String>,

        /// Emit per-stage trace events.
        #[arg(long)]
        trace: bool,

        /// Print registers and pipeline state after the run.
        #[arg(long)]
        dump: bool,

        /// Statistics sections to print (summary, pipeline, syscall); all when empty.
        #[arg(long, value_delimiter = ',')]
        stats: Vec<String>,
    },

    /// Print the effective configuration as JSON.
    Config {
        /// JSON configuration file (defaults are used when omitted).
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_level = match &cli.command {
        Commands::Run { trace: true, .. } => "trace",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run {
            file,
            config,
            pulses,
            input,
            trace,
            dump,
            stats,
        } => cmd_run(&RunArgs {
            file,
            config,
            pulses,
            input,
            trace,
            dump,
            stats,
        }),
        Commands::Config { config } => cmd_config(config.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}

struct RunArgs {
    file: String,
    config: Option<String>,
    pulses: Option<u64>,
    input: Option<String>,
    trace: bool,
    dump: bool,
    stats: Vec<String>,
}

fn load_config(path: Option<&str>) -> Result<Config, SimError> {
    path.map_or_else(|| Ok(Config::default()), Config::from_file)
}

/// Runs one program and reports the outcome.
///
/// The exit status is success only when the program ends with the exit syscall.
fn cmd_run(args: &RunArgs) -> Result<ExitCode, SimError> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(pulses) = args.pulses {
        config.general.max_pulses = pulses;
    }
    config.general.trace_instructions |= args.trace;

    let mut sim = Simulator::from_file(&config, &args.file)?;
    if let Some(text) = &args.input {
        sim.provide_input(text.as_bytes())?;
    }

    println!("[*] Running {} (limit {} pulses)", args.file, sim.max_pulses);
    let summary = match sim.run() {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            dump_state(&sim.cpu);
            sim.cpu.stats.print_sections(&args.stats);
            return Ok(ExitCode::FAILURE);
        }
    };

    if !summary.output.is_empty() {
        println!("{}", summary.output);
    }
    match summary.cause {
        Some(cause) => println!("\n[*] Halted after {} pulses: {cause}", summary.pulses),
        None => println!("\n[*] Pulse limit reached after {} pulses", summary.pulses),
    }
    if args.dump {
        dump_state(&sim.cpu);
    }
    sim.cpu.stats.print_sections(&args.stats);

    Ok(if summary.cause == Some(TrapCause::Exit) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_config(path: Option<&str>) -> Result<ExitCode, SimError> {
    let config = load_config(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(ExitCode::SUCCESS)
}

/// Prints the register file, PC, trap state, the word waiting in decode and the
/// bytes at the stack pointer.
fn dump_state(cpu: &Cpu) {
    println!("\n-------------------------- REGISTERS ---------------------------");
    for (i, value) in cpu.registers().iter().enumerate() {
        print!("{:>5}: {value:#010x}", abi::reg_name(i));
        if i % 4 == 3 {
            println!();
        } else {
            print!("   ");
        }
    }
    println!("----------------------------------------------------------------");
    println!(
        "   pc: {:#010x}   halted: {}   stalled: {}   static: {:#x}",
        cpu.pc(),
        cpu.is_halted(),
        cpu.is_stalled(),
        cpu.static_pointer()
    );
    if let Ok(word) = cpu.if_id.read().instruction.to_u32() {
        println!("IF/ID: {}", disasm::disassemble(word));
    }
    match cpu.stack_bytes() {
        Ok(bytes) => println!("stack: {bytes:02x?}"),
        Err(e) => println!("stack: <{e}>"),
    }
}
