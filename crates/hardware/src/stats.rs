//! Simulation statistics collection and reporting.
//!
//! This module tracks activity of the pipelined machine. It provides:
//! 1. **Clocking:** Pulses driven, pulses spent stalled in string transfers, halt point.
//! 2. **Datapath Activity:** Register writes, memory loads and stores.
//! 3. **Control Flow:** Redirects and the bubbles they inject.
//! 4. **Syscalls:** Syscalls serviced and string words transferred.

use std::time::Instant;

/// Simulation statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Clock pulses driven (low-high-low sequences).
    pub pulses: u64,
    /// Pulses during which issue was stalled by a string transfer.
    pub stall_pulses: u64,
    /// Register-file writes committed.
    pub register_writes: u64,
    /// Data-port reads performed.
    pub memory_reads: u64,
    /// Data-port writes performed (stores and string input).
    pub memory_writes: u64,
    /// Control-flow redirects taken in the memory stage.
    pub redirects: u64,
    /// Instructions squashed by redirects.
    pub squashed: u64,
    /// Syscalls that reached writeback.
    pub syscalls: u64,
    /// Words moved by string transfers.
    pub string_words: u64,
    /// Pulse on which the terminal trap fired.
    pub halted_at: Option<u64>,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            pulses: 0,
            stall_pulses: 0,
            register_writes: 0,
            memory_reads: 0,
            memory_writes: 0,
            redirects: 0,
            squashed: 0,
            syscalls: 0,
            string_words: 0,
            halted_at: None,
        }
    }
}

/// Section names accepted by [`SimStats::print_sections`].
pub const STATS_SECTIONS: &[&str] = &["summary", "pipeline", "syscall"];

impl SimStats {
    /// Prints every section.
    pub fn print(&self) {
        self.print_sections(&[]);
    }

    /// Prints the named sections; an empty list prints all of them.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let pulses = self.pulses.max(1);

        if want("summary") {
            let khz = if seconds > 0.0 {
                (self.pulses as f64 / seconds) / 1000.0
            } else {
                0.0
            };
            println!("\n==========================================================");
            println!("MIPS PIPELINE SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_pulses               {}", self.pulses);
            println!("sim_freq                 {khz:.2} kHz");
            match self.halted_at {
                Some(pulse) => println!("halted_at                {pulse}"),
                None => println!("halted_at                -"),
            }
            println!("----------------------------------------------------------");
        }
        if want("pipeline") {
            println!("PIPELINE");
            println!(
                "  stalls.string          {} ({:.2}%)",
                self.stall_pulses,
                (self.stall_pulses as f64 / pulses as f64) * 100.0
            );
            println!("  regfile.writes         {}", self.register_writes);
            println!("  mem.reads              {}", self.memory_reads);
            println!("  mem.writes             {}", self.memory_writes);
            println!("  flow.redirects         {}", self.redirects);
            println!("  flow.squashed          {}", self.squashed);
            println!("----------------------------------------------------------");
        }
        if want("syscall") {
            println!("SYSCALLS");
            println!("  syscall.count          {}", self.syscalls);
            println!("  syscall.string_words   {}", self.string_words);
            println!("==========================================================");
        }
    }
}
