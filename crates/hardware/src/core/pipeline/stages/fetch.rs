//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! The fetch address is the PC, or the redirect target when the memory stage
//! resolved a taken branch or jump in this call. The instruction word and the
//! address of its successor are latched into IF/ID, and the PC advances.

use crate::common::constants::{WORD_BITS, WORD_BYTES};
use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;
use crate::logic::arith::add;
use crate::logic::mux::mux2;
use crate::logic::{Bit, Bits};

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `clk` - Raw clock level; gated here by both traps
///
/// # Errors
///
/// [`SimError::AddressOutOfRange`](crate::SimError::AddressOutOfRange) when
/// the fetch address leaves memory.
pub fn fetch_stage(cpu: &mut Cpu, clk: Bit) -> SimResult<()> {
    let clk = cpu.issue_clock(clk);

    let addr = mux2(cpu.redirect.taken, cpu.pc.q(), &cpu.redirect.target)?;
    let instruction =
        cpu.memory
            .instruction_port(clk, &addr, &Bits::zeros(WORD_BITS), Bit::Zero)?;
    let pc_plus4 = add(&addr, &Bits::from_u32(WORD_BYTES as u32, WORD_BITS))?;

    if cpu.if_id.write(
        clk,
        IfIdEntry {
            pc_plus4: pc_plus4.clone(),
            instruction,
        },
    ) && cpu.trace
    {
        tracing::trace!(stage = "IF", pc = format_args!("{:#010x}", addr.to_u32()?));
    }
    cpu.pc.write(clk, &pc_plus4)?;
    Ok(())
}
