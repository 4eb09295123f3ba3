//! Data Hazard Forwarding.
//!
//! This module implements the forwarding unit of the Execute stage. It provides:
//! 1. **Operand Forwarding:** Resolves read-after-write hazards by bypassing the register file.
//! 2. **Load-Use Detection:** Flags the one hazard forwarding cannot cover.
//!
//! Each operand's register address is compared with two producers: the
//! instruction in EX/MEM and the commit triple published by writeback in the
//! same call. A producer qualifies when its register-write enable is high.
//! EX/MEM is the younger producer and wins when both match.
//!
//! A load in EX/MEM forwards its computed address, not the loaded word, and
//! nothing stalls for it. Programs must keep one instruction between a load
//! and its first use.

use crate::common::error::LogicResult;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::isa::instruction::InstructionFields;
use crate::logic::compare::equal;
use crate::logic::mux::priority_mux;
use crate::logic::{Bit, Bits};

/// A stage that may supply a forwarded value.
#[derive(Clone, Copy, Debug)]
pub struct ForwardSource<'a> {
    /// Producer writes a register.
    pub reg_write: Bit,
    /// Producer's destination register.
    pub dest: &'a Bits,
    /// Producer's value.
    pub data: &'a Bits,
}

/// Which producers matched an operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForwardLines {
    /// Matched the instruction in EX/MEM.
    pub ex_mem: Bit,
    /// Matched the writeback commit.
    pub mem_wb: Bit,
}

impl ForwardLines {
    /// High when any producer supplied the operand.
    pub fn any(self) -> Bit {
        self.ex_mem | self.mem_wb
    }
}

/// Computes the forwarding lines for one operand.
///
/// # Errors
///
/// [`LogicError::WidthMismatch`](crate::LogicError::WidthMismatch) for
/// mismatched register addresses.
pub fn forward_lines(
    src: &Bits,
    ex_mem: &ForwardSource<'_>,
    mem_wb: &ForwardSource<'_>,
) -> LogicResult<ForwardLines> {
    Ok(ForwardLines {
        ex_mem: equal(src, ex_mem.dest)? & ex_mem.reg_write,
        mem_wb: equal(src, mem_wb.dest)? & mem_wb.reg_write,
    })
}

/// Resolves one operand through the forwarding multiplexer.
///
/// # Arguments
///
/// * `src` - Register address of the operand.
/// * `reg_value` - Value read from the register file in decode.
/// * `ex_mem` - Producer in EX/MEM.
/// * `mem_wb` - Producer committing in writeback.
///
/// # Returns
///
/// The operand value and the lines that selected it.
///
/// # Errors
///
/// As [`forward_lines`], plus width errors from the multiplexer.
pub fn forward_operand(
    src: &Bits,
    reg_value: &Bits,
    ex_mem: &ForwardSource<'_>,
    mem_wb: &ForwardSource<'_>,
) -> LogicResult<(Bits, ForwardLines)> {
    let lines = forward_lines(src, ex_mem, mem_wb)?;
    let value = priority_mux(
        &[lines.mem_wb, lines.ex_mem],
        &[reg_value, mem_wb.data, ex_mem.data],
    )?;
    Ok((value, lines))
}

/// Detects a load in ID/EX whose destination the instruction in IF/ID reads.
///
/// The pipeline does not stall for this; the result is used for diagnostics.
///
/// # Errors
///
/// Width errors from the comparators.
pub fn load_use_hazard(id_ex: &IdExEntry, if_id: &IfIdEntry) -> LogicResult<Bit> {
    if id_ex.ctrl.mem_read.is_zero() {
        return Ok(Bit::Zero);
    }
    let next = InstructionFields::split(&if_id.instruction)?;
    let dest = &id_ex.rt;
    Ok(id_ex.ctrl.reg_write & (equal(dest, &next.rs)? | equal(dest, &next.rt)?))
}
