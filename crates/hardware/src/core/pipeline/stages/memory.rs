//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. It operates in
//! one of two modes, selected by the live pipeline trap:
//! 1. **Instruction Mode:** resolves control flow and publishes the redirect
//!    (flushing ID/EX and EX/MEM when taken), performs the load or store at
//!    the ALU address and latches the result into MEM/WB.
//! 2. **Transfer Mode:** moves one word of the string transfer in progress at
//!    `base + 4 * length`. Output mode reads memory; input mode writes the
//!    next four queued input bytes. The instruction waiting in EX/MEM is held.
//!
//! Both modes drive the data port, the static pointer, the console cursor and
//! the transfer counter on every call so their edge detectors stay in step.

use crate::common::constants::{SHAMT_BITS, WORD_BITS, WORD_BYTES};
use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::cpu::trap::SyscallClass;
use crate::core::pipeline::latches::MemWbEntry;
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::wires::RedirectWire;
use crate::logic::arith::add;
use crate::logic::gates::{any, gate_with};
use crate::logic::mux::priority_mux;
use crate::logic::shift::{ShiftDirection, barrel_shift};
use crate::logic::{Bit, Bits};

/// Executes the memory access stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `clk` - Raw clock level; gated here by the terminal trap
///
/// # Errors
///
/// [`SimError::AddressOutOfRange`](crate::SimError::AddressOutOfRange) for a
/// data access outside memory.
pub fn memory_stage(cpu: &mut Cpu, clk: Bit) -> SimResult<()> {
    let clk = cpu.stage_clock(clk);
    if cpu.trap.pipeline_trap().is_one() {
        transfer_word(cpu, clk)
    } else {
        access(cpu, clk)
    }
}

fn access(cpu: &mut Cpu, clk: Bit) -> SimResult<()> {
    let m = cpu.ex_mem.read().clone();
    let ctrl = &m.ctrl;

    let taken = (ctrl.branch_eq & m.zero) | (ctrl.branch_ne & !m.zero);
    let redirect = any(&[taken, ctrl.jump, ctrl.jump_reg]);
    let target = priority_mux(
        &[taken, ctrl.jump, ctrl.jump_reg],
        &[&m.pc_plus4, &m.branch_target, &m.jump_address, &m.alu_result],
    )?;
    cpu.redirect = RedirectWire {
        taken: redirect,
        target,
    };
    if redirect.is_one() {
        cpu.id_ex.flush();
        cpu.ex_mem.flush();
    }

    let mem_data = cpu.memory.data_port(
        clk,
        &m.alu_result,
        &m.store_data,
        ctrl.mem_write,
        ctrl.mem_read,
    )?;
    cpu.static_segment
        .observe(clk, &m.alu_result, ctrl.mem_write)?;
    cpu.console.advance(clk, Bit::Zero)?;
    cpu.trap.drive_length(clk, Bit::Zero)?;

    let next = MemWbEntry {
        pc_plus4: m.pc_plus4.clone(),
        instruction: m.instruction.clone(),
        alu_result: m.alu_result.clone(),
        mem_data,
        incoming: Bits::zeros(WORD_BITS),
        dest: m.dest.clone(),
        overflow: m.overflow,
        syscall_op: m.syscall_op.clone(),
        string_transfer: Bit::Zero,
        ctrl: m.ctrl.clone(),
    };
    if cpu.mem_wb.write(clk, next) {
        cpu.stats.memory_reads += u64::from(ctrl.mem_read.as_u32());
        cpu.stats.memory_writes += u64::from(ctrl.mem_write.as_u32());
        if redirect.is_one() {
            cpu.stats.redirects += 1;
            cpu.stats.squashed += 2;
            tracing::debug!(
                target = format_args!("{:#010x}", cpu.redirect.target.to_u32()?),
                "redirect"
            );
        }
    }
    Ok(())
}

fn transfer_word(cpu: &mut Cpu, clk: Bit) -> SimResult<()> {
    cpu.redirect = RedirectWire::default();

    let mode = cpu.trap.mode().clone();
    let input = SyscallClass::decode(&mode)?.read_string();
    let offset = barrel_shift(
        cpu.trap.length(),
        &Bits::from_u32(WORD_BYTES.trailing_zeros(), SHAMT_BITS),
        ShiftDirection::Left,
    )?;
    let addr = add(cpu.trap.base(), &offset)?;

    let incoming = cpu.console.next_word()?;
    let stored = cpu.memory.data_port(clk, &addr, &incoming, input, !input)?;
    cpu.static_segment.observe(clk, &addr, input)?;
    cpu.console.advance(clk, input)?;
    cpu.trap.drive_length(clk, Bit::One)?;

    let next = MemWbEntry {
        pc_plus4: Bits::zeros(WORD_BITS),
        instruction: Bits::zeros(WORD_BITS),
        alu_result: addr,
        mem_data: stored,
        incoming: gate_with(&incoming, input),
        dest: MemWbEntry::default().dest,
        overflow: Bit::Zero,
        syscall_op: mode,
        string_transfer: Bit::One,
        ctrl: ControlSignals::default(),
    };
    if cpu.mem_wb.write(clk, next) {
        if input.is_one() {
            cpu.stats.memory_writes += 1;
        } else {
            cpu.stats.memory_reads += 1;
        }
    }
    Ok(())
}
