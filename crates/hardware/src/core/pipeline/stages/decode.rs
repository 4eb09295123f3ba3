//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs:
//! 1. **Field Split:** opcode, register addresses, shamt, funct, immediate, target.
//! 2. **Control Decode:** the control lines for the instruction.
//! 3. **Register Access:** the writeback commit is written first, then both
//!    read ports are sampled, so a value committed in this call is visible.
//! 4. **Syscall Operands:** a syscall reads `$a0` and `$v0` instead of rs/rt.
//!
//! The register write is clocked by the memory-stage clock; the ID/EX latch by
//! the issue clock, so decode keeps committing during a string transfer.

use crate::common::constants::{
    IMM_BITS, JUMP_REGION_BITS, REG_ADDR_BITS, SYSCALL_OP_BITS, WORD_BITS,
};
use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::pipeline::hazards::load_use_hazard;
use crate::core::pipeline::latches::IdExEntry;
use crate::core::units::control;
use crate::isa::{abi, disasm};
use crate::isa::instruction::InstructionFields;
use crate::logic::gates::gate_with;
use crate::logic::mux::mux2;
use crate::logic::{Bit, Bits};

/// Executes the instruction decode stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `clk` - Raw clock level
///
/// # Errors
///
/// [`SimError::Logic`](crate::SimError::Logic) for internal width faults.
pub fn decode_stage(cpu: &mut Cpu, clk: Bit) -> SimResult<()> {
    let regfile_clk = cpu.stage_clock(clk);
    let latch_clk = cpu.issue_clock(clk);

    let entry = cpu.if_id.read().clone();
    let fields = InstructionFields::split(&entry.instruction)?;
    let ctrl = control::decode(&fields)?;

    let jump_address = entry
        .pc_plus4
        .slice(0..JUMP_REGION_BITS)?
        .concat(&fields.target)
        .concat(&Bits::zeros(2));

    let raddr1 = mux2(
        ctrl.syscall,
        &fields.rs,
        &Bits::from_u32(abi::REG_A0 as u32, REG_ADDR_BITS),
    )?;
    let raddr2 = mux2(
        ctrl.syscall,
        &fields.rt,
        &Bits::from_u32(abi::REG_V0 as u32, REG_ADDR_BITS),
    )?;

    let commit = cpu.writeback.clone();
    let (read_data1, read_data2) = cpu.regs.write(
        regfile_clk,
        commit.reg_write,
        &commit.dest,
        &commit.data,
        &raddr1,
        &raddr2,
    )?;

    fields.immediate.expect_width(IMM_BITS)?;
    let immediate = mux2(
        ctrl.sign_extend,
        &fields.immediate.zero_extend(WORD_BITS)?,
        &fields.immediate.sign_extend(WORD_BITS)?,
    )?;
    let immediate = gate_with(&immediate, !ctrl.syscall);
    let syscall_op = read_data2.truncate(SYSCALL_OP_BITS)?;

    let hazard = load_use_hazard(cpu.id_ex.read(), &entry)?;
    let pc = entry.pc_plus4.to_u32()?.wrapping_sub(4);
    let next = IdExEntry {
        pc_plus4: entry.pc_plus4,
        instruction: entry.instruction,
        jump_address,
        read_data1,
        read_data2,
        immediate,
        rs: raddr1,
        rt: raddr2,
        rd: fields.rd,
        shamt: fields.shamt,
        funct: fields.funct,
        opcode: fields.opcode,
        syscall_op,
        ctrl,
    };
    if cpu.id_ex.write(latch_clk, next) {
        if hazard.is_one() {
            tracing::warn!(
                pc = format_args!("{pc:#010x}"),
                "load result used by the next instruction; the address is forwarded instead"
            );
        }
        if cpu.trace {
            tracing::trace!(
                stage = "ID",
                pc = format_args!("{pc:#010x}"),
                inst = %disasm::disassemble(fields.word.to_u32()?)
            );
        }
    }
    Ok(())
}
