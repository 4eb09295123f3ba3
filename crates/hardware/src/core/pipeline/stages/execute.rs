//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It
//! handles:
//! 1. **Operand Forwarding:** both operands pass through the forwarding unit.
//! 2. **ALU and Shifter:** mutually exclusive, selected by `use_shift`. LUI is
//!    a left shift of the immediate by 16.
//! 3. **Target Calculation:** branch target `pc + 4 + (imm << 2)`.
//! 4. **Destination Select:** rt, rd or `$ra`.
//! 5. **Syscall Code:** refreshed from a forwarded `$v0`.

use crate::common::constants::{LUI_SHIFT, REG_ADDR_BITS, SHAMT_BITS, SYSCALL_OP_BITS};
use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::pipeline::hazards::{ForwardSource, forward_operand};
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::units::alu::Alu;
use crate::core::units::alu::control::alu_control;
use crate::isa::abi;
use crate::logic::arith::add;
use crate::logic::mux::{mux, mux2};
use crate::logic::shift::{ShiftDirection, barrel_shift};
use crate::logic::{Bit, Bits};

/// Executes the instruction execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `clk` - Raw clock level; the EX/MEM latch is gated by both traps
///
/// # Errors
///
/// [`SimError::Logic`](crate::SimError::Logic) for internal width faults.
pub fn execute_stage(cpu: &mut Cpu, clk: Bit) -> SimResult<()> {
    let clk = cpu.issue_clock(clk);
    let e = cpu.id_ex.read().clone();
    let ctrl = &e.ctrl;

    let ahead = cpu.ex_mem.read();
    let ahead_value = mux2(ahead.ctrl.mem_to_reg.msb(), &ahead.alu_result, &ahead.pc_plus4)?;
    let ex_mem = ForwardSource {
        reg_write: ahead.ctrl.reg_write,
        dest: &ahead.dest,
        data: &ahead_value,
    };
    let mem_wb = ForwardSource {
        reg_write: cpu.writeback.reg_write,
        dest: &cpu.writeback.dest,
        data: &cpu.writeback.data,
    };
    let (a, _) = forward_operand(&e.rs, &e.read_data1, &ex_mem, &mem_wb)?;
    let (b_reg, forwarded_b) = forward_operand(&e.rt, &e.read_data2, &ex_mem, &mem_wb)?;

    let b = mux2(ctrl.alu_src, &b_reg, &e.immediate)?;
    let alu = Alu::execute(&alu_control(&ctrl.alu_op, &e.funct, &e.opcode)?, &a, &b)?;

    let amount = mux2(
        ctrl.use_shamt,
        &Bits::from_u32(LUI_SHIFT, SHAMT_BITS),
        &e.shamt,
    )?;
    let shifted = mux2(
        ctrl.shift_right,
        &barrel_shift(&b, &amount, ShiftDirection::Left)?,
        &barrel_shift(&b, &amount, ShiftDirection::Right)?,
    )?;
    let result = mux2(ctrl.use_shift, &alu.result, &shifted)?;

    let branch_target = add(
        &barrel_shift(&e.immediate, &Bits::from_u32(2, SHAMT_BITS), ShiftDirection::Left)?,
        &e.pc_plus4,
    )?;
    let dest = mux(
        &ctrl.reg_dst,
        &[
            &e.rt,
            &e.rd,
            &Bits::from_u32(abi::REG_RA as u32, REG_ADDR_BITS),
        ],
    )?;
    let syscall_op = mux2(
        forwarded_b.any() & ctrl.syscall,
        &e.syscall_op,
        &b_reg.truncate(SYSCALL_OP_BITS)?,
    )?;

    let next = ExMemEntry {
        pc_plus4: e.pc_plus4.clone(),
        instruction: e.instruction.clone(),
        branch_target,
        jump_address: e.jump_address.clone(),
        zero: alu.zero,
        overflow: alu.overflow & !ctrl.use_shift,
        alu_result: result,
        store_data: b_reg,
        dest,
        syscall_op,
        ctrl: e.ctrl.clone(),
    };
    if cpu.ex_mem.write(clk, next) && cpu.trace {
        let latched = cpu.ex_mem.read();
        tracing::trace!(
            stage = "EX",
            result = format_args!("{:#010x}", latched.alu_result.to_u32()?),
            dest = latched.dest.to_u32()?
        );
    }
    Ok(())
}
