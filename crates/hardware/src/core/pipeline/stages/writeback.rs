//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! performs the following:
//! 1. **Result Select:** ALU result, loaded word or return address.
//! 2. **Commit:** publishes `{write_enable, dest, data}` for decode and the
//!    forwarding unit. A read syscall redirects the commit to `$v0`.
//! 3. **Traps:** an unsupported encoding that retires is reported as an
//!    error. Overflow of a register-writing instruction, exit or unmet input
//!    raise the terminal trap.
//! 4. **Syscalls:** integer print, integer read, and the start of a string
//!    transfer.
//! 5. **Transfer Words:** emits outgoing bytes and ends the transfer once both
//!    lanes of a word contain a NUL.
//!
//! The commit is recomputed on every call; console and trap side effects
//! happen only on a rising edge of the gated clock.

use crate::common::constants::{REG_ADDR_BITS, WORD_BITS};
use crate::common::error::SimResult;
use crate::core::Cpu;
use crate::core::cpu::trap::{SyscallClass, TrapCause, has_nul};
use crate::core::pipeline::wires::WritebackWire;
use crate::core::units::control;
use crate::isa::abi;
use crate::logic::mux::{mux, mux2};
use crate::logic::{Bit, Bits};
use crate::sequential::Clocked;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `clk` - Raw clock level; gated here by the terminal trap
///
/// # Errors
///
/// * [`SimError::Unimplemented`](crate::SimError::Unimplemented) when an
///   instruction outside the supported subset retires.
/// * [`SimError::Logic`](crate::SimError::Logic) for internal width faults.
pub fn writeback_stage(cpu: &mut Cpu, clk: Bit) -> SimResult<()> {
    let clk = cpu.stage_clock(clk);
    let rising = cpu.trap.rising_edge(clk);
    let w = cpu.mem_wb.read().clone();
    let ctrl = &w.ctrl;

    let value = mux(
        &ctrl.mem_to_reg,
        &[&w.alu_result, &w.mem_data, &w.pc_plus4],
    )?;

    let class = SyscallClass::decode(&w.syscall_op)?.gated(ctrl.syscall);
    let parsed = cpu.console.parse_int()?;
    let unmet = class.needs_input()
        & (!cpu.console.has_input() | (class.read_int() & Bit::from_bool(parsed.is_none())));
    let overflow = w.overflow & ctrl.reg_write;
    let input_write = class.needs_input() & !unmet;
    let string_start = class.string() & !unmet;

    let static_addr = cpu.static_segment.next_free()?;
    let read_value = mux2(
        class.read_string(),
        &Bits::from_u32(parsed.unwrap_or_default() as u32, WORD_BITS),
        &static_addr,
    )?;

    let commit = WritebackWire {
        reg_write: (ctrl.reg_write & !overflow) | input_write,
        dest: mux2(
            input_write,
            &w.dest,
            &Bits::from_u32(abi::REG_V0 as u32, REG_ADDR_BITS),
        )?,
        data: mux2(input_write, &value, &read_value)?,
    };

    let base = mux2(class.read_string(), &w.alu_result, &static_addr)?;
    cpu.trap
        .drive_transfer_registers(clk, string_start, &base, &w.syscall_op)?;

    if rising && ctrl.unsupported.is_one() {
        return Err(control::unimplemented(w.instruction.to_u32()?));
    }

    if rising {
        let cause = if overflow.is_one() {
            Some(TrapCause::Overflow)
        } else if class.is_exit().is_one() {
            Some(TrapCause::Exit)
        } else if unmet.is_one() {
            Some(TrapCause::UnmetInput)
        } else {
            None
        };
        if let Some(cause) = cause {
            cpu.trap.raise(cause)?;
            tracing::info!(%cause, "raising terminal trap");
        } else if commit.reg_write.is_one() {
            cpu.stats.register_writes += 1;
        }

        if ctrl.syscall.is_one() {
            cpu.stats.syscalls += 1;
        }
        if class.print_int().is_one() {
            let n = w.alu_result.to_i32()?;
            cpu.console.emit(&n.to_string());
        }
        if (class.read_int() & !unmet).is_one() {
            cpu.console.consume()?;
        }
        if string_start.is_one() {
            cpu.trap.begin_transfer()?;
            tracing::debug!(
                base = format_args!("{:#010x}", cpu.trap.base().to_u32()?),
                mode = cpu.trap.mode().to_u32()?,
                "string transfer started"
            );
        }

        if w.string_transfer.is_one() {
            cpu.stats.string_words += 1;
            let outgoing_end = cpu.console.emit_word(&w.mem_data)?;
            if outgoing_end && has_nul(&w.incoming)?.is_one() {
                cpu.trap.end_transfer()?;
                tracing::debug!(words = cpu.string_length(), "string transfer finished");
                if SyscallClass::decode(&w.syscall_op)?.read_string().is_one() {
                    cpu.console.consume()?;
                }
            }
        }
    }

    cpu.writeback = commit;
    Ok(())
}
