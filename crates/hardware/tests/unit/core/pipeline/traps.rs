//! Terminal Trap Tests.
//!
//! Exit, signed overflow and unmet input requests stop the clock for good;
//! unsupported encodings surface as errors instead.

use mipsim_core::SimError;
use mipsim_core::config::{Config, InitPolicy};
use mipsim_core::core::cpu::trap::TrapCause;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::inst;
use crate::common::harness::{TestContext, reg, with_exit};

fn max_positive_then(tail: u32) -> Vec<u32> {
    vec![
        inst().lui(reg::T0, 0x7fff).build(),
        inst().ori(reg::T0, reg::T0, 0xffff).build(),
        tail,
    ]
}

#[test]
fn exit_freezes_the_machine() {
    let program = with_exit(&[inst().addi(reg::T0, reg::ZERO, 3).build()]);
    let mut ctx = TestContext::new().load_program(&program);
    assert_eq!(ctx.run_to_halt(), TrapCause::Exit);
    assert!(ctx.cpu.is_halted());

    let pc = ctx.cpu.pc();
    let registers = ctx.cpu.registers();
    let pulses = ctx.cpu.stats().pulses;
    let memory: Vec<u32> = (0..0x200).step_by(4).map(|a| ctx.mem(a)).collect();
    ctx.pulse(5);

    assert_eq!(ctx.cpu.pc(), pc);
    assert_eq!(ctx.cpu.registers(), registers);
    let after: Vec<u32> = (0..0x200).step_by(4).map(|a| ctx.mem(a)).collect();
    assert_eq!(after, memory);
    assert_eq!(ctx.cpu.stats().pulses, pulses);
    assert_eq!(ctx.cpu.run(10).unwrap(), 0);
    assert_eq!(ctx.reg(reg::T0), 3);
}

#[test]
fn younger_instructions_never_retire_after_exit() {
    let mut program = with_exit(&[]);
    program.push(inst().addi(reg::T1, reg::ZERO, 1).build());
    program.push(inst().addi(reg::T2, reg::ZERO, 1).build());
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_halt();

    assert_eq!(ctx.reg(reg::T1), 0);
    assert_eq!(ctx.reg(reg::T2), 0);
}

#[test]
fn signed_overflow_traps_without_writing() {
    let program = max_positive_then(inst().addi(reg::T1, reg::T0, 1).build());
    let mut ctx = TestContext::new().load_program(&program);

    assert_eq!(ctx.run_to_halt(), TrapCause::Overflow);
    assert_eq!(ctx.reg(reg::T0), 0x7fff_ffff);
    assert_eq!(ctx.reg(reg::T1), 0);
}

#[test]
fn unsigned_add_wraps_silently() {
    let program = with_exit(&max_positive_then(
        inst().addiu(reg::T1, reg::T0, 1).build(),
    ));
    let mut ctx = TestContext::new().load_program(&program);

    assert_eq!(ctx.run_to_halt(), TrapCause::Exit);
    assert_eq!(ctx.reg(reg::T1), 0x8000_0000);
}

#[test]
fn read_without_input_traps() {
    let program = with_exit(&[
        inst().addi(reg::V0, reg::ZERO, 5).build(),
        inst().syscall().build(),
    ]);
    let mut ctx = TestContext::new().load_program(&program);
    assert_eq!(ctx.run_to_halt(), TrapCause::UnmetInput);

    let mut ctx = TestContext::new().load_program(&program).with_input("abc");
    assert_eq!(ctx.run_to_halt(), TrapCause::UnmetInput);
}

#[test]
fn squashed_unsupported_words_are_harmless() {
    let program = with_exit(&[
        inst().j(3).build(),
        0x4400_0000,
        0xfc00_0000,
    ]);
    let mut ctx = TestContext::new().load_program(&program);

    assert_eq!(ctx.run_to_halt(), TrapCause::Exit);
    assert_eq!(ctx.cpu.stats().redirects, 1);
}

#[test]
fn garbage_past_exit_never_faults() {
    let mut config = Config::default();
    config.memory.init = InitPolicy::Random;
    config.general.seed = 0x5eed;
    let program = with_exit(&[inst().addi(reg::T0, reg::ZERO, 3).build()]);
    let mut ctx = TestContext::with_config(&config).load_program(&program);

    assert_eq!(ctx.run_to_halt(), TrapCause::Exit);
    assert_eq!(ctx.reg(reg::T0), 3);
}

#[test]
fn unsupported_encoding_is_an_error() {
    let program = [inst().nop().build(), 0x4400_0000];
    let mut ctx = TestContext::new().load_program(&program);

    let err = ctx.cpu.run(20).unwrap_err();
    assert!(
        matches!(err, SimError::Unimplemented { word: 0x4400_0000, .. }),
        "unexpected error: {err}"
    );
    assert!(!ctx.cpu.is_halted());
}
