//! Whole-Program Tests.
//!
//! Straight-line programs with exact pulse counts, the arithmetic subset,
//! initial machine state and the static pointer.

use mipsim_core::config::{Config, InitPolicy};
use mipsim_core::core::cpu::trap::TrapCause;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::inst;
use crate::common::harness::{TestContext, reg, with_exit};

#[test]
fn store_then_load_in_ten_pulses() {
    let program = [
        inst().addi(2, reg::ZERO, 5).build(),
        inst().addi(3, reg::ZERO, 7).build(),
        inst().add(4, 2, 3).build(),
        inst().sw(4, reg::ZERO, 0x100).build(),
        inst().lw(5, reg::ZERO, 0x100).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.pulse(10);

    assert_eq!(ctx.reg(5), 12);
    assert_eq!(ctx.mem(0x100), 12);
    assert!(!ctx.cpu.is_halted());
    assert_eq!(ctx.cpu.stats().pulses, 10);
    assert_eq!(ctx.cpu.stats().memory_writes, 1);
}

#[test]
fn store_then_load_at_address_zero() {
    let program = [
        inst().addi(2, reg::ZERO, 5).build(),
        inst().addi(3, reg::ZERO, 7).build(),
        inst().add(4, 2, 3).build(),
        inst().sw(4, reg::ZERO, 0).build(),
        inst().lw(5, reg::ZERO, 0).build(),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.pulse(10);

    assert_eq!(ctx.reg(5), 12);
    assert_eq!(ctx.mem(0), 12);
    assert_eq!(ctx.cpu.stats().pulses, 10);
}

#[test]
fn results_retire_five_pulses_after_fetch() {
    let program = [inst().addi(reg::T0, reg::ZERO, 1).build()];
    let mut ctx = TestContext::new().load_program(&program);

    ctx.pulse(4);
    assert_eq!(ctx.reg(reg::T0), 0);
    ctx.pulse(1);
    assert_eq!(ctx.reg(reg::T0), 1);
}

#[test]
fn arithmetic_and_shift_subset() {
    let program = with_exit(&[
        inst().addi(reg::T0, reg::ZERO, -3).build(),
        inst().addi(reg::T1, reg::ZERO, 4).build(),
        inst().slt(reg::T2, reg::T0, reg::T1).build(),
        inst().sub(reg::T3, reg::T1, reg::T0).build(),
        inst().nor(reg::T4, reg::ZERO, reg::ZERO).build(),
        inst().sll(reg::S0, reg::T1, 3).build(),
        inst().srl(reg::S1, reg::T4, 28).build(),
        inst().slti(reg::AT, reg::T1, 4).build(),
        inst().and(reg::SP, reg::T4, reg::T1).build(),
        inst().lui(reg::V0, 0x1234).build(),
        inst().or(reg::A0, reg::V0, reg::T1).build(),
    ]);
    let mut ctx = TestContext::new().load_program(&program);
    assert_eq!(ctx.run_to_halt(), TrapCause::Exit);

    assert_eq!(ctx.reg(reg::T2), 1);
    assert_eq!(ctx.reg(reg::T3), 7);
    assert_eq!(ctx.reg(reg::T4), 0xffff_ffff);
    assert_eq!(ctx.reg(reg::S0), 32);
    assert_eq!(ctx.reg(reg::S1), 0xf);
    assert_eq!(ctx.reg(reg::AT), 0);
    assert_eq!(ctx.reg(reg::SP), 4);
    assert_eq!(ctx.reg(reg::A0), 0x1234_0004);
}

#[test]
fn static_pointer_follows_highest_store() {
    let program = with_exit(&[
        inst().ori(reg::AT, reg::ZERO, 0x8000).build(),
        inst().sw(reg::T0, reg::AT, 8).build(),
        inst().sw(reg::T0, reg::AT, 0).build(),
        inst().sw(reg::T0, reg::AT, 16).build(),
    ]);
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_halt();

    assert_eq!(ctx.cpu.static_pointer(), 16);
}

#[test]
fn static_pointer_ignores_lower_store_after_highest() {
    let program = with_exit(&[
        inst().ori(reg::AT, reg::ZERO, 0x8000).build(),
        inst().sw(reg::T0, reg::AT, 8).build(),
        inst().sw(reg::T0, reg::AT, 16).build(),
        inst().sw(reg::T0, reg::AT, 4).build(),
    ]);
    let mut ctx = TestContext::new().load_program(&program);
    assert_eq!(ctx.run_to_halt(), TrapCause::Exit);

    assert_eq!(ctx.cpu.static_pointer(), 16);
}

#[test]
fn random_registers_keep_zero_register_clear() {
    let mut config = Config::default();
    config.general.register_init = InitPolicy::Random;
    config.general.seed = 7;
    let ctx = TestContext::with_config(&config);

    let registers = ctx.cpu.registers();
    assert_eq!(registers[0], 0);
    assert!(registers[1..].iter().any(|&r| r != 0));
}

#[test]
fn initial_stack_pointer_and_stack_bytes() {
    let mut config = Config::default();
    config.general.initial_sp = Some(0x400);
    let ctx = TestContext::with_config(&config).with_word(0x400, 0x0403_0201);

    assert_eq!(ctx.reg(reg::SP), 0x400);
    assert_eq!(ctx.cpu.stack_bytes().unwrap(), [1, 2, 3, 4]);
}

#[test]
fn explicit_registers_seed_the_file() {
    let mut values = [0u32; 32];
    values[reg::T0 as usize] = 40;
    values[reg::T1 as usize] = 2;
    let program = with_exit(&[inst().add(reg::T2, reg::T0, reg::T1).build()]);
    let mut ctx = TestContext::new();
    ctx.cpu = mipsim_core::Cpu::with_registers(&Config::default(), values).unwrap();
    let mut ctx = ctx.load_program(&program);
    ctx.run_to_halt();

    assert_eq!(ctx.reg(reg::T2), 42);
}
