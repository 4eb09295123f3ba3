//! Forwarding Unit Tests.
//!
//! The unit-level cases drive [`forward_operand`] and [`load_use_hazard`]
//! directly; the rest run dependent instruction chains with no padding.

use mipsim_core::core::pipeline::hazards::{ForwardSource, forward_operand, load_use_hazard};
use mipsim_core::core::pipeline::latches::{IdExEntry, IfIdEntry};
use mipsim_core::core::units::control;
use mipsim_core::isa::instruction::InstructionFields;
use mipsim_core::{Bit, Bits};
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::inst;
use crate::common::harness::{TestContext, reg, with_exit};

fn word(value: u32) -> Bits {
    Bits::from_u32(value, 32)
}

fn addr(index: u32) -> Bits {
    Bits::from_u32(index, 5)
}

#[test]
fn forward_operand_prefers_younger_producer() {
    let (dest, old, young, file) = (addr(8), word(1), word(2), word(99));
    let ex_mem = ForwardSource { reg_write: Bit::One, dest: &dest, data: &young };
    let mem_wb = ForwardSource { reg_write: Bit::One, dest: &dest, data: &old };

    let (value, lines) = forward_operand(&addr(8), &file, &ex_mem, &mem_wb).unwrap();
    assert_eq!(value.to_u32().unwrap(), 2);
    assert_eq!(lines.ex_mem, Bit::One);
    assert_eq!(lines.mem_wb, Bit::One);

    let silent = ForwardSource { reg_write: Bit::Zero, dest: &dest, data: &young };
    let (value, lines) = forward_operand(&addr(8), &file, &silent, &mem_wb).unwrap();
    assert_eq!(value.to_u32().unwrap(), 1);
    assert_eq!(lines.ex_mem, Bit::Zero);

    let (value, lines) = forward_operand(&addr(9), &file, &ex_mem, &mem_wb).unwrap();
    assert_eq!(value.to_u32().unwrap(), 99);
    assert_eq!(lines.any(), Bit::Zero);
}

#[test]
fn load_use_hazard_flags_dependent_reader() {
    let load = word(inst().lw(reg::T1, reg::T0, 0).build());
    let fields = InstructionFields::split(&load).unwrap();
    let id_ex = IdExEntry {
        rt: fields.rt.clone(),
        ctrl: control::decode(&fields).unwrap(),
        ..IdExEntry::default()
    };

    let reader = IfIdEntry {
        instruction: word(inst().add(reg::T2, reg::T1, reg::ZERO).build()),
        ..IfIdEntry::default()
    };
    assert_eq!(load_use_hazard(&id_ex, &reader).unwrap(), Bit::One);

    let unrelated = IfIdEntry {
        instruction: word(inst().add(reg::T2, reg::T3, reg::T4).build()),
        ..IfIdEntry::default()
    };
    assert_eq!(load_use_hazard(&id_ex, &unrelated).unwrap(), Bit::Zero);

    let not_a_load = IdExEntry {
        rt: fields.rt,
        ..IdExEntry::default()
    };
    assert_eq!(load_use_hazard(&not_a_load, &reader).unwrap(), Bit::Zero);
}

#[test]
fn back_to_back_dependencies() {
    let program = with_exit(&[
        inst().addi(reg::T0, reg::ZERO, 7).build(),
        inst().add(reg::T1, reg::T0, reg::T0).build(),
        inst().add(reg::T2, reg::T0, reg::T1).build(),
        inst().add(reg::T3, reg::T0, reg::T2).build(),
    ]);
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_halt();

    assert_eq!(ctx.reg(reg::T1), 14);
    assert_eq!(ctx.reg(reg::T2), 21);
    assert_eq!(ctx.reg(reg::T3), 28);
}

#[test]
fn younger_write_wins() {
    let program = with_exit(&[
        inst().addi(reg::T0, reg::ZERO, 1).build(),
        inst().addi(reg::T0, reg::ZERO, 2).build(),
        inst().add(reg::T1, reg::T0, reg::ZERO).build(),
    ]);
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_halt();

    assert_eq!(ctx.reg(reg::T1), 2);
}

#[test]
fn store_data_is_forwarded() {
    let program = with_exit(&[
        inst().addi(reg::T0, reg::ZERO, 0x40).build(),
        inst().addi(reg::T1, reg::ZERO, 9).build(),
        inst().sw(reg::T1, reg::T0, 4).build(),
    ]);
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_halt();

    assert_eq!(ctx.mem(0x44), 9);
}

#[test]
fn load_use_without_padding_sees_the_address() {
    let program = with_exit(&[
        inst().addi(reg::T0, reg::ZERO, 0x100).build(),
        inst().lw(reg::T1, reg::T0, 0).build(),
        inst().add(reg::T2, reg::T1, reg::ZERO).build(),
        inst().add(reg::T3, reg::T1, reg::ZERO).build(),
    ]);
    let mut ctx = TestContext::new()
        .load_program(&program)
        .with_word(0x100, 55);
    ctx.run_to_halt();

    assert_eq!(ctx.reg(reg::T1), 55);
    assert_eq!(ctx.reg(reg::T2), 0x100, "the load forwards its address");
    assert_eq!(ctx.reg(reg::T3), 55);
}
