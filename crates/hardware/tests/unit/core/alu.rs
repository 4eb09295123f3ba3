//! ALU Tests.
//!
//! The ALU is driven through its 4-bit operation code, either fixed or
//! derived by ALU control from the class, funct and opcode fields.

use mipsim_core::core::pipeline::signals::{
    ALU_OP_BITS, ALU_OP_BRANCH, ALU_OP_IMM, ALU_OP_MEM, ALU_OP_RTYPE,
};
use mipsim_core::core::units::alu::Alu;
use mipsim_core::core::units::alu::control::{
    ALU_ADD, ALU_AND, ALU_NOR, ALU_OR, ALU_SLT, ALU_SUB, AluControl, alu_control,
};
use mipsim_core::core::units::alu::slice::{SliceControl, alu_slice, sign_slice};
use mipsim_core::isa::{funct, opcodes};
use mipsim_core::{Bit, Bits};
use rstest::rstest;

fn w(v: u32) -> Bits {
    Bits::from_u32(v, 32)
}

fn run(code: u32, a: u32, b: u32) -> (u32, Bit, Bit) {
    let out = Alu::evaluate(&Bits::from_u32(code, 4), &w(a), &w(b)).unwrap();
    (out.result.to_u32().unwrap(), out.zero, out.overflow)
}

#[rstest]
#[case::and(ALU_AND, 0xF0F0_F0F0, 0xFF00_FF00, 0xF000_F000)]
#[case::or(ALU_OR, 0xF0F0_0000, 0x0000_0F0F, 0xF0F0_0F0F)]
#[case::add(ALU_ADD, 40, 2, 42)]
#[case::sub(ALU_SUB, 40, 2, 38)]
#[case::sub_negative(ALU_SUB, 2, 40, (-38i32) as u32)]
#[case::nor(ALU_NOR, 0xFFFF_0000, 0x0000_00FF, 0x0000_FF00)]
#[case::slt_true(ALU_SLT, (-5i32) as u32, 3, 1)]
#[case::slt_false(ALU_SLT, 3, (-5i32) as u32, 0)]
#[case::slt_equal(ALU_SLT, 9, 9, 0)]
fn operations(#[case] code: u32, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(run(code, a, b).0, expected);
}

#[test]
fn zero_flag_follows_result() {
    assert_eq!(run(ALU_SUB, 7, 7).1, Bit::One);
    assert_eq!(run(ALU_ADD, 0xFFFF_FFFF, 1).1, Bit::One);
    assert_eq!(run(ALU_ADD, 1, 1).1, Bit::Zero);
}

#[test]
fn overflow_detection_and_masking() {
    assert_eq!(run(ALU_ADD, 0x7FFF_FFFF, 1).2, Bit::One);
    assert_eq!(run(ALU_ADD, 0x7FFF_FFFF, 0xFFFF_FFFF).2, Bit::Zero);
    assert_eq!(run(ALU_SUB, 0x8000_0000, 1).2, Bit::One);

    let unsigned = AluControl::fixed(ALU_ADD, Bit::One);
    let out = Alu::execute(&unsigned, &w(0x7FFF_FFFF), &w(1)).unwrap();
    assert_eq!(out.overflow, Bit::Zero);
    assert_eq!(out.result, w(0x8000_0000));
}

#[test]
fn slices_expose_set_and_overflow() {
    let add = SliceControl {
        a_invert: Bit::Zero,
        b_negate: Bit::Zero,
        op1: Bit::One,
        op0: Bit::Zero,
    };
    let out = alu_slice(Bit::One, Bit::One, Bit::Zero, Bit::Zero, add);
    assert_eq!((out.result, out.carry_out), (Bit::Zero, Bit::One));

    let sign = sign_slice(Bit::Zero, Bit::Zero, Bit::One, Bit::Zero, add);
    assert_eq!(sign.set, Bit::One);
    assert_eq!(sign.overflow, Bit::One);
}

fn class(code: u32) -> Bits {
    Bits::from_u32(code, ALU_OP_BITS)
}

fn ctl(alu_op: u32, funct: u32, opcode: u32) -> AluControl {
    alu_control(
        &class(alu_op),
        &Bits::from_u32(funct, 6),
        &Bits::from_u32(opcode, 6),
    )
    .unwrap()
}

#[rstest]
#[case::add(funct::ADD, ALU_ADD, Bit::Zero)]
#[case::addu(funct::ADDU, ALU_ADD, Bit::One)]
#[case::sub(funct::SUB, ALU_SUB, Bit::Zero)]
#[case::subu(funct::SUBU, ALU_SUB, Bit::One)]
#[case::and(funct::AND, ALU_AND, Bit::One)]
#[case::or(funct::OR, ALU_OR, Bit::One)]
#[case::nor(funct::NOR, ALU_NOR, Bit::One)]
#[case::slt(funct::SLT, ALU_SLT, Bit::One)]
fn rtype_control(#[case] f: u32, #[case] code: u32, #[case] unsigned: Bit) {
    assert_eq!(
        ctl(ALU_OP_RTYPE, f, opcodes::OP_RTYPE),
        AluControl::fixed(code, unsigned)
    );
}

#[rstest]
#[case::addi(opcodes::OP_ADDI, ALU_ADD, Bit::Zero)]
#[case::addiu(opcodes::OP_ADDIU, ALU_ADD, Bit::One)]
#[case::slti(opcodes::OP_SLTI, ALU_SLT, Bit::One)]
#[case::ori(opcodes::OP_ORI, ALU_OR, Bit::One)]
fn immediate_control(#[case] op: u32, #[case] code: u32, #[case] unsigned: Bit) {
    assert_eq!(ctl(ALU_OP_IMM, 0, op), AluControl::fixed(code, unsigned));
}

#[test]
fn fixed_classes_ignore_funct() {
    assert_eq!(
        ctl(ALU_OP_MEM, funct::SUB, opcodes::OP_LW),
        AluControl::fixed(ALU_ADD, Bit::One)
    );
    assert_eq!(
        ctl(ALU_OP_BRANCH, funct::OR, opcodes::OP_BEQ),
        AluControl::fixed(ALU_SUB, Bit::One)
    );
}
