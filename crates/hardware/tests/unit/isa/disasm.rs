use mipsim_core::isa::disasm::disassemble;
use rstest::rstest;

use crate::common::builder::instruction::inst;
use crate::common::harness::reg;

#[rstest]
#[case(inst().nop().build(), "nop")]
#[case(inst().addi(reg::V0, reg::ZERO, 5).build(), "addi $v0, $zero, 5")]
#[case(inst().addiu(reg::SP, reg::SP, -8).build(), "addiu $sp, $sp, -8")]
#[case(inst().add(reg::T2, reg::T0, reg::T1).build(), "add $t2, $t0, $t1")]
#[case(inst().nor(reg::T0, reg::ZERO, reg::ZERO).build(), "nor $t0, $zero, $zero")]
#[case(inst().sll(reg::T0, reg::T1, 2).build(), "sll $t0, $t1, 2")]
#[case(inst().srl(reg::T0, reg::T1, 31).build(), "srl $t0, $t1, 31")]
#[case(inst().lw(reg::T0, reg::SP, 4).build(), "lw $t0, 4($sp)")]
#[case(inst().sw(reg::RA, reg::SP, -4).build(), "sw $ra, -4($sp)")]
#[case(inst().ori(reg::T0, reg::T0, 0xffff).build(), "ori $t0, $t0, 0xffff")]
#[case(inst().lui(reg::AT, 0x1001).build(), "lui $at, 0x1001")]
#[case(inst().beq(reg::T0, reg::ZERO, -3).build(), "beq $t0, $zero, -3")]
#[case(inst().bne(reg::T0, reg::T1, 2).build(), "bne $t0, $t1, 2")]
#[case(inst().j(3).build(), "j 0x0000000c")]
#[case(inst().jal(0x40).build(), "jal 0x00000100")]
#[case(inst().jr(reg::RA).build(), "jr $ra")]
#[case(inst().syscall().build(), "syscall")]
#[case(0x8000_0000, "unknown 0x80000000")]
fn mnemonics(#[case] word: u32, #[case] text: &str) {
    assert_eq!(disassemble(word), text);
}

#[test]
fn unsupported_rtype_funct() {
    // mult
    assert_eq!(disassemble(0x0109_0018), "unknown 0x01090018");
}
