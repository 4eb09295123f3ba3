use mipsim_core::Bits;
use mipsim_core::isa::abi::reg_name;
use mipsim_core::isa::instruction::{InstructionBits, InstructionFields};
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::inst;

#[test]
fn native_fields() {
    let word = inst().lw(9, 8, -4).build();
    assert_eq!(word.opcode(), 0x23);
    assert_eq!(word.rs(), 8);
    assert_eq!(word.rt(), 9);
    assert_eq!(word.imm16(), 0xfffc);
    assert_eq!(word.simm(), -4);

    let word = inst().sll(10, 11, 7).build();
    assert_eq!(word.rd(), 10);
    assert_eq!(word.rt(), 11);
    assert_eq!(word.shamt(), 7);
    assert_eq!(word.funct(), 0);

    assert_eq!(inst().jal(0x12345).build().target(), 0x12345);
}

#[rstest]
#[case(0, "zero")]
#[case(2, "v0")]
#[case(4, "a0")]
#[case(29, "sp")]
#[case(31, "ra")]
#[case(32, "??")]
fn abi_names(#[case] index: usize, #[case] name: &str) {
    assert_eq!(reg_name(index), name);
}

proptest! {
    #[test]
    fn bus_split_agrees_with_native(word in any::<u32>()) {
        let fields = InstructionFields::split(&Bits::from_u32(word, 32)).unwrap();
        prop_assert_eq!(fields.opcode.to_u32().unwrap(), word.opcode());
        prop_assert_eq!(fields.rs.to_usize().unwrap(), word.rs());
        prop_assert_eq!(fields.rt.to_usize().unwrap(), word.rt());
        prop_assert_eq!(fields.rd.to_usize().unwrap(), word.rd());
        prop_assert_eq!(fields.shamt.to_u32().unwrap(), word.shamt());
        prop_assert_eq!(fields.funct.to_u32().unwrap(), word.funct());
        prop_assert_eq!(fields.immediate.to_u32().unwrap(), word.imm16());
        prop_assert_eq!(fields.target.to_u32().unwrap(), word.target());
    }
}
