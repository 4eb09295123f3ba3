//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction word into a mnemonic string for tracing,
//! register dumps and test diagnostics.
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x2002_0005), "addi $v0, $zero, 5");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::instruction::InstructionBits;
use crate::isa::{funct, opcodes};

/// Disassembles one instruction word.
///
/// Returns `"nop"` for the all-zero word and `"unknown <hex>"` for encodings
/// outside the supported subset.
pub fn disassemble(inst: u32) -> String {
    if inst == 0 {
        return "nop".to_string();
    }
    let rs = reg_name(inst.rs());
    let rt = reg_name(inst.rt());
    let rd = reg_name(inst.rd());
    let simm = inst.simm();

    match inst.opcode() {
        opcodes::OP_RTYPE => disasm_rtype(inst, rs, rt, rd),
        opcodes::OP_J => format!("j {:#010x}", inst.target() << 2),
        opcodes::OP_JAL => format!("jal {:#010x}", inst.target() << 2),
        opcodes::OP_BEQ => format!("beq ${rs}, ${rt}, {simm}"),
        opcodes::OP_BNE => format!("bne ${rs}, ${rt}, {simm}"),
        opcodes::OP_ADDI => format!("addi ${rt}, ${rs}, {simm}"),
        opcodes::OP_ADDIU => format!("addiu ${rt}, ${rs}, {simm}"),
        opcodes::OP_SLTI => format!("slti ${rt}, ${rs}, {simm}"),
        opcodes::OP_ORI => format!("ori ${rt}, ${rs}, {:#x}", inst.imm16()),
        opcodes::OP_LUI => format!("lui ${rt}, {:#x}", inst.imm16()),
        opcodes::OP_LW => format!("lw ${rt}, {simm}(${rs})"),
        opcodes::OP_SW => format!("sw ${rt}, {simm}(${rs})"),
        opcodes::OP_COP1 => format!("cop1 {inst:#010x}"),
        _ => format!("unknown {inst:#010x}"),
    }
}

fn disasm_rtype(inst: u32, rs: &str, rt: &str, rd: &str) -> String {
    let mn = match inst.funct() {
        funct::SLL => return format!("sll ${rd}, ${rt}, {}", inst.shamt()),
        funct::SRL => return format!("srl ${rd}, ${rt}, {}", inst.shamt()),
        funct::JR => return format!("jr ${rs}"),
        funct::SYSCALL => return "syscall".to_string(),
        funct::ADD => "add",
        funct::ADDU => "addu",
        funct::SUB => "sub",
        funct::SUBU => "subu",
        funct::AND => "and",
        funct::OR => "or",
        funct::NOR => "nor",
        funct::SLT => "slt",
        _ => return format!("unknown {inst:#010x}"),
    };
    format!("{mn} ${rd}, ${rs}, ${rt}")
}
