//! Instruction field extraction.
//!
//! MIPS has three formats sharing the opcode in bits 31-26:
//!
//! ```text
//! R: | opcode | rs | rt | rd | shamt | funct |
//! I: | opcode | rs | rt |      immediate      |
//! J: | opcode |          target               |
//! ```
//!
//! [`InstructionBits`] reads fields out of a native word for disassembly and
//! tests. [`InstructionFields`] is the decode-stage splitter: it slices the
//! instruction bus into its field buses without any arithmetic.

use crate::common::constants::{
    FUNCT_BITS, IMM_BITS, OPCODE_BITS, REG_ADDR_BITS, SHAMT_BITS, TARGET_BITS, WORD_BITS,
};
use crate::common::error::LogicResult;
use crate::logic::Bits;

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit position of the rs field.
pub const RS_SHIFT: u32 = 21;
/// Bit position of the rt field.
pub const RT_SHIFT: u32 = 16;
/// Bit position of the rd field.
pub const RD_SHIFT: u32 = 11;
/// Bit position of the shamt field.
pub const SHAMT_SHIFT: u32 = 6;
/// Mask for a 5-bit register or shamt field.
pub const REG_MASK: u32 = 0x1F;
/// Mask for the 6-bit opcode or funct field.
pub const SIX_BIT_MASK: u32 = 0x3F;
/// Mask for the 16-bit immediate.
pub const IMM_MASK: u32 = 0xFFFF;
/// Mask for the 26-bit jump target.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Field accessors for a native instruction word.
pub trait InstructionBits {
    /// Opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// First source register (bits 25-21).
    fn rs(&self) -> usize;

    /// Second source register, or destination for I-type (bits 20-16).
    fn rt(&self) -> usize;

    /// Destination register for R-type (bits 15-11).
    fn rd(&self) -> usize;

    /// Shift amount (bits 10-6).
    fn shamt(&self) -> u32;

    /// Function code (bits 5-0).
    fn funct(&self) -> u32;

    /// Raw 16-bit immediate (bits 15-0).
    fn imm16(&self) -> u32;

    /// Sign-extended immediate.
    fn simm(&self) -> i32;

    /// 26-bit jump target (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & SIX_BIT_MASK
    }

    #[inline]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline]
    fn funct(&self) -> u32 {
        self & SIX_BIT_MASK
    }

    #[inline]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline]
    fn simm(&self) -> i32 {
        i32::from(self.imm16() as u16 as i16)
    }

    #[inline]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// The field buses of one instruction word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionFields {
    /// The whole instruction.
    pub word: Bits,
    /// Bits 31-26.
    pub opcode: Bits,
    /// Bits 25-21.
    pub rs: Bits,
    /// Bits 20-16.
    pub rt: Bits,
    /// Bits 15-11.
    pub rd: Bits,
    /// Bits 10-6.
    pub shamt: Bits,
    /// Bits 5-0.
    pub funct: Bits,
    /// Bits 15-0.
    pub immediate: Bits,
    /// Bits 25-0.
    pub target: Bits,
}

impl InstructionFields {
    /// Slices a 32-bit instruction bus into its fields.
    ///
    /// # Errors
    ///
    /// [`LogicError::WidthMismatch`](crate::LogicError::WidthMismatch) unless
    /// `word` is 32 bits wide.
    pub fn split(word: &Bits) -> LogicResult<Self> {
        word.expect_width(WORD_BITS)?;
        let rs_start = OPCODE_BITS;
        let rt_start = rs_start + REG_ADDR_BITS;
        let rd_start = rt_start + REG_ADDR_BITS;
        let shamt_start = rd_start + REG_ADDR_BITS;
        let funct_start = shamt_start + SHAMT_BITS;
        Ok(Self {
            word: word.clone(),
            opcode: word.slice(0..OPCODE_BITS)?,
            rs: word.slice(rs_start..rt_start)?,
            rt: word.slice(rt_start..rd_start)?,
            rd: word.slice(rd_start..shamt_start)?,
            shamt: word.slice(shamt_start..funct_start)?,
            funct: word.slice(funct_start..funct_start + FUNCT_BITS)?,
            immediate: word.slice(WORD_BITS - IMM_BITS..WORD_BITS)?,
            target: word.slice(WORD_BITS - TARGET_BITS..WORD_BITS)?,
        })
    }
}
