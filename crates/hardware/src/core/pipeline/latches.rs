//! Pipeline latches for inter-stage communication.
//!
//! This module defines the four bundles carried between the five stages,
//! Fetch → Decode → Execute → Memory → Writeback, and the clocked latch that
//! holds them:
//! 1. **Instruction Flow:** each entry is a fixed schema of buses.
//! 2. **Clocking:** a latch captures its input only on a rising edge.
//! 3. **Flush:** an armed latch neutralizes the next entry it captures.

use super::signals::ControlSignals;
use super::traits::LatchEntry;
use crate::common::constants::{REG_ADDR_BITS, SHAMT_BITS, SYSCALL_OP_BITS, WORD_BITS};
use crate::common::constants::{FUNCT_BITS, OPCODE_BITS};
use crate::logic::{Bit, Bits};
use crate::sequential::{Clocked, EdgeDetector};

/// Entry in the IF/ID latch (Fetch to Decode).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Address of the next sequential instruction.
    pub pc_plus4: Bits,
    /// Fetched instruction word.
    pub instruction: Bits,
}

impl Default for IfIdEntry {
    fn default() -> Self {
        Self {
            pc_plus4: Bits::zeros(WORD_BITS),
            instruction: Bits::zeros(WORD_BITS),
        }
    }
}

impl LatchEntry for IfIdEntry {
    fn neutralize(&mut self) {
        self.instruction = Bits::zeros(WORD_BITS);
    }
}

/// Entry in the ID/EX latch (Decode to Execute).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Address of the next sequential instruction.
    pub pc_plus4: Bits,
    /// Raw instruction word, carried for fault reporting.
    pub instruction: Bits,
    /// Decoded J-type target.
    pub jump_address: Bits,
    /// Register read port 1.
    pub read_data1: Bits,
    /// Register read port 2.
    pub read_data2: Bits,
    /// Extended immediate (zero for a syscall).
    pub immediate: Bits,
    /// Register address on read port 1 ($a0 for a syscall).
    pub rs: Bits,
    /// Register address on read port 2 ($v0 for a syscall).
    pub rt: Bits,
    /// rd field.
    pub rd: Bits,
    /// shamt field.
    pub shamt: Bits,
    /// funct field.
    pub funct: Bits,
    /// opcode field.
    pub opcode: Bits,
    /// Syscall service code (low bits of read port 2).
    pub syscall_op: Bits,
    /// Control lines.
    pub ctrl: ControlSignals,
}

impl Default for IdExEntry {
    fn default() -> Self {
        Self {
            pc_plus4: Bits::zeros(WORD_BITS),
            instruction: Bits::zeros(WORD_BITS),
            jump_address: Bits::zeros(WORD_BITS),
            read_data1: Bits::zeros(WORD_BITS),
            read_data2: Bits::zeros(WORD_BITS),
            immediate: Bits::zeros(WORD_BITS),
            rs: Bits::zeros(REG_ADDR_BITS),
            rt: Bits::zeros(REG_ADDR_BITS),
            rd: Bits::zeros(REG_ADDR_BITS),
            shamt: Bits::zeros(SHAMT_BITS),
            funct: Bits::zeros(FUNCT_BITS),
            opcode: Bits::zeros(OPCODE_BITS),
            syscall_op: Bits::zeros(SYSCALL_OP_BITS),
            ctrl: ControlSignals::default(),
        }
    }
}

impl LatchEntry for IdExEntry {
    fn neutralize(&mut self) {
        self.ctrl = self.ctrl.neutralized();
        self.syscall_op = Bits::zeros(SYSCALL_OP_BITS);
    }
}

/// Entry in the EX/MEM latch (Execute to Memory).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Address of the next sequential instruction.
    pub pc_plus4: Bits,
    /// Raw instruction word, carried for fault reporting.
    pub instruction: Bits,
    /// Computed branch target.
    pub branch_target: Bits,
    /// Decoded J-type target.
    pub jump_address: Bits,
    /// ALU or shifter result.
    pub alu_result: Bits,
    /// ALU zero flag.
    pub zero: Bit,
    /// Masked signed overflow.
    pub overflow: Bit,
    /// Forwarded rt value for stores.
    pub store_data: Bits,
    /// Resolved destination register.
    pub dest: Bits,
    /// Syscall service code.
    pub syscall_op: Bits,
    /// Control lines.
    pub ctrl: ControlSignals,
}

impl Default for ExMemEntry {
    fn default() -> Self {
        Self {
            pc_plus4: Bits::zeros(WORD_BITS),
            instruction: Bits::zeros(WORD_BITS),
            branch_target: Bits::zeros(WORD_BITS),
            jump_address: Bits::zeros(WORD_BITS),
            alu_result: Bits::zeros(WORD_BITS),
            zero: Bit::Zero,
            overflow: Bit::Zero,
            store_data: Bits::zeros(WORD_BITS),
            dest: Bits::zeros(REG_ADDR_BITS),
            syscall_op: Bits::zeros(SYSCALL_OP_BITS),
            ctrl: ControlSignals::default(),
        }
    }
}

impl LatchEntry for ExMemEntry {
    fn neutralize(&mut self) {
        self.ctrl = self.ctrl.neutralized();
        self.syscall_op = Bits::zeros(SYSCALL_OP_BITS);
    }
}

/// Entry in the MEM/WB latch (Memory to Writeback).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Address of the next sequential instruction (JAL link value).
    pub pc_plus4: Bits,
    /// Raw instruction word, carried for fault reporting.
    pub instruction: Bits,
    /// ALU or shifter result.
    pub alu_result: Bits,
    /// Word read from memory (outgoing lane of a string transfer).
    pub mem_data: Bits,
    /// Word taken from the input queue during a string read.
    pub incoming: Bits,
    /// Resolved destination register.
    pub dest: Bits,
    /// Masked signed overflow.
    pub overflow: Bit,
    /// Syscall service code (transfer mode for a string transfer).
    pub syscall_op: Bits,
    /// Entry is one word of a string transfer rather than an instruction.
    pub string_transfer: Bit,
    /// Control lines.
    pub ctrl: ControlSignals,
}

impl Default for MemWbEntry {
    fn default() -> Self {
        Self {
            pc_plus4: Bits::zeros(WORD_BITS),
            instruction: Bits::zeros(WORD_BITS),
            alu_result: Bits::zeros(WORD_BITS),
            mem_data: Bits::zeros(WORD_BITS),
            incoming: Bits::zeros(WORD_BITS),
            dest: Bits::zeros(REG_ADDR_BITS),
            overflow: Bit::Zero,
            syscall_op: Bits::zeros(SYSCALL_OP_BITS),
            string_transfer: Bit::Zero,
            ctrl: ControlSignals::default(),
        }
    }
}

impl LatchEntry for MemWbEntry {
    fn neutralize(&mut self) {
        self.ctrl = self.ctrl.neutralized();
        self.syscall_op = Bits::zeros(SYSCALL_OP_BITS);
        self.string_transfer = Bit::Zero;
    }
}

/// A clocked pipeline latch.
///
/// Captures an entry on each rising edge of the clock it is driven with.
/// [`PipelineLatch::flush`] works independently of the clock: it arms the
/// latch so that the next captured entry is neutralized.
#[derive(Clone, Debug, Default)]
pub struct PipelineLatch<T> {
    current: T,
    edge: EdgeDetector,
    flush_pending: Bit,
}

impl<T: LatchEntry> PipelineLatch<T> {
    /// A latch holding a neutral entry.
    pub fn new() -> Self {
        Self {
            current: T::default(),
            edge: EdgeDetector::new(),
            flush_pending: Bit::Zero,
        }
    }

    /// Latched contents.
    pub const fn read(&self) -> &T {
        &self.current
    }

    /// Drives the latch; captures `entry` on a rising edge.
    ///
    /// # Returns
    ///
    /// `true` when this call captured a new entry.
    pub fn write(&mut self, clk: Bit, entry: T) -> bool {
        if !self.rising_edge(clk) {
            return false;
        }
        let mut entry = entry;
        if self.flush_pending.is_one() {
            entry.neutralize();
            self.flush_pending = Bit::Zero;
        }
        self.current = entry;
        true
    }

    /// Arms the latch to neutralize the next entry it captures.
    pub const fn flush(&mut self) {
        self.flush_pending = Bit::One;
    }

    /// Whether a flush is armed.
    pub const fn flush_pending(&self) -> bool {
        self.flush_pending.is_one()
    }
}

impl<T> Clocked for PipelineLatch<T> {
    fn edge_detector(&mut self) -> &mut EdgeDetector {
        &mut self.edge
    }
}
