use mipsim_core::isa::funct;
use mipsim_core::isa::opcodes::*;

/// Fluent encoder for the supported MIPS subset.
///
/// Register arguments are raw indices; immediates are given as the value
/// that lands in the 16-bit field (branch offsets in words, relative to the
/// instruction after the branch). Jump targets are word addresses.
pub struct InstructionBuilder {
    opcode: u32,
    rs: u32,
    rt: u32,
    rd: u32,
    shamt: u32,
    funct: u32,
    imm: i32,
    target: u32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: 0,
            rs: 0,
            rt: 0,
            rd: 0,
            shamt: 0,
            funct: 0,
            imm: 0,
            target: 0,
        }
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn funct(mut self, funct: u32) -> Self {
        self.funct = funct;
        self
    }

    fn rtype(mut self, funct: u32, rd: u32, rs: u32, rt: u32) -> Self {
        self.opcode = OP_RTYPE;
        self.funct = funct;
        self.rd = rd;
        self.rs = rs;
        self.rt = rt;
        self
    }

    fn itype(mut self, opcode: u32, rt: u32, rs: u32, imm: i32) -> Self {
        self.opcode = opcode;
        self.rt = rt;
        self.rs = rs;
        self.imm = imm;
        self
    }

    // --- R-type ---

    pub fn add(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.rtype(funct::ADD, rd, rs, rt)
    }

    pub fn addu(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.rtype(funct::ADDU, rd, rs, rt)
    }

    pub fn sub(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.rtype(funct::SUB, rd, rs, rt)
    }

    pub fn subu(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.rtype(funct::SUBU, rd, rs, rt)
    }

    pub fn and(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.rtype(funct::AND, rd, rs, rt)
    }

    pub fn or(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.rtype(funct::OR, rd, rs, rt)
    }

    pub fn nor(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.rtype(funct::NOR, rd, rs, rt)
    }

    pub fn slt(self, rd: u32, rs: u32, rt: u32) -> Self {
        self.rtype(funct::SLT, rd, rs, rt)
    }

    pub fn sll(mut self, rd: u32, rt: u32, shamt: u32) -> Self {
        self.shamt = shamt;
        self.rtype(funct::SLL, rd, 0, rt)
    }

    pub fn srl(mut self, rd: u32, rt: u32, shamt: u32) -> Self {
        self.shamt = shamt;
        self.rtype(funct::SRL, rd, 0, rt)
    }

    pub fn jr(self, rs: u32) -> Self {
        self.rtype(funct::JR, 0, rs, 0)
    }

    pub fn syscall(self) -> Self {
        self.rtype(funct::SYSCALL, 0, 0, 0)
    }

    // --- I-type ---

    pub fn addi(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.itype(OP_ADDI, rt, rs, imm)
    }

    pub fn addiu(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.itype(OP_ADDIU, rt, rs, imm)
    }

    pub fn slti(self, rt: u32, rs: u32, imm: i32) -> Self {
        self.itype(OP_SLTI, rt, rs, imm)
    }

    pub fn ori(self, rt: u32, rs: u32, imm: u32) -> Self {
        self.itype(OP_ORI, rt, rs, imm as i32)
    }

    pub fn lui(self, rt: u32, imm: u32) -> Self {
        self.itype(OP_LUI, rt, 0, imm as i32)
    }

    pub fn lw(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.itype(OP_LW, rt, rs, offset)
    }

    pub fn sw(self, rt: u32, rs: u32, offset: i32) -> Self {
        self.itype(OP_SW, rt, rs, offset)
    }

    pub fn beq(self, rs: u32, rt: u32, offset: i32) -> Self {
        self.itype(OP_BEQ, rt, rs, offset)
    }

    pub fn bne(self, rs: u32, rt: u32, offset: i32) -> Self {
        self.itype(OP_BNE, rt, rs, offset)
    }

    // --- J-type ---

    pub fn j(mut self, target: u32) -> Self {
        self.opcode = OP_J;
        self.target = target;
        self
    }

    pub fn jal(mut self, target: u32) -> Self {
        self.opcode = OP_JAL;
        self.target = target;
        self
    }

    pub fn nop(self) -> Self {
        self.sll(0, 0, 0)
    }

    pub fn build(self) -> u32 {
        let opcode = (self.opcode & 0x3F) << 26;
        let rs = (self.rs & 0x1F) << 21;
        let rt = (self.rt & 0x1F) << 16;
        match self.opcode {
            OP_RTYPE => {
                // R-type: opcode | rs | rt | rd | shamt | funct
                let rd = (self.rd & 0x1F) << 11;
                let shamt = (self.shamt & 0x1F) << 6;
                opcode | rs | rt | rd | shamt | (self.funct & 0x3F)
            }
            OP_J | OP_JAL => opcode | (self.target & 0x03FF_FFFF),
            // I-type: opcode | rs | rt | imm[15:0]
            _ => opcode | rs | rt | ((self.imm as u32) & 0xFFFF),
        }
    }
}

/// Shorthand for `InstructionBuilder::new()`.
pub fn inst() -> InstructionBuilder {
    InstructionBuilder::new()
}
