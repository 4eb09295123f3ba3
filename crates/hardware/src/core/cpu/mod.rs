//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns every piece of
//! machine state. It coordinates the following:
//! 1. **State Management:** program counter, register file and main memory.
//! 2. **Pipeline Control:** the four inter-stage latches and the two backward
//!    wires (redirect and writeback commit).
//! 3. **System Integration:** trap unit, console and static segment.
//! 4. **Introspection:** read-only views for tests, the CLI and debuggers.

/// Console input queue and output buffer.
pub mod console;

/// Clock driving and the run loop.
pub mod execution;

/// Static data segment pointer.
pub mod static_segment;

/// Trap flip-flops, syscall classes and string-transfer registers.
pub mod trap;

use self::console::Console;
use self::static_segment::StaticSegment;
use self::trap::{TrapCause, TrapUnit};
use crate::common::constants::{NUM_REGISTERS, REG_ADDR_BITS, WORD_BITS, WORD_BYTES};
use crate::common::error::SimResult;
use crate::common::rng::Xorshift;
use crate::config::{Config, InitPolicy};
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry, PipelineLatch};
use crate::core::pipeline::wires::{RedirectWire, WritebackWire};
use crate::isa::abi;
use crate::logic::Bits;
use crate::sequential::{ByteMemory, DFlipFlop, DualPortRegisterFile};
use crate::stats::SimStats;

/// Main CPU structure containing all processor state and components.
///
/// The machine advances only when [`Cpu::write`] sees the clock rise. One
/// [`Cpu::pulse`] drives low, high, low.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Program counter.
    pub pc: DFlipFlop,
    /// General-purpose registers.
    pub regs: DualPortRegisterFile,
    /// Main memory.
    pub memory: ByteMemory,

    /// IF/ID latch.
    pub if_id: PipelineLatch<IfIdEntry>,
    /// ID/EX latch.
    pub id_ex: PipelineLatch<IdExEntry>,
    /// EX/MEM latch.
    pub ex_mem: PipelineLatch<ExMemEntry>,
    /// MEM/WB latch.
    pub mem_wb: PipelineLatch<MemWbEntry>,

    /// Redirect published by the memory stage this call.
    pub redirect: RedirectWire,
    /// Register commit published by writeback this call.
    pub writeback: WritebackWire,

    /// Trap flip-flops and string-transfer registers.
    pub trap: TrapUnit,
    /// Console input and output.
    pub console: Console,
    /// Static data segment.
    pub static_segment: StaticSegment,

    /// Activity counters.
    pub stats: SimStats,
    /// Emit per-stage trace events.
    pub trace: bool,
    /// Address of the first program word.
    pub text_base: u32,
}

impl Cpu {
    /// Builds a machine from a configuration.
    ///
    /// Registers follow `general.registers` when given, otherwise
    /// `general.register_init`; a random register file still reads zero in
    /// `$zero`. `general.initial_sp` is applied last.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`](crate::SimError::Config) for an invalid
    /// configuration.
    pub fn new(config: &Config) -> SimResult<Self> {
        config.validate()?;
        let mut rng = Xorshift::new(config.general.seed);

        let mut values = [0u32; NUM_REGISTERS];
        if let Some(explicit) = &config.general.registers {
            values.copy_from_slice(explicit);
        } else if config.general.register_init == InitPolicy::Random {
            for value in values.iter_mut().skip(1) {
                *value = rng.next_u32();
            }
        }
        if let Some(sp) = config.general.initial_sp {
            values[abi::REG_SP] = sp;
        }

        let mut memory = ByteMemory::new(config.memory.size);
        if config.memory.init == InitPolicy::Random {
            memory.fill_random(&mut rng);
        }

        let cells = values
            .iter()
            .map(|&v| Bits::from_u32(v, WORD_BITS))
            .collect();

        Ok(Self {
            pc: DFlipFlop::with_value(Bits::from_u32(config.memory.text_base, WORD_BITS)),
            regs: DualPortRegisterFile::with_cells(REG_ADDR_BITS, WORD_BITS, cells)?,
            memory,
            if_id: PipelineLatch::new(),
            id_ex: PipelineLatch::new(),
            ex_mem: PipelineLatch::new(),
            mem_wb: PipelineLatch::new(),
            redirect: RedirectWire::default(),
            writeback: WritebackWire::default(),
            trap: TrapUnit::new(),
            console: Console::new(config.memory.input_capacity)?,
            static_segment: StaticSegment::new(
                config.memory.static_base,
                config.memory.static_size,
            ),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            text_base: config.memory.text_base,
        })
    }

    /// Builds a machine with explicit initial register values.
    ///
    /// # Errors
    ///
    /// As [`Cpu::new`].
    pub fn with_registers(config: &Config, registers: [u32; NUM_REGISTERS]) -> SimResult<Self> {
        let mut config = config.clone();
        config.general.registers = Some(registers.to_vec());
        Self::new(&config)
    }

    /// Writes program words sequentially from the text base.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`](crate::SimError::AddressOutOfRange)
    /// when the program does not fit.
    pub fn load_program(&mut self, words: &[u32]) -> SimResult<()> {
        let mut addr = self.text_base;
        for &word in words {
            self.memory.store_word(addr, word)?;
            addr = addr.wrapping_add(WORD_BYTES as u32);
        }
        Ok(())
    }

    /// Writes pre-encoded instruction buses sequentially from the text base.
    ///
    /// # Errors
    ///
    /// As [`Cpu::load_program`], plus width errors for non-word buses.
    pub fn load_instructions(&mut self, words: &[Bits]) -> SimResult<()> {
        let mut addr = self.text_base;
        for word in words {
            self.memory.store_bits(addr, word)?;
            addr = addr.wrapping_add(WORD_BYTES as u32);
        }
        Ok(())
    }

    /// Writes one instruction word at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`](crate::SimError::AddressOutOfRange).
    pub fn set_instruction(&mut self, addr: u32, word: u32) -> SimResult<()> {
        self.memory.store_word(addr, word)
    }

    /// Writes one data word at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`](crate::SimError::AddressOutOfRange).
    pub fn store_word(&mut self, addr: u32, word: u32) -> SimResult<()> {
        self.memory.store_word(addr, word)
    }

    /// Pre-loads the console input queue.
    ///
    /// # Errors
    ///
    /// [`SimError::InputTooLong`](crate::SimError::InputTooLong) when the
    /// text and its terminator exceed the queue.
    pub fn provide_input(&mut self, bytes: &[u8]) -> SimResult<()> {
        self.console.provide(bytes)
    }

    /// Every register value, `$zero` first.
    pub fn registers(&self) -> Vec<u32> {
        self.regs
            .cells()
            .iter()
            .map(|cell| cell.to_u32().unwrap_or_default())
            .collect()
    }

    /// One register value; out-of-range indices read zero.
    pub fn register(&self, index: usize) -> u32 {
        self.regs
            .cells()
            .get(index)
            .and_then(|cell| cell.to_u32().ok())
            .unwrap_or_default()
    }

    /// Word at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`](crate::SimError::AddressOutOfRange).
    pub fn memory_word(&self, addr: u32) -> SimResult<u32> {
        self.memory.load_word(addr)
    }

    /// Byte at `addr`.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`](crate::SimError::AddressOutOfRange).
    pub fn memory_byte(&self, addr: u32) -> SimResult<u8> {
        self.memory.read_byte(addr)
    }

    /// The four bytes addressed by the stack pointer, lowest address first.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`](crate::SimError::AddressOutOfRange)
    /// when `$sp` points outside memory.
    pub fn stack_bytes(&self) -> SimResult<[u8; WORD_BYTES]> {
        let sp = self.register(abi::REG_SP);
        let mut bytes = [0u8; WORD_BYTES];
        for (offset, byte) in (0u32..).zip(bytes.iter_mut()) {
            *byte = self.memory.read_byte(sp.wrapping_add(offset))?;
        }
        Ok(bytes)
    }

    /// Current program counter.
    pub fn pc(&self) -> u32 {
        self.pc.q().to_u32().unwrap_or_default()
    }

    /// The terminal trap is set.
    pub fn is_halted(&self) -> bool {
        self.trap.trap().is_one()
    }

    /// Cause of the terminal trap.
    pub const fn trap_cause(&self) -> Option<TrapCause> {
        self.trap.cause()
    }

    /// A string transfer holds issue.
    pub fn is_stalled(&self) -> bool {
        self.trap.pipeline_trap().is_one()
    }

    /// Highest static-segment offset a store has targeted.
    pub fn static_pointer(&self) -> u32 {
        self.static_segment.pointer().to_u32().unwrap_or_default()
    }

    /// Words moved by the current or last string transfer.
    pub fn string_length(&self) -> u32 {
        self.trap.length().to_u32().unwrap_or_default()
    }

    /// Console output so far.
    pub fn output(&self) -> &str {
        self.console.output()
    }

    /// Activity counters.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }
}
