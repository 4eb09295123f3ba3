//! Program Loader.
//!
//! Programs arrive pre-encoded: one instruction word per line, written either
//! as 32 binary digits (`_` separators allowed) or as `0x`-prefixed hex. A `#`
//! starts a comment; blank lines are skipped. The loader performs:
//! 1. **Parsing:** text to a vector of instruction words.
//! 2. **File Loading:** reads and parses a program file.
//! 3. **Placement:** writes the words sequentially from the text base.

use std::path::Path;

use crate::common::constants::WORD_BITS;
use crate::common::error::{SimError, SimResult};
use crate::core::Cpu;
use crate::logic::Bits;

fn parse_word(token: &str, line: usize) -> SimResult<u32> {
    let program_error = |reason: String| SimError::Program { line, reason };

    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        return u32::from_str_radix(&hex.replace('_', ""), 16)
            .map_err(|e| program_error(format!("bad hex word `{token}`: {e}")));
    }
    let bits = Bits::parse(token).map_err(|e| program_error(e.to_string()))?;
    if bits.width() != WORD_BITS {
        return Err(program_error(format!(
            "expected {WORD_BITS} binary digits, found {}",
            bits.width()
        )));
    }
    Ok(bits.to_u32()?)
}

/// Parses program text into instruction words.
///
/// # Errors
///
/// [`SimError::Program`] naming the first malformed line (1-based).
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::parse_program;
///
/// let text = "# li $v0, 10\n0x2002000a\n00000000000000000000000000001100 # syscall\n";
/// assert_eq!(parse_program(text).unwrap(), vec![0x2002_000a, 0x0000_000c]);
/// ```
pub fn parse_program(text: &str) -> SimResult<Vec<u32>> {
    let mut words = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let code = raw.split('#').next().unwrap_or_default().trim();
        if code.is_empty() {
            continue;
        }
        words.push(parse_word(code, index + 1)?);
    }
    Ok(words)
}

/// Reads and parses a program file.
///
/// # Errors
///
/// [`SimError::Io`] when the file cannot be read, plus the errors of
/// [`parse_program`].
pub fn load_file(path: impl AsRef<Path>) -> SimResult<Vec<u32>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let words = parse_program(&text)?;
    tracing::info!(path = %path.display(), words = words.len(), "loaded program");
    Ok(words)
}

/// Parses a program file and writes it into the machine's memory.
///
/// # Returns
///
/// The number of words placed.
///
/// # Errors
///
/// As [`load_file`], plus
/// [`SimError::AddressOutOfRange`] when the program does not fit.
pub fn load_into(cpu: &mut Cpu, path: impl AsRef<Path>) -> SimResult<usize> {
    let words = load_file(path)?;
    cpu.load_program(&words)?;
    Ok(words.len())
}
