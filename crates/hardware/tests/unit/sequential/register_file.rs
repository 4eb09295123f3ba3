//! Register File Tests.

use mipsim_core::sequential::{DualPortRegisterFile, RegisterFile};
use mipsim_core::{Bit, Bits, LogicError};

fn addr(i: u32) -> Bits {
    Bits::from_u32(i, 5)
}

fn word(v: u32) -> Bits {
    Bits::from_u32(v, 32)
}

#[test]
fn write_is_clocked_and_enabled() {
    let mut rf = RegisterFile::new(5, 32);
    rf.write(Bit::Zero, Bit::One, &addr(3), &word(7)).unwrap();
    assert!(rf.read(&addr(3)).unwrap().is_zero());

    rf.write(Bit::One, Bit::Zero, &addr(3), &word(7)).unwrap();
    assert!(rf.read(&addr(3)).unwrap().is_zero(), "write enable low");

    rf.write(Bit::Zero, Bit::One, &addr(3), &word(7)).unwrap();
    rf.write(Bit::One, Bit::One, &addr(3), &word(7)).unwrap();
    assert_eq!(rf.read(&addr(3)).unwrap(), word(7));
    for (i, cell) in rf.cells().iter().enumerate() {
        if i != 3 {
            assert!(cell.is_zero(), "cell {i} disturbed");
        }
    }
}

#[test]
fn dual_port_writes_before_reading() {
    let mut rf = DualPortRegisterFile::new(5, 32);
    let (_, _) = rf
        .write(Bit::Zero, Bit::Zero, &addr(0), &word(0), &addr(0), &addr(0))
        .unwrap();
    let (r1, r2) = rf
        .write(Bit::One, Bit::One, &addr(9), &word(0xCAFE), &addr(9), &addr(1))
        .unwrap();
    assert_eq!(r1, word(0xCAFE));
    assert!(r2.is_zero());
}

#[test]
fn register_zero_is_not_pinned() {
    let mut rf = DualPortRegisterFile::new(5, 32);
    rf.write(Bit::Zero, Bit::Zero, &addr(0), &word(0), &addr(0), &addr(0))
        .unwrap();
    let (r1, _) = rf
        .write(Bit::One, Bit::One, &addr(0), &word(5), &addr(0), &addr(0))
        .unwrap();
    assert_eq!(r1, word(5));
}

#[test]
fn construction_checks_shape() {
    assert!(matches!(
        RegisterFile::with_cells(2, 8, vec![Bits::zeros(8); 3]),
        Err(LogicError::WidthMismatch { expected: 4, found: 3 })
    ));
    assert!(RegisterFile::with_cells(1, 8, vec![Bits::zeros(8), Bits::zeros(7)]).is_err());
    let mut rf = RegisterFile::new(2, 8);
    assert!(matches!(
        rf.set_cell(4, Bits::zeros(8)),
        Err(LogicError::IndexOutOfRange { index: 4, width: 4 })
    ));
    assert!(rf.read(&Bits::zeros(3)).is_err());
}
