//! Statistics Tests.
//!
//! Counters after small programs, plus the report sections.

use mipsim_core::stats::{STATS_SECTIONS, SimStats};
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::inst;
use crate::common::harness::{TestContext, reg, with_exit};

#[test]
fn counters_track_a_store_load_program() {
    let program = with_exit(&[
        inst().addi(reg::T0, reg::ZERO, 6).build(),
        inst().sw(reg::T0, reg::ZERO, 0x80).build(),
        inst().lw(reg::T1, reg::ZERO, 0x80).build(),
    ]);
    let mut ctx = TestContext::new().load_program(&program);
    ctx.run_to_halt();
    let stats = ctx.cpu.stats();

    assert_eq!(stats.memory_writes, 1);
    assert_eq!(stats.memory_reads, 1);
    // addi $t0, lw $t1, addi $v0; the exit commits nothing.
    assert_eq!(stats.register_writes, 3);
    assert_eq!(stats.syscalls, 1);
    assert_eq!(stats.redirects, 0);
    assert_eq!(stats.stall_pulses, 0);
    assert_eq!(stats.halted_at, Some(stats.pulses));
}

#[test]
fn fresh_counters_are_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.pulses, 0);
    assert_eq!(stats.halted_at, None);
}

#[test]
fn every_section_prints() {
    let stats = SimStats::default();
    stats.print();
    for section in STATS_SECTIONS {
        stats.print_sections(&[(*section).to_string()]);
    }
    stats.print_sections(&["unknown".to_string()]);
}
