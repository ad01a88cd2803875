//! # Pipeline Scenario Tests
//!
//! Small programs with hand-computed stage timings. Each cycle runs the
//! stages tail first, so an unobstructed instruction advances one stage per
//! cycle: fetch `c`, decode `c+1`, ..., commit `c+6`.

use ooosim_core::common::{ConfigError, ParseError, PhysReg};
use ooosim_core::config::GeneralConfig;
use ooosim_core::isa::{InstState, Stage};
use ooosim_core::{SimError, TraceReader};
use pretty_assertions::assert_eq;

use crate::common::builder::TraceBuilder;
use crate::common::harness::TestContext;

#[test]
fn test_single_instruction() {
    let ctx = TestContext::from_builder(&TraceBuilder::new(33, 1).reg_op(1, 2, 3)).run_ok();
    assert_eq!(ctx.report().rows(), &[[0, 1, 2, 3, 4, 5, 6]]);
    assert_eq!(ctx.sim.stats().committed, 1);
    assert_eq!(ctx.sim.cycle(), 7);
}

#[test]
fn test_minimum_file_cannot_rename_a_destination() {
    let mut ctx = TestContext::from_builder(&TraceBuilder::new(32, 1).reg_op(1, 2, 3));
    match ctx.run() {
        Err(SimError::Deadlock { cycle, outstanding }) => {
            assert_eq!(cycle, 2);
            assert_eq!(outstanding, 1);
        }
        other => panic!("expected deadlock, got {other:?}"),
    }
    assert_eq!(ctx.sim.stats().stalls_free_list, 1);
}

#[test]
fn test_minimum_file_runs_stores() {
    let ctx = TestContext::from_builder(&TraceBuilder::new(32, 1).store(1, 0, 2)).run_ok();
    assert_eq!(ctx.times(0), [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_too_few_registers_is_config_error() {
    let err = TraceReader::new("31,1\nR,1,2,3\n".as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        SimError::Config(ConfigError::TooFewPhysRegs { found: 31, min: 32 })
    ));
}

#[test]
fn test_widest_header_runs_to_completion() {
    let builder = TraceBuilder::new(33, usize::MAX).reg_op(1, 2, 3);
    let ctx = TestContext::from_builder(&builder).run_ok();
    assert_eq!(ctx.report().rows(), &[[0, 1, 2, 3, 4, 5, 6]]);
}

#[test]
fn test_independent_ops_move_together() {
    let ctx = TestContext::from_builder(&TraceBuilder::new(64, 2).reg_op(1, 2, 3).reg_op(4, 5, 6))
        .run_ok();
    assert_eq!(ctx.times(0), [0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(ctx.times(0), ctx.times(1));
}

#[test]
fn test_dependent_op_waits_for_writeback() {
    let ctx = TestContext::from_builder(&TraceBuilder::new(64, 2).reg_op(1, 2, 3).reg_op(4, 1, 5))
        .run_ok();
    assert_eq!(ctx.times(0), [0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(ctx.times(1), [0, 1, 2, 3, 5, 6, 7]);
}

#[test]
fn test_store_then_load_in_order() {
    let ctx = TestContext::from_builder(&TraceBuilder::new(64, 2).store(4, 0, 5).load(6, 8, 7))
        .run_ok();
    let store = ctx.times(0);
    let load = ctx.times(1);
    assert_eq!(store, [0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(load, [0, 1, 2, 3, 5, 6, 7]);
    assert!(load[Stage::Writeback as usize] >= store[Stage::Writeback as usize]);
    assert_eq!(ctx.sim.stats().lsq_order_holds, 1);
}

#[test]
fn test_free_list_pressure_stalls_until_reclaim() {
    // One spare register: the second write cannot rename until the first
    // commits (cycle 6) and its displaced p1 is reclaimed (cycle 7).
    let ctx = TestContext::from_builder(&TraceBuilder::new(33, 1).reg_op(1, 2, 3).reg_op(4, 5, 6))
        .run_ok();
    assert_eq!(ctx.times(0), [0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(ctx.times(1), [1, 2, 7, 8, 9, 10, 11]);
    assert_eq!(ctx.sim.stats().stalls_free_list, 4);

    let second = ctx.inst(1).renamed().unwrap();
    assert_eq!(second.dst, Some(PhysReg(1)));
    assert_eq!(ctx.inst(1).overwritten(), Some(PhysReg(4)));
}

#[test]
fn test_sources_resolve_before_destination_remap() {
    let ctx = TestContext::from_builder(&TraceBuilder::new(64, 1).reg_op(5, 5, 1)).run_ok();
    let ops = ctx.inst(0).renamed().unwrap();
    assert_eq!(ops.src0, PhysReg(5));
    assert_eq!(ops.src1, Some(PhysReg(1)));
    assert_eq!(ops.dst, Some(PhysReg(32)));
    assert_eq!(ctx.inst(0).overwritten(), Some(PhysReg(5)));
}

#[test]
fn test_issue_width_limits_execution() {
    let ctx = TestContext::from_builder(
        &TraceBuilder::new(64, 2)
            .imm_op(1, 0, 1)
            .imm_op(2, 0, 2)
            .imm_op(3, 0, 3)
            .imm_op(4, 0, 4),
    )
    .run_ok();
    for idx in 0..4 {
        let times = ctx.times(idx);
        let wave = (idx / 2) as u64;
        assert_eq!(times[Stage::Fetch as usize], wave);
        assert_eq!(times[Stage::Commit as usize], wave + 6);
    }
}

#[test]
fn test_lifecycle_states_after_run() {
    let ctx = TestContext::from_builder(&TraceBuilder::new(40, 1).reg_op(1, 2, 3).reg_op(2, 1, 1))
        .run_ok();
    // The first instruction's displaced register was reclaimed while the
    // second was still in flight; the last commit ends the run before its
    // reclamation cycle.
    assert_eq!(ctx.inst(0).state(), InstState::Freed);
    assert_eq!(ctx.inst(1).state(), InstState::Committed);
}

#[test]
fn test_invariant_checking_run() {
    let builder = (0..40).fold(TraceBuilder::new(36, 3), |b, i| match i % 4 {
        0 => b.reg_op(i % 32, (i + 1) % 32, (i + 2) % 32),
        1 => b.load((i + 3) % 32, 4, i % 32),
        2 => b.store(i % 32, 8, (i + 5) % 32),
        _ => b.imm_op((i * 7) % 32, (i * 3) % 32, 1),
    });
    let ctx = TestContext::from_builder(&builder).run_ok();
    assert_eq!(ctx.report().rows().len(), builder.len());

    let regs = &ctx.sim.state().regs;
    assert_eq!(regs.allocated_count() + regs.free_count(), 36);
    regs.check_invariants().unwrap();
}

#[test]
fn test_bad_line_fails_at_fetch() {
    let mut ctx =
        TestContext::from_builder(&TraceBuilder::new(64, 1).reg_op(1, 2, 3).raw("Q,1,2,3"));
    match ctx.run() {
        Err(SimError::Parse(ParseError::InvalidInstruction { line, text })) => {
            assert_eq!(line, 3);
            assert_eq!(text, "Q,1,2,3");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_blank_line_is_rejected() {
    let mut ctx = TestContext::from_builder(&TraceBuilder::new(64, 1).raw("").reg_op(1, 2, 3));
    assert!(matches!(
        ctx.run(),
        Err(SimError::Parse(ParseError::InvalidInstruction { line: 2, .. }))
    ));
}

#[test]
fn test_cycle_limit() {
    let trace = TraceBuilder::new(64, 1).reg_op(1, 2, 3).build();
    let general = GeneralConfig {
        max_cycles: Some(4),
        ..GeneralConfig::default()
    };
    let mut ctx = TestContext::try_with_general(&trace, general).unwrap();
    let err = ctx.run().unwrap_err();
    assert!(matches!(err, SimError::CycleLimit { limit: 4 }));
    assert!(err.is_model_failure());
    assert!(ctx.report().is_empty());
}
