//! # Pipeline Property Tests
//!
//! Random programs over random machines with at least one spare physical
//! register, so every run must finish. Each run checks ordering, throughput
//! and register-file properties of the resulting timings.

use std::collections::HashMap;

use ooosim_core::isa::Stage;
use proptest::prelude::*;

use crate::common::builder::TraceBuilder;
use crate::common::harness::TestContext;

/// One generated trace line: kind selector and three operands.
type Op = (u8, usize, usize, usize);

fn op_strategy() -> impl Strategy<Value = Op> {
    (0u8..4, 0usize..32, 0usize..32, 0usize..32)
}

fn build(phys_regs: usize, width: usize, ops: &[Op]) -> TraceBuilder {
    ops.iter()
        .fold(TraceBuilder::new(phys_regs, width), |b, &(kind, a, x, y)| match kind {
            0 => b.reg_op(a, x, y),
            1 => b.imm_op(a, x, y as u64),
            2 => b.load(a, x as u64, y),
            _ => b.store(a, x as u64, y),
        })
}

/// Largest number of instructions sharing one cycle in `stage`.
fn peak_per_cycle(rows: &[[u64; 7]], stage: Stage) -> usize {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for row in rows {
        *counts.entry(row[stage as usize]).or_default() += 1;
    }
    counts.values().copied().max().unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_run_completes_with_ordered_timings(
        phys_regs in 33usize..48,
        width in 1usize..5,
        ops in prop::collection::vec(op_strategy(), 0..48),
    ) {
        let ctx = TestContext::from_builder(&build(phys_regs, width, &ops)).run_ok();
        let report = ctx.report();
        let rows = report.rows();
        prop_assert_eq!(rows.len(), ops.len());
        prop_assert_eq!(ctx.sim.stats().committed, ops.len() as u64);

        for row in rows {
            prop_assert!(row.windows(2).all(|pair| pair[0] <= pair[1]), "non-monotone {:?}", row);
        }

        let commits: Vec<u64> = rows.iter().map(|row| row[Stage::Commit as usize]).collect();
        prop_assert!(commits.windows(2).all(|pair| pair[0] <= pair[1]));

        let mem_writebacks: Vec<u64> = ops
            .iter()
            .zip(rows)
            .filter(|((kind, ..), _)| *kind >= 2)
            .map(|(_, row)| row[Stage::Writeback as usize])
            .collect();
        prop_assert!(mem_writebacks.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn prop_no_stage_exceeds_width(
        phys_regs in 33usize..64,
        width in 1usize..5,
        ops in prop::collection::vec(op_strategy(), 1..48),
    ) {
        let ctx = TestContext::from_builder(&build(phys_regs, width, &ops)).run_ok();
        let report = ctx.report();
        for stage in [Stage::Fetch, Stage::Decode, Stage::Rename, Stage::Dispatch, Stage::Issue, Stage::Writeback] {
            let peak = peak_per_cycle(report.rows(), stage);
            prop_assert!(peak <= width, "{} moved {} > {}", stage, peak, width);
        }
    }

    #[test]
    fn prop_register_file_holds_at_every_cycle(
        phys_regs in 33usize..40,
        width in 1usize..4,
        ops in prop::collection::vec(op_strategy(), 1..32),
    ) {
        let mut ctx = TestContext::from_builder(&build(phys_regs, width, &ops));
        while ctx.sim.is_scheduling() {
            prop_assert!(ctx.sim.tick().unwrap(), "stalled at cycle {}", ctx.sim.cycle());
            let regs = &ctx.sim.state().regs;
            prop_assert!(regs.check_invariants().is_ok());
            prop_assert_eq!(regs.allocated_count() + regs.free_count(), phys_regs);
        }
    }
}
