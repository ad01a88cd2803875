//! # Timing Report Tests
//!
//! Rendering of finished runs and the guarded empty report.

use ooosim_core::config::GeneralConfig;
use ooosim_core::TimingReport;
use pretty_assertions::assert_eq;

use crate::common::builder::TraceBuilder;
use crate::common::harness::TestContext;

#[test]
fn test_report_lines_in_fetch_order() {
    let ctx = TestContext::from_builder(
        &TraceBuilder::new(64, 2)
            .reg_op(1, 2, 3)
            .reg_op(4, 1, 5)
            .store(4, 0, 6),
    )
    .run_ok();

    let mut out = Vec::new();
    ctx.report().write_to(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0,1,2,3,4,5,6\n\
         0,1,2,3,5,6,7\n\
         1,2,3,4,6,7,8\n"
    );
}

#[test]
fn test_deadlocked_run_reports_nothing() {
    let mut ctx = TestContext::from_builder(&TraceBuilder::new(32, 1).reg_op(1, 2, 3));
    assert!(ctx.run().unwrap_err().is_deadlock());
    assert_eq!(ctx.report(), TimingReport::empty());
    assert_eq!(ctx.report().to_string(), "");
}

#[test]
fn test_unstarted_run_reports_nothing() {
    let trace = TraceBuilder::new(40, 1).reg_op(1, 2, 3).build();
    let ctx = TestContext::try_with_general(&trace, GeneralConfig::default()).unwrap();
    assert!(ctx.report().is_empty());
}
