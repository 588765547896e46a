//! Plan and sync presentation.

use super::shared::{actions_table, title, to_json};
use crate::error::SyncError;
use crate::reconcile::ActionSummary;
use crate::sync::{SyncPlan, SyncReport};
use serde_json::json;

pub fn format_plan_text(plan: &SyncPlan) -> String {
    let mut output = title(&format!(
        "Plan: {} -> {}",
        plan.source_root.display(),
        plan.dest_root.display()
    ));
    output.push('\n');

    if plan.actions.is_empty() {
        output.push_str("Already in sync: nothing to do.");
        return output;
    }

    let summary = ActionSummary::from_actions(&plan.actions);
    output.push_str(&format!("  {}\n\n", summary));
    output.push_str(&actions_table(&plan.actions));
    output
}

pub fn format_plan_json(plan: &SyncPlan) -> Result<String, SyncError> {
    to_json(&json!({
        "source": plan.source_root,
        "dest": plan.dest_root,
        "summary": ActionSummary::from_actions(&plan.actions),
        "actions": plan.actions,
    }))
}

pub fn format_report_text(report: &SyncReport) -> String {
    let heading = if report.dry_run { "Dry run" } else { "Synced" };
    let mut output = title(&format!(
        "{}: {} -> {}",
        heading,
        report.source.display(),
        report.dest.display()
    ));
    output.push('\n');

    if report.actions.is_empty() {
        output.push_str("Already in sync: nothing to do.");
        return output;
    }

    if report.dry_run {
        output.push_str(&format!("  Would apply: {}\n\n", report.summary));
    } else {
        output.push_str(&format!(
            "  Applied {} of {} actions ({}) in {} ms\n\n",
            report.applied,
            report.summary.total(),
            report.summary,
            report.elapsed_ms
        ));
    }
    output.push_str(&actions_table(&report.actions));
    output
}

pub fn format_report_json(report: &SyncReport) -> Result<String, SyncError> {
    to_json(report)
}
