use crate::apply::{apply_plan, ApplyResult, Renamer};
use crate::classify::{Classifier, Identity};
use crate::confirm::Confirmation;
use crate::naming::NamingRules;
use crate::planner::{generate_plan, list_entries};
use crate::report::{write_ignored, write_renamings};
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    NothingToRename,
    Cancelled,
    Applied(ApplyResult),
}

/// List, classify, report, confirm, rename. `confirm` is only asked when at
/// least one name changes, and nothing is renamed unless it answers
/// `Proceed`.
pub fn run_session<W, C, R>(
    dir: &Path,
    identity: &Identity,
    rules: &NamingRules,
    out: &mut W,
    confirm: C,
    renamer: &mut R,
) -> Result<SessionOutcome>
where
    W: Write,
    C: FnOnce(&mut W) -> Result<Confirmation>,
    R: Renamer,
{
    let listing = list_entries(dir)?;
    let classifier = Classifier::new(rules, identity);
    let mut plan = generate_plan(&listing.names, &classifier)?;
    plan.stats.ignored += listing.unreadable.len();
    plan.ignored.extend(listing.unreadable);
    debug!(stats = ?plan.stats, "plan generated");

    write_ignored(out, &plan.ignored)?;
    writeln!(out)?;
    let total = write_renamings(out, &plan)?;
    if total == 0 {
        return Ok(SessionOutcome::NothingToRename);
    }

    match confirm(out)? {
        Confirmation::Cancelled => Ok(SessionOutcome::Cancelled),
        Confirmation::Proceed => Ok(SessionOutcome::Applied(apply_plan(&plan, renamer)?)),
    }
}
