mod apply;
mod classify;
mod confirm;
mod naming;
mod planner;
mod report;
mod session;

pub use apply::{apply_plan, ApplyResult, DirRenamer, Renamer};
pub use classify::{Classification, Classifier, ExerciseKind, Identity};
pub use confirm::{read_confirmation, Confirmation, CONFIRM_PROMPT};
pub use naming::{presentation_type, NamingRule, NamingRules};
pub use planner::{
    generate_plan, list_entries, DirListing, PlanError, RenameCandidate, RenamePlan, RenameStats,
};
pub use report::{write_ignored, write_renamings};
pub use session::{run_session, SessionOutcome};
