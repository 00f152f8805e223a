use crate::planner::RenamePlan;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::info;

pub trait Renamer {
    fn rename(&mut self, from: &str, to: &str) -> io::Result<()>;
}

/// Renames entries inside a single directory. An existing target is never
/// overwritten, except for a case-only rename of the entry itself.
#[derive(Debug, Clone)]
pub struct DirRenamer {
    root: PathBuf,
}

impl DirRenamer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Renamer for DirRenamer {
    fn rename(&mut self, from: &str, to: &str) -> io::Result<()> {
        let target = self.root.join(to);
        let case_only = from.eq_ignore_ascii_case(to);
        if !case_only && target.symlink_metadata().is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("target already exists: {}", target.display()),
            ));
        }
        fs::rename(self.root.join(from), target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub applied: usize,
    pub unchanged: usize,
}

/// Renames every pending candidate in plan order. Renames done before a
/// failure stay applied.
pub fn apply_plan<R: Renamer>(plan: &RenamePlan, renamer: &mut R) -> Result<ApplyResult> {
    let mut applied = 0usize;
    for candidate in plan.pending() {
        renamer
            .rename(&candidate.original, &candidate.target)
            .with_context(|| {
                format!(
                    "rename failed: {} -> {}",
                    candidate.original, candidate.target
                )
            })?;
        info!(from = %candidate.original, to = %candidate.target, "renamed");
        applied += 1;
    }

    Ok(ApplyResult {
        applied,
        unchanged: plan.candidates.len().saturating_sub(applied),
    })
}
