use crate::classify::{Classification, Classifier, ExerciseKind};
use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("'{target}' can be generated by '{second}' and '{first}'! No files will be renamed!")]
    Collision {
        target: String,
        first: String,
        second: String,
    },
    #[error("'{0}' was listed more than once! No files will be renamed!")]
    DuplicateSource(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameCandidate {
    pub original: String,
    pub target: String,
    pub kind: ExerciseKind,
    pub changed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameStats {
    pub scanned: usize,
    pub ignored: usize,
    pub planned: usize,
    pub unchanged: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    pub candidates: Vec<RenameCandidate>,
    pub ignored: Vec<String>,
    pub stats: RenameStats,
}

impl RenamePlan {
    pub fn pending(&self) -> impl Iterator<Item = &RenameCandidate> {
        self.candidates.iter().filter(|c| c.changed)
    }

    pub fn renaming_count(&self) -> usize {
        self.pending().count()
    }
}

/// A directory listing split into names the classifier can work with and
/// names that are not valid UTF-8 (shown lossily, never renamed).
#[derive(Debug, Clone, Default)]
pub struct DirListing {
    pub names: Vec<String>,
    pub unreadable: Vec<String>,
}

pub fn list_entries(dir: &Path) -> Result<DirListing> {
    let mut listing = DirListing::default();

    for entry in
        fs::read_dir(dir).with_context(|| format!("could not read directory: {}", dir.display()))?
    {
        let entry =
            entry.with_context(|| format!("could not read entry in: {}", dir.display()))?;
        match entry.file_name().into_string() {
            Ok(name) => listing.names.push(name),
            Err(raw) => {
                let lossy = raw.to_string_lossy().to_string();
                warn!(name = %lossy, "skipping entry with a non UTF-8 name");
                listing.unreadable.push(lossy);
            }
        }
    }

    listing.names.sort();
    listing.unreadable.sort();
    Ok(listing)
}

pub fn generate_plan<I, S>(names: I, classifier: &Classifier<'_>) -> Result<RenamePlan, PlanError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut plan = RenamePlan::default();
    let mut seen_sources = HashSet::<String>::new();
    let mut sources_by_target = HashMap::<String, String>::new();

    for name in names {
        let name = name.as_ref();
        plan.stats.scanned += 1;

        if !seen_sources.insert(name.to_string()) {
            return Err(PlanError::DuplicateSource(name.to_string()));
        }

        let (kind, target) = match classifier.classify(name) {
            Classification::Exercise { kind, target } => (kind, target),
            Classification::Ignored => {
                plan.stats.ignored += 1;
                plan.ignored.push(name.to_string());
                continue;
            }
        };

        if let Some(first) = sources_by_target.get(&target) {
            return Err(PlanError::Collision {
                target,
                first: first.clone(),
                second: name.to_string(),
            });
        }
        sources_by_target.insert(target.clone(), name.to_string());

        let changed = target != name;
        if !changed {
            plan.stats.unchanged += 1;
        }
        plan.stats.planned += 1;
        plan.candidates.push(RenameCandidate {
            original: name.to_string(),
            target,
            kind,
            changed,
        });
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Identity;
    use crate::naming::NamingRules;
    use tempfile::tempdir;

    fn plan_for(identity: &Identity, names: &[&str]) -> Result<RenamePlan, PlanError> {
        let rules = NamingRules::standard();
        let classifier = Classifier::new(&rules, identity);
        generate_plan(names.iter().copied(), &classifier)
    }

    #[test]
    fn collision_names_both_sources_and_target() {
        let identity = Identity::new("turma1", "joao", "123");
        let err = plan_for(
            &identity,
            &["aula_consulta_joao_123.sql", "consulta.sql", "random.txt"],
        )
        .expect_err("two sources share a target");

        assert_eq!(
            err,
            PlanError::Collision {
                target: "turma1_Consulta_joao_123.sql".to_string(),
                first: "aula_consulta_joao_123.sql".to_string(),
                second: "consulta.sql".to_string(),
            }
        );
        let message = err.to_string();
        assert!(message.contains("aula_consulta_joao_123.sql"));
        assert!(message.contains("consulta.sql"));
        assert!(message.contains("No files will be renamed!"));
    }

    #[test]
    fn ignored_names_never_enter_the_plan() {
        let identity = Identity::new("turma1", "joao", "123");
        let plan = plan_for(&identity, &["random.txt", "consulta.sql", "notes.md"])
            .expect("plan should build");

        assert_eq!(plan.ignored, vec!["random.txt", "notes.md"]);
        assert_eq!(plan.candidates.len(), 1);
        assert!(plan
            .candidates
            .iter()
            .all(|c| c.original != "random.txt" && c.original != "notes.md"));
        assert_eq!(plan.stats.scanned, 3);
        assert_eq!(plan.stats.ignored, 2);
    }

    #[test]
    fn plan_preserves_listing_order() {
        let identity = Identity::new("turma1", "joao", "123");
        let plan = plan_for(&identity, &["popula.sql", "apaga.sql", "doc.pdf"])
            .expect("plan should build");

        let originals: Vec<&str> = plan.candidates.iter().map(|c| c.original.as_str()).collect();
        assert_eq!(originals, vec!["popula.sql", "apaga.sql", "doc.pdf"]);
    }

    #[test]
    fn already_renamed_entries_are_not_pending() {
        let identity = Identity::new("aula01", "joao", "123");
        let plan = plan_for(&identity, &["aula01_Consulta_joao_123.sql", "fisico.sql"])
            .expect("plan should build");

        assert_eq!(plan.candidates.len(), 2);
        assert_eq!(plan.stats.unchanged, 1);
        assert_eq!(plan.renaming_count(), 1);
        let pending: Vec<&str> = plan.pending().map(|c| c.original.as_str()).collect();
        assert_eq!(pending, vec!["fisico.sql"]);
    }

    #[test]
    fn canonical_entry_collides_with_short_form() {
        let identity = Identity::new("aula01", "joao", "123");
        let err = plan_for(&identity, &["aula01_Consulta_joao_123.sql", "consulta.sql"])
            .expect_err("short form would overwrite the canonical file");
        assert!(matches!(err, PlanError::Collision { .. }));
    }

    #[test]
    fn duplicate_source_is_rejected() {
        let identity = Identity::new("turma1", "joao", "123");
        let err = plan_for(&identity, &["consulta.sql", "consulta.sql"])
            .expect_err("same name twice");
        assert_eq!(err, PlanError::DuplicateSource("consulta.sql".to_string()));
    }

    #[test]
    fn list_entries_returns_sorted_names() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("b.sql"), b"b").expect("write b");
        fs::write(temp.path().join("a.sql"), b"a").expect("write a");
        fs::create_dir(temp.path().join("c")).expect("create dir");

        let listing = list_entries(temp.path()).expect("listing");
        assert_eq!(listing.names, vec!["a.sql", "b.sql", "c"]);
        assert!(listing.unreadable.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn list_entries_sets_aside_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join(OsStr::from_bytes(b"bad\xffname.sql")), b"x")
            .expect("write non utf-8 name");
        fs::write(temp.path().join("consulta.sql"), b"x").expect("write");

        let listing = list_entries(temp.path()).expect("listing");
        assert_eq!(listing.names, vec!["consulta.sql"]);
        assert_eq!(listing.unreadable, vec!["bad\u{FFFD}name.sql"]);
    }

    #[test]
    fn list_entries_fails_for_missing_directory() {
        let temp = tempdir().expect("tempdir");
        let err = list_entries(&temp.path().join("missing")).expect_err("missing dir");
        assert!(err.to_string().contains("could not read directory"));
    }
}
