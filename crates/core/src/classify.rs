use crate::naming::{presentation_type, NamingRules};
use tracing::debug;

const LONG_FORM_PREFIX: &str = "aula";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub class_name: String,
    pub student_name: String,
    pub registration_number: String,
}

impl Identity {
    pub fn new(
        class_name: impl Into<String>,
        student_name: impl Into<String>,
        registration_number: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            student_name: student_name.into(),
            registration_number: registration_number.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseKind {
    /// `aula_<type>_<name>_<registration>.<ext>`
    LongForm,
    /// `<type>.<ext>`
    ShortForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Exercise { kind: ExerciseKind, target: String },
    Ignored,
}

pub struct Classifier<'a> {
    rules: &'a NamingRules,
    identity: &'a Identity,
}

impl<'a> Classifier<'a> {
    pub fn new(rules: &'a NamingRules, identity: &'a Identity) -> Self {
        Self { rules, identity }
    }

    pub fn classify(&self, file_name: &str) -> Classification {
        let classification = if let Some(target) = self.classify_long_form(file_name) {
            Classification::Exercise {
                kind: ExerciseKind::LongForm,
                target,
            }
        } else if let Some(target) = self.classify_short_form(file_name) {
            Classification::Exercise {
                kind: ExerciseKind::ShortForm,
                target,
            }
        } else {
            Classification::Ignored
        };

        debug!(file_name, ?classification, "classified entry");
        classification
    }

    fn classify_long_form(&self, file_name: &str) -> Option<String> {
        if !file_name.starts_with(LONG_FORM_PREFIX) {
            return None;
        }
        let (_, ext) = file_name.rsplit_once('.')?;
        if !self.rules.is_known_extension(ext) {
            return None;
        }

        let type_token = file_name.split('_').nth(1)?;
        let default_ext = self.rules.default_extension(type_token)?;
        Some(self.target_name(type_token, default_ext))
    }

    fn classify_short_form(&self, file_name: &str) -> Option<String> {
        if !self.rules.is_short_name(file_name) {
            return None;
        }
        let (type_token, ext) = file_name.split_once('.')?;
        if !self.rules.extensions(type_token)?.iter().any(|known| known == ext) {
            return None;
        }
        Some(self.target_name(type_token, ext))
    }

    fn target_name(&self, type_token: &str, ext: &str) -> String {
        format!(
            "{}_{}_{}_{}.{}",
            self.identity.class_name,
            presentation_type(type_token),
            self.identity.student_name,
            self.identity.registration_number,
            ext
        )
    }
}
