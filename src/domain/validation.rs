// src/domain/validation.rs

use crate::domain::ComplaintForm;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

pub const MIN_DESCRIPTION_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// Form fields that can carry a validation error.
/// Declaration order is the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Description,
    ContactEmail,
    ConsentGiven,
}

impl FormField {
    /// Name used on the wire and in the HTML form.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Description => "description",
            FormField::ContactEmail => "contactEmail",
            FormField::ConsentGiven => "consentGiven",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field -> error message. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FormField, &'static str>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Checks every rule and collects every violation; nothing short-circuits.
pub fn validate_form(form: &ComplaintForm) -> ValidationResult {
    let mut result = ValidationResult::default();

    let description = form.description.trim();
    if description.is_empty() {
        result.insert(FormField::Description, "Description is required");
    } else if description.chars().count() < MIN_DESCRIPTION_CHARS {
        result.insert(
            FormField::Description,
            "Description must be at least 10 characters",
        );
    }

    if !form.contact_email.is_empty() && !EMAIL_PATTERN.is_match(&form.contact_email) {
        result.insert(
            FormField::ContactEmail,
            "Please enter a valid email address",
        );
    }

    if !form.consent_given {
        result.insert(
            FormField::ConsentGiven,
            "You must consent to submit personal media",
        );
    }

    result
}
