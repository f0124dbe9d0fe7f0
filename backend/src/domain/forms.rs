//! Declarative form validation.
//!
//! Each form is a set of per-field specs (required, max length, kind) plus
//! optional cross-field rules. Validation yields either a typed submission
//! or a [`FieldErrors`] map keyed by field name. Missing keys in the raw
//! submission are treated as empty strings, never as a hard failure.
//!
//! Cross-field rules (password confirmation match, minimum length) run only
//! after every individual field passes, and attach their error to the
//! specific offending field.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::branch::BranchFields;

/// Raw form submission. Absent keys read as empty strings.
#[derive(Debug, Clone, Default)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }

    /// Field value with surrounding whitespace stripped; `""` when absent.
    pub fn field(&self, name: &str) -> &str {
        self.0.get(name).map(|value| value.trim()).unwrap_or("")
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FormData {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        )
    }
}

/// Validation errors keyed by field name, in stable field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_owned()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Email,
    NonNegativeInt,
}

#[derive(Debug, Clone, Copy)]
struct FieldSpec {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    max_len: Option<usize>,
}

impl FieldSpec {
    const fn text(name: &'static str, required: bool, max_len: usize) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required,
            max_len: Some(max_len),
        }
    }

    const fn password(name: &'static str, required: bool) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required,
            max_len: None,
        }
    }

    const fn email(name: &'static str, required: bool) -> Self {
        Self {
            name,
            kind: FieldKind::Email,
            required,
            max_len: None,
        }
    }

    fn check(&self, value: &str, errors: &mut FieldErrors) {
        if value.is_empty() {
            if self.required {
                errors.add(self.name, "This field is required");
            }
            return;
        }
        if let Some(max) = self.max_len {
            let length = value.chars().count();
            if length > max {
                errors.add(
                    self.name,
                    format!("Ensure this value has at most {max} characters"),
                );
            }
        }
        match self.kind {
            FieldKind::Text => {}
            FieldKind::Email => {
                if !email_regex().is_match(value) {
                    errors.add(self.name, "Enter a valid email address");
                }
            }
            // Parses with the storage type so an accepted value always fits.
            FieldKind::NonNegativeInt => match value.parse::<u32>() {
                Ok(_) => {}
                Err(_) => match value.parse::<i128>() {
                    Ok(parsed) if parsed < 0 => errors.add(
                        self.name,
                        "Ensure this value is greater than or equal to 0",
                    ),
                    Ok(_) => errors.add(
                        self.name,
                        format!("Ensure this value is less than or equal to {}", u32::MAX),
                    ),
                    Err(_) => errors.add(self.name, "Enter a whole number"),
                },
            },
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Deliberately conservative: local@domain.tld with no whitespace.
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn run_specs(specs: &[FieldSpec], data: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for spec in specs {
        spec.check(data.field(spec.name), &mut errors);
    }
    errors
}

const PASSWORD_MIN_LEN: usize = 8;

fn check_password_pair(
    password1: &str,
    password2: &str,
    errors: &mut FieldErrors,
) {
    if password1 != password2 {
        errors.add("password2", "The two password fields didn't match");
    }
    if password1.chars().count() < PASSWORD_MIN_LEN {
        errors.add(
            "password1",
            "This password is too short. It must contain at least 8 characters",
        );
    }
}

/// Validated registration submission.
#[derive(Debug, Clone)]
pub struct RegisterSubmission {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Registration form.
pub struct RegisterForm;

impl RegisterForm {
    const SPECS: [FieldSpec; 6] = [
        FieldSpec::text("username", true, 150),
        FieldSpec::password("password1", true),
        FieldSpec::password("password2", true),
        FieldSpec::email("email", false),
        FieldSpec::text("first_name", false, 150),
        FieldSpec::text("last_name", false, 150),
    ];

    /// Validate a registration submission.
    ///
    /// `username_taken` reflects a store lookup done by the caller; it is a
    /// field-scoped rule, so the duplicate error attaches to `username` and
    /// is reported even when unrelated fields also fail.
    pub fn parse(
        data: &FormData,
        username_taken: bool,
    ) -> Result<RegisterSubmission, FieldErrors> {
        let mut errors = run_specs(&Self::SPECS, data);
        if !errors.contains("username") && !data.field("username").is_empty() && username_taken {
            errors.add("username", "A user with that username already exists");
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        check_password_pair(data.field("password1"), data.field("password2"), &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegisterSubmission {
            username: data.field("username").to_owned(),
            password: data.field("password1").to_owned(),
            email: data.field("email").to_owned(),
            first_name: data.field("first_name").to_owned(),
            last_name: data.field("last_name").to_owned(),
        })
    }
}

/// Validated profile edit submission.
#[derive(Debug, Clone)]
pub struct ProfileEditSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Present only when the submission supplied a new password.
    pub new_password: Option<String>,
}

/// Profile edit form. Every field is optional; password rules apply only
/// when a new password was supplied.
pub struct ProfileEditForm;

impl ProfileEditForm {
    const SPECS: [FieldSpec; 5] = [
        FieldSpec::text("first_name", false, 150),
        FieldSpec::text("last_name", false, 150),
        FieldSpec::email("email", false),
        FieldSpec::password("password1", false),
        FieldSpec::password("password2", false),
    ];

    pub fn parse(data: &FormData) -> Result<ProfileEditSubmission, FieldErrors> {
        let mut errors = run_specs(&Self::SPECS, data);
        if !errors.is_empty() {
            return Err(errors);
        }

        let password1 = data.field("password1");
        if !password1.is_empty() {
            check_password_pair(password1, data.field("password2"), &mut errors);
            if !errors.is_empty() {
                return Err(errors);
            }
        }

        Ok(ProfileEditSubmission {
            first_name: data.field("first_name").to_owned(),
            last_name: data.field("last_name").to_owned(),
            email: data.field("email").to_owned(),
            new_password: (!password1.is_empty()).then(|| password1.to_owned()),
        })
    }
}

/// Validated bank creation submission.
#[derive(Debug, Clone)]
pub struct BankSubmission {
    pub name: String,
    pub description: String,
    pub institution_number: String,
    pub swift_code: String,
}

/// Bank creation form.
pub struct BankForm;

impl BankForm {
    const SPECS: [FieldSpec; 4] = [
        FieldSpec::text("name", true, 200),
        FieldSpec::text("description", true, 200),
        FieldSpec::text("inst_num", true, 200),
        FieldSpec::text("swift_code", true, 200),
    ];

    pub fn parse(data: &FormData) -> Result<BankSubmission, FieldErrors> {
        let errors = run_specs(&Self::SPECS, data);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(BankSubmission {
            name: data.field("name").to_owned(),
            description: data.field("description").to_owned(),
            institution_number: data.field("inst_num").to_owned(),
            swift_code: data.field("swift_code").to_owned(),
        })
    }
}

/// Branch creation/edit form. Shared by both operations; only the guard
/// chain in front of the handler differs.
pub struct BranchForm;

impl BranchForm {
    const SPECS: [FieldSpec; 5] = [
        FieldSpec::text("name", true, 200),
        FieldSpec::text("transit_num", true, 200),
        FieldSpec::text("address", true, 200),
        FieldSpec::email("email", true),
        FieldSpec {
            name: "capacity",
            kind: FieldKind::NonNegativeInt,
            required: false,
            max_len: None,
        },
    ];

    pub fn parse(data: &FormData) -> Result<BranchFields, FieldErrors> {
        let errors = run_specs(&Self::SPECS, data);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(BranchFields {
            name: data.field("name").to_owned(),
            transit_number: data.field("transit_num").to_owned(),
            address: data.field("address").to_owned(),
            email: data.field("email").to_owned(),
            // The field stage parsed this as u32; blank reads as None.
            capacity: data.field("capacity").parse().ok(),
        })
    }
}
