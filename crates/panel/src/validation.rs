use std::fmt::Display;
use std::str::FromStr;
use userpanel_domain::{Contact, Entity, User, UserStatus, ID};

/// Form fields across both record variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Role,
    Status,
    Age,
    Address,
    CellNumber,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Status => "status",
            Self::Age => "age",
            Self::Address => "address",
            Self::CellNumber => "cell number",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Required,
    InvalidEmail,
    EmailTaken,
    UnknownStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub kind: ViolationKind,
}

impl Violation {
    fn required(field: Field) -> Self {
        Self {
            field,
            kind: ViolationKind::Required,
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self.kind {
            ViolationKind::Required => "is required",
            ViolationKind::InvalidEmail => "is not a valid email address",
            ViolationKind::EmailTaken => "is already in use",
            ViolationKind::UnknownStatus => "is not a known status",
        };
        write!(f, "{} {}", self.field, reason)
    }
}

/// Accessor for the duplicate-email check.
pub trait HasEmail {
    fn email(&self) -> &str;
}

impl HasEmail for User {
    fn email(&self) -> &str {
        &self.email
    }
}

impl HasEmail for Contact {
    fn email(&self) -> &str {
        &self.email
    }
}

/// Case-insensitive scan of the snapshot for `email`, exempting the record
/// currently being edited.
pub fn is_email_taken<R>(records: &[R], email: &str, editing: Option<&ID>) -> bool
where
    R: HasEmail + Entity<ID>,
{
    let email = email.to_lowercase();
    records.iter().any(|record| {
        record.email().to_lowercase() == email && editing.map_or(true, |id| &record.id() != id)
    })
}

// Same shape as the `local@domain.tld` check the panels always used: exactly
// one `@`, no whitespace, and a dot somewhere in the domain with something
// on both sides of it.
fn valid_email_shape(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let (host, tld) = match domain.rfind('.') {
        Some(dot) => (&domain[..dot], &domain[dot + 1..]),
        None => return false,
    };
    !host.is_empty()
        && !tld.is_empty()
        && !domain.chars().any(char::is_whitespace)
}

/// Raw submission from the user form. Everything arrives as text.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

/// A validated, trimmed user submission, ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

/// Raw submission from the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub age: String,
    pub email: String,
    pub address: String,
    pub cell_number: String,
}

/// A validated, trimmed contact submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub age: String,
    pub email: String,
    pub address: String,
    pub cell_number: String,
}

fn check_email<R>(
    email: &str,
    snapshot: &[R],
    editing: Option<&ID>,
    violations: &mut Vec<Violation>,
) where
    R: HasEmail + Entity<ID>,
{
    if email.is_empty() {
        violations.push(Violation::required(Field::Email));
        return;
    }
    if !valid_email_shape(email) {
        violations.push(Violation {
            field: Field::Email,
            kind: ViolationKind::InvalidEmail,
        });
    }
    if is_email_taken(snapshot, email, editing) {
        violations.push(Violation {
            field: Field::Email,
            kind: ViolationKind::EmailTaken,
        });
    }
}

/// Validates a user submission against the current snapshot. All fields are
/// checked, so the caller gets the full violation list and not just the
/// first offender.
pub fn validate_user(
    form: &UserForm,
    snapshot: &[User],
    editing: Option<&ID>,
) -> Result<UserDraft, Vec<Violation>> {
    let name = form.name.trim();
    let email = form.email.trim();
    let role = form.role.trim();
    let status = form.status.trim();

    let mut violations = Vec::new();

    if name.is_empty() {
        violations.push(Violation::required(Field::Name));
    }
    check_email(email, snapshot, editing, &mut violations);
    if role.is_empty() {
        violations.push(Violation::required(Field::Role));
    }

    let mut parsed_status = None;
    if status.is_empty() {
        violations.push(Violation::required(Field::Status));
    } else {
        match UserStatus::from_str(status) {
            Ok(status) => parsed_status = Some(status),
            Err(_) => violations.push(Violation {
                field: Field::Status,
                kind: ViolationKind::UnknownStatus,
            }),
        }
    }

    match (violations.is_empty(), parsed_status) {
        (true, Some(status)) => Ok(UserDraft {
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status,
        }),
        _ => Err(violations),
    }
}

/// Validates a contact submission against the current snapshot.
pub fn validate_contact(
    form: &ContactForm,
    snapshot: &[Contact],
    editing: Option<&ID>,
) -> Result<ContactDraft, Vec<Violation>> {
    let name = form.name.trim();
    let age = form.age.trim();
    let email = form.email.trim();
    let address = form.address.trim();
    let cell_number = form.cell_number.trim();

    let mut violations = Vec::new();

    if name.is_empty() {
        violations.push(Violation::required(Field::Name));
    }
    if age.is_empty() {
        violations.push(Violation::required(Field::Age));
    }
    check_email(email, snapshot, editing, &mut violations);
    if address.is_empty() {
        violations.push(Violation::required(Field::Address));
    }
    if cell_number.is_empty() {
        violations.push(Violation::required(Field::CellNumber));
    }

    if violations.is_empty() {
        Ok(ContactDraft {
            name: name.to_string(),
            age: age.to_string(),
            email: email.to_string(),
            address: address.to_string(),
            cell_number: cell_number.to_string(),
        })
    } else {
        Err(violations)
    }
}
