//! Field validators and input sanitizers.
//!
//! Every validator is a pure function from a raw field value to
//! `Ok(())` or a [`Rejection`] carrying a human-readable reason. Rules are
//! checked in a fixed order and the first failing rule wins:
//! required-ness, length bounds, character class / pattern, numeric range,
//! then cross-field rules.
//!
//! Sanitizers are the keystroke filter applied before a value is stored.
//! They are idempotent and never reject.

use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::*;
use crate::employee::Division;

static EMP_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("employee id pattern is valid"));

static ALL_CAPS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z ]+$").expect("all-caps pattern is valid"));

static ADDRESS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9 ,.\-/]+$").expect("address pattern is valid"));

static DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is valid"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email pattern is valid"));

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    message: String,
}

impl Rejection {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating a single field
pub type FieldResult = Result<(), Rejection>;

/// Input of a picker-style field: nothing chosen, a parsed value, or text
/// that did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<T> {
    Empty,
    Valid(T),
    Invalid(String),
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Entry::Empty
    }
}

impl<T: FromStr> Entry<T> {
    /// Parse raw input; blank input is `Empty`.
    pub fn parse(raw: &str) -> Self {
        Self::parse_with(raw, |s| s.parse())
    }
}

impl<T> Entry<T> {
    /// Parse raw input with a custom parser; blank input is `Empty`.
    pub fn parse_with<E>(raw: &str, parse: impl FnOnce(&str) -> Result<T, E>) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Entry::Empty;
        }
        match parse(trimmed) {
            Ok(value) => Entry::Valid(value),
            Err(_) => Entry::Invalid(trimmed.to_string()),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Entry::Valid(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Entry::Empty)
    }
}

// =============================================================================
// Building blocks
// =============================================================================

fn require(value: &str, message: &str) -> FieldResult {
    if value.trim().is_empty() {
        Err(Rejection::new(message))
    } else {
        Ok(())
    }
}

fn check_min_length(value: &str, min: usize) -> FieldResult {
    if value.chars().count() < min {
        Err(Rejection::new(format!("At least {} characters", min)))
    } else {
        Ok(())
    }
}

fn check_max_length(value: &str, max: usize) -> FieldResult {
    if value.chars().count() > max {
        Err(Rejection::new(format!(
            "Must be under or equal to {} characters",
            max
        )))
    } else {
        Ok(())
    }
}

fn check_pattern(value: &str, pattern: &Regex, message: &str) -> FieldResult {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(Rejection::new(message))
    }
}

/// True when some letter appears more than `limit` times in a row.
pub fn has_letter_run(value: &str, limit: usize) -> bool {
    let mut previous = None;
    let mut run = 0;
    for c in value.chars() {
        if Some(c) == previous {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }
        if c.is_ascii_alphabetic() && run > limit {
            return true;
        }
    }
    false
}

// =============================================================================
// Free-text fields
// =============================================================================

/// Employee ID: exactly six digits.
pub fn validate_emp_id(value: &str) -> FieldResult {
    require(value, "Employee ID is required")?;
    check_pattern(
        value,
        &EMP_ID_REGEX,
        "Employee ID must be exactly 6 digits, numbers only",
    )
}

/// Uppercase letters and blanks only, within `min..=max` characters, with
/// no letter repeated three or more times in a row.
pub fn validate_all_caps(value: &str, min: usize, max: usize) -> FieldResult {
    require(value, "This field is required")?;
    check_min_length(value, min)?;
    check_max_length(value, max)?;
    check_pattern(
        value,
        &ALL_CAPS_REGEX,
        "Only CAPITAL LETTERS and spaces are allowed",
    )?;
    if has_letter_run(value, MAX_REPEATED_LETTERS) {
        return Err(Rejection::new("No more than two repeated letters in a row"));
    }
    Ok(())
}

pub fn validate_emp_name(value: &str) -> FieldResult {
    validate_all_caps(value, MIN_EMP_NAME_LENGTH, MAX_EMP_NAME_LENGTH)
}

pub fn validate_role_name(value: &str) -> FieldResult {
    validate_all_caps(value, MIN_ROLE_NAME_LENGTH, MAX_ROLE_NAME_LENGTH)
}

/// Ten digits starting with 6, 7, 8 or 9.
pub fn validate_phone(value: &str) -> FieldResult {
    require(value, "Phone number is required")?;
    let valid = value.len() == PHONE_LENGTH
        && value.starts_with(PHONE_LEADING_DIGITS)
        && DIGITS_REGEX.is_match(value);
    if valid {
        Ok(())
    } else {
        Err(Rejection::new(
            "Phone must be a valid 10-digit Indian number (starts with 6/7/8/9)",
        ))
    }
}

pub fn validate_address(value: &str) -> FieldResult {
    require(value, "Address is required")?;
    check_min_length(value, MIN_ADDRESS_LENGTH)?;
    check_max_length(value, MAX_ADDRESS_LENGTH)?;
    check_pattern(
        value,
        &ADDRESS_REGEX,
        "Only CAPITAL LETTERS, numbers, spaces, comma, dot, hyphen, and slash allowed",
    )
}

/// Parse an age, applying the age rules.
pub fn parse_age(value: &str) -> Result<u8, Rejection> {
    require(value, "Age is required")?;
    check_pattern(value, &DIGITS_REGEX, "Age must be digits only")?;
    // Digit strings too long for u32 are above any allowed age.
    let age = value.parse::<u32>().unwrap_or(u32::MAX);
    if age < MIN_AGE {
        return Err(Rejection::new(format!("Minimum age is {}", MIN_AGE)));
    }
    if age > MAX_AGE {
        return Err(Rejection::new(format!("Maximum age is {}", MAX_AGE)));
    }
    u8::try_from(age).map_err(|_| Rejection::new(format!("Maximum age is {}", MAX_AGE)))
}

pub fn validate_age(value: &str) -> FieldResult {
    parse_age(value).map(|_| ())
}

pub fn validate_role_number(value: &str) -> FieldResult {
    require(value, "Role Number is required")?;
    check_max_length(value, MAX_ROLE_NUMBER_LENGTH)?;
    check_pattern(value, &DIGITS_REGEX, "Role Number must contain digits only")
}

/// Optional; when present, a single `@` and a dotted domain.
pub fn validate_email(value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Ok(());
    }
    if value.chars().count() > MAX_EMAIL_LENGTH {
        return Err(Rejection::new(format!(
            "Email must be under {} characters",
            MAX_EMAIL_LENGTH
        )));
    }
    check_pattern(value, &EMAIL_REGEX, "Invalid email format")
}

// =============================================================================
// Selections
// =============================================================================

fn require_entry<T>(entry: &Entry<T>, required: &str, invalid: &str) -> FieldResult {
    match entry {
        Entry::Empty => Err(Rejection::new(required)),
        Entry::Invalid(_) => Err(Rejection::new(invalid)),
        Entry::Valid(_) => Ok(()),
    }
}

pub fn validate_gender<T>(entry: &Entry<T>) -> FieldResult {
    require_entry(
        entry,
        "Gender selection is required",
        "Gender must be Male, Female or Other",
    )
}

pub fn validate_na_flag<T>(entry: &Entry<T>) -> FieldResult {
    require_entry(
        entry,
        "NA Flag selection is required",
        "NA Flag must be Y or N",
    )
}

const DATE_FORMAT_MESSAGE: &str = "Date must be in YYYY-MM-DD format";

pub fn validate_from_date(entry: &Entry<NaiveDate>) -> FieldResult {
    require_entry(entry, "From Date selection is required", DATE_FORMAT_MESSAGE)
}

/// To Date is optional but must not precede From Date.
pub fn validate_to_date(to: &Entry<NaiveDate>, from: &Entry<NaiveDate>) -> FieldResult {
    match to {
        Entry::Empty => Ok(()),
        Entry::Invalid(_) => Err(Rejection::new(DATE_FORMAT_MESSAGE)),
        Entry::Valid(to) => validate_date_range(from.value().copied(), Some(*to)),
    }
}

/// Cross-field rule: when both dates are present, `to >= from`.
pub fn validate_date_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> FieldResult {
    match (from, to) {
        (Some(from), Some(to)) if to < from => {
            Err(Rejection::new("To Date cannot be before From Date"))
        }
        _ => Ok(()),
    }
}

fn require_selection(value: Option<&str>, message: &str) -> FieldResult {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(Rejection::new(message)),
    }
}

pub fn validate_directorate(value: Option<&str>) -> FieldResult {
    require_selection(value, "Directorate selection is required")
}

pub fn validate_division(value: Option<&str>) -> FieldResult {
    require_selection(value, "Division selection is required")
}

/// The chosen division must be one of the selected directorate's divisions.
pub fn validate_division_membership(division: &str, options: &[Division]) -> FieldResult {
    if options.iter().any(|d| d.division_id == division) {
        Ok(())
    } else {
        Err(Rejection::new(
            "Division does not belong to the selected directorate",
        ))
    }
}

// =============================================================================
// Sanitizers
// =============================================================================

/// Keep at most `max` characters.
pub fn truncate(raw: &str, max: usize) -> String {
    raw.chars().take(max).collect()
}

/// Uppercase, then drop everything but `A-Z` and blank.
pub fn sanitize_all_caps(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == ' ')
        .collect()
}

/// Uppercase, then drop everything outside the address character class.
pub fn sanitize_address(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| {
            c.is_ascii_uppercase() || c.is_ascii_digit() || matches!(c, ' ' | ',' | '.' | '-' | '/')
        })
        .collect()
}
