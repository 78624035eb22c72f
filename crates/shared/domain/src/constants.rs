//! Domain-level constants.
//!
//! These constants define the field bounds enforced by the validators and
//! the input sanitizers.

// =============================================================================
// Identifiers
// =============================================================================

/// Exact number of digits in an employee ID
pub const EMP_ID_LENGTH: usize = 6;

// =============================================================================
// Free-text bounds
// =============================================================================

pub const MIN_EMP_NAME_LENGTH: usize = 2;
pub const MAX_EMP_NAME_LENGTH: usize = 40;

pub const MIN_ROLE_NAME_LENGTH: usize = 2;
pub const MAX_ROLE_NAME_LENGTH: usize = 20;

pub const MIN_ADDRESS_LENGTH: usize = 5;
pub const MAX_ADDRESS_LENGTH: usize = 60;

/// Maximum characters in a role number
pub const MAX_ROLE_NUMBER_LENGTH: usize = 6;

/// Maximum characters in an email address
pub const MAX_EMAIL_LENGTH: usize = 100;

/// Longest run of one repeated letter allowed in an all-caps field
pub const MAX_REPEATED_LETTERS: usize = 2;

// =============================================================================
// Phone
// =============================================================================

pub const PHONE_LENGTH: usize = 10;

/// Digits a phone number may start with
pub const PHONE_LEADING_DIGITS: &[char] = &['6', '7', '8', '9'];

// =============================================================================
// Age
// =============================================================================

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 80;

/// Input width of the age field
pub const MAX_AGE_DIGITS: usize = 3;

// =============================================================================
// Dates
// =============================================================================

/// Wire and input format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";
