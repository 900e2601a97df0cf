// =============================================================================
// Contact Site - Contact Form Validation
// =============================================================================
// Table of Contents:
// 1. Fields
// 2. Field Errors
// 3. Field Validators
// 4. Contact Form
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("valid name pattern"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]").expect("valid separator pattern"));
static PHONE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid digit pattern"));

const NAME_MIN_CHARS: usize = 3;
const MESSAGE_MIN_CHARS: usize = 10;
const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;

// -----------------------------------------------------------------------------
// 1. Fields
// -----------------------------------------------------------------------------

/// One of the four contact form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Visible label used by the form markup.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }

    /// Run this field's validator against an already trimmed value.
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        match self {
            Field::Name => validate_name(value),
            Field::Email => validate_email(value),
            Field::Phone => validate_phone(value),
            Field::Message => validate_message(value),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Field Errors
// -----------------------------------------------------------------------------

/// Why a field value was rejected. `Display` is the message shown to the visitor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be at least 3 characters long")]
    NameTooShort,

    #[error("Name can only contain letters and spaces")]
    NameInvalidChars,

    #[error("Email is required")]
    EmailRequired,

    #[error("Email must contain @ symbol")]
    EmailMissingAt,

    #[error("Email must contain a dot (.) after @ symbol")]
    EmailMissingDot,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Phone number is required")]
    PhoneRequired,

    #[error("Phone number can only contain numbers")]
    PhoneNotNumeric,

    #[error("Phone number must be at least 10 digits")]
    PhoneTooShort,

    #[error("Phone number cannot exceed 15 digits")]
    PhoneTooLong,

    #[error("Message is required")]
    MessageRequired,

    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

// -----------------------------------------------------------------------------
// 3. Field Validators
// -----------------------------------------------------------------------------
// Each validator expects a trimmed value; the first failing rule wins.

/// Validate a visitor name: at least 3 characters, ASCII letters and spaces only.
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if utf16_len(name) < NAME_MIN_CHARS {
        return Err(FieldError::NameTooShort);
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(FieldError::NameInvalidChars);
    }
    Ok(())
}

/// Validate an email address.
///
/// The `@` and dot checks run before the full pattern so the visitor gets
/// the most specific message available.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    let Some(at) = email.find('@') else {
        return Err(FieldError::EmailMissingAt);
    };
    if !email[at..].contains('.') {
        return Err(FieldError::EmailMissingDot);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

/// Validate a phone number. Spaces and hyphens are ignored when counting digits.
pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    if phone.is_empty() {
        return Err(FieldError::PhoneRequired);
    }
    let digits = strip_phone_separators(phone);
    if !PHONE_DIGITS.is_match(&digits) {
        return Err(FieldError::PhoneNotNumeric);
    }
    if digits.len() < PHONE_MIN_DIGITS {
        return Err(FieldError::PhoneTooShort);
    }
    if digits.len() > PHONE_MAX_DIGITS {
        return Err(FieldError::PhoneTooLong);
    }
    Ok(())
}

/// Validate the free-text message: at least 10 characters.
pub fn validate_message(message: &str) -> Result<(), FieldError> {
    if message.is_empty() {
        return Err(FieldError::MessageRequired);
    }
    if utf16_len(message) < MESSAGE_MIN_CHARS {
        return Err(FieldError::MessageTooShort);
    }
    Ok(())
}

/// Length as the browser reports it for an input value, in UTF-16 code units.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Remove spaces and hyphens from a phone number.
pub fn strip_phone_separators(phone: &str) -> String {
    PHONE_SEPARATORS.replace_all(phone, "").into_owned()
}

// -----------------------------------------------------------------------------
// 4. Contact Form
// -----------------------------------------------------------------------------

/// Trimmed values of the four contact fields, captured at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Build a form from raw input, trimming every value.
    pub fn from_raw(name: &str, email: &str, phone: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Validate every field independently and collect the failures in form order.
    pub fn validate(&self) -> Vec<(Field, FieldError)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| field.validate(self.get(field)).err().map(|e| (field, e)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_fail_on_length_regardless_of_content() {
        for name in ["a", "Jo", "1!", "  ", "é9"] {
            assert_eq!(validate_name(name), Err(FieldError::NameTooShort), "{name:?}");
        }
    }

    #[test]
    fn test_name_rejects_digits_and_punctuation() {
        for name in ["John3", "Mary-Jane", "O'Brien", "Ann.", "Bob_Smith", "Zoë Li"] {
            assert_eq!(validate_name(name), Err(FieldError::NameInvalidChars), "{name:?}");
        }
        assert_eq!(validate_name("John Smith"), Ok(()));
        assert_eq!(validate_name(""), Err(FieldError::NameRequired));
    }

    #[test]
    fn test_email_rules_in_order() {
        assert_eq!(validate_email(""), Err(FieldError::EmailRequired));
        assert_eq!(validate_email("ab.com"), Err(FieldError::EmailMissingAt));
        assert_eq!(validate_email("a@b"), Err(FieldError::EmailMissingDot));
        assert_eq!(validate_email("first.last@host"), Err(FieldError::EmailMissingDot));
        assert_eq!(validate_email("a@b.c"), Ok(()));
        assert_eq!(validate_email("john@example.com"), Ok(()));
    }

    #[test]
    fn test_email_pattern_catches_remaining_shapes() {
        assert_eq!(validate_email("@b.c"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@.c"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@b."), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a b@c.d"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@b@c.d"), Err(FieldError::EmailInvalid));
    }

    #[test]
    fn test_phone_strips_separators() {
        assert_eq!(strip_phone_separators("123-456-7890"), "1234567890");
        assert_eq!(strip_phone_separators("555 123 4567"), "5551234567");
        assert_eq!(validate_phone("123-456-7890"), Ok(()));
    }

    #[test]
    fn test_phone_length_bounds() {
        assert_eq!(validate_phone("12345"), Err(FieldError::PhoneTooShort));
        assert_eq!(validate_phone("1234567890123456"), Err(FieldError::PhoneTooLong));
        assert_eq!(validate_phone("123456789012345"), Ok(()));
        assert_eq!(validate_phone("+1 555 123 4567"), Err(FieldError::PhoneNotNumeric));
        assert_eq!(validate_phone("(555) 1234567"), Err(FieldError::PhoneNotNumeric));
        assert_eq!(validate_phone(""), Err(FieldError::PhoneRequired));
    }

    #[test]
    fn test_message_length_boundary() {
        assert_eq!(validate_message("0123456789"), Ok(()));
        assert_eq!(validate_message("012345678"), Err(FieldError::MessageTooShort));
        assert_eq!(validate_message(""), Err(FieldError::MessageRequired));
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        // Each emoji is two UTF-16 units, so five of them reach the minimum.
        assert_eq!(validate_message("😀😀😀😀😀"), Ok(()));
        assert_eq!(validate_message("😀😀😀😀"), Err(FieldError::MessageTooShort));
        assert_eq!(validate_message("ééééééééé"), Err(FieldError::MessageTooShort));
        assert_eq!(validate_name("😀😀"), Err(FieldError::NameInvalidChars));
        assert_eq!(utf16_len("a😀"), 3);
    }

    #[test]
    fn test_messages_match_display() {
        assert_eq!(FieldError::PhoneTooLong.to_string(), "Phone number cannot exceed 15 digits");
        assert_eq!(
            FieldError::EmailMissingDot.to_string(),
            "Email must contain a dot (.) after @ symbol"
        );
    }

    #[test]
    fn test_form_collects_every_failure() {
        let form = ContactForm::from_raw("", "", "", "");
        let failures = form.validate();
        assert_eq!(
            failures,
            vec![
                (Field::Name, FieldError::NameRequired),
                (Field::Email, FieldError::EmailRequired),
                (Field::Phone, FieldError::PhoneRequired),
                (Field::Message, FieldError::MessageRequired),
            ]
        );

        let form = ContactForm::from_raw(
            "  John Smith ",
            "john@example.com",
            "555-123-4567",
            "Hello, this is a test message.",
        );
        assert_eq!(form.name, "John Smith");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_one_bad_field_does_not_mask_others() {
        let form = ContactForm::from_raw("Jo", "john@example.com", "12345", "Hello there, friend");
        let failed: Vec<Field> = form.validate().into_iter().map(|(f, _)| f).collect();
        assert_eq!(failed, vec![Field::Name, Field::Phone]);
    }
}
