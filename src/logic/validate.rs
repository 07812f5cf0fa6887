// SPDX-License-Identifier: MIT

//! Declarative validation for the registration form.
//!
//! Field rules are pure, order-independent predicates evaluated with
//! per-field short-circuiting (the first failing rule for a field wins).
//! Cross-field rules run only once every field-level rule has passed, and
//! each failure attaches to a concrete field rather than the form globally.

use email_address::EmailAddress;

use crate::models::registration::{Field, FieldErrors, RegistrationInput, RegistrationPayload};

/// A single field-level rule.
struct FieldRule {
    field: Field,
    check: fn(&RegistrationInput) -> bool,
    message: &'static str,
}

/// A rule spanning several fields; failures attach to `attach_to`.
struct CrossRule {
    attach_to: Field,
    check: fn(&RegistrationInput) -> bool,
    message: &'static str,
}

const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Name,
        check: |input| input.name.trim().chars().count() >= 2,
        message: "Name must be at least 2 characters.",
    },
    FieldRule {
        field: Field::Email,
        check: |input| EmailAddress::is_valid(input.email.trim()),
        message: "Enter a valid email address.",
    },
    FieldRule {
        field: Field::Password,
        check: |input| input.password.chars().count() >= 8,
        message: "Password must be at least 8 characters.",
    },
    FieldRule {
        field: Field::ConfirmPassword,
        check: |input| input.confirm_password.chars().count() >= 8,
        message: "Confirmation must be at least 8 characters.",
    },
];

const CROSS_RULES: &[CrossRule] = &[CrossRule {
    attach_to: Field::ConfirmPassword,
    check: |input| input.password == input.confirm_password,
    message: "Passwords do not match.",
}];

/// Validate the form and build the wire payload on success.
pub fn validate(input: &RegistrationInput) -> Result<RegistrationPayload, FieldErrors> {
    let mut errors = FieldErrors::new();

    for rule in FIELD_RULES {
        if errors.contains_key(&rule.field) {
            continue;
        }
        if !(rule.check)(input) {
            errors.insert(rule.field, rule.message.to_string());
        }
    }

    // Cross-field rules only fire on otherwise valid input.
    if errors.is_empty() {
        for rule in CROSS_RULES {
            if !(rule.check)(input) {
                errors
                    .entry(rule.attach_to)
                    .or_insert_with(|| rule.message.to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(RegistrationPayload {
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            password: input.password.clone(),
            role: input.role.as_str(),
            company_name: String::new(),
        })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::registration::Role;

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            password: "abcd1234".into(),
            confirm_password: "abcd1234".into(),
            role: Role::Brand,
        }
    }

    #[test]
    fn valid_input_produces_payload() {
        let payload = validate(&valid_input()).expect("input should validate");

        assert_eq!(payload.name, "Jane Doe");
        assert_eq!(payload.email, "jane@x.com");
        assert_eq!(payload.role, "brand");
        assert!(payload.company_name.is_empty());
    }

    #[test]
    fn short_name_fails_with_name_error() {
        let mut input = valid_input();
        input.name = "J".into();

        let errors = validate(&input).expect_err("short name should fail");

        assert!(errors.contains_key(&Field::Name));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn whitespace_only_name_fails() {
        let mut input = valid_input();
        input.name = "   ".into();

        let errors = validate(&input).expect_err("whitespace name should fail");

        assert!(errors.contains_key(&Field::Name));
    }

    #[test]
    fn malformed_email_fails() {
        let mut input = valid_input();
        input.email = "jane.at.x.com".into();

        let errors = validate(&input).expect_err("bad email should fail");

        assert!(errors.contains_key(&Field::Email));
    }

    #[test]
    fn mismatched_passwords_attach_to_confirm_field() {
        let mut input = valid_input();
        input.confirm_password = "abcd12345".into();

        let errors = validate(&input).expect_err("mismatch should fail");

        assert_eq!(
            errors.get(&Field::ConfirmPassword).map(String::as_str),
            Some("Passwords do not match.")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn cross_rule_waits_for_field_rules() {
        let mut input = valid_input();
        input.confirm_password = "short".into();

        let errors = validate(&input).expect_err("short confirmation should fail");

        // Length rule wins; the mismatch message never fires.
        assert_eq!(
            errors.get(&Field::ConfirmPassword).map(String::as_str),
            Some("Confirmation must be at least 8 characters.")
        );
    }

    #[test]
    fn validate_is_idempotent() {
        let input = valid_input();

        assert_eq!(validate(&input), validate(&input));

        let mut bad = input;
        bad.password = "short".into();
        assert_eq!(validate(&bad), validate(&bad));
    }
}
