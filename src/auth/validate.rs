//! Explicit per-operation payload validation. Checks run in field order and
//! stop at the first violated constraint.

use lazy_static::lazy_static;
use regex::Regex;

use crate::auth::dto::CredentialsPayload;

const EMAIL_MIN: usize = 6;
const EMAIL_MAX: usize = 255;
const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 1024;

/// Validated credentials with the email normalized for lookup.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub fn register(payload: &CredentialsPayload) -> Result<Credentials, String> {
    credentials(payload)
}

pub fn login(payload: &CredentialsPayload) -> Result<Credentials, String> {
    credentials(payload)
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn credentials(payload: &CredentialsPayload) -> Result<Credentials, String> {
    let email = payload
        .email
        .as_deref()
        .ok_or_else(|| "\"email\" is required".to_string())?
        .trim()
        .to_lowercase();
    if email.len() < EMAIL_MIN {
        return Err(format!(
            "\"email\" must be at least {EMAIL_MIN} characters"
        ));
    }
    if email.len() > EMAIL_MAX {
        return Err(format!("\"email\" must be at most {EMAIL_MAX} characters"));
    }
    if !is_valid_email(&email) {
        return Err("\"email\" must be a valid email".to_string());
    }

    let password = payload
        .password
        .as_deref()
        .ok_or_else(|| "\"password\" is required".to_string())?;
    if password.len() < PASSWORD_MIN {
        return Err(format!(
            "\"password\" must be at least {PASSWORD_MIN} characters"
        ));
    }
    if password.len() > PASSWORD_MAX {
        return Err(format!(
            "\"password\" must be at most {PASSWORD_MAX} characters"
        ));
    }

    Ok(Credentials {
        email,
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(email: Option<&str>, password: Option<&str>) -> CredentialsPayload {
        CredentialsPayload {
            email: email.map(|s| s.to_string()),
            password: password.map(|s| s.to_string()),
        }
    }

    #[test]
    fn accepts_valid_credentials_and_normalizes_email() {
        let creds = register(&payload(Some("  A@B.com "), Some("secret1"))).expect("valid");
        assert_eq!(creds.email, "a@b.com");
        assert_eq!(creds.password, "secret1");
    }

    #[test]
    fn missing_fields_report_first_violation() {
        let err = register(&payload(None, Some("secret1"))).unwrap_err();
        assert_eq!(err, "\"email\" is required");
        let err = register(&payload(Some("a@b.com"), None)).unwrap_err();
        assert_eq!(err, "\"password\" is required");
    }

    #[test]
    fn email_without_at_sign_rejected() {
        let err = login(&payload(Some("not-an-email"), Some("secret1"))).unwrap_err();
        assert_eq!(err, "\"email\" must be a valid email");
    }

    #[test]
    fn short_email_rejected_before_format_check() {
        let err = register(&payload(Some("a@b"), Some("secret1"))).unwrap_err();
        assert_eq!(err, "\"email\" must be at least 6 characters");
    }

    #[test]
    fn password_length_bounds_enforced() {
        let err = login(&payload(Some("a@b.com"), Some("abc"))).unwrap_err();
        assert_eq!(err, "\"password\" must be at least 6 characters");
        let long = "x".repeat(1025);
        let err = login(&payload(Some("a@b.com"), Some(&long))).unwrap_err();
        assert_eq!(err, "\"password\" must be at most 1024 characters");
    }

    #[test]
    fn overlong_email_rejected() {
        let local = "x".repeat(250);
        let email = format!("{local}@example.com");
        let err = register(&payload(Some(&email), Some("secret1"))).unwrap_err();
        assert_eq!(err, "\"email\" must be at most 255 characters");
    }
}
