//! Credential Validation
//!
//! Pure validation helpers for the sign-in and sign-up forms. The rules
//! mirror what the backend enforces so invalid submissions are rejected
//! before any request is made.

/// Email shape check: `local@domain.tld` with a 2-4 letter TLD.
///
/// Local part allows ASCII alphanumerics plus `.`, `_` and `-`; the domain
/// allows alphanumerics plus `.` and `-` with at least one dot.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return false;
    }
    let Some((head, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if head.is_empty()
        || !head
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
    {
        return false;
    }
    (2..=4).contains(&tld.len()) && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Password policy: at least 8 characters with at least one lowercase
/// letter, one uppercase letter and one digit.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("user_name-1@my-host.io"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user@example.technology"));
        assert!(!is_valid_email("user@example.c0m"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_tld_length_bounds() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("a@b.info"));
        assert!(!is_valid_email("a@b.infos"));
    }

    #[test]
    fn test_valid_password() {
        assert!(is_valid_password("Zaq12wsx"));
        assert!(is_valid_password("Password1"));
    }

    #[test]
    fn test_invalid_password() {
        assert!(!is_valid_password(""));
        // too short
        assert!(!is_valid_password("Zaq12ws"));
        // missing uppercase
        assert!(!is_valid_password("zaq12wsx"));
        // missing lowercase
        assert!(!is_valid_password("ZAQ12WSX"));
        // missing digit
        assert!(!is_valid_password("Zaqwsxed"));
    }
}
