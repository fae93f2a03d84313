use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
}

/// One declared form field: identity, presentation strings, and the rules it
/// is validated against. Field sets are `&'static` tables, so a form's shape
/// is configuration rather than code.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Short noun used in error messages ("Name is required"), which can
    /// differ from the rendered label ("Full Name").
    pub error_label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [Rule],
    /// Display cap for length-tracked fields. Drives the character counter
    /// only; enforcement is a `Rule` if a field wants one.
    pub char_cap: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank after trimming.
    Required,
    /// `local@domain.tld` shape.
    Email,
    MinLength(usize),
    MaxLength(usize),
}

impl Rule {
    fn check(&self, spec: &FieldSpec, value: &str) -> Option<String> {
        match self {
            Rule::Required => {
                if value.trim().is_empty() {
                    Some(format!("{} is required", spec.error_label))
                } else {
                    None
                }
            }
            Rule::Email => {
                if EMAIL_RE.is_match(value) {
                    None
                } else {
                    Some("Invalid email format".to_string())
                }
            }
            Rule::MinLength(min) => {
                if value.chars().count() < *min {
                    Some(format!(
                        "{} must be at least {} characters",
                        spec.error_label, min
                    ))
                } else {
                    None
                }
            }
            Rule::MaxLength(max) => {
                if value.chars().count() > *max {
                    Some(format!(
                        "{} must be at most {} characters",
                        spec.error_label, max
                    ))
                } else {
                    None
                }
            }
        }
    }
}

/// Checks a single value against its field's rules. The first failing rule
/// wins, so a field shows at most one message at a time.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Option<String> {
    spec.rules.iter().find_map(|rule| rule.check(spec, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    static SPEC: FieldSpec = FieldSpec {
        name: "message",
        label: "Message",
        error_label: "Message",
        placeholder: "",
        kind: FieldKind::Textarea,
        rules: &[Rule::Required, Rule::MinLength(10), Rule::MaxLength(500)],
        char_cap: Some(500),
    };

    #[test]
    fn required_rejects_blank_and_whitespace() {
        assert_eq!(
            validate_field(&SPEC, ""),
            Some("Message is required".to_string())
        );
        assert_eq!(
            validate_field(&SPEC, "   \t  "),
            Some("Message is required".to_string())
        );
    }

    #[test]
    fn first_failing_rule_wins() {
        // blank fails both Required and MinLength; only Required's message shows
        assert_eq!(
            validate_field(&SPEC, ""),
            Some("Message is required".to_string())
        );
    }

    #[test]
    fn min_length_boundaries() {
        assert!(validate_field(&SPEC, "123456789")
            .expect("9 chars should fail")
            .contains("at least 10"));
        assert_eq!(validate_field(&SPEC, "1234567890"), None);
    }

    #[test]
    fn max_length_boundaries() {
        assert_eq!(validate_field(&SPEC, &"x".repeat(500)), None);
        assert!(validate_field(&SPEC, &"x".repeat(501))
            .expect("501 chars should fail")
            .contains("at most 500"));
    }

    #[test]
    fn email_shapes() {
        let spec = FieldSpec {
            name: "email",
            label: "Email Address",
            error_label: "Email",
            placeholder: "",
            kind: FieldKind::Email,
            rules: &[Rule::Email],
            char_cap: None,
        };
        assert_eq!(validate_field(&spec, "user@example.com"), None);
        assert_eq!(validate_field(&spec, "a@b.co"), None);
        for bad in ["invalid-email", "@example.com", "user@", "a b@c.com", "a@b"] {
            assert_eq!(
                validate_field(&spec, bad),
                Some("Invalid email format".to_string()),
                "{bad:?} should be rejected"
            );
        }
    }
}
