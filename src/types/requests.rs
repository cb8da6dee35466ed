use serde::Deserialize;

use crate::error::EduError;

/// Input checks that run before any statement touches the store.
pub trait Validate {
    fn validate(&self) -> Result<(), EduError>;
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct StudentInput {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub state: String,
    #[serde(default)]
    pub college: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BankAccountInput {
    pub student_id: i64,
    pub account_number: String,
    pub bank_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SchemeInput {
    pub scheme_name: String,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AwarenessInput {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Requested flag changes for one account; `None` keeps the stored value.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
pub struct StatusChange {
    pub account_id: i64,
    #[serde(default)]
    pub aadhaar_linked: Option<bool>,
    #[serde(default)]
    pub dbt_enabled: Option<bool>,
}

impl StatusChange {
    pub fn is_noop(&self) -> bool {
        self.aadhaar_linked.is_none() && self.dbt_enabled.is_none()
    }
}

fn require(field: &str, value: &str) -> Result<(), EduError> {
    if value.trim().is_empty() {
        return Err(EduError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn require_id(field: &str, value: i64) -> Result<(), EduError> {
    if value <= 0 {
        return Err(EduError::Validation(format!("{field} must be positive")));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), EduError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !domain.contains('@')
        })
        && !email.chars().any(char::is_whitespace);
    if !valid {
        return Err(EduError::Validation(format!("invalid email address: {email}")));
    }
    Ok(())
}

impl Validate for StudentInput {
    fn validate(&self) -> Result<(), EduError> {
        require("name", &self.name)?;
        require("state", &self.state)?;
        if let Some(email) = self.email.as_deref() {
            check_email(email)?;
        }
        if let Some(phone) = self.phone.as_deref()
            && phone.trim().is_empty()
        {
            return Err(EduError::Validation("phone must not be blank".to_string()));
        }
        Ok(())
    }
}

impl Validate for BankAccountInput {
    fn validate(&self) -> Result<(), EduError> {
        require_id("student_id", self.student_id)?;
        require("account_number", &self.account_number)?;
        require("bank_name", &self.bank_name)
    }
}

impl Validate for SchemeInput {
    fn validate(&self) -> Result<(), EduError> {
        require("scheme_name", &self.scheme_name)
    }
}

impl Validate for AwarenessInput {
    fn validate(&self) -> Result<(), EduError> {
        require("title", &self.title)
    }
}

// Any id is accepted here; an account that does not exist is a NotFound
// from the store, not a bad request.
impl Validate for StatusChange {
    fn validate(&self) -> Result<(), EduError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> StudentInput {
        StudentInput {
            name: "Asha".into(),
            state: "KA".into(),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_student_is_valid() {
        assert!(student().validate().is_ok());
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let mut s = student();
        s.name = "   ".into();
        assert!(matches!(s.validate(), Err(EduError::Validation(_))));

        let mut s = student();
        s.state = String::new();
        assert!(matches!(s.validate(), Err(EduError::Validation(_))));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["asha", "asha@", "@example.com", "asha@example", "a sha@example.com"] {
            let mut s = student();
            s.email = Some(bad.into());
            assert!(s.validate().is_err(), "{bad} should be rejected");
        }
        let mut s = student();
        s.email = Some("asha@example.com".into());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn status_change_without_flags_is_noop_but_valid() {
        let change: StatusChange = serde_json::from_str(r#"{"account_id": 3}"#).unwrap();
        assert!(change.is_noop());
        assert!(change.validate().is_ok());

        let change = StatusChange {
            account_id: -5,
            ..Default::default()
        };
        assert!(change.validate().is_ok());
    }

    #[test]
    fn bank_account_requires_student_id_field() {
        let parsed = serde_json::from_str::<BankAccountInput>(
            r#"{"account_number": "ACC1", "bank_name": "SBI"}"#,
        );
        assert!(parsed.is_err());

        let input = BankAccountInput {
            student_id: 0,
            account_number: "ACC1".into(),
            bank_name: "SBI".into(),
        };
        assert!(input.validate().is_err());
    }
}
