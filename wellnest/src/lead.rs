use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;

lazy_static! {
    // same shape a browser accepts for <input type="email">
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .expect("email pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UsageFrequency {
    #[default]
    #[serde(rename = "not sure")]
    NotSure,
    #[serde(rename = "1-2 times")]
    OneToTwo,
    #[serde(rename = "3-5 times")]
    ThreeToFive,
    #[serde(rename = "6+ times")]
    SixPlus,
}

impl UsageFrequency {
    pub const ALL: [UsageFrequency; 4] = [
        UsageFrequency::NotSure,
        UsageFrequency::OneToTwo,
        UsageFrequency::ThreeToFive,
        UsageFrequency::SixPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UsageFrequency::NotSure => "not sure",
            UsageFrequency::OneToTwo => "1-2 times",
            UsageFrequency::ThreeToFive => "3-5 times",
            UsageFrequency::SixPlus => "6+ times",
        }
    }
}

impl fmt::Display for UsageFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsesSimilar {
    #[default]
    No,
    Yes,
}

impl UsesSimilar {
    pub const ALL: [UsesSimilar; 2] = [UsesSimilar::No, UsesSimilar::Yes];

    pub fn as_str(&self) -> &'static str {
        match self {
            UsesSimilar::No => "no",
            UsesSimilar::Yes => "yes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UsesSimilar::No => "No",
            UsesSimilar::Yes => "Yes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserForm {
    pub email: String,
    pub location: String,
    pub usage: UsageFrequency,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VendorForm {
    pub business_name: String,
    pub email: String,
    pub location: String,
    pub uses_similar: UsesSimilar,
    pub other_providers: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFormEdit {
    Email(String),
    Location(String),
    Usage(UsageFrequency),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorFormEdit {
    BusinessName(String),
    Email(String),
    Location(String),
    UsesSimilar(UsesSimilar),
    OtherProviders(String),
}

impl UserForm {
    pub fn apply(&mut self, edit: UserFormEdit) {
        match edit {
            UserFormEdit::Email(value) => self.email = value,
            UserFormEdit::Location(value) => self.location = value,
            UserFormEdit::Usage(value) => self.usage = value,
        }
    }

    pub fn to_submission(
        &self,
        include_location: bool,
    ) -> Result<UserSubmission, SubmissionError> {
        let email = require_email("email", &self.email)?;
        if include_location {
            require("location", &self.location)?;
        }
        Ok(UserSubmission {
            email,
            location: include_location.then(|| self.location.clone()),
            usage_frequency: self.usage,
        })
    }
}

impl VendorForm {
    pub fn apply(&mut self, edit: VendorFormEdit) {
        match edit {
            VendorFormEdit::BusinessName(value) => self.business_name = value,
            VendorFormEdit::Email(value) => self.email = value,
            VendorFormEdit::Location(value) => self.location = value,
            VendorFormEdit::UsesSimilar(value) => {
                self.uses_similar = value;
                if value == UsesSimilar::No {
                    self.other_providers.clear();
                }
            }
            VendorFormEdit::OtherProviders(value) => {
                self.other_providers = value
            }
        }
    }

    pub fn to_submission(
        &self,
        include_location: bool,
    ) -> Result<VendorSubmission, SubmissionError> {
        require("business_name", &self.business_name)?;
        let email = require_email("email", &self.email)?;
        if include_location {
            require("location", &self.location)?;
        }
        let other_providers = match self.uses_similar {
            UsesSimilar::Yes => Some(self.other_providers.clone()),
            UsesSimilar::No => None,
        };
        Ok(VendorSubmission {
            business_name: self.business_name.clone(),
            email,
            location: include_location.then(|| self.location.clone()),
            uses_similar: self.uses_similar,
            other_providers,
        })
    }
}

/// Row written to `user_submissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubmission {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub usage_frequency: UsageFrequency,
}

/// Row written to `vendor_submissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorSubmission {
    pub business_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub uses_similar: UsesSimilar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_providers: Option<String>,
}

fn require(field: &'static str, value: &str) -> Result<(), SubmissionError> {
    if value.is_empty() {
        return Err(SubmissionError::Validation {
            field,
            details: "required".to_string(),
        });
    }
    Ok(())
}

/// Email inputs drop surrounding whitespace, so the trimmed value is both
/// checked and sent.
fn require_email(
    field: &'static str,
    value: &str,
) -> Result<String, SubmissionError> {
    let value = value.trim();
    require(field, value)?;
    if !EMAIL_PATTERN.is_match(value) {
        return Err(SubmissionError::Validation {
            field,
            details: format!("'{}' is not an email address", value),
        });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn filled_vendor() -> VendorForm {
        VendorForm {
            business_name: "Calm Studio".to_string(),
            email: "hello@calm.studio".to_string(),
            location: "Leeds".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_user_record_uses_default_usage() {
        let mut form = UserForm::default();
        form.apply(UserFormEdit::Email("a@b.com".to_string()));
        form.apply(UserFormEdit::Location("NYC".to_string()));

        let record = form.to_submission(true).unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "email": "a@b.com",
                "location": "NYC",
                "usage_frequency": "not sure"
            })
        );
    }

    #[test]
    fn test_user_record_without_location_field() {
        let form = UserForm {
            email: "a@b.com".to_string(),
            location: String::new(),
            usage: UsageFrequency::SixPlus,
        };
        let record = form.to_submission(false).unwrap();
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "email": "a@b.com", "usage_frequency": "6+ times" })
        );
    }

    #[test]
    fn test_usage_strings() {
        let labels: Vec<_> =
            UsageFrequency::ALL.iter().map(|u| u.as_str()).collect();
        assert_eq!(labels, ["not sure", "1-2 times", "3-5 times", "6+ times"]);
        for usage in UsageFrequency::ALL {
            assert_eq!(
                serde_json::to_value(usage).unwrap(),
                json!(usage.as_str())
            );
        }
    }

    #[test]
    fn test_switching_to_no_clears_other_providers() {
        let mut form = filled_vendor();
        form.apply(VendorFormEdit::UsesSimilar(UsesSimilar::Yes));
        form.apply(VendorFormEdit::OtherProviders("Acme".to_string()));
        assert_eq!(form.other_providers, "Acme");

        form.apply(VendorFormEdit::UsesSimilar(UsesSimilar::No));
        assert_eq!(form.other_providers, "");

        let value = serde_json::to_value(form.to_submission(true).unwrap())
            .unwrap();
        assert_eq!(
            value,
            json!({
                "business_name": "Calm Studio",
                "email": "hello@calm.studio",
                "location": "Leeds",
                "uses_similar": "no"
            })
        );
    }

    #[test]
    fn test_other_providers_sent_when_yes() {
        let mut form = filled_vendor();
        form.apply(VendorFormEdit::UsesSimilar(UsesSimilar::Yes));
        form.apply(VendorFormEdit::OtherProviders("Acme".to_string()));

        let record = form.to_submission(true).unwrap();
        assert_eq!(record.uses_similar, UsesSimilar::Yes);
        assert_eq!(record.other_providers.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled_vendor();
        form.business_name = String::new();
        assert!(matches!(
            form.to_submission(true),
            Err(SubmissionError::Validation {
                field: "business_name",
                ..
            })
        ));

        let form = UserForm {
            email: "a@b.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            form.to_submission(true),
            Err(SubmissionError::Validation {
                field: "location",
                ..
            })
        ));
        assert!(form.to_submission(false).is_ok());
    }

    #[test]
    fn test_blank_text_accepted_like_native_required() {
        let form = UserForm {
            email: "a@b.com".to_string(),
            location: "   ".to_string(),
            ..Default::default()
        };
        let record = form.to_submission(true).unwrap();
        assert_eq!(record.location.as_deref(), Some("   "));

        let mut vendor = filled_vendor();
        vendor.business_name = " ".to_string();
        assert_eq!(vendor.to_submission(true).unwrap().business_name, " ");
    }

    #[test]
    fn test_email_sent_trimmed() {
        let form = UserForm {
            email: " a@b.com ".to_string(),
            location: "NYC".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_submission(true).unwrap().email, "a@b.com");

        let mut vendor = filled_vendor();
        vendor.email = "\thello@calm.studio ".to_string();
        assert_eq!(
            vendor.to_submission(true).unwrap().email,
            "hello@calm.studio"
        );

        let blank = UserForm {
            email: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            blank.to_submission(false),
            Err(SubmissionError::Validation {
                field: "email",
                details,
            }) if details == "required"
        ));
    }

    #[test]
    fn test_email_shape() {
        let valid = ["a@b.com", "first.last+tag@sub.example.org", "x@localhost"];
        for email in valid {
            assert!(require_email("email", email).is_ok(), "{}", email);
        }
        let invalid = ["plain", "@b.com", "a@", "a b@c.com", "a@-b.com"];
        for email in invalid {
            assert!(require_email("email", email).is_err(), "{}", email);
        }
    }
}
