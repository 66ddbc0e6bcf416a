//! Client-side form checks run before any request is sent.
//!
//! ERROR HANDLING
//! ==============
//! Each form type has a `prepare` method that trims its raw input and either
//! returns the request payload or the first [`ValidationError`] found. Pages
//! show the error inline and never call the API with an unprepared payload.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::api::auth::{PasswordChange, ProfileUpdate, RegisterUser, VerifyEmail};
use crate::net::api::feedback::NewFeedback;
use crate::net::api::service_requests::NewServiceRequest;
use crate::net::api::technician::{Completion, Estimate, RegisterTechnician, TechnicianProfileUpdate};
use crate::net::types::Account;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const OTP_LEN: usize = 6;
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("enter a valid phone number")]
    InvalidPhone,
    #[error("password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("enter the {}-digit code from your email", OTP_LEN)]
    InvalidOtp,
    #[error("choose a rating from 1 to {}", MAX_RATING)]
    RatingOutOfRange,
    #[error("{0} must be a positive amount")]
    InvalidAmount(&'static str),
    #[error("{0} must be a whole number")]
    InvalidNumber(&'static str),
}

/// Trimmed value of a required field.
///
/// # Errors
///
/// [`ValidationError::Missing`] when the value is blank.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(value.to_owned())
    }
}

/// Trimmed value of an optional field; blank becomes `None`.
pub fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Shape check only: one `@`, a non-empty local part and a dotted domain.
///
/// # Errors
///
/// [`ValidationError::Missing`] or [`ValidationError::InvalidEmail`].
pub fn email(value: &str) -> Result<String, ValidationError> {
    let value = required("email", value)?;
    let Some((local, domain)) = value.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'));
    if local.is_empty() || domain.contains('@') || value.contains(char::is_whitespace) || !domain_ok {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(value)
}

/// Digits with optional leading `+`; spaces and dashes are dropped.
///
/// # Errors
///
/// [`ValidationError::Missing`] or [`ValidationError::InvalidPhone`].
pub fn phone(value: &str) -> Result<String, ValidationError> {
    let value = required("phone", value)?;
    let cleaned: String = value.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    if !(10..=15).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(cleaned)
}

/// New password plus its confirmation. Passwords are not trimmed.
///
/// # Errors
///
/// [`ValidationError::PasswordTooShort`] or [`ValidationError::PasswordMismatch`].
pub fn new_password(password: &str, confirm: &str) -> Result<String, ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(password.to_owned())
}

/// Six-digit verification code.
///
/// # Errors
///
/// [`ValidationError::InvalidOtp`] for anything else.
pub fn otp(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.len() != OTP_LEN || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidOtp);
    }
    Ok(value.to_owned())
}

/// Money input such as `"1200"` or `"1,250.50"`.
///
/// # Errors
///
/// [`ValidationError::InvalidAmount`] unless the value is a finite amount above zero.
pub fn amount(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ValidationError::InvalidAmount(field)),
    }
}

/// Comma-separated skills, trimmed with blanks and repeats removed.
pub fn split_skills(value: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            skills.push(skill.to_owned());
        }
    }
    skills
}

// =============================================================================
// Forms
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// # Errors
    ///
    /// The first failing field check.
    pub fn prepare(&self) -> Result<RegisterUser, ValidationError> {
        Ok(RegisterUser {
            name: required("name", &self.name)?,
            email: email(&self.email)?,
            phone: phone(&self.phone)?,
            address: required("address", &self.address)?,
            password: new_password(&self.password, &self.confirm_password)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TechnicianRegistrationForm {
    pub account: RegistrationForm,
    /// Comma-separated list as typed.
    pub skills: String,
    pub experience_years: String,
}

impl TechnicianRegistrationForm {
    /// # Errors
    ///
    /// The first failing field check; at least one skill is required.
    pub fn prepare(&self) -> Result<RegisterTechnician, ValidationError> {
        let account = self.account.prepare()?;
        let skills = split_skills(&self.skills);
        if skills.is_empty() {
            return Err(ValidationError::Missing("skills"));
        }
        let experience_years = required("experience", &self.experience_years)?
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidNumber("experience"))?;
        Ok(RegisterTechnician {
            name: account.name,
            email: account.email,
            phone: account.phone,
            password: account.password,
            address: account.address,
            skills,
            experience_years,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyEmailForm {
    pub email: String,
    pub otp: String,
}

impl VerifyEmailForm {
    /// # Errors
    ///
    /// Invalid email or code.
    pub fn prepare(&self) -> Result<VerifyEmail, ValidationError> {
        Ok(VerifyEmail { email: email(&self.email)?, otp: otp(&self.otp)? })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceRequestForm {
    pub appliance_type: String,
    pub brand: String,
    pub description: String,
    pub address: String,
    pub preferred_date: String,
}

impl ServiceRequestForm {
    /// # Errors
    ///
    /// Appliance, description or address missing.
    pub fn prepare(&self) -> Result<NewServiceRequest, ValidationError> {
        Ok(NewServiceRequest {
            appliance_type: required("appliance", &self.appliance_type)?,
            brand: optional(&self.brand),
            description: required("description", &self.description)?,
            address: required("address", &self.address)?,
            preferred_date: optional(&self.preferred_date),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EstimateForm {
    pub cost: String,
    pub note: String,
}

impl EstimateForm {
    /// # Errors
    ///
    /// [`ValidationError::InvalidAmount`] for a missing or non-positive cost.
    pub fn prepare(&self) -> Result<Estimate, ValidationError> {
        Ok(Estimate { estimated_cost: amount("estimate", &self.cost)?, note: self.note.trim().to_owned() })
    }
}

/// # Errors
///
/// [`ValidationError::InvalidAmount`] for a missing or non-positive cost.
pub fn completion(final_cost: &str) -> Result<Completion, ValidationError> {
    Ok(Completion { final_cost: amount("final cost", final_cost)? })
}

/// Star rating and comment from the feedback modal. A rating of `0` means
/// no star was picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub rating: u8,
    pub comment: String,
}

impl FeedbackDraft {
    /// # Errors
    ///
    /// [`ValidationError::RatingOutOfRange`] unless the rating is `1..=5`.
    pub fn prepare(&self, request_id: &str) -> Result<NewFeedback, ValidationError> {
        if !(1..=MAX_RATING).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange);
        }
        Ok(NewFeedback {
            request_id: request_id.to_owned(),
            rating: self.rating,
            comment: self.comment.trim().to_owned(),
        })
    }
}

/// Editable profile fields. Skills and experience are only sent for
/// technicians.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub skills: String,
    pub experience_years: String,
}

impl ProfileForm {
    pub fn from_account(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            phone: account.phone.clone().unwrap_or_default(),
            address: account.address.clone().unwrap_or_default(),
            skills: account.skills.join(", "),
            experience_years: account.experience_years.map(|y| y.to_string()).unwrap_or_default(),
        }
    }

    /// # Errors
    ///
    /// The first failing field check.
    pub fn prepare(&self) -> Result<ProfileUpdate, ValidationError> {
        Ok(ProfileUpdate {
            name: required("name", &self.name)?,
            phone: phone(&self.phone)?,
            address: required("address", &self.address)?,
        })
    }

    /// # Errors
    ///
    /// The first failing field check; at least one skill is required.
    pub fn prepare_technician(&self) -> Result<TechnicianProfileUpdate, ValidationError> {
        let base = self.prepare()?;
        let skills = split_skills(&self.skills);
        if skills.is_empty() {
            return Err(ValidationError::Missing("skills"));
        }
        let experience_years = required("experience", &self.experience_years)?
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidNumber("experience"))?;
        Ok(TechnicianProfileUpdate {
            name: base.name,
            phone: base.phone,
            address: base.address,
            skills,
            experience_years,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChangeForm {
    /// # Errors
    ///
    /// Missing current password or a new password that fails [`new_password`].
    pub fn prepare(&self) -> Result<PasswordChange, ValidationError> {
        if self.current.is_empty() {
            return Err(ValidationError::Missing("current password"));
        }
        Ok(PasswordChange { current_password: self.current.clone(), new_password: new_password(&self.new, &self.confirm)? })
    }
}
