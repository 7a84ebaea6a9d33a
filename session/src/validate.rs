//! Client-side form checks run before anything is sent.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use wire::{AdminCreate, LoginRequest, RegisterRequest};

/// Minimum password length accepted by the backend.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A form rejected locally. The message is shown as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Password tidak sama")]
    PasswordMismatch,
    #[error("Password minimal 6 karakter")]
    PasswordTooShort,
    #[error("Nama lengkap wajib diisi")]
    MissingName,
    #[error("Email dan password wajib diisi")]
    MissingCredentials,
}

/// Registration form as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub whatsapp: String,
}

impl RegistrationForm {
    /// Check the form and build the request body.
    ///
    /// The password confirmation is checked before the length rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] the form violates.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        check_password(&self.password)?;
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        let whatsapp = self.whatsapp.trim();
        Ok(RegisterRequest {
            full_name: full_name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            whatsapp: (!whatsapp.is_empty()).then(|| whatsapp.to_owned()),
        })
    }
}

/// Trim the email and require both login fields.
///
/// # Errors
///
/// Returns [`ValidationError::MissingCredentials`] if either field is blank.
pub fn login_request(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Check an admin account form before `POST /auth/users/admin`.
///
/// # Errors
///
/// Returns the first [`ValidationError`] the form violates.
pub fn admin_request(form: &AdminCreate) -> Result<AdminCreate, ValidationError> {
    let full_name = form.full_name.trim();
    if full_name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    let email = form.email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    check_password(&form.password)?;
    Ok(AdminCreate { full_name: full_name.to_owned(), email: email.to_owned(), password: form.password.clone() })
}

fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}
