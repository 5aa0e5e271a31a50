//! Optional field rules applied on top of schema checks.
//!
//! Deserialization already guarantees required fields are present with the
//! right types. When `API_STRICT_VALIDATION` is on, payloads additionally go
//! through [`Validate`], and every violation is reported in one 422.

use product_crud_core::{Email, ProductCreate, ProductUpdate, UserCreate, UserUpdate};

use crate::error::{AppError, FieldError};

/// Minimum password length under strict validation.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Field-level rules for a request payload.
pub trait Validate {
    /// Collect every rule violation. Empty means the payload is acceptable.
    fn violations(&self) -> Vec<FieldError>;
}

/// Run strict validation if enabled.
///
/// # Errors
///
/// Returns `AppError::Validation` listing every violation.
pub fn check<T: Validate>(payload: &T, strict: bool) -> Result<(), AppError> {
    if !strict {
        return Ok(());
    }

    let violations = payload.violations();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(violations))
    }
}

fn non_empty(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::body(
            field,
            "String should have at least 1 character",
            "string_too_short",
        ));
    }
}

fn non_negative_price(errors: &mut Vec<FieldError>, price: f64) {
    if !price.is_finite() {
        errors.push(FieldError::body(
            "price",
            "Input should be a finite number",
            "finite_number",
        ));
    } else if price < 0.0 {
        errors.push(FieldError::body(
            "price",
            "Input should be greater than or equal to 0",
            "greater_than_equal",
        ));
    }
}

fn email(errors: &mut Vec<FieldError>, value: &str) {
    if let Err(e) = Email::parse(value) {
        errors.push(FieldError::body(
            "email",
            format!("value is not a valid email address: {e}"),
            "value_error",
        ));
    }
}

fn password(errors: &mut Vec<FieldError>, value: &str) {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::body(
            "password",
            format!("String should have at least {MIN_PASSWORD_LENGTH} characters"),
            "string_too_short",
        ));
    }
}

impl Validate for ProductCreate {
    fn violations(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        non_empty(&mut errors, "name", &self.name);
        non_empty(&mut errors, "description", &self.description);
        non_negative_price(&mut errors, self.price);
        non_empty(&mut errors, "category", &self.category);
        errors
    }
}

impl Validate for ProductUpdate {
    fn violations(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            non_empty(&mut errors, "name", name);
        }
        if let Some(description) = &self.description {
            non_empty(&mut errors, "description", description);
        }
        if let Some(price) = self.price {
            non_negative_price(&mut errors, price);
        }
        if let Some(category) = &self.category {
            non_empty(&mut errors, "category", category);
        }
        errors
    }
}

impl Validate for UserCreate {
    fn violations(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        non_empty(&mut errors, "name", &self.name);
        email(&mut errors, &self.email);
        password(&mut errors, &self.password);
        errors
    }
}

impl Validate for UserUpdate {
    fn violations(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            non_empty(&mut errors, "name", name);
        }
        if let Some(value) = &self.email {
            email(&mut errors, value);
        }
        if let Some(value) = &self.password {
            password(&mut errors, value);
        }
        errors
    }
}
