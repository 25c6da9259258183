use validator::Validate;

use crate::{Fields, RE_EMAIL};

/// A general inquiry from the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ContactSubmission {
    pub name: String,
    #[validate(regex(path = *RE_EMAIL, message = "Invalid email format"))]
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    pub const REQUIRED_FIELDS: [&'static str; 4] = ["name", "email", "phone", "message"];

    /// Trims every field and lower-cases the email.
    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            name: fields.sanitized("name"),
            email: fields.sanitized("email").to_lowercase(),
            phone: fields.sanitized("phone"),
            message: fields.sanitized("message"),
        }
    }
}
