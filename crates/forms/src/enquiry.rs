use validator::Validate;

use crate::{Fields, RE_EMAIL, course_display_name};

/// A course enquiry. `course` keeps the submitted code, known or not.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct EnquirySubmission {
    pub name: String,
    #[validate(regex(path = *RE_EMAIL, message = "Invalid email format"))]
    pub email: String,
    pub phone: String,
    pub course: String,
}

impl EnquirySubmission {
    pub const REQUIRED_FIELDS: [&'static str; 4] = ["name", "email", "phone", "course"];

    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            name: fields.sanitized("name"),
            email: fields.sanitized("email").to_lowercase(),
            phone: fields.sanitized("phone"),
            course: fields.sanitized("course"),
        }
    }

    pub fn course_display_name(&self) -> &str {
        course_display_name(&self.course)
    }
}
