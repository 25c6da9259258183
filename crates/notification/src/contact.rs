use artmount_forms::ContactSubmission;

use crate::{OutgoingEmail, current_year, submitted_at};

#[derive(askama::Template)]
#[template(path = "contact-confirmation.html", escape = "none")]
pub struct ContactConfirmationTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
    pub year: i32,
}

#[derive(askama::Template)]
#[template(path = "contact-admin.html", escape = "none")]
pub struct ContactAdminTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
    pub submitted_at: String,
}

/// Thank-you mail sent back to the visitor.
pub fn contact_confirmation(submission: &ContactSubmission) -> askama::Result<OutgoingEmail> {
    let html = askama::Template::render(&ContactConfirmationTemplate {
        name: &submission.name,
        email: &submission.email,
        phone: &submission.phone,
        message: &submission.message,
        year: current_year(),
    })?;

    Ok(OutgoingEmail {
        to: submission.email.to_owned(),
        subject: "Thank You for Contacting Us - Artmount Academy".to_owned(),
        html,
    })
}

pub fn contact_admin_notification(
    submission: &ContactSubmission,
    admin_address: &str,
) -> askama::Result<OutgoingEmail> {
    let html = askama::Template::render(&ContactAdminTemplate {
        name: &submission.name,
        email: &submission.email,
        phone: &submission.phone,
        message: &submission.message,
        submitted_at: submitted_at(),
    })?;

    Ok(OutgoingEmail {
        to: admin_address.to_owned(),
        subject: format!("New Contact Form Submission from {}", submission.name),
        html,
    })
}
