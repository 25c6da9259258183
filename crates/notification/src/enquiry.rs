use artmount_forms::EnquirySubmission;

use crate::{OutgoingEmail, current_year, submitted_at};

#[derive(askama::Template)]
#[template(path = "enquiry-confirmation.html", escape = "none")]
pub struct EnquiryConfirmationTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub course: &'a str,
    pub year: i32,
}

#[derive(askama::Template)]
#[template(path = "enquiry-admin.html", escape = "none")]
pub struct EnquiryAdminTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub course: &'a str,
    pub submitted_at: String,
}

pub fn enquiry_confirmation(submission: &EnquirySubmission) -> askama::Result<OutgoingEmail> {
    let course = submission.course_display_name();
    let html = askama::Template::render(&EnquiryConfirmationTemplate {
        name: &submission.name,
        email: &submission.email,
        phone: &submission.phone,
        course,
        year: current_year(),
    })?;

    Ok(OutgoingEmail {
        to: submission.email.to_owned(),
        subject: format!("Welcome to {course} - Artmount Academy"),
        html,
    })
}

/// Lead notification for the admissions team.
pub fn enquiry_admin_notification(
    submission: &EnquirySubmission,
    admin_address: &str,
) -> askama::Result<OutgoingEmail> {
    let course = submission.course_display_name();
    let html = askama::Template::render(&EnquiryAdminTemplate {
        name: &submission.name,
        email: &submission.email,
        phone: &submission.phone,
        course,
        submitted_at: submitted_at(),
    })?;

    Ok(OutgoingEmail {
        to: admin_address.to_owned(),
        subject: format!("New Course Enquiry: {course} - {}", submission.name),
        html,
    })
}
