use std::str::FromStr;

use strum::{AsRefStr, EnumString, VariantArray};

/// Courses offered on the enquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, VariantArray)]
pub enum Course {
    #[strum(serialize = "uiux")]
    UiUx,
    #[strum(serialize = "graphic")]
    Graphic,
    #[strum(serialize = "video-editing")]
    VideoEditing,
    #[strum(serialize = "motion")]
    Motion,
}

impl Course {
    pub fn display_name(&self) -> &'static str {
        match self {
            Course::UiUx => "UI/UX Design",
            Course::Graphic => "Graphic Design",
            Course::VideoEditing => "Video Editing",
            Course::Motion => "Motion Graphics",
        }
    }
}

/// Human readable course name; unknown codes are returned unchanged.
pub fn course_display_name(code: &str) -> &str {
    match Course::from_str(code) {
        Ok(course) => course.display_name(),
        Err(_) => code,
    }
}
