//! Form payloads accepted by the public site and the checks they go through
//! before anything is rendered or mailed.

mod contact;
mod course;
mod enquiry;
mod fields;
mod validate;

pub use contact::*;
pub use course::*;
pub use enquiry::*;
pub use fields::*;
pub use validate::*;
