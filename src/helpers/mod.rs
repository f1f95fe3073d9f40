//! Helper functions shared by the view layer

pub mod date;
pub mod html;

pub use date::{format_date, format_optional};
pub use html::{html_escape, image_tag};
