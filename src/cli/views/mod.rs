//! Text renditions of the three screens: landing, history, dashboard.

pub mod dashboard;
pub mod landing;
pub mod records;
