//! Request handlers, grouped by resource.

pub mod auth;
pub mod dashboard;
pub mod documents;
pub mod education;
pub mod experience;
pub mod other_details;
pub mod payments;
pub mod personal_info;
pub mod phone;
pub mod posts;
pub mod registration;
