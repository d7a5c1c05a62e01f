pub mod application;
pub mod category_payment;
pub mod document;
pub mod education;
pub mod experience;
pub mod other_details;
pub mod payment;
pub mod personal_info;
pub mod phone_otp;
pub mod post;
pub mod profile;
pub mod refresh_token;
pub mod user;
