//! Domain logic for the examination registration portal.
//!
//! Pure types and rules shared by the database and API layers: the
//! registration wizard state machine, candidate categories and fee
//! exemption, application and payment lifecycles, phone OTP rules, and
//! field validation. No I/O happens in this crate.

pub mod application;
pub mod category;
pub mod error;
pub mod otp;
pub mod payment;
pub mod types;
pub mod validation;
pub mod wizard;
