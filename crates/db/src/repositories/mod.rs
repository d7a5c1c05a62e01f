mod application_repo;
mod category_payment_repo;
mod document_repo;
mod education_repo;
mod experience_repo;
mod other_details_repo;
mod payment_repo;
mod personal_info_repo;
mod phone_otp_repo;
mod post_repo;
mod profile_repo;
mod refresh_token_repo;
mod registration_repo;
mod user_repo;

pub use application_repo::ApplicationRepo;
pub use category_payment_repo::CategoryPaymentRepo;
pub use document_repo::DocumentRepo;
pub use education_repo::EducationRepo;
pub use experience_repo::ExperienceRepo;
pub use other_details_repo::OtherDetailsRepo;
pub use payment_repo::PaymentRepo;
pub use personal_info_repo::PersonalInfoRepo;
pub use phone_otp_repo::PhoneOtpRepo;
pub use post_repo::PostRepo;
pub use profile_repo::ProfileRepo;
pub use refresh_token_repo::RefreshTokenRepo;
pub use registration_repo::RegistrationRepo;
pub use user_repo::UserRepo;
