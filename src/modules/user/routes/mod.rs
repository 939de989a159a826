pub mod create_account;
pub mod edit_profile;
pub mod login;
pub mod user_profile;
pub mod verify_email;
