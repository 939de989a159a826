pub mod create_payment;
pub mod get_payments;
