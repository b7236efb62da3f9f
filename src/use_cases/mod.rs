pub mod confirm_callback;
pub mod create_transaction;
pub mod dto;
pub mod purchase;
