pub mod callbacks_handler;
pub mod errors;
pub mod purchase_handler;
pub mod schema;
pub mod transactions_handler;
