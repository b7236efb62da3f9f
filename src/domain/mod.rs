pub mod callback;
pub mod gateway;
pub mod repository;
pub mod transaction;
pub mod validation;
