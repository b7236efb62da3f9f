pub mod in_memory_transaction_repository;
pub mod redis_transaction_repository;
