use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::transaction::Transaction;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateTransactionRequest {
	pub amount:  Decimal,
	pub gateway: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TransactionResponse {
	pub transaction: Transaction,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CallbackResponse {
	pub status: String,
}
