use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::transaction::{TransactionId, TransactionStatus};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateTransactionCommand {
	pub amount:  Decimal,
	pub gateway: String,
}

#[derive(Debug, Clone)]
pub struct ConfirmCallbackCommand {
	pub transaction_id: TransactionId,
	pub new_status:     TransactionStatus,
	pub fields:         HashMap<String, String>,
}
