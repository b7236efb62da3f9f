use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::transaction::{Transaction, TransactionId};

/// Result code recorded when a verified callback payload is committed.
pub const GATEWAY_RESULT_COMMIT: &str = "commit";

/// A gateway result persisted against a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResult {
	pub result_code: String,
	pub payload:     HashMap<String, String>,
}

#[async_trait]
pub trait TransactionRepository: Send + Sync + 'static {
	async fn save(
		&self,
		transaction: Transaction,
	) -> Result<(), Box<dyn std::error::Error + Send>>;

	async fn find_by_id(
		&self,
		id: &TransactionId,
	) -> Result<Option<Transaction>, Box<dyn std::error::Error + Send>>;

	/// Persists a verified callback payload against the transaction and
	/// advances its status. Exactly-once semantics are this collaborator's
	/// concern; the verifier delegates on every valid callback it sees.
	async fn commit_result(
		&self,
		transaction: &Transaction,
		result_code: &str,
		payload: HashMap<String, String>,
	) -> Result<(), Box<dyn std::error::Error + Send>>;

	async fn find_result(
		&self,
		id: &TransactionId,
	) -> Result<Option<GatewayResult>, Box<dyn std::error::Error + Send>>;
}
