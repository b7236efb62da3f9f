use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repository::{GatewayResult, TransactionRepository};
use crate::domain::transaction::{
	Transaction, TransactionId, TransactionStatus,
};

#[derive(Default)]
struct Store {
	transactions: HashMap<TransactionId, Transaction>,
	results:      HashMap<TransactionId, Vec<GatewayResult>>,
}

/// Process-local transaction store. Backs the handler and use-case tests;
/// the deployed service wires the redis repository instead.
#[derive(Clone, Default)]
pub struct InMemoryTransactionRepository {
	store: Arc<RwLock<Store>>,
}

impl InMemoryTransactionRepository {
	pub fn new() -> Self {
		Self::default()
	}

	/// All results committed against a transaction, in commit order.
	pub async fn results_for(&self, id: &TransactionId) -> Vec<GatewayResult> {
		self.store
			.read()
			.await
			.results
			.get(id)
			.cloned()
			.unwrap_or_default()
	}
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
	async fn save(
		&self,
		transaction: Transaction,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		self.store
			.write()
			.await
			.transactions
			.insert(transaction.id.clone(), transaction);
		Ok(())
	}

	async fn find_by_id(
		&self,
		id: &TransactionId,
	) -> Result<Option<Transaction>, Box<dyn std::error::Error + Send>> {
		Ok(self.store.read().await.transactions.get(id).cloned())
	}

	async fn commit_result(
		&self,
		transaction: &Transaction,
		result_code: &str,
		payload: HashMap<String, String>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut store = self.store.write().await;

		if let Some(stored) = store.transactions.get_mut(&transaction.id) {
			stored.status = TransactionStatus::Done;
		}

		store
			.results
			.entry(transaction.id.clone())
			.or_default()
			.push(GatewayResult {
				result_code: result_code.to_string(),
				payload,
			});

		Ok(())
	}

	async fn find_result(
		&self,
		id: &TransactionId,
	) -> Result<Option<GatewayResult>, Box<dyn std::error::Error + Send>> {
		Ok(self
			.store
			.read()
			.await
			.results
			.get(id)
			.and_then(|results| results.last().cloned()))
	}
}
