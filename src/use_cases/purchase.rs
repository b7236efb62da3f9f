use std::fmt;
use std::sync::Arc;

use log::info;

use crate::domain::gateway::PurchaseResult;
use crate::domain::repository::TransactionRepository;
use crate::domain::transaction::TransactionId;
use crate::gateways::registry::GatewayRegistry;

#[derive(Debug)]
pub enum PurchaseError {
	TransactionNotFound(TransactionId),
	GatewayNotFound(String),
	Repository(Box<dyn std::error::Error + Send>),
	Gateway(Box<dyn std::error::Error + Send>),
}

impl fmt::Display for PurchaseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PurchaseError::TransactionNotFound(id) => {
				write!(f, "Transaction not found: {id}")
			}
			PurchaseError::GatewayNotFound(name) => {
				write!(f, "No payment gateway registered under '{name}'")
			}
			PurchaseError::Repository(e) => write!(f, "Repository error: {e}"),
			PurchaseError::Gateway(e) => write!(f, "Gateway error: {e}"),
		}
	}
}

impl std::error::Error for PurchaseError {}

/// Builds the signed redirect instruction that sends the customer's
/// browser to the processor for a pending transaction.
#[derive(Clone)]
pub struct PurchaseUseCase {
	transaction_repo: Arc<dyn TransactionRepository>,
	gateway_registry: GatewayRegistry,
}

impl PurchaseUseCase {
	pub fn new(
		transaction_repo: Arc<dyn TransactionRepository>,
		gateway_registry: GatewayRegistry,
	) -> Self {
		Self {
			transaction_repo,
			gateway_registry,
		}
	}

	pub async fn execute(
		&self,
		transaction_id: TransactionId,
	) -> Result<PurchaseResult, PurchaseError> {
		let transaction = self
			.transaction_repo
			.find_by_id(&transaction_id)
			.await
			.map_err(PurchaseError::Repository)?
			.ok_or(PurchaseError::TransactionNotFound(transaction_id))?;

		let gateway = self
			.gateway_registry
			.get(&transaction.gateway)
			.ok_or_else(|| {
				PurchaseError::GatewayNotFound(transaction.gateway.clone())
			})?;

		let result = gateway
			.purchase(&transaction)
			.await
			.map_err(PurchaseError::Gateway)?;

		info!(
			"Purchase request built for transaction {} via {}",
			transaction.id, transaction.gateway
		);

		Ok(result)
	}
}
