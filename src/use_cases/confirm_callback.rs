use std::fmt;
use std::sync::Arc;

use log::{info, warn};

use crate::domain::callback::CallbackData;
use crate::domain::repository::TransactionRepository;
use crate::domain::transaction::{TransactionId, TransactionStatus};
use crate::domain::validation::{ValidationError, validate_fields};
use crate::gateways::registry::GatewayRegistry;
use crate::use_cases::dto::ConfirmCallbackCommand;

#[derive(Debug)]
pub enum ConfirmCallbackError {
	TransactionNotFound(TransactionId),
	GatewayNotFound(String),
	InvalidPayload(ValidationError),
	UnsupportedStatus(TransactionStatus),
	Repository(Box<dyn std::error::Error + Send>),
	Gateway(Box<dyn std::error::Error + Send>),
}

impl fmt::Display for ConfirmCallbackError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfirmCallbackError::TransactionNotFound(id) => {
				write!(f, "Transaction not found: {id}")
			}
			ConfirmCallbackError::GatewayNotFound(name) => {
				write!(f, "No payment gateway registered under '{name}'")
			}
			ConfirmCallbackError::InvalidPayload(e) => {
				write!(f, "Invalid callback payload: {e}")
			}
			ConfirmCallbackError::UnsupportedStatus(status) => {
				write!(f, "Callbacks cannot target the {status} status")
			}
			ConfirmCallbackError::Repository(e) => {
				write!(f, "Repository error: {e}")
			}
			ConfirmCallbackError::Gateway(e) => write!(f, "Gateway error: {e}"),
		}
	}
}

impl std::error::Error for ConfirmCallbackError {}

/// Handles an inbound processor callback end to end: loads the
/// transaction, applies the gateway's validation rules for the target
/// status, then verifies authenticity (DONE) or records the failure
/// (FAILED). The boolean mirrors the gateway's verification verdict.
#[derive(Clone)]
pub struct ConfirmCallbackUseCase {
	transaction_repo: Arc<dyn TransactionRepository>,
	gateway_registry: GatewayRegistry,
}

impl ConfirmCallbackUseCase {
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
		command: ConfirmCallbackCommand,
	) -> Result<bool, ConfirmCallbackError> {
		let transaction = self
			.transaction_repo
			.find_by_id(&command.transaction_id)
			.await
			.map_err(ConfirmCallbackError::Repository)?
			.ok_or(ConfirmCallbackError::TransactionNotFound(
				command.transaction_id,
			))?;

		let gateway = self
			.gateway_registry
			.get(&transaction.gateway)
			.ok_or_else(|| {
				ConfirmCallbackError::GatewayNotFound(transaction.gateway.clone())
			})?;

		let rules = gateway.update_transaction_data_rules(command.new_status);
		validate_fields(&command.fields, &rules)
			.map_err(ConfirmCallbackError::InvalidPayload)?;

		match command.new_status {
			TransactionStatus::Done => {
				let data = CallbackData::from_fields(command.fields)
					.map_err(ConfirmCallbackError::InvalidPayload)?;

				let verified = gateway
					.verify(&transaction, &data)
					.await
					.map_err(ConfirmCallbackError::Gateway)?;

				if verified {
					info!("Callback committed for transaction {}", transaction.id);
				} else {
					warn!(
						"Callback rejected for transaction {}",
						transaction.id
					);
				}

				Ok(verified)
			}
			TransactionStatus::Failed => {
				let mut failed = transaction;
				failed.status = TransactionStatus::Failed;
				let id = failed.id.clone();
				self.transaction_repo
					.save(failed)
					.await
					.map_err(ConfirmCallbackError::Repository)?;

				info!("Transaction {id} marked as failed");

				Ok(true)
			}
			status => Err(ConfirmCallbackError::UnsupportedStatus(status)),
		}
	}
}
