use std::fmt;
use std::sync::Arc;

use log::info;
use rust_decimal::Decimal;

use crate::domain::repository::TransactionRepository;
use crate::domain::transaction::Transaction;
use crate::gateways::registry::GatewayRegistry;
use crate::use_cases::dto::CreateTransactionCommand;

#[derive(Debug)]
pub enum CreateTransactionError {
	UnknownGateway(String),
	NegativeAmount(Decimal),
	Repository(Box<dyn std::error::Error + Send>),
}

impl fmt::Display for CreateTransactionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CreateTransactionError::UnknownGateway(name) => {
				write!(f, "No payment gateway registered under '{name}'")
			}
			CreateTransactionError::NegativeAmount(amount) => {
				write!(f, "Transaction amount must not be negative: {amount}")
			}
			CreateTransactionError::Repository(e) => {
				write!(f, "Repository error: {e}")
			}
		}
	}
}

impl std::error::Error for CreateTransactionError {}

#[derive(Clone)]
pub struct CreateTransactionUseCase {
	transaction_repo: Arc<dyn TransactionRepository>,
	gateway_registry: GatewayRegistry,
}

impl CreateTransactionUseCase {
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
		command: CreateTransactionCommand,
	) -> Result<Transaction, CreateTransactionError> {
		if command.amount.is_sign_negative() && !command.amount.is_zero() {
			return Err(CreateTransactionError::NegativeAmount(command.amount));
		}

		if !self.gateway_registry.contains(&command.gateway) {
			return Err(CreateTransactionError::UnknownGateway(command.gateway));
		}

		let transaction = Transaction::pending(command.amount, command.gateway);
		self.transaction_repo
			.save(transaction.clone())
			.await
			.map_err(CreateTransactionError::Repository)?;

		info!("Transaction {} created for {}", transaction.id, transaction.gateway);

		Ok(transaction)
	}
}
