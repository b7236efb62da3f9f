use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::callback::CallbackData;
use crate::domain::transaction::{Transaction, TransactionStatus};
use crate::domain::validation::DataRules;

/// A single named form field of a redirect instruction. Kept as a list
/// entry rather than a map key so the protocol's field ordering survives
/// serialization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RedirectField {
	pub name:  String,
	pub value: String,
}

impl RedirectField {
	pub fn new(name: &str, value: impl Into<String>) -> Self {
		RedirectField {
			name:  name.to_string(),
			value: value.into(),
		}
	}
}

/// Description of the HTTP request the client browser is instructed to
/// perform. The service never performs this request itself.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RedirectInstruction {
	pub redirect_url:    String,
	pub redirect_method: String,
	pub redirect_data:   Vec<RedirectField>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PurchaseResult {
	pub should_redirect: bool,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub redirect_to:     Option<RedirectInstruction>,
}

/// Contract every payment gateway adapter implements. The service talks
/// to gateways only through this trait; adapters are registered by name
/// in the [`crate::gateways::registry::GatewayRegistry`].
#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	fn name(&self) -> &'static str;

	/// Builds the signed redirect instruction for a pending transaction.
	async fn purchase(
		&self,
		transaction: &Transaction,
	) -> Result<PurchaseResult, Box<dyn std::error::Error + Send>>;

	/// Decides the authenticity of an inbound processor callback. On
	/// success the verified payload is committed against the transaction;
	/// on any mismatch this returns `Ok(false)` with no side effect.
	async fn verify(
		&self,
		transaction: &Transaction,
		data: &CallbackData,
	) -> Result<bool, Box<dyn std::error::Error + Send>>;

	/// Validation rules the inbound field set must satisfy before a
	/// transition to `new_status` is attempted.
	fn update_transaction_data_rules(
		&self,
		new_status: TransactionStatus,
	) -> DataRules;
}
