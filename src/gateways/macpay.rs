use async_trait::async_trait;
use log::{debug, warn};

use crate::domain::callback::{
	CallbackData, CallbackUrlGenerator, MAC_FIELD, PAID_FIELD, STAMP_FIELD,
};
use crate::domain::gateway::{
	PaymentGateway, PurchaseResult, RedirectField, RedirectInstruction,
};
use crate::domain::repository::{GATEWAY_RESULT_COMMIT, TransactionRepository};
use crate::domain::transaction::{Transaction, TransactionStatus};
use crate::domain::validation::{DataRules, FieldRule};
use crate::gateways::signature::{format_amount, mac_digest};

pub const NAME: &str = "macpay";

const SITE_FIELD: &str = "SITE";
const AMOUNT_FIELD: &str = "AMOUNT";
const REJECT_FIELD: &str = "REJECT";
const CANCEL_FIELD: &str = "CANCEL";
const RETURN_FIELD: &str = "RETURN";

/// Shared-secret material for the MacPay protocol, injected at
/// construction. `mac_key` signs outbound requests and verifies inbound
/// callbacks; `account_id` only ever appears in the outbound signature.
#[derive(Debug, Clone)]
pub struct GatewayCredentials {
	pub account_id:   String,
	pub mac_key:      String,
	pub redirect_url: String,
}

/// Redirect-based gateway adapter for the MacPay processor. Outbound
/// purchase requests are browser redirects carrying a SHA-512 MAC over
/// `STAMP&account&AMOUNT&key`; inbound callbacks are authenticated
/// by a MAC over `STAMP&PAID&key`. The processor defines that asymmetry:
/// the paid amount is signed on the way in, the requested amount on the
/// way out, and the two are never cross-checked here.
#[derive(Clone)]
pub struct MacPayGateway<R: TransactionRepository, G: CallbackUrlGenerator> {
	credentials:      GatewayCredentials,
	callback_urls:    G,
	transaction_repo: R,
}

impl<R: TransactionRepository, G: CallbackUrlGenerator> MacPayGateway<R, G> {
	pub fn new(
		credentials: GatewayCredentials,
		callback_urls: G,
		transaction_repo: R,
	) -> Self {
		Self {
			credentials,
			callback_urls,
			transaction_repo,
		}
	}
}

#[async_trait]
impl<R, G> PaymentGateway for MacPayGateway<R, G>
where
	R: TransactionRepository,
	G: CallbackUrlGenerator,
{
	fn name(&self) -> &'static str {
		NAME
	}

	async fn purchase(
		&self,
		transaction: &Transaction,
	) -> Result<PurchaseResult, Box<dyn std::error::Error + Send>> {
		let failure_url = self
			.callback_urls
			.generate(transaction, TransactionStatus::Failed);
		let success_url = self
			.callback_urls
			.generate(transaction, TransactionStatus::Done);

		let amount = format_amount(transaction.amount);
		let mac = mac_digest(&[
			transaction.id.as_str(),
			&self.credentials.account_id,
			&amount,
			&self.credentials.mac_key,
		]);

		debug!("Built purchase request for transaction {}", transaction.id);

		// REJECT and CANCEL both point at the failure callback; the
		// processor distinguishes the two outcomes, the host does not.
		let redirect_data = vec![
			RedirectField::new(STAMP_FIELD, transaction.id.as_str()),
			RedirectField::new(SITE_FIELD, self.credentials.account_id.clone()),
			RedirectField::new(AMOUNT_FIELD, amount),
			RedirectField::new(REJECT_FIELD, failure_url.clone()),
			RedirectField::new(CANCEL_FIELD, failure_url),
			RedirectField::new(RETURN_FIELD, success_url),
			RedirectField::new(MAC_FIELD, mac),
		];

		Ok(PurchaseResult {
			should_redirect: true,
			redirect_to:     Some(RedirectInstruction {
				redirect_url:    self.credentials.redirect_url.clone(),
				redirect_method: "POST".to_string(),
				redirect_data,
			}),
		})
	}

	async fn verify(
		&self,
		transaction: &Transaction,
		data: &CallbackData,
	) -> Result<bool, Box<dyn std::error::Error + Send>> {
		if data.stamp() != transaction.id.as_str() {
			warn!(
				"Callback STAMP does not match transaction {}, rejecting",
				transaction.id
			);
			return Ok(false);
		}

		let expected_mac =
			mac_digest(&[data.stamp(), data.paid(), &self.credentials.mac_key]);

		if data.mac() != expected_mac {
			warn!("Callback MAC mismatch for transaction {}", transaction.id);
			return Ok(false);
		}

		self.transaction_repo
			.commit_result(transaction, GATEWAY_RESULT_COMMIT, data.fields().clone())
			.await?;

		debug!("Callback verified for transaction {}", transaction.id);

		Ok(true)
	}

	fn update_transaction_data_rules(
		&self,
		new_status: TransactionStatus,
	) -> DataRules {
		if new_status != TransactionStatus::Done {
			return DataRules::new();
		}

		DataRules::from([
			(STAMP_FIELD, vec![FieldRule::Required, FieldRule::Text]),
			(MAC_FIELD, vec![FieldRule::Required, FieldRule::Text]),
			(PAID_FIELD, vec![FieldRule::Required, FieldRule::Text]),
		])
	}
}
