use std::collections::HashMap;

use payment_gateway::domain::callback::CallbackUrlGenerator;
use payment_gateway::domain::transaction::{
	Transaction, TransactionStatus,
};
use payment_gateway::gateways::macpay::GatewayCredentials;
use payment_gateway::gateways::signature::mac_digest;
use rust_decimal::Decimal;

pub const SUCCESS_URL: &str = "https://shop.test/payment/success";
pub const FAILURE_URL: &str = "https://shop.test/payment/failure";

/// Callback URL generator returning fixed URLs per terminal status.
#[derive(Clone)]
pub struct StaticCallbackUrls;

impl CallbackUrlGenerator for StaticCallbackUrls {
	fn generate(
		&self,
		_transaction: &Transaction,
		status: TransactionStatus,
	) -> String {
		match status {
			TransactionStatus::Done => SUCCESS_URL.to_string(),
			_ => FAILURE_URL.to_string(),
		}
	}
}

pub fn macpay_credentials() -> GatewayCredentials {
	GatewayCredentials {
		account_id:   "merchant1".to_string(),
		mac_key:      "secret".to_string(),
		redirect_url: "https://processor.test/purchase".to_string(),
	}
}

pub fn pending_transaction(id: &str, amount: Decimal) -> Transaction {
	Transaction {
		id: id.into(),
		amount,
		status: TransactionStatus::Pending,
		gateway: "macpay".to_string(),
		created_at: None,
	}
}

/// Inbound field set the processor would send for a successful payment,
/// signed with the callback MAC formula (STAMP, PAID, key).
pub fn success_callback_fields(
	stamp: &str,
	paid: &str,
	mac_key: &str,
) -> HashMap<String, String> {
	HashMap::from([
		("STAMP".to_string(), stamp.to_string()),
		("PAID".to_string(), paid.to_string()),
		("MAC".to_string(), mac_digest(&[stamp, paid, mac_key])),
	])
}
