use crate::domain::callback::CallbackUrlGenerator;
use crate::domain::transaction::{Transaction, TransactionStatus};

/// Builds the absolute callback URLs the processor redirects the browser
/// back to, rooted at the service's public base URL.
#[derive(Clone)]
pub struct PublicCallbackUrlGenerator {
	public_base_url: String,
}

impl PublicCallbackUrlGenerator {
	pub fn new(public_base_url: String) -> Self {
		Self { public_base_url }
	}
}

impl CallbackUrlGenerator for PublicCallbackUrlGenerator {
	fn generate(
		&self,
		transaction: &Transaction,
		status: TransactionStatus,
	) -> String {
		format!(
			"{}/transactions/{}/callback/{}",
			self.public_base_url.trim_end_matches('/'),
			transaction.id,
			status
		)
	}
}
