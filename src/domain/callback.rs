use std::collections::HashMap;

use crate::domain::transaction::{Transaction, TransactionStatus};
use crate::domain::validation::ValidationError;

pub const STAMP_FIELD: &str = "STAMP";
pub const PAID_FIELD: &str = "PAID";
pub const MAC_FIELD: &str = "MAC";

/// Typed view over an inbound processor callback. The protocol fields the
/// verifier reads are extracted once here; everything the processor sent
/// is retained untouched as the commit payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackData {
	stamp:  String,
	paid:   String,
	mac:    String,
	fields: HashMap<String, String>,
}

impl CallbackData {
	pub fn from_fields(
		fields: HashMap<String, String>,
	) -> Result<Self, ValidationError> {
		let stamp = required(&fields, STAMP_FIELD)?;
		let paid = required(&fields, PAID_FIELD)?;
		let mac = required(&fields, MAC_FIELD)?;

		Ok(CallbackData {
			stamp,
			paid,
			mac,
			fields,
		})
	}

	pub fn stamp(&self) -> &str {
		&self.stamp
	}

	pub fn paid(&self) -> &str {
		&self.paid
	}

	pub fn mac(&self) -> &str {
		&self.mac
	}

	pub fn fields(&self) -> &HashMap<String, String> {
		&self.fields
	}
}

fn required(
	fields: &HashMap<String, String>,
	name: &str,
) -> Result<String, ValidationError> {
	fields
		.get(name)
		.cloned()
		.ok_or_else(|| ValidationError::MissingField(name.to_string()))
}

/// Resolves the absolute callback URL the processor should send the
/// browser back to for a given terminal status.
pub trait CallbackUrlGenerator: Send + Sync + 'static {
	fn generate(
		&self,
		transaction: &Transaction,
		status: TransactionStatus,
	) -> String;
}
