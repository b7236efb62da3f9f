use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Opaque transaction identity. Its canonical string form is what travels
/// on the wire as the STAMP correlation token.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
	pub fn generate() -> Self {
		TransactionId(Uuid::new_v4().to_string())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for TransactionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for TransactionId {
	fn from(id: &str) -> Self {
		TransactionId(id.to_string())
	}
}

impl From<String> for TransactionId {
	fn from(id: String) -> Self {
		TransactionId(id)
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
	Pending,
	Done,
	Failed,
}

impl TransactionStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			TransactionStatus::Pending => "pending",
			TransactionStatus::Done => "done",
			TransactionStatus::Failed => "failed",
		}
	}
}

impl fmt::Display for TransactionStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Unknown transaction status: {}", self.0)
	}
}

impl std::error::Error for UnknownStatus {}

impl FromStr for TransactionStatus {
	type Err = UnknownStatus;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"pending" => Ok(TransactionStatus::Pending),
			"done" => Ok(TransactionStatus::Done),
			"failed" => Ok(TransactionStatus::Failed),
			other => Err(UnknownStatus(other.to_string())),
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Transaction {
	pub id:         TransactionId,
	pub amount:     Decimal,
	pub status:     TransactionStatus,
	pub gateway:    String,
	#[serde(
		with = "time::serde::rfc3339::option",
		skip_serializing_if = "Option::is_none",
		default
	)]
	pub created_at: Option<OffsetDateTime>,
}

impl Transaction {
	pub fn pending(amount: Decimal, gateway: String) -> Self {
		Transaction {
			id: TransactionId::generate(),
			amount,
			status: TransactionStatus::Pending,
			gateway,
			created_at: Some(OffsetDateTime::now_utc()),
		}
	}
}
