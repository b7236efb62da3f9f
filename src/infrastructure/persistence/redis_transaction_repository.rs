use std::collections::HashMap;

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::domain::repository::{GatewayResult, TransactionRepository};
use crate::domain::transaction::{
	Transaction, TransactionId, TransactionStatus,
};

fn transaction_key(id: &TransactionId) -> String {
	format!("transaction:{id}")
}

fn result_key(id: &TransactionId) -> String {
	format!("transaction:{id}:result")
}

fn boxed<E: std::error::Error + Send + 'static>(
	e: E,
) -> Box<dyn std::error::Error + Send> {
	Box::new(e)
}

#[derive(Clone)]
pub struct RedisTransactionRepository {
	client: Client,
}

impl RedisTransactionRepository {
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	fn from_hash(
		id: &TransactionId,
		map: &HashMap<String, String>,
	) -> Option<Transaction> {
		let amount = map.get("amount")?.parse::<Decimal>().ok()?;
		let status = map.get("status")?.parse::<TransactionStatus>().ok()?;
		let gateway = map.get("gateway")?.clone();
		let created_at = map
			.get("created_at")
			.and_then(|s| s.parse::<i64>().ok())
			.and_then(|ts| OffsetDateTime::from_unix_timestamp(ts).ok());

		Some(Transaction {
			id: id.clone(),
			amount,
			status,
			gateway,
			created_at,
		})
	}
}

#[async_trait]
impl TransactionRepository for RedisTransactionRepository {
	async fn save(
		&self,
		transaction: Transaction,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(boxed)?;

		let key = transaction_key(&transaction.id);
		redis::pipe()
			.atomic()
			.hset_multiple(&key, &[
				("amount", transaction.amount.to_string()),
				("status", transaction.status.as_str().to_string()),
				("gateway", transaction.gateway.clone()),
				(
					"created_at",
					transaction
						.created_at
						.map(|dt| dt.unix_timestamp().to_string())
						.unwrap_or_default(),
				),
			])
			.ignore()
			.query_async::<()>(&mut con)
			.await
			.map_err(boxed)?;

		Ok(())
	}

	async fn find_by_id(
		&self,
		id: &TransactionId,
	) -> Result<Option<Transaction>, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(boxed)?;

		let map: HashMap<String, String> =
			con.hgetall(transaction_key(id)).await.map_err(boxed)?;

		if map.is_empty() {
			return Ok(None);
		}

		Ok(Self::from_hash(id, &map))
	}

	async fn commit_result(
		&self,
		transaction: &Transaction,
		result_code: &str,
		payload: HashMap<String, String>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(boxed)?;

		let payload_json = serde_json::to_string(&payload).map_err(boxed)?;

		redis::pipe()
			.atomic()
			.hset(
				transaction_key(&transaction.id),
				"status",
				TransactionStatus::Done.as_str(),
			)
			.ignore()
			.hset_multiple(result_key(&transaction.id), &[
				("result_code", result_code.to_string()),
				("payload", payload_json),
			])
			.ignore()
			.query_async::<()>(&mut con)
			.await
			.map_err(boxed)?;

		Ok(())
	}

	async fn find_result(
		&self,
		id: &TransactionId,
	) -> Result<Option<GatewayResult>, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(boxed)?;

		let map: HashMap<String, String> =
			con.hgetall(result_key(id)).await.map_err(boxed)?;

		let (Some(result_code), Some(payload_json)) =
			(map.get("result_code"), map.get("payload"))
		else {
			return Ok(None);
		};

		let payload: HashMap<String, String> =
			serde_json::from_str(payload_json).map_err(boxed)?;

		Ok(Some(GatewayResult {
			result_code: result_code.clone(),
			payload,
		}))
	}
}
