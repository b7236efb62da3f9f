pub mod adapters;
pub mod config;
pub mod domain;
pub mod gateways;
pub mod infrastructure;
pub mod use_cases;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;

use crate::adapters::web::callbacks_handler::callback;
use crate::adapters::web::purchase_handler::purchase;
use crate::adapters::web::transactions_handler::create_transaction;
use crate::config::Config;
use crate::domain::repository::TransactionRepository;
use crate::gateways::macpay::{GatewayCredentials, MacPayGateway};
use crate::gateways::registry::GatewayRegistry;
use crate::infrastructure::persistence::redis_transaction_repository::RedisTransactionRepository;
use crate::infrastructure::routing::callback_url_generator::PublicCallbackUrlGenerator;
use crate::use_cases::confirm_callback::ConfirmCallbackUseCase;
use crate::use_cases::create_transaction::CreateTransactionUseCase;
use crate::use_cases::purchase::PurchaseUseCase;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let redis_client = redis::Client::open(config.redis_url.clone())
		.expect("Invalid Redis URL");
	let redis_repo = RedisTransactionRepository::new(redis_client);

	let credentials = GatewayCredentials {
		account_id:   config.macpay_account_id.clone(),
		mac_key:      config.macpay_mac_key.clone(),
		redirect_url: config.macpay_redirect_url.clone(),
	};
	let callback_urls =
		PublicCallbackUrlGenerator::new(config.public_base_url.clone());
	let macpay =
		MacPayGateway::new(credentials, callback_urls, redis_repo.clone());

	let mut gateway_registry = GatewayRegistry::new();
	gateway_registry.register(Arc::new(macpay));

	let transaction_repo: Arc<dyn TransactionRepository> = Arc::new(redis_repo);

	let create_transaction_use_case = CreateTransactionUseCase::new(
		transaction_repo.clone(),
		gateway_registry.clone(),
	);
	let purchase_use_case =
		PurchaseUseCase::new(transaction_repo.clone(), gateway_registry.clone());
	let confirm_callback_use_case = ConfirmCallbackUseCase::new(
		transaction_repo.clone(),
		gateway_registry.clone(),
	);

	info!("Starting payment gateway server on 0.0.0.0:9999...");
	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(create_transaction_use_case.clone()))
			.app_data(web::Data::new(purchase_use_case.clone()))
			.app_data(web::Data::new(confirm_callback_use_case.clone()))
			.service(create_transaction)
			.service(purchase)
			.service(callback)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(("0.0.0.0", 9999))?
	.run()
	.await
}
