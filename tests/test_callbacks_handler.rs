use std::collections::HashMap;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use payment_gateway::adapters::web::callbacks_handler::callback;
use payment_gateway::domain::repository::TransactionRepository;
use payment_gateway::domain::transaction::TransactionStatus;
use payment_gateway::gateways::macpay::MacPayGateway;
use payment_gateway::gateways::registry::GatewayRegistry;
use payment_gateway::infrastructure::persistence::in_memory_transaction_repository::InMemoryTransactionRepository;
use payment_gateway::use_cases::confirm_callback::ConfirmCallbackUseCase;
use rust_decimal_macros::dec;

mod support;

use crate::support::fakes::{
	StaticCallbackUrls, macpay_credentials, pending_transaction,
	success_callback_fields,
};

fn use_case(repo: &InMemoryTransactionRepository) -> ConfirmCallbackUseCase {
	let gateway = MacPayGateway::new(
		macpay_credentials(),
		StaticCallbackUrls,
		repo.clone(),
	);
	let mut registry = GatewayRegistry::new();
	registry.register(Arc::new(gateway));

	ConfirmCallbackUseCase::new(Arc::new(repo.clone()), registry)
}

#[actix_web::test]
async fn test_valid_done_callback_is_committed() {
	let repo = InMemoryTransactionRepository::new();
	let transaction = pending_transaction("tx-1", dec!(19.5));
	repo.save(transaction.clone()).await.unwrap();
	let confirm_use_case = use_case(&repo);

	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(confirm_use_case.clone()))
			.service(callback),
	)
	.await;

	let fields = success_callback_fields("tx-1", "102035", "secret");
	let req = test::TestRequest::post()
		.uri("/transactions/tx-1/callback/done")
		.set_form(&fields)
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::OK);
	let stored = repo.find_by_id(&transaction.id).await.unwrap().unwrap();
	assert_eq!(stored.status, TransactionStatus::Done);
	let result = repo.find_result(&transaction.id).await.unwrap().unwrap();
	assert_eq!(result.result_code, "commit");
	assert_eq!(result.payload, fields);
}

#[actix_web::test]
async fn test_tampered_callback_is_forbidden() {
	let repo = InMemoryTransactionRepository::new();
	repo.save(pending_transaction("tx-1", dec!(19.5)))
		.await
		.unwrap();
	let confirm_use_case = use_case(&repo);

	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(confirm_use_case.clone()))
			.service(callback),
	)
	.await;

	let mut fields = success_callback_fields("tx-1", "102035", "secret");
	fields.insert("PAID".to_string(), "999999".to_string());
	let req = test::TestRequest::post()
		.uri("/transactions/tx-1/callback/done")
		.set_form(&fields)
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_callback_with_missing_field_is_bad_request() {
	let repo = InMemoryTransactionRepository::new();
	repo.save(pending_transaction("tx-1", dec!(19.5)))
		.await
		.unwrap();
	let confirm_use_case = use_case(&repo);

	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(confirm_use_case.clone()))
			.service(callback),
	)
	.await;

	let mut fields = success_callback_fields("tx-1", "102035", "secret");
	fields.remove("PAID");
	let req = test::TestRequest::post()
		.uri("/transactions/tx-1/callback/done")
		.set_form(&fields)
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_callback_with_unknown_status_is_bad_request() {
	let repo = InMemoryTransactionRepository::new();
	repo.save(pending_transaction("tx-1", dec!(19.5)))
		.await
		.unwrap();
	let confirm_use_case = use_case(&repo);

	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(confirm_use_case.clone()))
			.service(callback),
	)
	.await;

	let fields = success_callback_fields("tx-1", "102035", "secret");
	let req = test::TestRequest::post()
		.uri("/transactions/tx-1/callback/refunded")
		.set_form(&fields)
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_callback_for_unknown_transaction_is_not_found() {
	let repo = InMemoryTransactionRepository::new();
	let confirm_use_case = use_case(&repo);

	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(confirm_use_case.clone()))
			.service(callback),
	)
	.await;

	let fields = success_callback_fields("ghost", "102035", "secret");
	let req = test::TestRequest::post()
		.uri("/transactions/ghost/callback/done")
		.set_form(&fields)
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_failed_callback_marks_transaction_failed() {
	let repo = InMemoryTransactionRepository::new();
	let transaction = pending_transaction("tx-1", dec!(19.5));
	repo.save(transaction.clone()).await.unwrap();
	let confirm_use_case = use_case(&repo);

	let app = test::init_service(
		App::new()
			.app_data(web::Data::new(confirm_use_case.clone()))
			.service(callback),
	)
	.await;

	let req = test::TestRequest::post()
		.uri("/transactions/tx-1/callback/failed")
		.set_form(&HashMap::<String, String>::new())
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::OK);
	let stored = repo.find_by_id(&transaction.id).await.unwrap().unwrap();
	assert_eq!(stored.status, TransactionStatus::Failed);
}
