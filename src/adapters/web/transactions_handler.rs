use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::warn;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{CreateTransactionRequest, TransactionResponse};
use crate::use_cases::create_transaction::{
	CreateTransactionError, CreateTransactionUseCase,
};
use crate::use_cases::dto::CreateTransactionCommand;

#[post("/transactions")]
pub async fn create_transaction(
	payload: web::Json<CreateTransactionRequest>,
	use_case: web::Data<CreateTransactionUseCase>,
) -> impl Responder {
	let command = CreateTransactionCommand {
		amount:  payload.amount,
		gateway: payload.gateway.clone(),
	};

	match use_case.execute(command).await {
		Ok(transaction) => {
			HttpResponse::Ok().json(TransactionResponse { transaction })
		}
		Err(
			e @ (CreateTransactionError::UnknownGateway(_) |
			CreateTransactionError::NegativeAmount(_)),
		) => {
			warn!("Rejected transaction creation: {e}");
			ApiError::BadClientDataError.error_response()
		}
		Err(e) => {
			warn!("Error creating transaction: {e}");
			ApiError::InternalServerError.error_response()
		}
	}
}
