use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::warn;

use crate::adapters::web::errors::ApiError;
use crate::domain::transaction::TransactionId;
use crate::use_cases::purchase::{PurchaseError, PurchaseUseCase};

#[post("/transactions/{id}/purchase")]
pub async fn purchase(
	path: web::Path<String>,
	use_case: web::Data<PurchaseUseCase>,
) -> impl Responder {
	let transaction_id = TransactionId::from(path.into_inner());

	match use_case.execute(transaction_id).await {
		Ok(result) => HttpResponse::Ok().json(result),
		Err(e @ PurchaseError::TransactionNotFound(_)) => {
			warn!("Purchase rejected: {e}");
			ApiError::TransactionNotFoundError.error_response()
		}
		Err(e) => {
			warn!("Error building purchase request: {e}");
			ApiError::InternalServerError.error_response()
		}
	}
}
