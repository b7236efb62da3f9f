use std::collections::HashMap;

use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::warn;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::CallbackResponse;
use crate::domain::transaction::{TransactionId, TransactionStatus};
use crate::use_cases::confirm_callback::{
	ConfirmCallbackError, ConfirmCallbackUseCase,
};
use crate::use_cases::dto::ConfirmCallbackCommand;

/// Inbound processor callback. The processor posts its fields
/// form-encoded; anything beyond the protocol fields is carried through
/// to the committed payload untouched.
#[post("/transactions/{id}/callback/{status}")]
pub async fn callback(
	path: web::Path<(String, String)>,
	form: web::Form<HashMap<String, String>>,
	use_case: web::Data<ConfirmCallbackUseCase>,
) -> impl Responder {
	let (id, status) = path.into_inner();

	let new_status = match status.parse::<TransactionStatus>() {
		Ok(status) => status,
		Err(e) => {
			warn!("Callback rejected: {e}");
			return ApiError::BadClientDataError.error_response();
		}
	};

	let command = ConfirmCallbackCommand {
		transaction_id: TransactionId::from(id),
		new_status,
		fields: form.into_inner(),
	};

	match use_case.execute(command).await {
		Ok(true) => HttpResponse::Ok().json(CallbackResponse {
			status: new_status.to_string(),
		}),
		Ok(false) => ApiError::VerificationFailedError.error_response(),
		Err(e @ ConfirmCallbackError::TransactionNotFound(_)) => {
			warn!("Callback rejected: {e}");
			ApiError::TransactionNotFoundError.error_response()
		}
		Err(
			e @ (ConfirmCallbackError::InvalidPayload(_) |
			ConfirmCallbackError::UnsupportedStatus(_)),
		) => {
			warn!("Callback rejected: {e}");
			ApiError::BadClientDataError.error_response()
		}
		Err(e) => {
			warn!("Error processing callback: {e}");
			ApiError::InternalServerError.error_response()
		}
	}
}
