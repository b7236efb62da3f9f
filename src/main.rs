use std::sync::Arc;

use payment_gateway::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = Arc::new(
		payment_gateway::config::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}
