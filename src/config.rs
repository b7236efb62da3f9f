use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub redis_url: String,
	pub server_keepalive: u64,
	pub public_base_url: String,
	pub macpay_account_id: String,
	pub macpay_mac_key: String,
	pub macpay_redirect_url: String,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}
}
