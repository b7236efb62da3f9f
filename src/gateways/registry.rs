use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::gateway::PaymentGateway;

/// Name-keyed lookup of the gateway adapters available to the service.
/// Adapters register under their protocol name; unknown names simply
/// resolve to `None`.
#[derive(Clone, Default)]
pub struct GatewayRegistry {
	gateways: HashMap<&'static str, Arc<dyn PaymentGateway>>,
}

impl GatewayRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, gateway: Arc<dyn PaymentGateway>) {
		self.gateways.insert(gateway.name(), gateway);
	}

	pub fn get(&self, name: &str) -> Option<Arc<dyn PaymentGateway>> {
		self.gateways.get(name).cloned()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.gateways.contains_key(name)
	}

	pub fn names(&self) -> Vec<&'static str> {
		self.gateways.keys().copied().collect()
	}
}
