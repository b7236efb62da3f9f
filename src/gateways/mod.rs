pub mod macpay;
pub mod registry;
pub mod signature;
