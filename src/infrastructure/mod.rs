pub mod persistence;
pub mod routing;
