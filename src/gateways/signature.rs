use rust_decimal::{Decimal, RoundingStrategy};
use sha2::{Digest, Sha512};

/// SHA-512 hex digest (lowercase) over the given components joined
/// literally by `&`, no escaping. Both the outbound request signature and
/// the inbound callback signature are computed this way; they differ only
/// in which components are covered.
pub fn mac_digest(parts: &[&str]) -> String {
	hex::encode(Sha512::digest(parts.join("&")))
}

/// Fixed-point amount rendering for the wire: exactly two fractional
/// digits, `.` separator, no grouping, midpoint rounded away from zero.
pub fn format_amount(amount: Decimal) -> String {
	let rounded = amount
		.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
	format!("{rounded:.2}")
}
