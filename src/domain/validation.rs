use std::collections::HashMap;
use std::fmt;

/// Validation rules a gateway imposes on the inbound callback fields
/// before a status transition is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
	Required,
	Text,
}

pub type DataRules = HashMap<&'static str, Vec<FieldRule>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	MissingField(String),
	EmptyField(String),
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ValidationError::MissingField(name) => {
				write!(f, "Missing required callback field: {name}")
			}
			ValidationError::EmptyField(name) => {
				write!(f, "Callback field must not be empty: {name}")
			}
		}
	}
}

impl std::error::Error for ValidationError {}

/// Checks an inbound field set against a gateway's rules. Fields not
/// named by any rule are ignored.
pub fn validate_fields(
	fields: &HashMap<String, String>,
	rules: &DataRules,
) -> Result<(), ValidationError> {
	for (name, field_rules) in rules {
		for rule in field_rules {
			match rule {
				FieldRule::Required => {
					if !fields.contains_key(*name) {
						return Err(ValidationError::MissingField(
							name.to_string(),
						));
					}
				}
				FieldRule::Text => {
					if let Some(value) = fields.get(*name) &&
						value.is_empty()
					{
						return Err(ValidationError::EmptyField(name.to_string()));
					}
				}
			}
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rules() -> DataRules {
		HashMap::from([
			("STAMP", vec![FieldRule::Required, FieldRule::Text]),
			("MAC", vec![FieldRule::Required, FieldRule::Text]),
		])
	}

	#[test]
	fn test_complete_fields_pass() {
		let fields = HashMap::from([
			("STAMP".to_string(), "42".to_string()),
			("MAC".to_string(), "abc".to_string()),
			("EXTRA".to_string(), "ignored".to_string()),
		]);

		assert_eq!(validate_fields(&fields, &rules()), Ok(()));
	}

	#[test]
	fn test_missing_field_is_reported_by_name() {
		let fields = HashMap::from([("STAMP".to_string(), "42".to_string())]);

		assert_eq!(
			validate_fields(&fields, &rules()),
			Err(ValidationError::MissingField("MAC".to_string()))
		);
	}

	#[test]
	fn test_empty_field_is_rejected() {
		let fields = HashMap::from([
			("STAMP".to_string(), "42".to_string()),
			("MAC".to_string(), String::new()),
		]);

		assert_eq!(
			validate_fields(&fields, &rules()),
			Err(ValidationError::EmptyField("MAC".to_string()))
		);
	}

	#[test]
	fn test_empty_rules_accept_anything() {
		let fields = HashMap::new();

		assert_eq!(validate_fields(&fields, &DataRules::new()), Ok(()));
	}
}
