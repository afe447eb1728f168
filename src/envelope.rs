//! Response-envelope decoding.
//!
//! The service wraps every logical payload as `{ "body": ... }`. [`Envelope`] is the one
//! place that unwraps it. Object-shaped results are `body` exactly as received; a missing
//! envelope or `body` means "no data" and decodes to the shape's empty default instead of an
//! error, as does a named field of the wrong JSON type.

// self
use crate::_prelude::*;

/// JSON object returned by member-shaped operations.
pub type Record = Map<String, Value>;

/// Result shape an operation promises, paired with the envelope field it reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	/// The whole `body`, whatever its JSON type.
	Object,
	/// One object-valued field inside `body`.
	Member(&'static str),
	/// One array-valued field inside `body`.
	Rows(&'static str),
	/// Always reports success, whether or not a response arrived.
	Acknowledge,
}

/// Decoded response payload awaiting normalization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Envelope(Option<Value>);
impl Envelope {
	/// Wraps a decoded response body.
	pub fn new(payload: Option<Value>) -> Self {
		Self(payload)
	}

	/// Returns `body` exactly as received, or `{}` when the envelope or `body` is absent or
	/// `null`.
	pub fn into_body(self) -> Value {
		match self.0 {
			Some(Value::Object(mut envelope)) => match envelope.remove("body") {
				None | Some(Value::Null) => Value::Object(Map::new()),
				Some(body) => body,
			},
			_ => Value::Object(Map::new()),
		}
	}

	/// Returns `body[field]` as an object, or `{}`.
	pub fn into_member(self, field: &str) -> Record {
		match self.take_field(field) {
			Some(Value::Object(member)) => member,
			_ => Record::new(),
		}
	}

	/// Returns `body[field]` as an array, or `[]`.
	pub fn into_rows(self, field: &str) -> Vec<Value> {
		match self.take_field(field) {
			Some(Value::Array(rows)) => rows,
			_ => Vec::new(),
		}
	}

	fn take_field(self, field: &str) -> Option<Value> {
		match self.into_body() {
			Value::Object(mut body) => body.remove(field),
			_ => None,
		}
	}
}
impl From<Option<Value>> for Envelope {
	fn from(payload: Option<Value>) -> Self {
		Self::new(payload)
	}
}

/// Result types an [`Envelope`] can be normalized into.
pub trait FromEnvelope
where
	Self: 'static + Send + Sized,
{
	/// Extracts the result for `shape` from a received envelope.
	fn from_envelope(envelope: Envelope, shape: Shape) -> Self;

	/// Default returned when a swallowing operation fails.
	fn empty() -> Self;
}
impl FromEnvelope for Value {
	fn from_envelope(envelope: Envelope, shape: Shape) -> Self {
		match shape {
			Shape::Object => envelope.into_body(),
			Shape::Member(field) => Value::Object(envelope.into_member(field)),
			Shape::Rows(field) => Value::Array(envelope.into_rows(field)),
			Shape::Acknowledge => Self::empty(),
		}
	}

	fn empty() -> Self {
		Value::Object(Map::new())
	}
}
impl FromEnvelope for Record {
	fn from_envelope(envelope: Envelope, shape: Shape) -> Self {
		match shape {
			Shape::Member(field) => envelope.into_member(field),
			Shape::Object => match envelope.into_body() {
				Value::Object(body) => body,
				_ => Self::empty(),
			},
			Shape::Rows(_) | Shape::Acknowledge => Self::empty(),
		}
	}

	fn empty() -> Self {
		Record::new()
	}
}
impl FromEnvelope for Vec<Value> {
	fn from_envelope(envelope: Envelope, shape: Shape) -> Self {
		match shape {
			Shape::Rows(field) => envelope.into_rows(field),
			Shape::Object | Shape::Member(_) | Shape::Acknowledge => Self::empty(),
		}
	}

	fn empty() -> Self {
		Vec::new()
	}
}
// Acknowledgement never fails: a failed call still reports `true`.
impl FromEnvelope for bool {
	fn from_envelope(_: Envelope, _: Shape) -> Self {
		true
	}

	fn empty() -> Self {
		true
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn object_returns_body_exactly() {
		for body in [
			json!({ "organizationID": "org-1", "nested": { "a": [1, 2, 3] } }),
			json!(["a", "b"]),
			json!("deleted"),
			json!(true),
			json!(3),
		] {
			let envelope = Envelope::new(Some(json!({ "body": body.clone() })));

			assert_eq!(Value::from_envelope(envelope, Shape::Object), body);
		}
	}

	#[test]
	fn absent_or_null_body_is_empty_object() {
		for payload in [None, Some(json!({})), Some(json!({ "body": null })), Some(json!([1, 2]))] {
			let envelope = Envelope::new(payload);

			assert_eq!(Value::from_envelope(envelope.clone(), Shape::Object), json!({}));
			assert!(
				<Vec<Value>>::from_envelope(envelope, Shape::Rows("microAppRows")).is_empty()
			);
		}
	}

	#[test]
	fn fields_of_non_object_body_are_empty() {
		let envelope = Envelope::new(Some(json!({ "body": "text" })));

		assert!(Record::from_envelope(envelope.clone(), Shape::Member("currentRow")).is_empty());
		assert!(<Vec<Value>>::from_envelope(envelope, Shape::Rows("microAppRows")).is_empty());
	}

	#[test]
	fn rows_read_named_field() {
		let envelope = Envelope::new(Some(json!({
			"body": { "microAppRows": [{ "_id": "r1" }, { "_id": "r2" }], "total": 2 }
		})));
		let rows = <Vec<Value>>::from_envelope(envelope, Shape::Rows("microAppRows"));

		assert_eq!(rows, vec![json!({ "_id": "r1" }), json!({ "_id": "r2" })]);
	}

	#[test]
	fn rows_field_of_wrong_type_is_empty() {
		let envelope = Envelope::new(Some(json!({ "body": { "microAppRows": { "_id": "r1" } } })));

		assert!(<Vec<Value>>::from_envelope(envelope, Shape::Rows("microAppRows")).is_empty());
	}

	#[test]
	fn member_reads_named_object() {
		let envelope =
			Envelope::new(Some(json!({ "body": { "currentRow": { "_id": "r1", "name": "x" } } })));
		let row = Record::from_envelope(envelope, Shape::Member("currentRow"));

		assert_eq!(Value::Object(row), json!({ "_id": "r1", "name": "x" }));

		let missing = Envelope::new(Some(json!({ "body": {} })));

		assert!(Record::from_envelope(missing, Shape::Member("currentRow")).is_empty());
	}

	#[test]
	fn acknowledge_is_always_true() {
		assert!(bool::from_envelope(Envelope::new(None), Shape::Acknowledge));
		assert!(bool::from_envelope(
			Envelope::new(Some(json!({ "error": "x" }))),
			Shape::Acknowledge
		));
		assert!(bool::empty());
	}
}
