//! Operation descriptors: endpoint path, result shape, and failure policy.
//!
//! Every remote capability is a `static` [`Operation`] defined once here. The failure
//! policy and the empty default live on the descriptor, so the client needs exactly one
//! code path to execute and normalize any of them.

// std
use std::marker::PhantomData;
// self
use crate::{
	_prelude::*,
	envelope::{Envelope, FromEnvelope, Record, Shape},
	http::TransportResponse,
	obs::{self, OperationOutcome},
};

use self::FailurePolicy::{Propagating, Swallowing};

/// How a transport failure is surfaced to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
	/// Transport failures reach the caller unaltered.
	Propagating,
	/// Transport failures are logged and replaced with the shape's empty default.
	Swallowing,
}
impl FailurePolicy {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FailurePolicy::Propagating => "propagating",
			FailurePolicy::Swallowing => "swallowing",
		}
	}
}
impl Display for FailurePolicy {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Named remote capability resolving to `O`.
pub struct Operation<O> {
	/// Stable operation name used in logs, spans, and metrics.
	pub name: &'static str,
	/// Endpoint path appended to the base address.
	pub path: &'static str,
	/// Failure-containment mode.
	pub policy: FailurePolicy,
	/// Result shape read from the envelope.
	pub shape: Shape,
	_output: PhantomData<fn() -> O>,
}
impl<O> Operation<O> {
	const fn new(
		name: &'static str,
		path: &'static str,
		policy: FailurePolicy,
		shape: Shape,
	) -> Self {
		Self { name, path, policy, shape, _output: PhantomData }
	}
}
impl Operation<Value> {
	/// Operation resolving to the whole `body`.
	pub const fn object(name: &'static str, path: &'static str, policy: FailurePolicy) -> Self {
		Self::new(name, path, policy, Shape::Object)
	}
}
impl Operation<Record> {
	/// Operation resolving to one object-valued field of `body`.
	pub const fn member(
		name: &'static str,
		path: &'static str,
		policy: FailurePolicy,
		field: &'static str,
	) -> Self {
		Self::new(name, path, policy, Shape::Member(field))
	}
}
impl Operation<Vec<Value>> {
	/// Operation resolving to one array-valued field of `body`.
	pub const fn rows(
		name: &'static str,
		path: &'static str,
		policy: FailurePolicy,
		field: &'static str,
	) -> Self {
		Self::new(name, path, policy, Shape::Rows(field))
	}
}
impl Operation<bool> {
	/// Operation that always reports `true`, even when the call fails.
	pub const fn acknowledge(
		name: &'static str,
		path: &'static str,
		policy: FailurePolicy,
	) -> Self {
		Self::new(name, path, policy, Shape::Acknowledge)
	}
}
impl<O> Operation<O>
where
	O: FromEnvelope,
{
	/// Maps a transport outcome to this operation's documented result.
	///
	/// Non-success statuses count as transport failures, except for [`Shape::Acknowledge`]
	/// where any received response is a success. Received responses are decoded through
	/// [`Envelope`]; failures either propagate or collapse into the empty default, according to
	/// [`Operation::policy`].
	pub fn normalize(&self, outcome: Result<TransportResponse>) -> Result<O> {
		let failure = match outcome {
			Ok(response) if response.is_success() || self.shape == Shape::Acknowledge => {
				obs::record_operation_outcome(self.name, OperationOutcome::Success);

				return Ok(O::from_envelope(Envelope::new(response.body), self.shape));
			},
			Ok(response) => Error::Status { status: response.status, body: response.body },
			Err(e) => e,
		};

		match self.policy {
			FailurePolicy::Propagating => {
				obs::record_operation_outcome(self.name, OperationOutcome::Failure);

				Err(failure)
			},
			FailurePolicy::Swallowing => {
				obs::log_swallowed(self.name, self.policy, &failure);
				obs::record_operation_outcome(self.name, OperationOutcome::Swallowed);

				Ok(O::empty())
			},
		}
	}
}
impl<O> Debug for Operation<O> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Operation")
			.field("name", &self.name)
			.field("path", &self.path)
			.field("policy", &self.policy)
			.field("shape", &self.shape)
			.finish()
	}
}

/// Login endpoint; requests to it carry no credential headers.
pub const LOGIN_PATH: &str = "/api/login";
/// Login operation label.
pub const LOGIN: &str = "login";

/// Resolves a user identifier from an email address.
pub static GET_USER_ID: Operation<Value> =
	Operation::object("get_user_id", "/api/userid", Propagating);

/// Creates an organization.
pub static INSERT_ORGANIZATION: Operation<Value> =
	Operation::object("insert_organization", "/api/insertorganization", Propagating);
/// Reads an organization.
pub static READ_ORGANIZATION: Operation<Value> =
	Operation::object("read_organization", "/api/readorganization", Propagating);
/// Updates an organization.
pub static UPDATE_ORGANIZATION: Operation<Value> =
	Operation::object("update_organization", "/api/updateorganization", Propagating);
/// Deletes an organization.
pub static DELETE_ORGANIZATION: Operation<Value> =
	Operation::object("delete_organization", "/api/deleteorganization", Propagating);

/// Creates a team.
pub static INSERT_TEAM: Operation<Value> =
	Operation::object("insert_team", "/api/insertteam", Propagating);
/// Reads a team.
pub static READ_TEAM: Operation<Value> =
	Operation::object("read_team", "/api/readteam", Propagating);
/// Updates a team.
pub static UPDATE_TEAM: Operation<Value> =
	Operation::object("update_team", "/api/updateteam", Propagating);
/// Deletes a team.
pub static DELETE_TEAM: Operation<Value> =
	Operation::object("delete_team", "/api/deleteteam", Propagating);

/// Adds members to one or more teams.
pub static INSERT_TEAM_MEMBERS: Operation<Value> =
	Operation::object("insert_team_members", "/api/insertteammembers", Propagating);
/// Reads one team membership.
pub static READ_TEAM_MEMBER: Operation<Value> =
	Operation::object("read_team_member", "/api/readteammember", Propagating);
/// Updates one team membership.
pub static UPDATE_TEAM_MEMBER: Operation<Value> =
	Operation::object("update_team_member", "/api/updateteammember", Propagating);
/// Removes one team membership.
pub static DELETE_TEAM_MEMBER: Operation<Value> =
	Operation::object("delete_team_member", "/api/deleteteammember", Propagating);

/// Inserts a datatable row.
pub static INSERT_MICRO_APP_ROW: Operation<Value> =
	Operation::object("insert_micro_app_row", "/api/insertmicroapprow", Propagating);
/// Queries datatable rows.
pub static GET_MICRO_APP_DATA: Operation<Vec<Value>> =
	Operation::rows("get_micro_app_data", "/api/microappdata", Propagating, "microAppRows");
/// Fetches one datatable row.
pub static GET_MICRO_APP_DATA_ROW: Operation<Record> =
	Operation::member(
		"get_micro_app_data_row",
		"/api/microappdata/row",
		Swallowing,
		"currentRow",
	);
/// Removes one datatable row.
pub static REMOVE_MICRO_APP_ROW: Operation<Value> =
	Operation::object("remove_micro_app_row", "/api/removemicroapprow", Swallowing);
/// Updates one datatable row.
pub static UPDATE_MICRO_APP_DATA_ROW: Operation<bool> =
	Operation::acknowledge("update_micro_app_data_row", "/api/updatemicroapprow", Swallowing);

/// Attaches a child record to a row field.
pub static CREATE_MICRO_APP_CHILD: Operation<Value> =
	Operation::object("create_micro_app_child", "/api/createmicroappchild", Propagating);
/// Lists child records attached to a row field.
pub static GET_CHILD_ITEMS_BY_FIELD: Operation<Vec<Value>> =
	Operation::rows(
		"get_child_items_by_field",
		"/api/getchilditemsbyfield",
		Propagating,
		"childItems",
	);
/// Reads one child record.
pub static READ_MICRO_APP_CHILD: Operation<Value> =
	Operation::object("read_micro_app_child", "/api/readmicroappchild", Propagating);
/// Updates one child record.
pub static UPDATE_MICRO_APP_CHILD: Operation<Value> =
	Operation::object("update_micro_app_child", "/api/updatemicroappchild", Propagating);
/// Removes one child record.
pub static REMOVE_MICRO_APP_CHILD: Operation<Value> =
	Operation::object("remove_micro_app_child", "/api/removemicroappchild", Propagating);

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashSet;
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::error::TransportError;

	#[test]
	fn every_operation_owns_a_distinct_path() {
		let paths = [
			GET_USER_ID.path,
			INSERT_ORGANIZATION.path,
			READ_ORGANIZATION.path,
			UPDATE_ORGANIZATION.path,
			DELETE_ORGANIZATION.path,
			INSERT_TEAM.path,
			READ_TEAM.path,
			UPDATE_TEAM.path,
			DELETE_TEAM.path,
			INSERT_TEAM_MEMBERS.path,
			READ_TEAM_MEMBER.path,
			UPDATE_TEAM_MEMBER.path,
			DELETE_TEAM_MEMBER.path,
			INSERT_MICRO_APP_ROW.path,
			GET_MICRO_APP_DATA.path,
			GET_MICRO_APP_DATA_ROW.path,
			REMOVE_MICRO_APP_ROW.path,
			UPDATE_MICRO_APP_DATA_ROW.path,
			CREATE_MICRO_APP_CHILD.path,
			GET_CHILD_ITEMS_BY_FIELD.path,
			READ_MICRO_APP_CHILD.path,
			UPDATE_MICRO_APP_CHILD.path,
			REMOVE_MICRO_APP_CHILD.path,
			LOGIN_PATH,
		];
		let unique = paths.iter().collect::<HashSet<_>>();

		assert_eq!(unique.len(), paths.len());
	}

	fn network_failure() -> Result<TransportResponse> {
		Err(TransportError::Io(std::io::Error::other("connection reset")).into())
	}

	#[test]
	fn propagating_operations_surface_the_original_error() {
		let err = INSERT_ORGANIZATION
			.normalize(network_failure())
			.expect_err("Propagating operations should return the transport error.");

		assert!(matches!(err, Error::Transport(TransportError::Io(_))));

		let err = GET_MICRO_APP_DATA
			.normalize(Ok(TransportResponse::new(500, Some(json!({ "message": "boom" })))))
			.expect_err("Non-success statuses should propagate as failures.");

		assert!(matches!(err, Error::Status { status: 500, body: Some(_) }));
	}

	#[test]
	fn swallowing_operations_return_their_empty_default() {
		assert_eq!(
			GET_MICRO_APP_DATA_ROW.normalize(network_failure()).expect("Failures are swallowed."),
			Record::new()
		);
		assert_eq!(
			REMOVE_MICRO_APP_ROW
				.normalize(Ok(TransportResponse::new(404, None)))
				.expect("Failures are swallowed."),
			json!({})
		);
		assert!(
			UPDATE_MICRO_APP_DATA_ROW
				.normalize(network_failure())
				.expect("Row updates report success even when the call failed.")
		);
	}

	#[test]
	fn received_responses_decode_through_the_envelope() {
		let body = json!({ "rowID": "row-7", "tags": ["a", "b"] });
		let record = INSERT_MICRO_APP_ROW
			.normalize(Ok(TransportResponse::new(200, Some(json!({ "body": body.clone() })))))
			.expect("Successful responses should decode.");

		assert_eq!(record, body);

		for body in [json!(["a", "b"]), json!("deleted"), json!(true), json!(3)] {
			let result = DELETE_ORGANIZATION
				.normalize(Ok(TransportResponse::new(200, Some(json!({ "body": body.clone() })))))
				.expect("Non-object bodies should decode.");

			assert_eq!(result, body);
		}

		let rows = GET_CHILD_ITEMS_BY_FIELD
			.normalize(Ok(TransportResponse::new(200, Some(json!({ "status": "ok" })))))
			.expect("Missing envelope fields are not errors.");

		assert!(rows.is_empty());
		assert!(
			UPDATE_MICRO_APP_DATA_ROW
				.normalize(Ok(TransportResponse::new(200, None)))
				.expect("Any received response acknowledges the update.")
		);
		assert!(
			UPDATE_MICRO_APP_DATA_ROW
				.normalize(Ok(TransportResponse::new(500, Some(json!({ "error": "x" })))))
				.expect("Error statuses still count as a received response.")
		);
	}

	#[test]
	fn row_level_mutations_swallow_failures() {
		assert_eq!(GET_MICRO_APP_DATA_ROW.policy, FailurePolicy::Swallowing);
		assert_eq!(REMOVE_MICRO_APP_ROW.policy, FailurePolicy::Swallowing);
		assert_eq!(UPDATE_MICRO_APP_DATA_ROW.policy, FailurePolicy::Swallowing);
		assert_eq!(INSERT_MICRO_APP_ROW.policy, FailurePolicy::Propagating);
		assert_eq!(READ_MICRO_APP_CHILD.policy, FailurePolicy::Propagating);
	}
}
