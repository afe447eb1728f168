//! Team and team-membership operations.

// self
use crate::{
	_prelude::*,
	auth::Target,
	client::Client,
	http::Transport,
	operation::{
		DELETE_TEAM, DELETE_TEAM_MEMBER, INSERT_TEAM, INSERT_TEAM_MEMBERS, READ_TEAM,
		READ_TEAM_MEMBER, UPDATE_TEAM, UPDATE_TEAM_MEMBER,
	},
};

/// Route new members land on when none is given.
pub const DEFAULT_TARGET_ROUTE: &str = "app";

/// Payload for [`Client::insert_team`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTeam {
	/// Team document forwarded verbatim.
	pub team_info: Value,
	/// Account promoted to team admin.
	#[serde(rename = "adminID", default, skip_serializing_if = "Option::is_none")]
	pub admin_id: Option<String>,
}
impl InsertTeam {
	/// Creates a team from its document.
	pub fn new(team_info: Value) -> Self {
		Self { team_info, admin_id: None }
	}

	/// Sets the team admin.
	pub fn with_admin(mut self, admin_id: impl Into<String>) -> Self {
		self.admin_id = Some(admin_id.into());

		self
	}
}

/// Payload addressing one team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
	/// Team identifier.
	#[serde(rename = "teamID")]
	pub team_id: String,
}
impl TeamRef {
	/// Addresses the team with `team_id`.
	pub fn new(team_id: impl Into<String>) -> Self {
		Self { team_id: team_id.into() }
	}
}

/// Payload for [`Client::update_team`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeam {
	/// Team identifier.
	#[serde(rename = "teamID")]
	pub team_id: String,
	/// Fields to update.
	pub team_info: Value,
}
impl UpdateTeam {
	/// Updates `team_id` with `team_info`.
	pub fn new(team_id: impl Into<String>, team_info: Value) -> Self {
		Self { team_id: team_id.into(), team_info }
	}
}

/// Payload for [`Client::insert_team_members`].
///
/// Members may be named by email, by user identifier, or both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTeamMembers {
	/// Teams receiving the members.
	#[serde(rename = "teamIDs")]
	pub team_ids: Vec<String>,
	/// Members named by email.
	#[serde(default)]
	pub emails: Vec<String>,
	/// Members named by user identifier.
	#[serde(rename = "userIDs", default)]
	pub user_ids: Vec<String>,
	/// App opened on first sign-in.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target_initial_app: Option<String>,
	/// Screen opened on first sign-in.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target_initial_screen: Option<String>,
	/// Route opened on first sign-in.
	pub target_route: String,
}
impl InsertTeamMembers {
	/// Adds members to `team_ids`; fill in members via the `with_*` builders.
	pub fn new<I, S>(team_ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			team_ids: team_ids.into_iter().map(Into::into).collect(),
			emails: Vec::new(),
			user_ids: Vec::new(),
			target_initial_app: None,
			target_initial_screen: None,
			target_route: DEFAULT_TARGET_ROUTE.into(),
		}
	}

	/// Sets the members named by email.
	pub fn with_emails<I, S>(mut self, emails: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.emails = emails.into_iter().map(Into::into).collect();

		self
	}

	/// Sets the members named by user identifier.
	pub fn with_user_ids<I, S>(mut self, user_ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.user_ids = user_ids.into_iter().map(Into::into).collect();

		self
	}

	/// Sets the app opened on first sign-in.
	pub fn with_initial_app(mut self, app: impl Into<String>) -> Self {
		self.target_initial_app = Some(app.into());

		self
	}

	/// Sets the screen opened on first sign-in.
	pub fn with_initial_screen(mut self, screen: impl Into<String>) -> Self {
		self.target_initial_screen = Some(screen.into());

		self
	}

	/// Overrides the route opened on first sign-in.
	pub fn with_route(mut self, route: impl Into<String>) -> Self {
		self.target_route = route.into();

		self
	}
}

/// Payload addressing one member of one team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMemberRef {
	/// Team identifier.
	#[serde(rename = "teamID")]
	pub team_id: String,
	/// Member's user identifier.
	#[serde(rename = "userID")]
	pub user_id: String,
}
impl TeamMemberRef {
	/// Addresses `user_id` within `team_id`.
	pub fn new(team_id: impl Into<String>, user_id: impl Into<String>) -> Self {
		Self { team_id: team_id.into(), user_id: user_id.into() }
	}
}

/// Payload for [`Client::update_team_member`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMember {
	/// Team identifier.
	#[serde(rename = "teamID")]
	pub team_id: String,
	/// Member's user identifier.
	#[serde(rename = "userID")]
	pub user_id: String,
	/// Membership fields to update.
	pub team_member_info: Value,
}
impl UpdateTeamMember {
	/// Updates the membership of `user_id` in `team_id`.
	pub fn new(
		team_id: impl Into<String>,
		user_id: impl Into<String>,
		team_member_info: Value,
	) -> Self {
		Self { team_id: team_id.into(), user_id: user_id.into(), team_member_info }
	}
}

impl<T> Client<T>
where
	T: ?Sized + Transport,
{
	/// Creates a team.
	pub async fn insert_team(&self, target: &Target, request: &InsertTeam) -> Result<Value> {
		self.call(&INSERT_TEAM, target, request).await
	}

	/// Reads a team.
	pub async fn read_team(&self, target: &Target, request: &TeamRef) -> Result<Value> {
		self.call(&READ_TEAM, target, request).await
	}

	/// Updates a team.
	pub async fn update_team(&self, target: &Target, request: &UpdateTeam) -> Result<Value> {
		self.call(&UPDATE_TEAM, target, request).await
	}

	/// Deletes a team.
	pub async fn delete_team(&self, target: &Target, request: &TeamRef) -> Result<Value> {
		self.call(&DELETE_TEAM, target, request).await
	}

	/// Adds members to one or more teams.
	pub async fn insert_team_members(
		&self,
		target: &Target,
		request: &InsertTeamMembers,
	) -> Result<Value> {
		self.call(&INSERT_TEAM_MEMBERS, target, request).await
	}

	/// Reads one team membership.
	pub async fn read_team_member(
		&self,
		target: &Target,
		request: &TeamMemberRef,
	) -> Result<Value> {
		self.call(&READ_TEAM_MEMBER, target, request).await
	}

	/// Updates one team membership.
	pub async fn update_team_member(
		&self,
		target: &Target,
		request: &UpdateTeamMember,
	) -> Result<Value> {
		self.call(&UPDATE_TEAM_MEMBER, target, request).await
	}

	/// Removes a member from a team.
	pub async fn delete_team_member(
		&self,
		target: &Target,
		request: &TeamMemberRef,
	) -> Result<Value> {
		self.call(&DELETE_TEAM_MEMBER, target, request).await
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn insert_team_members_defaults_route_and_skips_unset_targets() {
		let request = InsertTeamMembers::new(["t-1"]).with_emails(["a@b.c"]);

		assert_eq!(
			serde_json::to_value(&request).expect("Members payload should serialize."),
			json!({
				"teamIDs": ["t-1"],
				"emails": ["a@b.c"],
				"userIDs": [],
				"targetRoute": "app"
			})
		);

		let request = request
			.with_user_ids(["u-1"])
			.with_initial_app("app-1")
			.with_initial_screen("home")
			.with_route("admin");
		let json = serde_json::to_value(&request).expect("Members payload should serialize.");

		assert_eq!(json["targetInitialApp"], "app-1");
		assert_eq!(json["targetInitialScreen"], "home");
		assert_eq!(json["targetRoute"], "admin");
		assert_eq!(json["userIDs"], json!(["u-1"]));
	}

	#[test]
	fn team_payloads_use_service_keys() {
		assert_eq!(
			serde_json::to_value(InsertTeam::new(json!({ "name": "Ops" })))
				.expect("Insert payload should serialize."),
			json!({ "teamInfo": { "name": "Ops" } })
		);
		assert_eq!(
			serde_json::to_value(InsertTeam::new(json!({})).with_admin("u-9"))
				.expect("Insert payload should serialize."),
			json!({ "teamInfo": {}, "adminID": "u-9" })
		);
		assert_eq!(
			serde_json::to_value(UpdateTeamMember::new("t-1", "u-1", json!({ "role": "x" })))
				.expect("Member update should serialize."),
			json!({ "teamID": "t-1", "userID": "u-1", "teamMemberInfo": { "role": "x" } })
		);
	}
}
