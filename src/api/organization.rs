//! Account lookup and organization operations.

// self
use crate::{
	_prelude::*,
	auth::Target,
	client::Client,
	http::Transport,
	operation::{
		DELETE_ORGANIZATION, GET_USER_ID, INSERT_ORGANIZATION, READ_ORGANIZATION,
		UPDATE_ORGANIZATION,
	},
};

/// Payload for [`Client::get_user_id`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserId {
	/// Email of the account to look up.
	pub email: String,
}
impl GetUserId {
	/// Looks up the account registered under `email`.
	pub fn new(email: impl Into<String>) -> Self {
		Self { email: email.into() }
	}
}

/// Payload for [`Client::insert_organization`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOrganization {
	/// Organization document forwarded verbatim.
	pub organization_info: Value,
}
impl InsertOrganization {
	/// Creates an organization from its document.
	pub fn new(organization_info: Value) -> Self {
		Self { organization_info }
	}
}

/// Payload addressing one organization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRef {
	/// Organization identifier.
	#[serde(rename = "organizationID")]
	pub organization_id: String,
}
impl OrganizationRef {
	/// Addresses the organization with `organization_id`.
	pub fn new(organization_id: impl Into<String>) -> Self {
		Self { organization_id: organization_id.into() }
	}
}

/// Payload for [`Client::update_organization`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganization {
	/// Organization identifier.
	#[serde(rename = "organizationID")]
	pub organization_id: String,
	/// Fields to update.
	pub organization_info: Value,
}
impl UpdateOrganization {
	/// Updates `organization_id` with `organization_info`.
	pub fn new(organization_id: impl Into<String>, organization_info: Value) -> Self {
		Self { organization_id: organization_id.into(), organization_info }
	}
}

impl<T> Client<T>
where
	T: ?Sized + Transport,
{
	/// Resolves the account identifier registered for an email.
	pub async fn get_user_id(&self, target: &Target, request: &GetUserId) -> Result<Value> {
		self.call(&GET_USER_ID, target, request).await
	}

	/// Creates an organization.
	pub async fn insert_organization(
		&self,
		target: &Target,
		request: &InsertOrganization,
	) -> Result<Value> {
		self.call(&INSERT_ORGANIZATION, target, request).await
	}

	/// Reads an organization.
	pub async fn read_organization(
		&self,
		target: &Target,
		request: &OrganizationRef,
	) -> Result<Value> {
		self.call(&READ_ORGANIZATION, target, request).await
	}

	/// Updates an organization.
	pub async fn update_organization(
		&self,
		target: &Target,
		request: &UpdateOrganization,
	) -> Result<Value> {
		self.call(&UPDATE_ORGANIZATION, target, request).await
	}

	/// Deletes an organization.
	pub async fn delete_organization(
		&self,
		target: &Target,
		request: &OrganizationRef,
	) -> Result<Value> {
		self.call(&DELETE_ORGANIZATION, target, request).await
	}
}
