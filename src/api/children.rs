//! Child items attached to a row field, such as file attachments.

// self
use crate::{
	_prelude::*,
	auth::Target,
	client::Client,
	http::Transport,
	operation::{
		CREATE_MICRO_APP_CHILD, GET_CHILD_ITEMS_BY_FIELD, READ_MICRO_APP_CHILD,
		REMOVE_MICRO_APP_CHILD, UPDATE_MICRO_APP_CHILD,
	},
};

/// Payload for [`Client::create_micro_app_child`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateMicroAppChild {
	/// Datatable owning the parent row.
	#[serde(rename = "microAppResourceID")]
	pub micro_app_resource_id: String,
	/// Parent row.
	#[serde(rename = "appID")]
	pub app_id: String,
	/// Field on the parent row that holds the child.
	#[serde(rename = "fieldID")]
	pub field_id: String,
	/// Child content forwarded verbatim.
	pub content: Value,
}
impl CreateMicroAppChild {
	/// Attaches `content` to `field_id` on row `app_id` of `micro_app_resource_id`.
	pub fn new(
		micro_app_resource_id: impl Into<String>,
		app_id: impl Into<String>,
		field_id: impl Into<String>,
		content: Value,
	) -> Self {
		Self {
			micro_app_resource_id: micro_app_resource_id.into(),
			app_id: app_id.into(),
			field_id: field_id.into(),
			content,
		}
	}
}

/// Payload for [`Client::get_child_items_by_field`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildItemsByField {
	/// Parent row.
	#[serde(rename = "appID")]
	pub app_id: String,
	/// Field holding the children.
	#[serde(rename = "fieldID")]
	pub field_id: String,
}
impl ChildItemsByField {
	/// Lists children of `field_id` on row `app_id`.
	pub fn new(app_id: impl Into<String>, field_id: impl Into<String>) -> Self {
		Self { app_id: app_id.into(), field_id: field_id.into() }
	}
}

/// Payload addressing one child item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRef {
	/// Child identifier.
	#[serde(rename = "childID")]
	pub child_id: String,
}
impl ChildRef {
	/// Addresses the child with `child_id`.
	pub fn new(child_id: impl Into<String>) -> Self {
		Self { child_id: child_id.into() }
	}
}

/// Payload for [`Client::update_micro_app_child`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateMicroAppChild {
	/// Child identifier.
	#[serde(rename = "childID")]
	pub child_id: String,
	/// Replacement content.
	pub content: Value,
}
impl UpdateMicroAppChild {
	/// Replaces the content of `child_id`.
	pub fn new(child_id: impl Into<String>, content: Value) -> Self {
		Self { child_id: child_id.into(), content }
	}
}

impl<T> Client<T>
where
	T: ?Sized + Transport,
{
	/// Creates a child item; the result carries its `childID`.
	pub async fn create_micro_app_child(
		&self,
		target: &Target,
		request: &CreateMicroAppChild,
	) -> Result<Value> {
		self.call(&CREATE_MICRO_APP_CHILD, target, request).await
	}

	/// Lists the children of one row field, or `[]` when the response carries none.
	pub async fn get_child_items_by_field(
		&self,
		target: &Target,
		request: &ChildItemsByField,
	) -> Result<Vec<Value>> {
		self.call(&GET_CHILD_ITEMS_BY_FIELD, target, request).await
	}

	/// Reads one child item.
	pub async fn read_micro_app_child(
		&self,
		target: &Target,
		request: &ChildRef,
	) -> Result<Value> {
		self.call(&READ_MICRO_APP_CHILD, target, request).await
	}

	/// Replaces the content of one child item.
	pub async fn update_micro_app_child(
		&self,
		target: &Target,
		request: &UpdateMicroAppChild,
	) -> Result<Value> {
		self.call(&UPDATE_MICRO_APP_CHILD, target, request).await
	}

	/// Removes one child item.
	pub async fn remove_micro_app_child(
		&self,
		target: &Target,
		request: &ChildRef,
	) -> Result<Value> {
		self.call(&REMOVE_MICRO_APP_CHILD, target, request).await
	}
}
