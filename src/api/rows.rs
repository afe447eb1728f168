//! Datatable row operations.
//!
//! Row reads, removals and updates swallow failures and return an empty default; inserts and
//! listings surface them. See [`FailurePolicy`](crate::operation::FailurePolicy).

// self
use crate::{
	_prelude::*,
	auth::Target,
	client::Client,
	envelope::Record,
	http::Transport,
	operation::{
		GET_MICRO_APP_DATA, GET_MICRO_APP_DATA_ROW, INSERT_MICRO_APP_ROW, REMOVE_MICRO_APP_ROW,
		UPDATE_MICRO_APP_DATA_ROW,
	},
};

/// Payload for [`Client::insert_micro_app_row`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertMicroAppRow {
	/// Datatable receiving the row.
	#[serde(rename = "microAppID")]
	pub micro_app_id: String,
	/// Row being embedded into, sent as `null` when unset.
	#[serde(rename = "embeddingRowID", default)]
	pub embedding_row_id: Option<String>,
	/// Users allowed to view the row.
	#[serde(default)]
	pub viewers: Vec<String>,
	/// Row fields.
	pub row_data: Value,
	/// Row creator; the service defaults to the caller.
	#[serde(rename = "userID", default, skip_serializing_if = "Option::is_none")]
	pub creator_id: Option<String>,
}
impl InsertMicroAppRow {
	/// Inserts `row_data` into `micro_app_id`.
	pub fn new(micro_app_id: impl Into<String>, row_data: Value) -> Self {
		Self {
			micro_app_id: micro_app_id.into(),
			embedding_row_id: None,
			viewers: Vec::new(),
			row_data,
			creator_id: None,
		}
	}

	/// Embeds the row into `row_id`.
	pub fn with_embedding_row(mut self, row_id: impl Into<String>) -> Self {
		self.embedding_row_id = Some(row_id.into());

		self
	}

	/// Sets the viewer list.
	pub fn with_viewers<I, S>(mut self, viewers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.viewers = viewers.into_iter().map(Into::into).collect();

		self
	}

	/// Records `user_id` as the creator.
	pub fn with_creator(mut self, user_id: impl Into<String>) -> Self {
		self.creator_id = Some(user_id.into());

		self
	}
}

/// Query for [`Client::get_micro_app_data`].
///
/// Filter objects are forwarded verbatim; unset ones are sent as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMicroAppData {
	/// Datatable to query.
	#[serde(rename = "microAppID")]
	pub micro_app_id: String,
	/// Additional search filters.
	#[serde(default)]
	pub opt_search_filters: Option<Value>,
	/// Primary search filter.
	#[serde(default)]
	pub search_filter: Option<Value>,
	/// Sort, skip and limit controls.
	#[serde(default)]
	pub opt_view_filters: Option<Value>,
	/// Whether `opt_view_filters` is a raw Mongo query.
	#[serde(default)]
	pub view_filter_is_mongo_query: bool,
	/// Whether to run a vector search.
	#[serde(default)]
	pub opt_is_vector_search: bool,
	/// Text for the vector search.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub opt_vector_search_string: Option<String>,
	/// Maximum number of rows.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub opt_limit: Option<u64>,
}
impl GetMicroAppData {
	/// Lists every row of `micro_app_id`.
	pub fn new(micro_app_id: impl Into<String>) -> Self {
		Self {
			micro_app_id: micro_app_id.into(),
			opt_search_filters: None,
			search_filter: None,
			opt_view_filters: None,
			view_filter_is_mongo_query: false,
			opt_is_vector_search: false,
			opt_vector_search_string: None,
			opt_limit: None,
		}
	}

	/// Sets the additional search filters.
	pub fn with_search_filters(mut self, filters: Value) -> Self {
		self.opt_search_filters = Some(filters);

		self
	}

	/// Sets the primary search filter.
	pub fn with_search_filter(mut self, filter: Value) -> Self {
		self.search_filter = Some(filter);

		self
	}

	/// Sets the view filters.
	pub fn with_view_filters(mut self, filters: Value) -> Self {
		self.opt_view_filters = Some(filters);

		self
	}

	/// Sets the view filters as a raw Mongo query.
	pub fn with_mongo_view_filter(mut self, query: Value) -> Self {
		self.opt_view_filters = Some(query);
		self.view_filter_is_mongo_query = true;

		self
	}

	/// Turns the query into a vector search for `text`.
	pub fn with_vector_search(mut self, text: impl Into<String>) -> Self {
		self.opt_is_vector_search = true;
		self.opt_vector_search_string = Some(text.into());

		self
	}

	/// Caps the number of rows returned.
	pub fn with_limit(mut self, limit: u64) -> Self {
		self.opt_limit = Some(limit);

		self
	}
}

/// Payload addressing one row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRef {
	/// Row identifier.
	#[serde(rename = "rowID")]
	pub row_id: String,
}
impl RowRef {
	/// Addresses the row with `row_id`.
	pub fn new(row_id: impl Into<String>) -> Self {
		Self { row_id: row_id.into() }
	}
}

/// Payload for [`Client::update_micro_app_data_row`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMicroAppDataRow {
	/// Row identifier.
	#[serde(rename = "rowID")]
	pub row_id: String,
	/// Fields to update.
	pub row_data: Value,
	/// Original creator of the row.
	#[serde(rename = "userID", default, skip_serializing_if = "Option::is_none")]
	pub creator_id: Option<String>,
}
impl UpdateMicroAppDataRow {
	/// Updates `row_id` with `row_data`.
	pub fn new(row_id: impl Into<String>, row_data: Value) -> Self {
		Self { row_id: row_id.into(), row_data, creator_id: None }
	}

	/// Names the row's creator.
	pub fn with_creator(mut self, user_id: impl Into<String>) -> Self {
		self.creator_id = Some(user_id.into());

		self
	}
}

impl<T> Client<T>
where
	T: ?Sized + Transport,
{
	/// Inserts a row; the result carries the new row's identifier.
	pub async fn insert_micro_app_row(
		&self,
		target: &Target,
		request: &InsertMicroAppRow,
	) -> Result<Value> {
		self.call(&INSERT_MICRO_APP_ROW, target, request).await
	}

	/// Lists rows matching the query, or `[]` when the response carries none.
	pub async fn get_micro_app_data(
		&self,
		target: &Target,
		request: &GetMicroAppData,
	) -> Result<Vec<Value>> {
		self.call(&GET_MICRO_APP_DATA, target, request).await
	}

	/// Fetches one row, or `{}` on any failure.
	pub async fn get_micro_app_data_row(
		&self,
		target: &Target,
		request: &RowRef,
	) -> Result<Record> {
		self.call(&GET_MICRO_APP_DATA_ROW, target, request).await
	}

	/// Removes one row, or returns `{}` on any failure.
	pub async fn remove_micro_app_row(&self, target: &Target, request: &RowRef) -> Result<Value> {
		self.call(&REMOVE_MICRO_APP_ROW, target, request).await
	}

	/// Updates one row.
	///
	/// Always resolves to `true`, whatever the status or content of the response; a failed call
	/// is logged and still reports `true`.
	pub async fn update_micro_app_data_row(
		&self,
		target: &Target,
		request: &UpdateMicroAppDataRow,
	) -> Result<bool> {
		self.call(&UPDATE_MICRO_APP_DATA_ROW, target, request).await
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn insert_row_sends_null_embedding_and_empty_viewers() {
		let request = InsertMicroAppRow::new("app-1", json!({ "name": "x" }));

		assert_eq!(
			serde_json::to_value(&request).expect("Insert payload should serialize."),
			json!({
				"microAppID": "app-1",
				"embeddingRowID": null,
				"viewers": [],
				"rowData": { "name": "x" }
			})
		);

		let request =
			request.with_embedding_row("row-0").with_viewers(["u-2"]).with_creator("u-1");
		let json = serde_json::to_value(&request).expect("Insert payload should serialize.");

		assert_eq!(json["embeddingRowID"], "row-0");
		assert_eq!(json["viewers"], json!(["u-2"]));
		assert_eq!(json["userID"], "u-1");
	}

	#[test]
	fn data_query_defaults_flags_to_false() {
		let json = serde_json::to_value(GetMicroAppData::new("app-1"))
			.expect("Query payload should serialize.");

		assert_eq!(
			json,
			json!({
				"microAppID": "app-1",
				"optSearchFilters": null,
				"searchFilter": null,
				"optViewFilters": null,
				"viewFilterIsMongoQuery": false,
				"optIsVectorSearch": false
			})
		);
	}

	#[test]
	fn data_query_builders_fill_optional_fields() {
		let query = GetMicroAppData::new("app-1")
			.with_mongo_view_filter(json!({ "$limit": 5 }))
			.with_vector_search("tomato")
			.with_limit(5);
		let json = serde_json::to_value(&query).expect("Query payload should serialize.");

		assert_eq!(json["optViewFilters"], json!({ "$limit": 5 }));
		assert_eq!(json["viewFilterIsMongoQuery"], true);
		assert_eq!(json["optIsVectorSearch"], true);
		assert_eq!(json["optVectorSearchString"], "tomato");
		assert_eq!(json["optLimit"], 5);
	}

	#[test]
	fn update_row_sends_creator_as_user_id() {
		let request =
			UpdateMicroAppDataRow::new("r-1", json!({ "done": true })).with_creator("u-7");

		assert_eq!(
			serde_json::to_value(&request).expect("Update payload should serialize."),
			json!({ "rowID": "r-1", "rowData": { "done": true }, "userID": "u-7" })
		);
	}
}
