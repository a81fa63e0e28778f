//! Custom fields API endpoints.

use super::{INCLUDE_ALL_FIELDS, INCLUDE_FIELDS, MATCH, PAGE_SIZE, PAGE_TOKEN, SORT_BY, SORT_ORDER};
use crate::client::RocketlaneClient;
use crate::error::RocketlaneResult;
use crate::operation::ParamType::{Array, Boolean, Integer, String as Str};
use crate::operation::{param, Body, Method, Operation};
use crate::params::Params;
use serde_json::Value;

/// Fields API: custom field definitions and their options.
pub struct FieldsApi<'a> {
    client: &'a RocketlaneClient,
}

impl<'a> FieldsApi<'a> {
    pub(crate) fn new(client: &'a RocketlaneClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, field_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&GET_FIELD, params.set("fieldId", field_id))
            .await
    }

    pub async fn update(&self, field_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&UPDATE_FIELD, params.set("fieldId", field_id))
            .await
    }

    pub async fn delete(&self, field_id: &str) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("fieldId", field_id);
        self.client.execute(&DELETE_FIELD, params).await
    }

    pub async fn list(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&GET_ALL_FIELDS, params).await
    }

    pub async fn create(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&CREATE_FIELD, params).await
    }

    /// Add an option to a single or multiple choice field.
    pub async fn add_option(
        &self,
        field_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&ADD_FIELD_OPTION, params.set("fieldId", field_id))
            .await
    }

    /// Update an existing option, identified by `optionValue`.
    pub async fn update_option(
        &self,
        field_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&UPDATE_FIELD_OPTION, params.set("fieldId", field_id))
            .await
    }
}

/// `GET /fields/{fieldId}`
pub const GET_FIELD: Operation = Operation {
    name: "get_field",
    summary: "Get field by Id",
    tags: &["Fields"],
    method: Method::Get,
    path: "fields/{fieldId}",
    required: &["fieldId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Empty,
};

/// `PUT /fields/{fieldId}`
pub const UPDATE_FIELD: Operation = Operation {
    name: "update_field",
    summary: "Update field by Id",
    tags: &["Fields"],
    method: Method::Put,
    path: "fields/{fieldId}",
    required: &["fieldId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Object(&[
        param("fieldLabel", Str), param("fieldDescription", Str), param("enabled", Boolean),
        param("private", Boolean),
    ]),
};

/// `DELETE /fields/{fieldId}`
pub const DELETE_FIELD: Operation = Operation {
    name: "delete_field",
    summary: "Delete field by Id",
    tags: &["Fields"],
    method: Method::Delete,
    path: "fields/{fieldId}",
    required: &["fieldId"],
    query: &[],
    body: Body::Empty,
};

/// `POST /fields/{fieldId}/update-option`
pub const UPDATE_FIELD_OPTION: Operation = Operation {
    name: "update_field_option",
    summary: "Update field Option",
    tags: &["Fields"],
    method: Method::Post,
    path: "fields/{fieldId}/update-option",
    required: &["fieldId"],
    query: &[],
    body: Body::Object(&[
        param("optionValue", Integer), param("optionColor", Str), param("optionLabel", Str),
    ]),
};

/// `POST /fields/{fieldId}/add-option`
pub const ADD_FIELD_OPTION: Operation = Operation {
    name: "add_field_option",
    summary: "Add field Option",
    tags: &["Fields"],
    method: Method::Post,
    path: "fields/{fieldId}/add-option",
    required: &["fieldId"],
    query: &[],
    body: Body::Object(&[param("optionColor", Str), param("optionLabel", Str)]),
};

/// `GET /fields`
pub const GET_ALL_FIELDS: Operation = Operation {
    name: "get_all_fields",
    summary: "Get all fields",
    tags: &["Fields"],
    method: Method::Get,
    path: "fields",
    required: &[],
    query: &[
        PAGE_SIZE, PAGE_TOKEN, INCLUDE_FIELDS, INCLUDE_ALL_FIELDS, SORT_BY, SORT_ORDER, MATCH,
        param("createdAt.gt", Integer), param("createdAt.eq", Integer),
        param("createdAt.lt", Integer), param("createdAt.ge", Integer),
        param("createdAt.le", Integer), param("updatedAt.gt", Integer),
        param("updatedAt.eq", Integer), param("updatedAt.lt", Integer),
        param("updatedAt.ge", Integer), param("updatedAt.le", Integer),
        param("objectType.eq", Str), param("fieldType.eq", Str), param("enabled.eq", Boolean),
        param("private.eq", Boolean),
    ],
    body: Body::Empty,
};

/// `POST /fields`
pub const CREATE_FIELD: Operation = Operation {
    name: "create_field",
    summary: "Create a Field",
    tags: &["Fields", "important"],
    method: Method::Post,
    path: "fields",
    required: &[],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Object(&[
        param("fieldId", Integer), param("fieldLabel", Str), param("fieldDescription", Str),
        param("fieldType", Str), param("objectType", Str), param("fieldOptions", Array),
        param("ratingScale", Str), param("enabled", Boolean), param("private", Boolean),
    ]),
};
