//! Spaces API endpoints.

use super::{MATCH, PAGE_SIZE, PAGE_TOKEN, SORT_BY, SORT_ORDER};
use crate::client::RocketlaneClient;
use crate::error::RocketlaneResult;
use crate::operation::ParamType::{Boolean, Integer, Object, String as Str};
use crate::operation::{param, Body, Method, Operation};
use crate::params::Params;
use serde_json::Value;

/// Spaces API.
pub struct SpacesApi<'a> {
    client: &'a RocketlaneClient,
}

impl<'a> SpacesApi<'a> {
    pub(crate) fn new(client: &'a RocketlaneClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, space_id: &str) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("spaceId", space_id);
        self.client.execute(&GET_SPACE, params).await
    }

    /// Rename a space.
    pub async fn update(&self, space_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&UPDATE_SPACE, params.set("spaceId", space_id))
            .await
    }

    pub async fn delete(&self, space_id: &str) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("spaceId", space_id);
        self.client.execute(&DELETE_SPACE, params).await
    }

    /// List the spaces of a project.
    pub async fn list(&self, project_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&GET_ALL_SPACES, params.set("projectId", project_id))
            .await
    }

    pub async fn create(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&CREATE_SPACE, params).await
    }
}

/// `GET /spaces/{spaceId}`
pub const GET_SPACE: Operation = Operation {
    name: "get_space",
    summary: "Get space by Id",
    tags: &["Spaces"],
    method: Method::Get,
    path: "spaces/{spaceId}",
    required: &["spaceId"],
    query: &[],
    body: Body::Empty,
};

/// `PUT /spaces/{spaceId}`
pub const UPDATE_SPACE: Operation = Operation {
    name: "update_space",
    summary: "Update space by Id",
    tags: &["Spaces"],
    method: Method::Put,
    path: "spaces/{spaceId}",
    required: &["spaceId"],
    query: &[],
    body: Body::Object(&[param("spaceName", Str)]),
};

/// `DELETE /spaces/{spaceId}`
pub const DELETE_SPACE: Operation = Operation {
    name: "delete_space",
    summary: "Delete space by Id",
    tags: &["Spaces"],
    method: Method::Delete,
    path: "spaces/{spaceId}",
    required: &["spaceId"],
    query: &[],
    body: Body::Empty,
};

/// `GET /spaces`
pub const GET_ALL_SPACES: Operation = Operation {
    name: "get_all_spaces",
    summary: "Get all spaces",
    tags: &["Spaces"],
    method: Method::Get,
    path: "spaces",
    required: &["projectId"],
    query: &[
        param("projectId", Integer), PAGE_SIZE, PAGE_TOKEN, SORT_BY, SORT_ORDER, MATCH,
        param("spaceName.eq", Str), param("spaceName.cn", Str), param("spaceName.nc", Str),
        param("createdAt.gt", Integer), param("createdAt.eq", Integer),
        param("createdAt.lt", Integer), param("createdAt.ge", Integer),
        param("createdAt.le", Integer), param("updatedAt.gt", Integer),
        param("updatedAt.eq", Integer), param("updatedAt.lt", Integer),
        param("updatedAt.ge", Integer), param("updatedAt.le", Integer),
    ],
    body: Body::Empty,
};

/// `POST /spaces`
pub const CREATE_SPACE: Operation = Operation {
    name: "create_space",
    summary: "Create a space",
    tags: &["Spaces"],
    method: Method::Post,
    path: "spaces",
    required: &[],
    query: &[],
    body: Body::Object(&[
        param("spaceId", Integer), param("spaceName", Str), param("project", Object),
        param("private", Boolean),
    ]),
};
