//! Users API endpoints.

use super::{INCLUDE_ALL_FIELDS, INCLUDE_FIELDS, MATCH, PAGE_SIZE, PAGE_TOKEN, SORT_BY, SORT_ORDER};
use crate::client::RocketlaneClient;
use crate::error::RocketlaneResult;
use crate::operation::ParamType::{Array, Integer, Number, String as Str};
use crate::operation::{param, Body, Method, Operation};
use crate::params::Params;
use serde_json::Value;

/// Users API.
pub struct UsersApi<'a> {
    client: &'a RocketlaneClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a RocketlaneClient) -> Self {
        Self { client }
    }

    /// Get a user by id.
    pub async fn get(&self, user_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&GET_USER, params.set("userId", user_id))
            .await
    }

    /// List users matching the given filters.
    pub async fn list(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&GET_ALL_USERS, params).await
    }
}

/// `GET /users/{userId}`
pub const GET_USER: Operation = Operation {
    name: "get_user",
    summary: "Get user by Id",
    tags: &["Users", "important"],
    method: Method::Get,
    path: "users/{userId}",
    required: &["userId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Empty,
};

/// `GET /users`
pub const GET_ALL_USERS: Operation = Operation {
    name: "get_all_users",
    summary: "Get all users",
    tags: &["Users"],
    method: Method::Get,
    path: "users",
    required: &[],
    query: &[
        PAGE_SIZE, PAGE_TOKEN, INCLUDE_FIELDS, INCLUDE_ALL_FIELDS, SORT_BY, SORT_ORDER, MATCH,
        param("firstName.eq", Str), param("firstName.cn", Str), param("firstName.nc", Str),
        param("lastName.eq", Str), param("lastName.cn", Str), param("lastName.nc", Str),
        param("email.eq", Str), param("email.cn", Str), param("email.nc", Str),
        param("status.eq", Array), param("status.oneOf", Array), param("status.noneOf", Array),
        param("type.eq", Array), param("type.oneOf", Array), param("roleId.eq", Str),
        param("roleId.oneOf", Str), param("roleId.noneOf", Str), param("permissionId.eq", Str),
        param("permissionId.oneOf", Str), param("permissionId.noneOf", Str),
        param("capacityInMinutes.eq", Number), param("capacityInMinutes.gt", Number),
        param("capacityInMinutes.ge", Number), param("capacityInMinutes.lt", Number),
        param("capacityInMinutes.le", Number), param("createdAt.gt", Integer),
        param("createdAt.eq", Integer), param("createdAt.lt", Integer),
        param("createdAt.ge", Integer), param("createdAt.le", Integer),
        param("updatedAt.gt", Integer), param("updatedAt.eq", Integer),
        param("updatedAt.lt", Integer), param("updatedAt.ge", Integer),
        param("updatedAt.le", Integer),
    ],
    body: Body::Empty,
};
