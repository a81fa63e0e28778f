//! Time-off API endpoints.

use super::{
    INCLUDE_ALL_FIELDS, INCLUDE_FIELDS, MATCH, PAGE_SIZE, PAGE_TOKEN, SORT_BY, SORT_ORDER,
    START_DATE,
};
use crate::client::RocketlaneClient;
use crate::error::RocketlaneResult;
use crate::operation::ParamType::{Array, Integer, Object, String as Str};
use crate::operation::{param, Body, Method, Operation};
use crate::params::Params;
use serde_json::Value;

/// Time-offs API.
pub struct TimeOffsApi<'a> {
    client: &'a RocketlaneClient,
}

impl<'a> TimeOffsApi<'a> {
    pub(crate) fn new(client: &'a RocketlaneClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, time_off_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&GET_TIMEOFF, params.set("timeOffId", time_off_id))
            .await
    }

    pub async fn delete(&self, time_off_id: &str) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("timeOffId", time_off_id);
        self.client.execute(&DELETE_TIMEOFF, params).await
    }

    pub async fn list(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&GET_ALL_TIMEOFFS, params).await
    }

    /// Create a time-off. `notifyUsers` lists who gets an email about it.
    pub async fn create(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&CREATE_TIMEOFF, params).await
    }
}

/// `GET /time-offs`
pub const GET_ALL_TIMEOFFS: Operation = Operation {
    name: "get_all_timeoffs",
    summary: "Get all time-offs",
    tags: &["Time-Offs"],
    method: Method::Get,
    path: "time-offs",
    required: &[],
    query: &[
        PAGE_SIZE, PAGE_TOKEN, INCLUDE_FIELDS, INCLUDE_ALL_FIELDS, SORT_BY, SORT_ORDER, MATCH,
        param("startDate.gt", Str), param("startDate.eq", Str), param("startDate.lt", Str),
        param("startDate.ge", Str), param("startDate.le", Str), param("endDate.gt", Str),
        param("endDate.eq", Str), param("endDate.lt", Str), param("endDate.ge", Str),
        param("endDate.le", Str), param("type.eq", Array), param("type.oneOf", Array),
        param("type.noneOf", Array), param("userId.eq", Str), param("userId.oneOf", Str),
        param("userId.noneOf", Str),
    ],
    body: Body::Empty,
};

/// `POST /time-offs`
pub const CREATE_TIMEOFF: Operation = Operation {
    name: "create_timeoff",
    summary: "Create a time-off",
    tags: &["Time-Offs"],
    method: Method::Post,
    path: "time-offs",
    required: &[],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Object(&[
        param("timeOffId", Integer), param("user", Object), param("note", Str),
        START_DATE,
        param("endDate", Str).describe("End date in YYYY-MM-DD format, on or after startDate"),
        param("type", Str), param("notifyUsers", Object),
        param("durationInMinutes", Integer).describe("Duration in minutes. Required for CUSTOM"),
    ]),
};

/// `GET /time-offs/{timeOffId}`
pub const GET_TIMEOFF: Operation = Operation {
    name: "get_timeoff",
    summary: "Get time-off by Id",
    tags: &["Time-Offs"],
    method: Method::Get,
    path: "time-offs/{timeOffId}",
    required: &["timeOffId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Empty,
};

/// `DELETE /time-offs/{timeOffId}`
pub const DELETE_TIMEOFF: Operation = Operation {
    name: "delete_timeoff",
    summary: "Delete a time-off",
    tags: &["Time-Offs"],
    method: Method::Delete,
    path: "time-offs/{timeOffId}",
    required: &["timeOffId"],
    query: &[],
    body: Body::Empty,
};
