//! Time tracking API endpoints.

use super::{INCLUDE_ALL_FIELDS, INCLUDE_FIELDS, MATCH, PAGE_SIZE, PAGE_TOKEN, SORT_BY, SORT_ORDER};
use crate::client::RocketlaneClient;
use crate::error::RocketlaneResult;
use crate::operation::ParamType::{Boolean, Integer, Number, Object, String as Str};
use crate::operation::{aliased, param, Body, Method, Operation, Param};
use crate::params::Params;
use serde_json::Value;

/// Time entries API.
pub struct TimeEntriesApi<'a> {
    client: &'a RocketlaneClient,
}

impl<'a> TimeEntriesApi<'a> {
    pub(crate) fn new(client: &'a RocketlaneClient) -> Self {
        Self { client }
    }

    /// Get a time entry.
    pub async fn get(
        &self,
        time_entry_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&GET_TIME_ENTRY, params.set("timeEntryId", time_entry_id))
            .await
    }

    /// Update a time entry.
    pub async fn update(
        &self,
        time_entry_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&UPDATE_TIME_ENTRY, params.set("timeEntryId", time_entry_id))
            .await
    }

    /// Delete a time entry.
    pub async fn delete(&self, time_entry_id: &str) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("timeEntryId", time_entry_id);
        self.client.execute(&DELETE_TIME_ENTRY, params).await
    }

    pub async fn list(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&GET_ALL_TIME_ENTRIES, params).await
    }

    pub async fn create(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&CREATE_TIME_ENTRY, params).await
    }

    /// Search time entries. Accepts a narrower filter set than [`Self::list`].
    pub async fn search(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&SEARCH_TIME_ENTRIES, params).await
    }

    /// List the time entry categories configured for the account.
    pub async fn categories(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&GET_TIME_ENTRY_CATEGORIES, params).await
    }
}

/// `GET /time-entries/{timeEntryId}`
pub const GET_TIME_ENTRY: Operation = Operation {
    name: "get_time_entry",
    summary: "Get a time entry",
    tags: &["Time Tracking"],
    method: Method::Get,
    path: "time-entries/{timeEntryId}",
    required: &["timeEntryId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Empty,
};

const ENTRY_DATE: Param = param("date", Str).describe("Date in YYYY-MM-DD format");
const MINUTES: Param = param("minutes", Integer).describe("Duration in minutes");

/// `PUT /time-entries/{timeEntryId}`
pub const UPDATE_TIME_ENTRY: Operation = Operation {
    name: "update_time_entry",
    summary: "Update a time entry",
    tags: &["Time Tracking"],
    method: Method::Put,
    path: "time-entries/{timeEntryId}",
    required: &["timeEntryId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Object(&[
        aliased("timeEntryId", "timeEntryId_body", Integer), ENTRY_DATE, MINUTES,
        param("activityName", Str), param("notes", Str),
        param("category", Object), param("billable", Boolean),
    ]),
};

/// `DELETE /time-entries/{timeEntryId}`
pub const DELETE_TIME_ENTRY: Operation = Operation {
    name: "delete_time_entry",
    summary: "Delete a time entry",
    tags: &["Time Tracking"],
    method: Method::Delete,
    path: "time-entries/{timeEntryId}",
    required: &["timeEntryId"],
    query: &[],
    body: Body::Empty,
};

/// `GET /time-entries`
pub const GET_ALL_TIME_ENTRIES: Operation = Operation {
    name: "get_all_time_entries",
    summary: "Get all time entries",
    tags: &["Time Tracking"],
    method: Method::Get,
    path: "time-entries",
    required: &[],
    query: &[
        PAGE_SIZE, PAGE_TOKEN, INCLUDE_FIELDS, SORT_BY, SORT_ORDER, MATCH, param("date.gt", Str),
        param("date.eq", Str), param("date.lt", Str), param("date.ge", Str),
        param("date.le", Str), param("project.eq", Number), param("projectId.eq", Number),
        param("task.eq", Number), param("taskId.eq", Number), param("taskId.oneOf", Number),
        param("taskId.noneOf", Number), param("projectPhase.eq", Number),
        param("category.eq", Number), param("user.eq", Number), param("sourceType.eq", Str),
        param("activityName.eq", Str), param("activityName.cn", Str),
        param("activityName.nc", Str), param("approvalStatus.eq", Str),
        param("approvedBy.eq", Number), param("approvedAt.eq", Integer),
        param("approvedAt.gt", Integer), param("approvedAt.ge", Integer),
        param("approvedAt.lt", Integer), param("approvedAt.le", Integer),
        param("billable.eq", Boolean), param("includeDeleted.eq", Boolean),
        param("createdAt.gt", Integer), param("createdAt.eq", Integer),
        param("createdAt.lt", Integer), param("createdAt.ge", Integer),
        param("createdAt.le", Integer), param("updatedAt.gt", Integer),
        param("updatedAt.eq", Integer), param("updatedAt.lt", Integer),
        param("updatedAt.ge", Integer), param("updatedAt.le", Integer),
    ],
    body: Body::Empty,
};

/// `POST /time-entries`
pub const CREATE_TIME_ENTRY: Operation = Operation {
    name: "create_time_entry",
    summary: "Create a time entry",
    tags: &["Time Tracking"],
    method: Method::Post,
    path: "time-entries",
    required: &[],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Object(&[
        param("timeEntryId", Integer), ENTRY_DATE, MINUTES, param("activityName", Str),
        param("project", Object), param("task", Object), param("projectPhase", Object),
        param("billable", Boolean), param("user", Object), param("notes", Str),
        param("category", Object),
    ]),
};

/// `GET /time-entries/search`
pub const SEARCH_TIME_ENTRIES: Operation = Operation {
    name: "search_time_entries",
    summary: "Search time entries",
    tags: &["Time Tracking"],
    method: Method::Get,
    path: "time-entries/search",
    required: &[],
    query: &[
        PAGE_SIZE, PAGE_TOKEN, param("includeFields", Str), INCLUDE_ALL_FIELDS, SORT_BY,
        SORT_ORDER, MATCH, param("date.gt", Str), param("date.eq", Str), param("date.lt", Str),
        param("date.ge", Str), param("date.le", Str), param("project.eq", Number),
        param("task.eq", Number), param("projectPhase.eq", Number), param("category.eq", Number),
        param("user.eq", Number), param("sourceType.eq", Str), param("activityName.eq", Str),
        param("activityName.cn", Str), param("activityName.nc", Str),
        param("approvalStatus.eq", Str),
    ],
    body: Body::Empty,
};

/// `GET /time-entries/categories`
pub const GET_TIME_ENTRY_CATEGORIES: Operation = Operation {
    name: "get_time_entry_categories",
    summary: "Get time entry categories",
    tags: &["Time Tracking"],
    method: Method::Get,
    path: "time-entries/categories",
    required: &[],
    query: &[PAGE_SIZE, PAGE_TOKEN],
    body: Body::Empty,
};
