//! Resource allocations API endpoints.

use super::{INCLUDE_ALL_FIELDS, INCLUDE_FIELDS, MATCH, PAGE_SIZE, PAGE_TOKEN, SORT_BY, SORT_ORDER};
use crate::client::RocketlaneClient;
use crate::error::RocketlaneResult;
use crate::operation::ParamType::String as Str;
use crate::operation::{param, Body, Method, Operation};
use crate::params::Params;
use serde_json::Value;

/// Resource allocations API.
pub struct ResourceAllocationsApi<'a> {
    client: &'a RocketlaneClient,
}

impl<'a> ResourceAllocationsApi<'a> {
    pub(crate) fn new(client: &'a RocketlaneClient) -> Self {
        Self { client }
    }

    /// List allocations between two dates (`YYYY-MM-DD`, both inclusive).
    pub async fn list(
        &self,
        start_date: &str,
        end_date: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        let params = params.set("startDate", start_date).set("endDate", end_date);
        self.client.execute(&GET_ALL_RESOURCE_ALLOCATIONS, params).await
    }
}

/// `GET /resource-allocations`
pub const GET_ALL_RESOURCE_ALLOCATIONS: Operation = Operation {
    name: "get_all_resource_allocations",
    summary: "Get all Resource allocations",
    tags: &["Resource Allocations"],
    method: Method::Get,
    path: "resource-allocations",
    required: &["startDate", "endDate"],
    query: &[
        param("startDate", Str)
            .describe("YYYY-MM-DD. Returns allocations starting on or after this date"),
        param("endDate", Str)
            .describe("YYYY-MM-DD. Returns allocations ending on or before this date"),
        PAGE_SIZE, PAGE_TOKEN, INCLUDE_FIELDS,
        INCLUDE_ALL_FIELDS, SORT_BY, SORT_ORDER, MATCH, param("memberId.eq", Str),
        param("memberId.oneOf", Str), param("memberId.noneOf", Str), param("projectId.eq", Str),
        param("projectId.oneOf", Str), param("projectId.noneOf", Str),
        param("placeholderId.eq", Str), param("placeholderId.oneOf", Str),
        param("placeholderId.noneOf", Str),
    ],
    body: Body::Empty,
};
