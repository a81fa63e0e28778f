//! Phases API endpoints.

use super::{
    DUE_DATE, INCLUDE_ALL_FIELDS, INCLUDE_FIELDS, MATCH, PAGE_SIZE, PAGE_TOKEN, SORT_BY,
    SORT_ORDER, START_DATE,
};
use crate::client::RocketlaneClient;
use crate::error::RocketlaneResult;
use crate::operation::ParamType::{Boolean, Integer, Object, String as Str};
use crate::operation::{param, Body, Method, Operation};
use crate::params::Params;
use serde_json::Value;

/// Phases API.
pub struct PhasesApi<'a> {
    client: &'a RocketlaneClient,
}

impl<'a> PhasesApi<'a> {
    pub(crate) fn new(client: &'a RocketlaneClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, phase_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&GET_PHASE, params.set("phaseId", phase_id))
            .await
    }

    pub async fn update(&self, phase_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&UPDATE_PHASE, params.set("phaseId", phase_id))
            .await
    }

    pub async fn delete(&self, phase_id: &str) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("phaseId", phase_id);
        self.client.execute(&DELETE_PHASE, params).await
    }

    /// List the phases of a project.
    pub async fn list(&self, project_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&GET_ALL_PHASES, params.set("projectId", project_id))
            .await
    }

    pub async fn create(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&CREATE_PHASE, params).await
    }
}

/// `GET /phases/{phaseId}`
pub const GET_PHASE: Operation = Operation {
    name: "get_phase",
    summary: "Get phase by Id",
    tags: &["Phases"],
    method: Method::Get,
    path: "phases/{phaseId}",
    required: &["phaseId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Empty,
};

/// `PUT /phases/{phaseId}`
pub const UPDATE_PHASE: Operation = Operation {
    name: "update_phase",
    summary: "Update phase by Id",
    tags: &["Phases"],
    method: Method::Put,
    path: "phases/{phaseId}",
    required: &["phaseId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Object(&[
        param("phaseName", Str), START_DATE, DUE_DATE, param("status", Object),
        param("private", Boolean),
    ]),
};

/// `DELETE /phases/{phaseId}`
pub const DELETE_PHASE: Operation = Operation {
    name: "delete_phase",
    summary: "Delete phase by Id",
    tags: &["Phases"],
    method: Method::Delete,
    path: "phases/{phaseId}",
    required: &["phaseId"],
    query: &[],
    body: Body::Empty,
};

/// `GET /phases`
pub const GET_ALL_PHASES: Operation = Operation {
    name: "get_all_phases",
    summary: "Get all phases",
    tags: &["Phases"],
    method: Method::Get,
    path: "phases",
    required: &["projectId"],
    query: &[
        param("projectId", Integer), PAGE_SIZE, PAGE_TOKEN, INCLUDE_FIELDS, INCLUDE_ALL_FIELDS,
        SORT_BY, SORT_ORDER, MATCH, param("startDate.gt", Str), param("startDate.eq", Str),
        param("startDate.lt", Str), param("startDate.ge", Str), param("startDate.le", Str),
        param("dueDate.gt", Str), param("dueDate.eq", Str), param("dueDate.lt", Str),
        param("dueDate.ge", Str), param("dueDate.le", Str), param("startDateActual.gt", Str),
        param("startDateActual.eq", Str), param("startDateActual.lt", Str),
        param("startDateActual.ge", Str), param("startDateActual.le", Str),
        param("dueDateActual.gt", Str), param("dueDateActual.eq", Str),
        param("dueDateActual.lt", Str), param("dueDateActual.ge", Str),
        param("dueDateActual.le", Str), param("createdAt.gt", Integer),
        param("createdAt.eq", Integer), param("createdAt.lt", Integer),
        param("createdAt.ge", Integer), param("createdAt.le", Integer),
        param("updatedAt.gt", Integer), param("updatedAt.eq", Integer),
        param("updatedAt.lt", Integer), param("updatedAt.ge", Integer),
        param("updatedAt.le", Integer), param("phaseName.eq", Str), param("phaseName.cn", Str),
        param("phaseName.nc", Str),
    ],
    body: Body::Empty,
};

/// `POST /phases`
pub const CREATE_PHASE: Operation = Operation {
    name: "create_phase",
    summary: "Create a phase",
    tags: &["Phases"],
    method: Method::Post,
    path: "phases",
    required: &[],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Object(&[
        param("phaseId", Integer), param("phaseName", Str), param("project", Object),
        START_DATE, DUE_DATE, param("status", Object), param("private", Boolean),
    ]),
};
