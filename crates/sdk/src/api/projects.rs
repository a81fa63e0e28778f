//! Projects API endpoints.

use super::{
    DUE_DATE, INCLUDE_ALL_FIELDS, INCLUDE_FIELDS, MATCH, PAGE_SIZE, PAGE_TOKEN, SORT_BY,
    SORT_ORDER, START_DATE,
};
use crate::client::RocketlaneClient;
use crate::error::RocketlaneResult;
use crate::operation::ParamType::{Array, Boolean, Integer, Number, Object, String as Str};
use crate::operation::{param, Body, Method, Operation, Param};
use crate::params::Params;
use serde_json::Value;

/// Projects API: project CRUD, membership, placeholders and templates.
pub struct ProjectsApi<'a> {
    client: &'a RocketlaneClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a RocketlaneClient) -> Self {
        Self { client }
    }

    /// Get a project by id.
    pub async fn get(&self, project_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&GET_PROJECT, params.set("projectId", project_id))
            .await
    }

    /// Update a project.
    pub async fn update(
        &self,
        project_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&UPDATE_PROJECT, params.set("projectId", project_id))
            .await
    }

    /// Delete a project.
    pub async fn delete(&self, project_id: &str) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("projectId", project_id);
        self.client.execute(&DELETE_PROJECT, params).await
    }

    /// List projects matching the given filters.
    pub async fn list(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&GET_ALL_PROJECTS, params).await
    }

    /// Create a project.
    pub async fn create(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&CREATE_PROJECT, params).await
    }

    /// Archive a project.
    pub async fn archive(&self, project_id: &str) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("projectId", project_id);
        self.client.execute(&ARCHIVE_PROJECT, params).await
    }

    /// Add team members and customers to a project.
    pub async fn add_members(
        &self,
        project_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&ADD_MEMBERS, params.set("projectId", project_id))
            .await
    }

    pub async fn remove_members(
        &self,
        project_id: &str,
        members: Value,
    ) -> RocketlaneResult<Option<Value>> {
        let params = Params::new()
            .set("projectId", project_id)
            .set("members", members);
        self.client.execute(&REMOVE_MEMBERS, params).await
    }

    /// Import templates into a project. `items` is sent as the request body.
    pub async fn import_template(
        &self,
        project_id: &str,
        items: Vec<Value>,
    ) -> RocketlaneResult<Option<Value>> {
        let params = Params::new()
            .set("projectId", project_id)
            .set("items", items);
        self.client.execute(&IMPORT_TEMPLATE, params).await
    }

    pub async fn assign_placeholders(
        &self,
        project_id: &str,
        items: Vec<Value>,
    ) -> RocketlaneResult<Option<Value>> {
        let params = Params::new()
            .set("projectId", project_id)
            .set("items", items);
        self.client.execute(&ASSIGN_PLACEHOLDERS, params).await
    }

    pub async fn unassign_placeholders(
        &self,
        project_id: &str,
        items: Vec<Value>,
    ) -> RocketlaneResult<Option<Value>> {
        let params = Params::new()
            .set("projectId", project_id)
            .set("items", items);
        self.client.execute(&UNASSIGN_PLACEHOLDERS, params).await
    }
}

/// `GET /projects/{projectId}`
pub const GET_PROJECT: Operation = Operation {
    name: "get_project",
    summary: "Get project by Id",
    tags: &["Projects", "important"],
    method: Method::Get,
    path: "projects/{projectId}",
    required: &["projectId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Empty,
};

const BUDGETED_HOURS: Param = param("budgetedHours", Number)
    .describe("Budgeted hours, up to two decimals. 1.65 is 1h 39m");

/// `PUT /projects/{projectId}`
pub const UPDATE_PROJECT: Operation = Operation {
    name: "update_project",
    summary: "Update project by Id",
    tags: &["Projects", "important"],
    method: Method::Put,
    path: "projects/{projectId}",
    required: &["projectId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Object(&[
        param("projectName", Str), START_DATE, DUE_DATE, param("visibility", Str),
        param("owner", Object), param("status", Object), param("fields", Array),
        param("annualizedRecurringRevenue", Integer), param("projectFee", Integer),
        param("autoAllocation", Boolean), BUDGETED_HOURS, param("externalReferenceId", Str),
    ]),
};

/// `DELETE /projects/{projectId}`
pub const DELETE_PROJECT: Operation = Operation {
    name: "delete_project",
    summary: "Delete project by Id",
    tags: &["Projects", "important"],
    method: Method::Delete,
    path: "projects/{projectId}",
    required: &["projectId"],
    query: &[],
    body: Body::Empty,
};

/// `POST /projects/{projectId}/unassign-placeholders`
pub const UNASSIGN_PLACEHOLDERS: Operation = Operation {
    name: "unassign_placeholders",
    summary: "Un assign placeholders from an user in a project",
    tags: &["Projects"],
    method: Method::Post,
    path: "projects/{projectId}/unassign-placeholders",
    required: &["projectId", "items"],
    query: &[],
    body: Body::Raw(param("items", Array)),
};

/// `POST /projects/{projectId}/remove-members`
pub const REMOVE_MEMBERS: Operation = Operation {
    name: "remove_members",
    summary: "Remove members from a project",
    tags: &["Projects"],
    method: Method::Post,
    path: "projects/{projectId}/remove-members",
    required: &["projectId", "members"],
    query: &[],
    body: Body::Object(&[param("members", Array)]),
};

/// `POST /projects/{projectId}/import-template`
pub const IMPORT_TEMPLATE: Operation = Operation {
    name: "import_template",
    summary: "Import a template to a project",
    tags: &["Projects"],
    method: Method::Post,
    path: "projects/{projectId}/import-template",
    required: &["projectId", "items"],
    query: &[],
    body: Body::Raw(param("items", Array)),
};

/// `POST /projects/{projectId}/assign-placeholders`
pub const ASSIGN_PLACEHOLDERS: Operation = Operation {
    name: "assign_placeholders",
    summary: "Assign placeholders to an user in a project",
    tags: &["Projects"],
    method: Method::Post,
    path: "projects/{projectId}/assign-placeholders",
    required: &["projectId", "items"],
    query: &[],
    body: Body::Raw(param("items", Array)),
};

/// `POST /projects/{projectId}/archive`
pub const ARCHIVE_PROJECT: Operation = Operation {
    name: "archive_project",
    summary: "Archive project by Id",
    tags: &["Projects"],
    method: Method::Post,
    path: "projects/{projectId}/archive",
    required: &["projectId"],
    query: &[],
    body: Body::Empty,
};

/// `POST /projects/{projectId}/add-members`
pub const ADD_MEMBERS: Operation = Operation {
    name: "add_members",
    summary: "Add members to a project",
    tags: &["Projects", "important"],
    method: Method::Post,
    path: "projects/{projectId}/add-members",
    required: &["projectId"],
    query: &[],
    body: Body::Object(&[param("members", Array), param("customers", Array)]),
};

/// `GET /projects`
pub const GET_ALL_PROJECTS: Operation = Operation {
    name: "get_all_projects",
    summary: "Get all projects",
    tags: &["Projects"],
    method: Method::Get,
    path: "projects",
    required: &[],
    query: &[
        PAGE_SIZE, PAGE_TOKEN, INCLUDE_FIELDS, INCLUDE_ALL_FIELDS, SORT_BY, SORT_ORDER, MATCH,
        param("startDate.gt", Str), param("startDate.eq", Str), param("startDate.lt", Str),
        param("startDate.ge", Str), param("startDate.le", Str), param("dueDate.gt", Str),
        param("dueDate.eq", Str), param("dueDate.lt", Str), param("dueDate.ge", Str),
        param("dueDate.le", Str), param("startDateActual.gt", Str),
        param("startDateActual.eq", Str), param("startDateActual.lt", Str),
        param("startDateActual.ge", Str), param("startDateActual.le", Str),
        param("dueDateActual.gt", Str), param("dueDateActual.eq", Str),
        param("dueDateActual.lt", Str), param("dueDateActual.ge", Str),
        param("dueDateActual.le", Str), param("createdAt.gt", Integer),
        param("createdAt.eq", Integer), param("createdAt.lt", Integer),
        param("createdAt.ge", Integer), param("createdAt.le", Integer),
        param("updatedAt.gt", Integer), param("updatedAt.eq", Integer),
        param("updatedAt.lt", Integer), param("updatedAt.ge", Integer),
        param("updatedAt.le", Integer), param("annualizedRecurringRevenue.eq", Number),
        param("annualizedRecurringRevenue.gt", Number),
        param("annualizedRecurringRevenue.lt", Number), param("projectFee.eq", Number),
        param("projectFee.gt", Number), param("projectFee.lt", Number),
        param("customerId.eq", Str), param("customerId.oneOf", Str),
        param("customerId.noneOf", Str), param("teamMemberId.eq", Str),
        param("teamMemberId.oneOf", Str), param("teamMemberId.noneOf", Str),
        param("companyId.eq", Str), param("companyId.oneOf", Str), param("companyId.noneOf", Str),
        param("projectName.eq", Str), param("projectName.cn", Str), param("projectName.nc", Str),
        param("inferredProgress.eq", Array), param("contractType.eq", Array),
        param("contractType.oneOf", Array), param("contractType.noneOf", Array),
        param("budgetedHours.gt", Str), param("budgetedHours.eq", Str),
        param("budgetedHours.lt", Str), param("budgetedHours.ge", Str),
        param("allocatedHours.le", Str), param("allocatedHours.gt", Str),
        param("allocatedHours.eq", Str), param("allocatedHours.lt", Str),
        param("allocatedHours.ge", Str), param("customersInvited.gt", Str),
        param("customersInvited.eq", Str), param("customersInvited.lt", Str),
        param("customersInvited.ge", Str), param("customersInvited.le", Str),
        param("customersJoined.gt", Str), param("customersJoined.eq", Str),
        param("customersJoined.lt", Str), param("customersJoined.ge", Str),
        param("customersJoined.le", Str), param("includeArchive.eq", Boolean),
        param("status.eq", Str), param("status.oneOf", Str), param("status.noneOf", Str),
        param("externalReferenceId.eq", Str),
    ],
    body: Body::Empty,
};

/// `POST /projects`
pub const CREATE_PROJECT: Operation = Operation {
    name: "create_project",
    summary: "Create a project",
    tags: &["Projects"],
    method: Method::Post,
    path: "projects",
    required: &[],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Object(&[
        param("projectId", Integer), param("projectName", Str),
        START_DATE.describe("Start date in YYYY-MM-DD format. Required when sources are given"),
        DUE_DATE, param("visibility", Str), param("owner", Object),
        param("teamMembers", Object), param("status", Object), param("fields", Array),
        param("customer", Object), param("partners", Array), param("sources", Array),
        param("assignProjectOwner", Boolean), param("placeholders", Array),
        param("annualizedRecurringRevenue", Integer), param("projectFee", Integer),
        param("autoAllocation", Boolean), param("autoCreateCompany", Boolean),
        BUDGETED_HOURS, param("financials", Object), param("currency", Str),
        param("externalReferenceId", Str),
    ]),
};
