//! Tasks API endpoints.

use super::{
    DUE_DATE, INCLUDE_ALL_FIELDS, INCLUDE_FIELDS, MATCH, PAGE_SIZE, PAGE_TOKEN, SORT_BY,
    SORT_ORDER, START_DATE,
};
use crate::client::RocketlaneClient;
use crate::error::RocketlaneResult;
use crate::operation::ParamType::{Array, Boolean, Integer, Number, Object, String as Str};
use crate::operation::{aliased, param, Body, Method, Operation, Param};
use crate::params::Params;
use serde_json::Value;

/// Tasks API: task CRUD plus followers, dependencies, assignees and phase moves.
pub struct TasksApi<'a> {
    client: &'a RocketlaneClient,
}

impl<'a> TasksApi<'a> {
    pub(crate) fn new(client: &'a RocketlaneClient) -> Self {
        Self { client }
    }

    /// Get a task by id.
    pub async fn get(&self, task_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&GET_TASK, params.set("taskId", task_id)).await
    }

    /// Update a task. A body `taskId` goes in `taskId_body`.
    pub async fn update(&self, task_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&UPDATE_TASK, params.set("taskId", task_id)).await
    }

    /// Delete a task.
    pub async fn delete(&self, task_id: &str) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("taskId", task_id);
        self.client.execute(&DELETE_TASK, params).await
    }

    /// List tasks matching the given filters.
    pub async fn list(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&GET_ALL_TASKS, params).await
    }

    /// Create a task.
    pub async fn create(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&CREATE_TASK, params).await
    }

    pub async fn add_followers(
        &self,
        task_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&ADD_FOLLOWERS_TO_TASK, params.set("taskId", task_id))
            .await
    }

    pub async fn remove_followers(
        &self,
        task_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&REMOVE_FOLLOWERS_FROM_TASK, params.set("taskId", task_id))
            .await
    }

    pub async fn add_dependencies(
        &self,
        task_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&ADD_DEPENDENCIES_TO_TASK, params.set("taskId", task_id))
            .await
    }

    pub async fn remove_dependencies(
        &self,
        task_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&REMOVE_DEPENDENCIES_FROM_TASK, params.set("taskId", task_id))
            .await
    }

    /// Assign members or placeholders to a task.
    pub async fn add_assignees(
        &self,
        task_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&ADD_ASSIGNEE_TO_TASK, params.set("taskId", task_id))
            .await
    }

    pub async fn remove_assignees(
        &self,
        task_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&REMOVE_ASSIGNEES_FROM_TASK, params.set("taskId", task_id))
            .await
    }

    /// Move a task into another phase. `phase` is an object such as `{"phaseId": 1}`.
    pub async fn move_to_phase(
        &self,
        task_id: &str,
        phase: Value,
    ) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("taskId", task_id).set("phase", phase);
        self.client.execute(&MOVE_TASK_TO_GIVEN_PHASE, params).await
    }
}

/// `GET /tasks/{taskId}`
pub const GET_TASK: Operation = Operation {
    name: "get_task",
    summary: "Get task by Id",
    tags: &["Tasks"],
    method: Method::Get,
    path: "tasks/{taskId}",
    required: &["taskId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Empty,
};

const TASK_DESCRIPTION: Param =
    param("taskDescription", Str).describe("Task description as HTML, e.g. <p>Kick off</p>");
const TASK_PRIVATE_NOTE: Param =
    param("taskPrivateNote", Str).describe("Note visible to team members only, as HTML");
const EFFORT_IN_MINUTES: Param =
    param("effortInMinutes", Integer).describe("Expected effort in minutes");
const PROGRESS: Param = param("progress", Integer).describe("Progress from 0 to 100");
const TASK_TYPE: Param =
    param("type", Str).describe("MILESTONE or TASK. Tasks not marked as milestones are TASK");

/// `PUT /tasks/{taskId}`
pub const UPDATE_TASK: Operation = Operation {
    name: "update_task",
    summary: "Update task by Id",
    tags: &["Tasks"],
    method: Method::Put,
    path: "tasks/{taskId}",
    required: &["taskId"],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Object(&[
        aliased("taskId", "taskId_body", Integer), param("taskName", Str), TASK_DESCRIPTION,
        TASK_PRIVATE_NOTE, START_DATE, DUE_DATE, EFFORT_IN_MINUTES, PROGRESS,
        param("atRisk", Boolean), TASK_TYPE, param("fields", Array),
        param("status", Object), param("externalReferenceId", Str), param("private", Boolean),
    ]),
};

/// `DELETE /tasks/{taskId}`
pub const DELETE_TASK: Operation = Operation {
    name: "delete_task",
    summary: "Delete task by Id",
    tags: &["Tasks"],
    method: Method::Delete,
    path: "tasks/{taskId}",
    required: &["taskId"],
    query: &[],
    body: Body::Empty,
};

/// `POST /tasks/{taskId}/remove-followers`
pub const REMOVE_FOLLOWERS_FROM_TASK: Operation = Operation {
    name: "remove_followers_from_task",
    summary: "Remove followers from a task by Id",
    tags: &["Tasks"],
    method: Method::Post,
    path: "tasks/{taskId}/remove-followers",
    required: &["taskId"],
    query: &[],
    body: Body::Object(&[param("members", Array)]),
};

/// `POST /tasks/{taskId}/remove-dependencies`
pub const REMOVE_DEPENDENCIES_FROM_TASK: Operation = Operation {
    name: "remove_dependencies_from_task",
    summary: "Remove dependencies from a task by Id",
    tags: &["Tasks"],
    method: Method::Post,
    path: "tasks/{taskId}/remove-dependencies",
    required: &["taskId"],
    query: &[],
    body: Body::Object(&[param("dependencies", Array)]),
};

/// `POST /tasks/{taskId}/remove-assignees`
pub const REMOVE_ASSIGNEES_FROM_TASK: Operation = Operation {
    name: "remove_assignees_from_task",
    summary: "Remove assignees from a task by Id",
    tags: &["Tasks"],
    method: Method::Post,
    path: "tasks/{taskId}/remove-assignees",
    required: &["taskId"],
    query: &[],
    body: Body::Object(&[param("members", Array), param("placeholders", Array)]),
};

/// `POST /tasks/{taskId}/move-phase`
pub const MOVE_TASK_TO_GIVEN_PHASE: Operation = Operation {
    name: "move_task_to_given_phase",
    summary: "Move a task to the phase by Id",
    tags: &["Tasks"],
    method: Method::Post,
    path: "tasks/{taskId}/move-phase",
    required: &["taskId"],
    query: &[],
    body: Body::Object(&[param("phase", Object)]),
};

/// `POST /tasks/{taskId}/add-followers`
pub const ADD_FOLLOWERS_TO_TASK: Operation = Operation {
    name: "add_followers_to_task",
    summary: "Add followers to a task by Id",
    tags: &["Tasks"],
    method: Method::Post,
    path: "tasks/{taskId}/add-followers",
    required: &["taskId"],
    query: &[],
    body: Body::Object(&[param("members", Array)]),
};

/// `POST /tasks/{taskId}/add-dependencies`
pub const ADD_DEPENDENCIES_TO_TASK: Operation = Operation {
    name: "add_dependencies_to_task",
    summary: "Add dependencies to a task by Id",
    tags: &["Tasks"],
    method: Method::Post,
    path: "tasks/{taskId}/add-dependencies",
    required: &["taskId"],
    query: &[],
    body: Body::Object(&[param("dependencies", Array)]),
};

/// `POST /tasks/{taskId}/add-assignees`
pub const ADD_ASSIGNEE_TO_TASK: Operation = Operation {
    name: "add_assignee_to_task",
    summary: "Add assignees to a task by Id",
    tags: &["Tasks"],
    method: Method::Post,
    path: "tasks/{taskId}/add-assignees",
    required: &["taskId"],
    query: &[],
    body: Body::Object(&[param("members", Array), param("placeholders", Array)]),
};

/// `GET /tasks`
pub const GET_ALL_TASKS: Operation = Operation {
    name: "get_all_tasks",
    summary: "Get all tasks",
    tags: &["Tasks"],
    method: Method::Get,
    path: "tasks",
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
        param("updatedAt.le", Integer), param("projectId.eq", Number),
        param("phaseId.eq", Number), param("taskName.eq", Str), param("taskName.cn", Str),
        param("taskName.nc", Str), param("effortInMinutes.eq", Number),
        param("effortInMinutes.gt", Number), param("effortInMinutes.lt", Number),
        param("progress.eq", Number), param("progress.gt", Number), param("progress.lt", Number),
        param("includeArchive.eq", Boolean), param("task.status.eq", Str),
        param("task.status.oneOf", Str), param("task.status.noneOf", Str),
        param("project.status.eq", Str), param("project.status.oneOf", Str),
        param("project.status.noneOf", Str), param("externalReferenceId.eq", Str),
    ],
    body: Body::Empty,
};

/// `POST /tasks`
pub const CREATE_TASK: Operation = Operation {
    name: "create_task",
    summary: "Create a task",
    tags: &["Tasks"],
    method: Method::Post,
    path: "tasks",
    required: &[],
    query: &[INCLUDE_FIELDS, INCLUDE_ALL_FIELDS],
    body: Body::Object(&[
        param("taskId", Integer), param("taskName", Str), TASK_DESCRIPTION, TASK_PRIVATE_NOTE,
        START_DATE, DUE_DATE, EFFORT_IN_MINUTES, PROGRESS, param("atRisk", Boolean), TASK_TYPE,
        param("project", Object), param("phase", Object),
        param("status", Object), param("fields", Array), param("assignees", Object),
        param("followers", Object), param("parent", Object), param("externalReferenceId", Str),
        param("private", Boolean),
    ]),
};
