//! Rocketlane API endpoints.
//!
//! Each submodule holds the [`Operation`] descriptors for one resource and a
//! typed facade over them. [`OPERATIONS`] lists every operation in the order
//! tools are exposed.

mod fields;
mod phases;
mod projects;
mod resource_allocations;
mod space_documents;
mod spaces;
mod tasks;
mod time_entries;
mod time_offs;
mod users;

pub use fields::*;
pub use phases::*;
pub use projects::*;
pub use resource_allocations::*;
pub use space_documents::*;
pub use spaces::*;
pub use tasks::*;
pub use time_entries::*;
pub use time_offs::*;
pub use users::*;

use crate::operation::{param, Operation, Param, ParamType};

pub(crate) const PAGE_SIZE: Param = param("pageSize", ParamType::Number);
pub(crate) const PAGE_TOKEN: Param = param("pageToken", ParamType::String)
    .describe("Token of the page to fetch, from a previous response. Valid for 15 minutes");
pub(crate) const INCLUDE_FIELDS: Param = param("includeFields", ParamType::Array);
pub(crate) const INCLUDE_ALL_FIELDS: Param = param("includeAllFields", ParamType::Boolean);
pub(crate) const SORT_BY: Param = param("sortBy", ParamType::String);
pub(crate) const SORT_ORDER: Param = param("sortOrder", ParamType::String);
pub(crate) const MATCH: Param = param("match", ParamType::String);

pub(crate) const START_DATE: Param =
    param("startDate", ParamType::String).describe("Start date in YYYY-MM-DD format");
pub(crate) const DUE_DATE: Param = param("dueDate", ParamType::String)
    .describe("Due date in YYYY-MM-DD format, on or after startDate");

/// Every Rocketlane operation.
pub static OPERATIONS: &[&Operation] = &[
    &GET_TIME_ENTRY,
    &UPDATE_TIME_ENTRY,
    &DELETE_TIME_ENTRY,
    &GET_TASK,
    &UPDATE_TASK,
    &DELETE_TASK,
    &GET_SPACE,
    &UPDATE_SPACE,
    &DELETE_SPACE,
    &GET_SPACE_DOCUMENT,
    &UPDATE_SPACE_DOCUMENT,
    &DELETE_SPACE_DOCUMENT,
    &GET_PROJECT,
    &UPDATE_PROJECT,
    &DELETE_PROJECT,
    &GET_PHASE,
    &UPDATE_PHASE,
    &DELETE_PHASE,
    &GET_FIELD,
    &UPDATE_FIELD,
    &DELETE_FIELD,
    &GET_ALL_TIMEOFFS,
    &CREATE_TIMEOFF,
    &GET_ALL_TIME_ENTRIES,
    &CREATE_TIME_ENTRY,
    &REMOVE_FOLLOWERS_FROM_TASK,
    &REMOVE_DEPENDENCIES_FROM_TASK,
    &REMOVE_ASSIGNEES_FROM_TASK,
    &MOVE_TASK_TO_GIVEN_PHASE,
    &ADD_FOLLOWERS_TO_TASK,
    &ADD_DEPENDENCIES_TO_TASK,
    &ADD_ASSIGNEE_TO_TASK,
    &GET_ALL_TASKS,
    &CREATE_TASK,
    &GET_ALL_SPACES,
    &CREATE_SPACE,
    &GET_ALL_SPACE_DOCUMENTS,
    &CREATE_SPACE_DOCUMENT,
    &UNASSIGN_PLACEHOLDERS,
    &REMOVE_MEMBERS,
    &IMPORT_TEMPLATE,
    &ASSIGN_PLACEHOLDERS,
    &ARCHIVE_PROJECT,
    &ADD_MEMBERS,
    &GET_ALL_PROJECTS,
    &CREATE_PROJECT,
    &GET_ALL_PHASES,
    &CREATE_PHASE,
    &UPDATE_FIELD_OPTION,
    &ADD_FIELD_OPTION,
    &GET_ALL_FIELDS,
    &CREATE_FIELD,
    &GET_USER,
    &GET_ALL_USERS,
    &GET_TIMEOFF,
    &DELETE_TIMEOFF,
    &SEARCH_TIME_ENTRIES,
    &GET_TIME_ENTRY_CATEGORIES,
    &GET_ALL_RESOURCE_ALLOCATIONS,
];

/// Look up an operation by name.
pub fn find_operation(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().copied().find(|op| op.name == name)
}
