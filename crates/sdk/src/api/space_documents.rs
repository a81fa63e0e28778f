//! Space documents API endpoints.

use super::{MATCH, PAGE_SIZE, PAGE_TOKEN, SORT_BY, SORT_ORDER};
use crate::client::RocketlaneClient;
use crate::error::RocketlaneResult;
use crate::operation::ParamType::{Integer, Number, Object, String as Str};
use crate::operation::{aliased, param, Body, Method, Operation};
use crate::params::Params;
use serde_json::Value;

/// Space documents API.
pub struct SpaceDocumentsApi<'a> {
    client: &'a RocketlaneClient,
}

impl<'a> SpaceDocumentsApi<'a> {
    pub(crate) fn new(client: &'a RocketlaneClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, space_document_id: &str) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("spaceDocumentId", space_document_id);
        self.client.execute(&GET_SPACE_DOCUMENT, params).await
    }

    /// Update a space document. A body `spaceDocumentId` goes in `spaceDocumentId_body`.
    pub async fn update(
        &self,
        space_document_id: &str,
        params: Params,
    ) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(
                &UPDATE_SPACE_DOCUMENT,
                params.set("spaceDocumentId", space_document_id),
            )
            .await
    }

    pub async fn delete(&self, space_document_id: &str) -> RocketlaneResult<Option<Value>> {
        let params = Params::new().set("spaceDocumentId", space_document_id);
        self.client.execute(&DELETE_SPACE_DOCUMENT, params).await
    }

    /// List the documents in a project's spaces.
    pub async fn list(&self, project_id: &str, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client
            .execute(&GET_ALL_SPACE_DOCUMENTS, params.set("projectId", project_id))
            .await
    }

    pub async fn create(&self, params: Params) -> RocketlaneResult<Option<Value>> {
        self.client.execute(&CREATE_SPACE_DOCUMENT, params).await
    }
}

/// `GET /space-documents/{spaceDocumentId}`
pub const GET_SPACE_DOCUMENT: Operation = Operation {
    name: "get_space_document",
    summary: "Get space document by Id",
    tags: &["Space Documents"],
    method: Method::Get,
    path: "space-documents/{spaceDocumentId}",
    required: &["spaceDocumentId"],
    query: &[],
    body: Body::Empty,
};

/// `PUT /space-documents/{spaceDocumentId}`
pub const UPDATE_SPACE_DOCUMENT: Operation = Operation {
    name: "update_space_document",
    summary: "Update space document by Id",
    tags: &["Space Documents"],
    method: Method::Put,
    path: "space-documents/{spaceDocumentId}",
    required: &["spaceDocumentId"],
    query: &[],
    body: Body::Object(&[
        aliased("spaceDocumentId", "spaceDocumentId_body", Integer),
        param("spaceDocumentName", Str), param("url", Str),
    ]),
};

/// `DELETE /space-documents/{spaceDocumentId}`
pub const DELETE_SPACE_DOCUMENT: Operation = Operation {
    name: "delete_space_document",
    summary: "Delete space document by Id",
    tags: &["Space Documents"],
    method: Method::Delete,
    path: "space-documents/{spaceDocumentId}",
    required: &["spaceDocumentId"],
    query: &[],
    body: Body::Empty,
};

/// `GET /space-documents`
pub const GET_ALL_SPACE_DOCUMENTS: Operation = Operation {
    name: "get_all_space_documents",
    summary: "Get all space documents",
    tags: &["Space Documents"],
    method: Method::Get,
    path: "space-documents",
    required: &["projectId"],
    query: &[
        param("projectId", Integer), PAGE_SIZE, PAGE_TOKEN, SORT_BY, SORT_ORDER, MATCH,
        param("spaceDocumentName.eq", Str), param("spaceDocumentName.cn", Str),
        param("spaceDocumentName.nc", Str), param("createdAt.gt", Integer),
        param("createdAt.eq", Integer), param("createdAt.lt", Integer),
        param("createdAt.ge", Integer), param("createdAt.le", Integer),
        param("updatedAt.gt", Integer), param("updatedAt.eq", Integer),
        param("updatedAt.lt", Integer), param("updatedAt.ge", Integer),
        param("updatedAt.le", Integer), param("spaceId.eq", Number),
    ],
    body: Body::Empty,
};

/// `POST /space-documents`
pub const CREATE_SPACE_DOCUMENT: Operation = Operation {
    name: "create_space_document",
    summary: "Create a space document",
    tags: &["Space Documents"],
    method: Method::Post,
    path: "space-documents",
    required: &[],
    query: &[],
    body: Body::Object(&[
        param("spaceDocumentId", Integer), param("spaceDocumentName", Str),
        param("space", Object), param("spaceDocumentType", Str), param("url", Str),
        param("source", Object),
    ]),
};
