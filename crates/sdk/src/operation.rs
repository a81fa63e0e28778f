//! Operation descriptors and request preparation.
//!
//! Every Rocketlane endpoint is described by a static [`Operation`]: one HTTP
//! verb, one path template, and allow-lists of the query parameters and body
//! fields it accepts. [`Operation::prepare`] turns caller arguments into a
//! [`PreparedRequest`] without touching the network.

use crate::error::{RocketlaneError, RocketlaneResult};
use crate::params::{json_kind, Params};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashSet;

/// HTTP verb used by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// JSON type of a parameter, as advertised in tool schemas.
///
/// Values are forwarded as given; the type is never checked locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// An allow-listed query parameter or body field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Name sent to Rocketlane, e.g. `startDate.gt`.
    pub name: &'static str,
    /// Argument name when it differs from the derived one.
    pub alias: Option<&'static str>,
    pub ty: ParamType,
    /// Format or range guidance for callers, where it matters.
    pub description: Option<&'static str>,
}

impl Param {
    /// Argument name callers use: the alias, or the wire name with `.`
    /// replaced by `_` (`task.status.eq` becomes `task_status_eq`).
    pub fn arg_name(&self) -> Cow<'static, str> {
        match self.alias {
            Some(alias) => Cow::Borrowed(alias),
            None if self.name.contains('.') => Cow::Owned(self.name.replace('.', "_")),
            None => Cow::Borrowed(self.name),
        }
    }

    pub const fn describe(self, description: &'static str) -> Self {
        Self {
            description: Some(description),
            ..self
        }
    }
}

pub const fn param(name: &'static str, ty: ParamType) -> Param {
    Param {
        name,
        alias: None,
        ty,
        description: None,
    }
}

pub const fn aliased(name: &'static str, alias: &'static str, ty: ParamType) -> Param {
    Param {
        name,
        alias: Some(alias),
        ty,
        description: None,
    }
}

/// Shape of the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    /// No body is sent.
    Empty,
    /// A JSON object assembled from the provided fields.
    Object(&'static [Param]),
    /// The named argument is sent as the whole body.
    Raw(Param),
}

/// A single Rocketlane endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub method: Method,
    /// Path below the versioned base, with `{name}` placeholders.
    pub path: &'static str,
    /// Arguments that must be provided. Includes every path placeholder.
    pub required: &'static [&'static str],
    pub query: &'static [Param],
    pub body: Body,
}

/// A request ready to be sent by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    /// Decoded path segments below the versioned base.
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Operation {
    /// Names of the `{placeholders}` in the path template.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Body fields, including a raw body argument.
    pub fn body_params(&self) -> &[Param] {
        match &self.body {
            Body::Empty => &[],
            Body::Object(fields) => *fields,
            Body::Raw(param) => std::slice::from_ref(param),
        }
    }

    /// Every argument name this operation accepts, in schema order:
    /// path placeholders, then other required arguments, query parameters
    /// and body fields.
    pub fn arg_names(&self) -> Vec<Cow<'static, str>> {
        let mut seen = HashSet::new();
        self.path_params()
            .chain(self.required.iter().copied())
            .map(Cow::Borrowed)
            .chain(self.query.iter().map(Param::arg_name))
            .chain(self.body_params().iter().map(Param::arg_name))
            .filter(|name| seen.insert(name.clone()))
            .collect()
    }

    /// Validate arguments and assemble the request.
    ///
    /// Fails on unknown or missing arguments before anything is sent.
    pub fn prepare(&self, params: &Params) -> RocketlaneResult<PreparedRequest> {
        let known = self.arg_names();
        if let Some(unknown) = params
            .names()
            .find(|name| !known.iter().any(|k| k == name))
        {
            return Err(RocketlaneError::UnknownParameter {
                operation: self.name.to_string(),
                name: unknown.to_string(),
            });
        }

        for name in self.required {
            if params.get(name).is_none() {
                return Err(RocketlaneError::MissingParameter(name.to_string()));
            }
        }

        let segments = self
            .path
            .split('/')
            .map(|segment| match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => path_value(name, params.get(name)),
                None => Ok(segment.to_string()),
            })
            .collect::<RocketlaneResult<Vec<_>>>()?;

        let mut query = Vec::new();
        for param in self.query {
            if let Some(value) = params.get(&param.arg_name()) {
                push_query(&mut query, param.name, value);
            }
        }

        let body = match &self.body {
            Body::Empty => None,
            Body::Object(fields) => {
                let mut body = Map::new();
                for field in fields.iter() {
                    if let Some(value) = params.get(&field.arg_name()) {
                        body.insert(field.name.to_string(), value.clone());
                    }
                }
                Some(Value::Object(body))
            }
            Body::Raw(param) => params.get(&param.arg_name()).cloned(),
        };

        Ok(PreparedRequest {
            method: self.method,
            segments,
            query,
            body,
        })
    }
}

fn path_value(name: &str, value: Option<&Value>) -> RocketlaneResult<String> {
    let text = match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => {
            return Err(RocketlaneError::InvalidParameter {
                name: name.to_string(),
                reason: format!(
                    "path identifier must be a string or number, got {}",
                    json_kind(other)
                ),
            })
        }
        None => String::new(),
    };

    if text.is_empty() {
        return Err(RocketlaneError::MissingParameter(name.to_string()));
    }
    Ok(text)
}

fn push_query(query: &mut Vec<(String, String)>, name: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for item in items.iter().filter(|item| !item.is_null()) {
                query.push((name.to_string(), query_text(item)));
            }
        }
        other => query.push((name.to_string(), query_text(other))),
    }
}

fn query_text(value: &Value) -> String {
    // Booleans go out lowercase, as JSON spells them.
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const LIST: Operation = Operation {
        name: "list_things",
        summary: "List things",
        tags: &["Things", "important"],
        method: Method::Get,
        path: "things",
        required: &[],
        query: &[
            param("pageSize", ParamType::Number),
            param("includeFields", ParamType::Array),
            param("includeArchive.eq", ParamType::Boolean),
            param("task.status.oneOf", ParamType::String),
        ],
        body: Body::Empty,
    };

    const UPDATE: Operation = Operation {
        name: "update_thing",
        summary: "Update a thing",
        tags: &["Things"],
        method: Method::Put,
        path: "things/{thingId}",
        required: &["thingId"],
        query: &[],
        body: Body::Object(&[
            aliased("thingId", "thingId_body", ParamType::Integer),
            param("name", ParamType::String),
            param("private", ParamType::Boolean),
        ]),
    };

    const IMPORT: Operation = Operation {
        name: "import_things",
        summary: "Import things",
        tags: &["Things"],
        method: Method::Post,
        path: "things/{thingId}/import",
        required: &["thingId", "items"],
        query: &[],
        body: Body::Raw(param("items", ParamType::Array)),
    };

    #[test]
    fn test_arg_name_derivation() {
        assert_eq!(param("startDate.gt", ParamType::String).arg_name(), "startDate_gt");
        assert_eq!(param("task.status.eq", ParamType::String).arg_name(), "task_status_eq");
        assert_eq!(param("pageSize", ParamType::Number).arg_name(), "pageSize");
        assert_eq!(aliased("taskId", "taskId_body", ParamType::Integer).arg_name(), "taskId_body");
    }

    #[test]
    fn test_path_params() {
        assert_eq!(IMPORT.path_params().collect::<Vec<_>>(), vec!["thingId"]);
        assert_eq!(LIST.path_params().count(), 0);
    }

    #[test]
    fn test_has_tag_ignores_case() {
        assert!(LIST.has_tag("IMPORTANT"));
        assert!(!UPDATE.has_tag("important"));
    }

    #[test]
    fn test_prepare_falsy_values_are_sent() {
        let params = Params::new()
            .set("pageSize", 0)
            .set("includeArchive_eq", false)
            .set("task_status_oneOf", "");

        let request = LIST.prepare(&params).unwrap();
        assert_eq!(
            request.query,
            vec![
                ("pageSize".to_string(), "0".to_string()),
                ("includeArchive.eq".to_string(), "false".to_string()),
                ("task.status.oneOf".to_string(), "".to_string()),
            ]
        );
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_query_text_wire_forms() {
        assert_eq!(query_text(&json!(true)), "true");
        assert_eq!(query_text(&json!(false)), "false");
        assert_eq!(query_text(&json!(25)), "25");
        assert_eq!(query_text(&json!(1.5)), "1.5");
        assert_eq!(query_text(&json!("a b")), "a b");

        let request = LIST.prepare(&Params::new().set("includeArchive_eq", true)).unwrap();
        assert_eq!(
            request.query,
            vec![("includeArchive.eq".to_string(), "true".to_string())]
        );
    }

    #[test]
    fn test_describe_keeps_wire_name() {
        let progress = param("progress", ParamType::Integer).describe("Progress from 0 to 100");
        assert_eq!(progress.name, "progress");
        assert_eq!(progress.arg_name(), "progress");
        assert_eq!(progress.description, Some("Progress from 0 to 100"));
        assert_eq!(param("progress", ParamType::Integer).description, None);
    }

    #[test]
    fn test_prepare_unset_values_are_omitted() {
        let params = Params::new().set("pageSize", Value::Null);

        let request = LIST.prepare(&params).unwrap();
        assert!(request.query.is_empty());
        assert_eq!(request.segments, vec!["things"]);
    }

    #[test]
    fn test_prepare_array_query_repeats_key() {
        let params = Params::new().set("includeFields", json!(["taskName", "status"]));

        let request = LIST.prepare(&params).unwrap();
        assert_eq!(
            request.query,
            vec![
                ("includeFields".to_string(), "taskName".to_string()),
                ("includeFields".to_string(), "status".to_string()),
            ]
        );
    }

    #[test]
    fn test_prepare_object_body_uses_wire_names() {
        let params = Params::new()
            .set("thingId", "201")
            .set("thingId_body", 201)
            .set("private", false)
            .set("name", Value::Null);

        let request = UPDATE.prepare(&params).unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.segments, vec!["things", "201"]);
        assert_eq!(request.body, Some(json!({"thingId": 201, "private": false})));
    }

    #[test]
    fn test_prepare_object_body_sent_when_empty() {
        let request = UPDATE.prepare(&Params::new().set("thingId", 7)).unwrap();
        assert_eq!(request.segments, vec!["things", "7"]);
        assert_eq!(request.body, Some(json!({})));
    }

    #[test]
    fn test_prepare_raw_body() {
        let params = Params::new()
            .set("thingId", "9")
            .set("items", json!([{"templateId": 1}]));

        let request = IMPORT.prepare(&params).unwrap();
        assert_eq!(request.segments, vec!["things", "9", "import"]);
        assert_eq!(request.body, Some(json!([{"templateId": 1}])));
    }

    #[test]
    fn test_prepare_missing_required() {
        let err = UPDATE.prepare(&Params::new()).unwrap_err();
        assert!(matches!(err, RocketlaneError::MissingParameter(ref name) if name == "thingId"));

        let err = UPDATE.prepare(&Params::new().set("thingId", Value::Null)).unwrap_err();
        assert!(matches!(err, RocketlaneError::MissingParameter(_)));

        let err = IMPORT.prepare(&Params::new().set("thingId", "9")).unwrap_err();
        assert!(matches!(err, RocketlaneError::MissingParameter(ref name) if name == "items"));
    }

    #[test]
    fn test_prepare_blank_path_identifier() {
        let err = UPDATE.prepare(&Params::new().set("thingId", "  ")).unwrap_err();
        assert!(matches!(err, RocketlaneError::MissingParameter(_)));
    }

    #[test]
    fn test_prepare_rejects_non_scalar_path_identifier() {
        let err = UPDATE
            .prepare(&Params::new().set("thingId", json!({"id": 1})))
            .unwrap_err();
        assert!(matches!(err, RocketlaneError::InvalidParameter { .. }));
    }

    #[test]
    fn test_prepare_rejects_unknown_argument() {
        let err = LIST.prepare(&Params::new().set("pagesize", 10)).unwrap_err();
        match err {
            RocketlaneError::UnknownParameter { operation, name } => {
                assert_eq!(operation, "list_things");
                assert_eq!(name, "pagesize");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_arg_names_dedup_and_order() {
        assert_eq!(UPDATE.arg_names(), vec!["thingId", "thingId_body", "name", "private"]);
        assert_eq!(IMPORT.arg_names(), vec!["thingId", "items"]);
    }
}
