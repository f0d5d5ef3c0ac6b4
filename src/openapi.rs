use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

type PathName = String;
type StatusCode = String;
type MediaType = String;

pub const APPLICATION_JSON: &str = "application/json";

pub const TYPE_STRING: &str = "string";
pub const TYPE_NUMBER: &str = "number";
pub const TYPE_INTEGER: &str = "integer";
pub const TYPE_ARRAY: &str = "array";
pub const TYPE_OBJECT: &str = "object";

pub const FORMAT_FLOAT: &str = "float";
pub const FORMAT_DOUBLE: &str = "double";
pub const FORMAT_BINARY: &str = "binary";

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Document {
    #[serde(default)]
    pub paths: BTreeMap<PathName, PathItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Endpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Endpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Endpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Endpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Endpoint>,
}

impl PathItem {
    /// Declared endpoints in verb order: GET, POST, PATCH, PUT, DELETE.
    pub fn endpoints(&self) -> impl Iterator<Item = (HttpMethod, &Endpoint)> {
        [
            (HttpMethod::Get, &self.get),
            (HttpMethod::Post, &self.post),
            (HttpMethod::Patch, &self.patch),
            (HttpMethod::Put, &self.put),
            (HttpMethod::Delete, &self.delete),
        ]
        .into_iter()
        .filter_map(|(method, endpoint)| endpoint.as_ref().map(|endpoint| (method, endpoint)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PATCH" => Ok(HttpMethod::Patch),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operation_id: String,
    /// Order is significant: it is the generated argument order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub responses: BTreeMap<StatusCode, Body>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Body>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,
}

impl Endpoint {
    /// The request body, if one was declared with any content at all.
    pub fn request_body(&self) -> Option<&Body> {
        self.request_body.as_ref().filter(|body| body.is_present())
    }

    pub fn response(&self, status: &str) -> Option<&Body> {
        self.responses.get(status)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    /// Swagger 2 only; also the location of a derived request-body argument.
    Body,
    FormData,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::Body => "body",
            ParameterLocation::FormData => "formData",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Empty for a parameter that is only a `$ref`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ParameterLocation>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub style: String,
    #[serde(default)]
    pub explode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
    #[serde(default, alias = "collection_format", skip_serializing_if = "String::is_empty")]
    pub collection_format: String,
    #[serde(default, rename = "$ref", alias = "ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            location: Some(location),
            description: String::new(),
            required: false,
            style: String::new(),
            explode: false,
            schema: None,
            type_name: String::new(),
            format: String::new(),
            items: None,
            collection_format: String::new(),
            reference: String::new(),
        }
    }
}

/// Element descriptor of an array. Always terminal: it has no nested
/// schema, items or content of its own.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Items {
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, rename = "$ref", alias = "ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Schema {
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, rename = "$ref", alias = "ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    /// Only used to tell an anonymous inline object apart.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
}

impl Schema {
    /// False for a schema that carries nothing, such as one decoded from `{}`.
    pub fn is_present(&self) -> bool {
        *self != Schema::default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Property {
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

/// Shared shape of request bodies and responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Body {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub content: BTreeMap<MediaType, Content>,
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(default, rename = "$ref", alias = "ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,
}

pub type RequestBody = Body;
pub type Response = Body;

impl Body {
    pub fn is_present(&self) -> bool {
        !self.description.is_empty()
            || !self.content.is_empty()
            || !self.type_name.is_empty()
            || !self.format.is_empty()
            || self.schema.as_ref().map_or(false, Schema::is_present)
            || !self.reference.is_empty()
    }
}

/// Terminal node of the body indirection chain.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(default, rename = "$ref", alias = "ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,
}
