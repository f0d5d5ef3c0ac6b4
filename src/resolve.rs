//! Type derivation over schema-bearing nodes.
//!
//! Every node of the document that can describe a value implements
//! [`TypeNode`]. The derivations here walk the chain
//! `content(json) -> $ref -> schema -> items` and never fail: anything that
//! cannot be resolved comes back as an empty string, and the caller decides
//! whether that is fatal.

use heck::ToLowerCamelCase;
use std::collections::BTreeMap;

use crate::openapi::{
    Body, Content, Items, Parameter, Schema, APPLICATION_JSON, FORMAT_BINARY, FORMAT_DOUBLE,
    FORMAT_FLOAT, TYPE_ARRAY, TYPE_INTEGER, TYPE_NUMBER, TYPE_STRING,
};

pub const SEQUENCE_MARKER: &str = "[]";
pub const BYTES: &str = "[]byte";
pub const FLOAT64: &str = "float64";
pub const FLOAT32: &str = "float32";

/// Accessors shared by every schema-bearing node.
pub trait TypeNode {
    fn type_name(&self) -> &str;

    fn format(&self) -> &str;

    /// Nested schema, only when it carries something.
    fn schema(&self) -> Option<&Schema>;

    fn items(&self) -> Option<&Items>;

    fn content(&self) -> Option<&BTreeMap<String, Content>>;

    /// Raw `$ref` pointer, empty when unset.
    fn reference(&self) -> &str;

    fn json_content(&self) -> Option<&Content> {
        self.content().and_then(|content| content.get(APPLICATION_JSON))
    }
}

/// Final path segment of a `$ref`, e.g. `#/components/schemas/Pet` -> `Pet`.
pub fn ref_name(reference: &str) -> &str {
    reference
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}

/// Derives the output type of a node.
pub fn derive_type<N: TypeNode + ?Sized>(node: &N) -> String {
    if let Some(json) = node.json_content() {
        return derive_type(json);
    }

    let reference = node.reference();
    if !reference.is_empty() {
        return ref_name(reference).to_string();
    }

    if let Some(schema) = node.schema() {
        return derive_type(schema);
    }

    let type_name = node.type_name();
    match type_name {
        TYPE_ARRAY => {
            let element = node.items().map(derive_type).unwrap_or_default();
            format!("{SEQUENCE_MARKER}{element}")
        }
        // integers are emitted by width, so the format is the type
        TYPE_INTEGER => node.format().to_string(),
        TYPE_STRING if node.format() == FORMAT_BINARY => BYTES.to_string(),
        TYPE_STRING => TYPE_STRING.to_string(),
        TYPE_NUMBER => match node.format() {
            FORMAT_DOUBLE => FLOAT64.to_string(),
            FORMAT_FLOAT => FLOAT32.to_string(),
            _ => String::new(),
        },
        other => other.to_string(),
    }
}

/// The raw declared type at the end of the chain, before any substitution.
///
/// Returns an empty string when the chain ends in a `$ref`, since a named
/// type is never an anonymous object or array.
pub fn derive_kind<N: TypeNode + ?Sized>(node: &N) -> String {
    if let Some(json) = node.json_content() {
        return derive_kind(json);
    }

    if !node.reference().is_empty() {
        return String::new();
    }

    if let Some(schema) = node.schema() {
        return derive_kind(schema);
    }

    node.type_name().to_string()
}

/// Derives an argument name from the `$ref` chain of a node.
///
/// Prefers the lowerCamel `$ref` name, then the nested schema, then the
/// JSON content entry.
pub fn derive_name<N: TypeNode + ?Sized>(node: &N) -> String {
    let name = ref_name(node.reference()).to_lower_camel_case();
    if !name.is_empty() {
        return name;
    }

    if let Some(schema) = node.schema() {
        let name = derive_name(schema);
        if !name.is_empty() {
            return name;
        }
    }

    node.json_content().map(derive_name).unwrap_or_default()
}

impl TypeNode for Parameter {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn format(&self) -> &str {
        &self.format
    }

    fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref().filter(|schema| schema.is_present())
    }

    fn items(&self) -> Option<&Items> {
        self.items.as_ref()
    }

    fn content(&self) -> Option<&BTreeMap<String, Content>> {
        None
    }

    fn reference(&self) -> &str {
        &self.reference
    }
}

impl TypeNode for Schema {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn format(&self) -> &str {
        &self.format
    }

    fn schema(&self) -> Option<&Schema> {
        None
    }

    fn items(&self) -> Option<&Items> {
        self.items.as_ref()
    }

    fn content(&self) -> Option<&BTreeMap<String, Content>> {
        None
    }

    fn reference(&self) -> &str {
        &self.reference
    }
}

impl TypeNode for Content {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn format(&self) -> &str {
        &self.format
    }

    fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref().filter(|schema| schema.is_present())
    }

    fn items(&self) -> Option<&Items> {
        None
    }

    fn content(&self) -> Option<&BTreeMap<String, Content>> {
        None
    }

    fn reference(&self) -> &str {
        &self.reference
    }
}

impl TypeNode for Body {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn format(&self) -> &str {
        &self.format
    }

    fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref().filter(|schema| schema.is_present())
    }

    fn items(&self) -> Option<&Items> {
        None
    }

    fn content(&self) -> Option<&BTreeMap<String, Content>> {
        Some(&self.content)
    }

    fn reference(&self) -> &str {
        &self.reference
    }
}

impl TypeNode for Items {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn format(&self) -> &str {
        &self.format
    }

    fn schema(&self) -> Option<&Schema> {
        None
    }

    fn items(&self) -> Option<&Items> {
        None
    }

    fn content(&self) -> Option<&BTreeMap<String, Content>> {
        None
    }

    fn reference(&self) -> &str {
        &self.reference
    }
}
