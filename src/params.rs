use serde::Serialize;
use std::fmt;

use crate::naming::method_name;
use crate::openapi::{Endpoint, HttpMethod, ParameterLocation, TYPE_OBJECT};
use crate::resolve::{derive_kind, derive_name, derive_type};

/// Fallback argument name for an anonymous inline body.
const INLINE_BODY_NAME: &str = "req";
const INLINE_BODY_SUFFIX: &str = "JSONBody";

/// One argument of a generated client method.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Unset for a parameter that is only a `$ref`.
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ParameterLocation>,
    /// Set when the type is synthesized for an anonymous object body.
    pub is_inline_object: bool,
}

impl fmt::Display for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.type_name)
    }
}

/// Ordered call arguments of an endpoint: the request body first, if any,
/// then every declared parameter in declaration order.
pub fn func_parameters(method: HttpMethod, path: &str, endpoint: &Endpoint) -> Vec<ParameterDescriptor> {
    let mut out = Vec::with_capacity(endpoint.parameters.len() + 1);

    if let Some(body) = endpoint.request_body() {
        let mut name = derive_name(body);
        let mut type_name = derive_type(body);
        let is_inline_object = derive_kind(body) == TYPE_OBJECT;

        if is_inline_object {
            if name.is_empty() {
                name = INLINE_BODY_NAME.to_string();
            }
            type_name = format!("{}{INLINE_BODY_SUFFIX}", method_name(method, path, endpoint));
        }

        out.push(ParameterDescriptor {
            name,
            type_name,
            location: Some(ParameterLocation::Body),
            is_inline_object,
        });
    }

    out.extend(endpoint.parameters.iter().map(|param| ParameterDescriptor {
        name: if param.name.is_empty() {
            derive_name(param)
        } else {
            param.name.clone()
        },
        type_name: derive_type(param),
        location: param.location,
        is_inline_object: false,
    }));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::{Body, Content, Items, Parameter, Property, Schema, APPLICATION_JSON};
    use std::collections::BTreeMap;

    fn json_body(content: Content) -> Body {
        Body {
            content: BTreeMap::from([(APPLICATION_JSON.to_string(), content)]),
            ..Body::default()
        }
    }

    fn path_param(type_name: &str, format: &str) -> Parameter {
        let mut param = Parameter::new("id", ParameterLocation::Path);
        param.schema = Some(Schema {
            type_name: type_name.to_string(),
            format: format.to_string(),
            ..Schema::default()
        });
        param
    }

    fn descriptor(name: &str, type_name: &str, location: ParameterLocation) -> ParameterDescriptor {
        ParameterDescriptor {
            name: name.to_string(),
            type_name: type_name.to_string(),
            location: Some(location),
            is_inline_object: false,
        }
    }

    #[test]
    fn array_query_parameter() {
        let mut param = Parameter::new("status", ParameterLocation::Query);
        param.required = true;
        param.type_name = "array".to_string();
        param.items = Some(Items {
            type_name: "string".to_string(),
            enum_values: vec!["available".into(), "pending".into(), "sold".into()],
            default: Some("available".into()),
            ..Items::default()
        });
        param.collection_format = "multi".to_string();

        let endpoint = Endpoint {
            operation_id: "findPetsByStatus".to_string(),
            parameters: vec![param],
            ..Endpoint::default()
        };

        assert_eq!(
            func_parameters(HttpMethod::Get, "/pet/findByStatus", &endpoint),
            vec![descriptor("status", "[]string", ParameterLocation::Query)]
        );
    }

    #[test]
    fn path_parameters_resolve_through_schema() {
        let cases = [
            (("integer", "int64"), "int64"),
            (("string", "binary"), "[]byte"),
            (("string", "email"), "string"),
            (("number", "double"), "float64"),
            (("number", "float"), "float32"),
        ];

        for ((type_name, format), expected) in cases {
            let endpoint = Endpoint {
                parameters: vec![path_param(type_name, format)],
                ..Endpoint::default()
            };

            assert_eq!(
                func_parameters(HttpMethod::Get, "/pet/{id}", &endpoint),
                vec![descriptor("id", expected, ParameterLocation::Path)],
                "{type_name}/{format}"
            );
        }
    }

    #[test]
    fn scalar_body_has_no_name() {
        let endpoint = Endpoint {
            request_body: Some(json_body(Content {
                schema: Some(Schema {
                    type_name: "string".to_string(),
                    ..Schema::default()
                }),
                ..Content::default()
            })),
            ..Endpoint::default()
        };

        assert_eq!(
            func_parameters(HttpMethod::Post, "/pet", &endpoint),
            vec![descriptor("", "string", ParameterLocation::Body)]
        );
    }

    #[test]
    fn referenced_body_is_named_after_the_ref() {
        let via_schema = Endpoint {
            request_body: Some(json_body(Content {
                schema: Some(Schema {
                    reference: "#/components/schemas/NewPet".to_string(),
                    ..Schema::default()
                }),
                ..Content::default()
            })),
            ..Endpoint::default()
        };
        let direct = Endpoint {
            request_body: Some(json_body(Content {
                reference: "#/components/schemas/NewPet".to_string(),
                ..Content::default()
            })),
            ..Endpoint::default()
        };

        let expected = vec![descriptor("newPet", "NewPet", ParameterLocation::Body)];
        assert_eq!(func_parameters(HttpMethod::Post, "/pet", &via_schema), expected);
        assert_eq!(func_parameters(HttpMethod::Post, "/pet", &direct), expected);
    }

    #[test]
    fn inline_object_body_gets_a_synthesized_type() {
        let endpoint = Endpoint {
            request_body: Some(json_body(Content {
                schema: Some(Schema {
                    type_name: "object".to_string(),
                    properties: BTreeMap::from([
                        (
                            "name".to_string(),
                            Property {
                                type_name: "string".to_string(),
                                format: "binary".to_string(),
                                ..Property::default()
                            },
                        ),
                        (
                            "age".to_string(),
                            Property {
                                type_name: "integer".to_string(),
                                format: "int32".to_string(),
                                ..Property::default()
                            },
                        ),
                    ]),
                    ..Schema::default()
                }),
                ..Content::default()
            })),
            ..Endpoint::default()
        };

        assert_eq!(
            func_parameters(HttpMethod::Post, "/pet", &endpoint),
            vec![ParameterDescriptor {
                name: "req".to_string(),
                type_name: "AddPetJSONBody".to_string(),
                location: Some(ParameterLocation::Body),
                is_inline_object: true,
            }]
        );
    }

    #[test]
    fn body_precedes_declared_parameters() {
        let mut header = Parameter::new("X-Request-Id", ParameterLocation::Header);
        header.type_name = "string".to_string();

        let endpoint = Endpoint {
            request_body: Some(json_body(Content {
                reference: "#/components/schemas/Pet".to_string(),
                ..Content::default()
            })),
            parameters: vec![path_param("integer", "int64"), header],
            ..Endpoint::default()
        };

        assert_eq!(
            func_parameters(HttpMethod::Put, "/pet/{id}", &endpoint),
            vec![
                descriptor("pet", "Pet", ParameterLocation::Body),
                descriptor("id", "int64", ParameterLocation::Path),
                descriptor("X-Request-Id", "string", ParameterLocation::Header),
            ]
        );
    }

    #[test]
    fn reference_only_parameter_is_named_after_the_ref() {
        let mut limit = Parameter::new("", ParameterLocation::Query);
        limit.location = None;
        limit.reference = "#/components/parameters/Limit".to_string();
        let endpoint = Endpoint {
            parameters: vec![limit],
            ..Endpoint::default()
        };

        assert_eq!(
            func_parameters(HttpMethod::Get, "/pets", &endpoint),
            vec![ParameterDescriptor {
                name: "limit".to_string(),
                type_name: "Limit".to_string(),
                location: None,
                is_inline_object: false,
            }]
        );
    }

    #[test]
    fn empty_body_is_not_an_argument() {
        let endpoint = Endpoint {
            request_body: Some(Body::default()),
            ..Endpoint::default()
        };

        assert!(func_parameters(HttpMethod::Post, "/pet", &endpoint).is_empty());
    }
}
