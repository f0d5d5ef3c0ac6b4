//! Method identifiers for endpoints.

use crate::openapi::{Endpoint, HttpMethod, ParameterLocation, TYPE_ARRAY};
use crate::resolve::derive_kind;

/// Status code whose response shape decides between `Get` and `List`.
const OK_STATUS: &str = "200";

/// Synthesizes the client method name for an endpoint.
///
/// An explicit `operationId` always wins and is only capitalized. Otherwise
/// GET and POST get a name built from the path template, with `List`, `Get`
/// or `Add` in front. PATCH, PUT and DELETE have no naming convention and
/// yield an empty identifier without an `operationId`.
pub fn method_name(method: HttpMethod, path: &str, endpoint: &Endpoint) -> String {
    if !endpoint.operation_id.is_empty() {
        return capitalize(&endpoint.operation_id);
    }

    match method {
        HttpMethod::Get => {
            let name = path_identifier(path, endpoint);
            if returns_list(endpoint) {
                format!("List{name}")
            } else {
                format!("Get{name}")
            }
        }
        HttpMethod::Post => format!("Add{}", path_identifier(path, endpoint)),
        HttpMethod::Patch | HttpMethod::Put | HttpMethod::Delete => String::new(),
    }
}

/// Turns `/pet/findByStatus` into `PetFindByStatus`, dropping `_<name>` for
/// every parameter that is not a path parameter.
fn path_identifier(path: &str, endpoint: &Endpoint) -> String {
    let stripped = endpoint
        .parameters
        .iter()
        .filter(|param| !param.name.is_empty() && param.location != Some(ParameterLocation::Path))
        .fold(path.replace('/', "_"), |acc, param| {
            acc.replace(&format!("_{}", param.name), "")
        });

    to_camel(&stripped)
}

/// Upper camel case in the style of Go's `strcase.ToCamel`: `_ - . space`
/// and digits start a new word, existing capitals are kept, every other
/// character is dropped. Braces also start a new word so `{petId}` reads
/// as `PetId`.
fn to_camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut cap_next = true;

    for c in s.trim().chars() {
        if c.is_ascii_alphabetic() {
            out.push(if cap_next { c.to_ascii_uppercase() } else { c });
            cap_next = false;
        } else if c.is_ascii_digit() {
            out.push(c);
            cap_next = true;
        } else {
            cap_next = matches!(c, '_' | '-' | '.' | ' ' | '{' | '}');
        }
    }

    out
}

fn returns_list(endpoint: &Endpoint) -> bool {
    endpoint
        .response(OK_STATUS)
        .map_or(false, |response| derive_kind(response) == TYPE_ARRAY)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
