use super::EditError;
use crate::documents::Parameter;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterEdit {
    Appended,
    AlreadyPresent,
}

/// Adds `parameter` to the path-level `parameters` list of `path_item`,
/// creating the list when absent. A parameter with the same `name` and `in`
/// already in the list is left alone, so repeated runs do not stack copies.
pub fn append_required_parameter(
    path: &str,
    path_item: &mut Value,
    parameter: &Parameter,
) -> Result<ParameterEdit, EditError> {
    let Some(item) = path_item.as_object_mut() else {
        return Err(EditError::PathItemNotObject {
            path: path.to_string(),
        });
    };
    let parameters = item
        .entry("parameters")
        .or_insert_with(|| Value::Array(Vec::new()));
    let Some(parameters) = parameters.as_array_mut() else {
        return Err(EditError::ParametersNotArray {
            path: path.to_string(),
        });
    };

    if parameters.iter().any(|existing| same_parameter(existing, parameter)) {
        return Ok(ParameterEdit::AlreadyPresent);
    }
    parameters.push(serde_json::to_value(parameter)?);
    Ok(ParameterEdit::Appended)
}

pub fn append_parameter_to_paths(
    paths: &mut Map<String, Value>,
    parameter: &Parameter,
) -> Result<usize, EditError> {
    let mut appended = 0;
    for (path, item) in paths.iter_mut() {
        if append_required_parameter(path.as_str(), item, parameter)? == ParameterEdit::Appended {
            appended += 1;
        }
    }
    Ok(appended)
}

fn same_parameter(existing: &Value, parameter: &Parameter) -> bool {
    let name = existing.get("name").and_then(Value::as_str);
    let location = existing.get("in").and_then(Value::as_str);
    name == Some(parameter.name.as_str()) && location == Some(parameter.location.as_str())
}

#[cfg(test)]
#[path = "parameters_test.rs"]
mod tests;
