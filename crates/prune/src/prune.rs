use serde_json::Value;
use thiserror::Error;

/// A single edit: the object path leading to a `required` array and the
/// names to delete from it.
pub struct Edit {
    pub path: &'static [&'static str],
    pub names: &'static [&'static str],
}

/// Required fields the schema generator emits that the app definition
/// format treats as optional. "stratergy" is spelled the way the
/// generator spells it.
pub const EDITS: &[Edit] = &[
    Edit {
        path: &["properties", "deploymentConfigs", "items", "required"],
        names: &["test", "replicas", "stratergy", "triggers"],
    },
    Edit {
        path: &["properties", "buildConfigs", "items", "required"],
        names: &["nodeSelector", "stratergy", "triggers"],
    },
    Edit {
        path: &["properties", "imageStreams", "items", "properties", "tags", "items", "required"],
        names: &["annotations", "generation"],
    },
    Edit { path: &["properties", "routes", "items", "required"], names: &["host"] },
    Edit {
        path: &["properties", "routes", "items", "properties", "to", "required"],
        names: &["weight"],
    },
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PruneError {
    #[error("Missing key {key:?} at {path}")]
    PathNotFound { path: String, key: String },

    #[error("Expected an object at {path}")]
    NotAnObject { path: String },

    #[error("Expected an array at {path}")]
    NotAnArray { path: String },
}

/// Applies every edit in [`EDITS`] to the document and returns how many
/// entries were removed. Any missing or wrongly-shaped path aborts the
/// whole operation.
pub fn apply(document: &mut Value) -> Result<usize, PruneError> {
    let mut removed = 0;
    for edit in EDITS {
        let required = required_mut(document, edit.path)?;
        removed += remove_names(required, edit.names);
    }

    Ok(removed)
}

/// Removes the first occurrence of each name. Names that are absent are
/// skipped, so pruning an already-pruned array is a no-op.
pub fn remove_names(required: &mut Vec<Value>, names: &[&str]) -> usize {
    let mut removed = 0;
    for name in names {
        if remove_name(required, name) {
            removed += 1;
        }
    }

    removed
}

/// Removes the first element equal to `name`, keeping the rest in their
/// original order. Returns whether an element was removed.
pub fn remove_name(required: &mut Vec<Value>, name: &str) -> bool {
    match required.iter().position(|value| value.as_str() == Some(name)) {
        Some(index) => {
            required.remove(index);
            true
        }
        None => false,
    }
}

// Walks object keys only; the edit table never indexes through arrays.
// The breadcrumb is for error reporting, not a path language.
fn required_mut<'a>(
    document: &'a mut Value,
    path: &[&str],
) -> Result<&'a mut Vec<Value>, PruneError> {
    let mut breadcrumb = String::from("$");
    let mut current = document;

    for &key in path {
        let object = current
            .as_object_mut()
            .ok_or_else(|| PruneError::NotAnObject { path: breadcrumb.clone() })?;
        current = object.get_mut(key).ok_or_else(|| PruneError::PathNotFound {
            path: breadcrumb.clone(),
            key: key.to_string(),
        })?;
        breadcrumb.push('.');
        breadcrumb.push_str(key);
    }

    current.as_array_mut().ok_or(PruneError::NotAnArray { path: breadcrumb })
}
