use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read file: {0}")]
    FileReadError(std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerializeError(serde_json::Error),

    #[error("Failed to write file: {0}")]
    FileWriteError(std::io::Error),
}

pub async fn load(path: &str) -> Result<Value, DocumentError> {
    let contents = tokio::fs::read_to_string(path).await.map_err(DocumentError::FileReadError)?;
    let document = serde_json::from_str(&contents)?;

    Ok(document)
}

pub async fn write(path: &str, document: &Value) -> Result<(), DocumentError> {
    let contents = serialize_tabbed(document).map_err(DocumentError::JsonSerializeError)?;
    tokio::fs::write(path, contents).await.map_err(DocumentError::FileWriteError)?;

    Ok(())
}

// The regenerated schema must match the checked-in file byte for byte:
// tab indentation, trailing newline.
fn serialize_tabbed(document: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut contents = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut contents, formatter);
    document.serialize(&mut serializer)?;
    contents.push(b'\n');

    Ok(contents)
}
