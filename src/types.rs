//! Response types for the Playground API.
//!
//! These types mirror the API response structures and are used for
//! deserialization of JSON responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored dataset with its derived metadata.
///
/// All metadata is computed server-side at upload time; the client never
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Server-assigned identifier, immutable once assigned
    pub id: String,
    /// Display name (defaults to the file name minus extension)
    pub name: String,
    /// Human-readable description
    pub description: Option<String>,
    /// Original file name as uploaded
    pub file_name: String,
    /// File size in bytes
    pub file_size: u64,
    /// File type/extension (csv, json, parquet)
    pub file_type: String,
    /// Inferred column names, in file order
    #[serde(default)]
    pub columns: Vec<String>,
    /// Number of rows
    pub num_rows: u64,
    /// When the dataset was uploaded
    pub created_at: DateTime<Utc>,
    /// When the dataset record was last updated
    pub updated_at: DateTime<Utc>,
}

/// One page of the dataset collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetPage {
    /// Datasets on this page (at most `page_size` entries)
    pub items: Vec<Dataset>,
    /// Total count across all pages
    pub total: u64,
    /// Requested page number (1-indexed)
    pub page: u32,
    /// Requested page size
    pub page_size: u32,
}

/// Response returned after a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetUploadResponse {
    /// Server-assigned identifier of the new dataset
    pub id: String,
    /// Display name
    pub name: String,
    /// Original file name
    pub file_name: String,
    /// File size in bytes
    pub file_size: u64,
    /// When the dataset was created
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_deserialize() {
        let json = r#"{
            "id": "ds-123",
            "name": "iris",
            "description": "Flower measurements",
            "file_name": "iris.csv",
            "file_size": 4821,
            "file_type": "csv",
            "columns": ["sepal_length", "sepal_width", "species"],
            "num_rows": 150,
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-01-15T10:30:00Z"
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.id, "ds-123");
        assert_eq!(dataset.name, "iris");
        assert_eq!(dataset.file_size, 4821);
        assert_eq!(dataset.columns.len(), 3);
        assert_eq!(dataset.num_rows, 150);
    }

    #[test]
    fn test_dataset_deserialize_without_columns() {
        // Columns may be absent while the server is still inferring them
        let json = r#"{
            "id": "ds-456",
            "name": "raw",
            "description": null,
            "file_name": "raw.json",
            "file_size": 10,
            "file_type": "json",
            "num_rows": 0,
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-01-15T10:30:00Z"
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert!(dataset.columns.is_empty());
        assert!(dataset.description.is_none());
    }

    #[test]
    fn test_upload_response_deserialize() {
        let json = r#"{
            "id": "ds-789",
            "name": "sales",
            "file_name": "sales.parquet",
            "file_size": 1048576,
            "created_at": "2024-02-01T08:00:00Z"
        }"#;

        let response: DatasetUploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id, "ds-789");
        assert_eq!(response.file_size, 1048576);
    }
}
