use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::{ItemChanges, NewItem};

// PostgreSQL text columns cannot store NUL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 255, message = "Item name is required"),
        does_not_contain(pattern = "\0", message = "Text must not contain NUL characters")
    )]
    pub name: String,
    #[validate(does_not_contain(pattern = "\0", message = "Text must not contain NUL characters"))]
    pub description: Option<String>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_has_changes"))]
pub struct UpdateItemRequest {
    #[validate(
        length(min = 1, max = 255, message = "Item name cannot be empty"),
        does_not_contain(pattern = "\0", message = "Text must not contain NUL characters")
    )]
    pub name: Option<String>,
    #[validate(does_not_contain(pattern = "\0", message = "Text must not contain NUL characters"))]
    pub description: Option<String>,
}

fn validate_has_changes(req: &UpdateItemRequest) -> Result<(), ValidationError> {
    if req.name.is_none() && req.description.is_none() {
        let mut err = ValidationError::new("empty_update");
        err.message = Some("At least one field to update is required".into());
        return Err(err);
    }
    Ok(())
}

impl From<UpdateItemRequest> for ItemChanges {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub message: String,
    pub service: String,
    pub hostname: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
