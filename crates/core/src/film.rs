//! Film data model and request-body validation.
//!
//! Incoming bodies arrive as raw `serde_json::Value`; the parse functions
//! here perform the full structural check and hand back validated input
//! types ([`NewFilm`], [`FilmPatch`]). A value that fails the check never
//! becomes a domain value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::types::FilmId;

/* --------------------------------------------------------------------------
   Data model
   -------------------------------------------------------------------------- */

/// A catalogued film record.
///
/// Optional fields are omitted from serialized output when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    pub director: String,
    /// Running time in minutes.
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Input shape for creating or fully replacing a film (no `id`).
///
/// Constructed only through [`NewFilm::parse`], so every value of this type
/// already satisfies the field constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFilm {
    pub title: String,
    pub director: String,
    pub duration: f64,
    pub budget: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// A validated partial update. Carries at least one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilmPatch {
    pub title: Option<String>,
    pub director: Option<String>,
    pub duration: Option<f64>,
    pub budget: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/* --------------------------------------------------------------------------
   Field rules
   -------------------------------------------------------------------------- */

/// All field names accepted in a film body, wire spelling.
const KNOWN_FIELDS: &[&str] = &[
    "title",
    "director",
    "duration",
    "budget",
    "description",
    "imageUrl",
];

fn as_object(value: &Value) -> Result<&serde_json::Map<String, Value>, CoreError> {
    value
        .as_object()
        .ok_or_else(|| CoreError::InvalidFormat("body must be a JSON object".to_string()))
}

/// Reject any key outside the film field set.
fn check_known_fields(obj: &serde_json::Map<String, Value>) -> Result<(), CoreError> {
    for key in obj.keys() {
        if !KNOWN_FIELDS.contains(&key.as_str()) {
            return Err(CoreError::InvalidFormat(format!("unknown field '{key}'")));
        }
    }
    Ok(())
}

/// A string field must be a JSON string that is non-empty after trimming.
/// The stored value keeps its original whitespace.
fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> Result<String, CoreError> {
    let value = obj
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::InvalidFormat(format!("field '{key}' must be a string")))?;
    if value.trim().is_empty() {
        return Err(CoreError::InvalidFormat(format!(
            "field '{key}' must not be blank"
        )));
    }
    Ok(value.to_string())
}

/// A numeric field must be a JSON number strictly greater than zero.
fn number_field(obj: &serde_json::Map<String, Value>, key: &str) -> Result<f64, CoreError> {
    let value = obj
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| CoreError::InvalidFormat(format!("field '{key}' must be a number")))?;
    if value <= 0.0 {
        return Err(CoreError::InvalidFormat(format!(
            "field '{key}' must be strictly positive"
        )));
    }
    Ok(value)
}

fn required_string(obj: &serde_json::Map<String, Value>, key: &str) -> Result<String, CoreError> {
    if !obj.contains_key(key) {
        return Err(CoreError::InvalidFormat(format!(
            "missing required field '{key}'"
        )));
    }
    string_field(obj, key)
}

fn required_number(obj: &serde_json::Map<String, Value>, key: &str) -> Result<f64, CoreError> {
    if !obj.contains_key(key) {
        return Err(CoreError::InvalidFormat(format!(
            "missing required field '{key}'"
        )));
    }
    number_field(obj, key)
}

/// Validate an optional field only when the key is present. A `null` value
/// is present and fails the type check, matching the required variants.
fn optional_string(
    obj: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<String>, CoreError> {
    if !obj.contains_key(key) {
        return Ok(None);
    }
    string_field(obj, key).map(Some)
}

fn optional_number(
    obj: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<f64>, CoreError> {
    if !obj.contains_key(key) {
        return Ok(None);
    }
    number_field(obj, key).map(Some)
}

/* --------------------------------------------------------------------------
   Parsing
   -------------------------------------------------------------------------- */

impl NewFilm {
    /// Parse and validate a full film body.
    ///
    /// `title`, `director` and `duration` are required; `budget`,
    /// `description` and `imageUrl` are validated only when present.
    pub fn parse(value: &Value) -> Result<Self, CoreError> {
        let obj = as_object(value)?;
        check_known_fields(obj)?;

        Ok(Self {
            title: required_string(obj, "title")?,
            director: required_string(obj, "director")?,
            duration: required_number(obj, "duration")?,
            budget: optional_number(obj, "budget")?,
            description: optional_string(obj, "description")?,
            image_url: optional_string(obj, "imageUrl")?,
        })
    }

    /// Promote a validated input into a stored record under the given id.
    pub fn into_film(self, id: FilmId) -> Film {
        Film {
            id,
            title: self.title,
            director: self.director,
            duration: self.duration,
            budget: self.budget,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

impl FilmPatch {
    /// Parse and validate a partial-update body.
    ///
    /// The body must be an object carrying at least one film field; each
    /// field present is held to the same rule as in [`NewFilm::parse`].
    pub fn parse(value: &Value) -> Result<Self, CoreError> {
        let obj = as_object(value)?;
        check_known_fields(obj)?;

        if obj.is_empty() {
            return Err(CoreError::InvalidFormat(
                "patch must contain at least one field".to_string(),
            ));
        }

        Ok(Self {
            title: optional_string(obj, "title")?,
            director: optional_string(obj, "director")?,
            duration: optional_number(obj, "duration")?,
            budget: optional_number(obj, "budget")?,
            description: optional_string(obj, "description")?,
            image_url: optional_string(obj, "imageUrl")?,
        })
    }

    /// Merge the patch over an existing record. Patch values win; fields
    /// absent from the patch are untouched, and `id` is never changed.
    pub fn apply(self, film: &mut Film) {
        if let Some(title) = self.title {
            film.title = title;
        }
        if let Some(director) = self.director {
            film.director = director;
        }
        if let Some(duration) = self.duration {
            film.duration = duration;
        }
        if let Some(budget) = self.budget {
            film.budget = Some(budget);
        }
        if let Some(description) = self.description {
            film.description = Some(description);
        }
        if let Some(image_url) = self.image_url {
            film.image_url = Some(image_url);
        }
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
