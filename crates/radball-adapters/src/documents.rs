//! JSON document reading: entity payloads and league-group exports.
//!
//! A payload document holds one JSON object, or an array of objects checked
//! one by one. Documents come from a file or from stdin (`-`).

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use radball_core::domain::{Entity, EntityInput, LeagueGroupExport};

use crate::error::AdapterError;

/// Where a document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Stdin,
    File(PathBuf),
}

impl DocumentSource {
    /// `-` means stdin, anything else is a path.
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    pub fn read_to_string(&self) -> Result<String, AdapterError> {
        match self {
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|source| AdapterError::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(buf)
            }
            Self::File(path) => read_file(path),
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn read_file(path: &Path) -> Result<String, AdapterError> {
    fs::read_to_string(path).map_err(|source| AdapterError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and decode every payload in a document.
#[instrument(skip_all, fields(source = %source, entity = %entity))]
pub fn read_entity_inputs(
    source: &DocumentSource,
    entity: Entity,
) -> Result<Vec<EntityInput>, AdapterError> {
    let text = source.read_to_string()?;
    parse_entity_inputs(&text, entity, &source.to_string())
}

/// Decode a JSON document as one or more `entity` payloads.
///
/// `origin` names the document in error messages.
pub fn parse_entity_inputs(
    text: &str,
    entity: Entity,
    origin: &str,
) -> Result<Vec<EntityInput>, AdapterError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| AdapterError::Json {
            origin: origin.to_owned(),
            source,
        })?;

    let values = match value {
        serde_json::Value::Array(items) => items,
        single => vec![single],
    };

    let inputs = values
        .into_iter()
        .map(|v| EntityInput::from_json(entity, v))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(%entity, count = inputs.len(), "decoded payloads");
    Ok(inputs)
}

/// Read a league-group export document.
#[instrument(skip_all, fields(source = %source))]
pub fn read_league_group_export(
    source: &DocumentSource,
) -> Result<LeagueGroupExport, AdapterError> {
    let text = source.read_to_string()?;
    serde_json::from_str(&text).map_err(|e| AdapterError::Json {
        origin: source.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn dash_is_stdin() {
        assert_eq!(DocumentSource::parse("-"), DocumentSource::Stdin);
        assert_eq!(
            DocumentSource::parse("team.json"),
            DocumentSource::File("team.json".into())
        );
    }

    #[test]
    fn reads_single_object_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gym.json");
        fs::write(
            &path,
            r#"{ "name": "Halle", "availableFields": "2",
                 "address": { "street": "Weg 1", "city": "Bonn", "country": "DE", "zip": "53111" } }"#,
        )
        .unwrap();

        let inputs = read_entity_inputs(&DocumentSource::File(path), Entity::Gym).unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].entity(), Entity::Gym);
    }

    #[test]
    fn arrays_yield_one_input_per_element() {
        let inputs = parse_entity_inputs(
            r#"[{ "id": "t1" }, { "clubId": "c1" }, { "name": "RV" }]"#,
            Entity::Team,
            "teams.json",
        )
        .unwrap();
        assert_eq!(inputs.len(), 3);
    }

    #[test]
    fn syntax_errors_name_the_origin() {
        let err = parse_entity_inputs("{", Entity::Club, "club.json").unwrap_err();
        assert!(err.to_string().contains("club.json"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = DocumentSource::File("/nonexistent/radball.json".into())
            .read_to_string()
            .unwrap_err();
        assert_eq!(
            err.category(),
            radball_core::error::ErrorCategory::NotFound
        );
    }
}
