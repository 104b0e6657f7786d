use std::path::Path;

use thiserror::Error;

use crate::models::{Activity, ActivityCatalog};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reference catalog loaded when no seed file is configured.
pub fn default_activities() -> ActivityCatalog {
    ActivityCatalog::new(vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        Activity::new(
            "Soccer Team",
            "Train and play matches against other schools",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        Activity::new(
            "Basketball Team",
            "Practice drills and compete in the district league",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        Activity::new(
            "Art Club",
            "Explore painting, drawing and sculpture",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Act, direct and stage the school plays",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        Activity::new(
            "Math Club",
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        Activity::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ])
}

/// Reads a catalog in the same JSON shape `GET /activities` returns.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<ActivityCatalog, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_catalog_has_nine_activities() {
        let catalog = default_activities();
        assert_eq!(catalog.len(), 9);
        let chess = catalog.get("Chess Club").unwrap();
        assert!(chess.is_registered("michael@mergington.edu"));
    }

    #[test]
    fn default_catalog_respects_its_own_capacities() {
        for activity in default_activities().iter() {
            assert!(activity.max_participants > 0, "{}", activity.name);
            assert!(
                activity.participants.len() <= activity.max_participants as usize,
                "{}",
                activity.name
            );
        }
    }

    #[test]
    fn default_catalog_survives_json_round_trip() {
        let catalog = default_activities();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: ActivityCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn load_catalog_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Robotics": {{"description": "Build robots", "schedule": "Saturdays", "max_participants": 6, "participants": ["r@mergington.edu"]}}}}"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Robotics"]);
        assert_eq!(catalog.get("Robotics").unwrap().max_participants, 6);
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let err = load_catalog("/nonexistent/mergington/seed.json").unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[test]
    fn load_catalog_reports_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
    }
}
