use std::collections::HashSet;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One extracurricular offering. The name is the catalog key and is not part
/// of the serialized body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

// Wire shape of a single catalog entry.
#[derive(Serialize)]
struct ActivityBodyRef<'a> {
    description: &'a str,
    schedule: &'a str,
    max_participants: u32,
    participants: &'a [String],
}

#[derive(Deserialize)]
struct ActivityBody {
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Vec<String>,
}

/// Ordered name -> activity mapping. Serializes as a JSON object in catalog
/// order, which a plain `HashMap` would not keep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(
                &activity.name,
                &ActivityBodyRef {
                    description: &activity.description,
                    schedule: &activity.schedule,
                    max_participants: activity.max_participants,
                    participants: &activity.participants,
                },
            )?;
        }
        map.end()
    }
}

fn first_duplicate(emails: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    emails
        .iter()
        .map(String::as_str)
        .find(|email| !seen.insert(*email))
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = ActivityCatalog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity details")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut activities: Vec<Activity> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        let mut seen_names = HashSet::new();

        while let Some((name, body)) = access.next_entry::<String, ActivityBody>()? {
            if !seen_names.insert(name.clone()) {
                return Err(de::Error::custom(format!("duplicate activity: {}", name)));
            }
            if body.max_participants == 0 {
                return Err(de::Error::custom(format!(
                    "activity {} must allow at least one participant",
                    name
                )));
            }
            if let Some(dup) = first_duplicate(&body.participants) {
                return Err(de::Error::custom(format!(
                    "duplicate participant {} in {}",
                    dup, name
                )));
            }

            activities.push(Activity {
                name,
                description: body.description,
                schedule: body.schedule,
                max_participants: body.max_participants,
                participants: body.participants,
            });
        }

        Ok(ActivityCatalog { activities })
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}
