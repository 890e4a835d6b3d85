use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender tag as delivered by the dataset.
///
/// The four known values map to icons; anything else is preserved verbatim
/// in `Other` so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Genderless,
    Unknown,
    Other(String),
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            "Genderless" => Gender::Genderless,
            "unknown" => Gender::Unknown,
            _ => Gender::Other(s),
        }
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        Gender::from(s.to_string())
    }
}

impl From<Gender> for String {
    fn from(g: Gender) -> Self {
        g.to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Genderless => write!(f, "Genderless"),
            Gender::Unknown => write!(f, "unknown"),
            Gender::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Life status of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Alive,
    Dead,
    Unknown,
    Other(String),
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Alive" => Status::Alive,
            "Dead" => Status::Dead,
            "unknown" => Status::Unknown,
            _ => Status::Other(s),
        }
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        Status::from(s.to_string())
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        s.to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Alive => write!(f, "Alive"),
            Status::Dead => write!(f, "Dead"),
            Status::Unknown => write!(f, "unknown"),
            Status::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Named link to another resource (origin or last known location).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One character record from the dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    pub gender: Gender,
    pub status: Status,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub origin: Option<Place>,
    #[serde(default)]
    pub location: Option<Place>,
    #[serde(default)]
    pub episode: Vec<String>,
}

impl Character {
    /// Build a record with the fields every card displays. Optional detail
    /// fields start empty.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        kind: impl Into<String>,
        gender: impl Into<Gender>,
        status: impl Into<Status>,
        image: impl Into<String>,
        created: impl Into<String>,
    ) -> Self {
        Character {
            id: None,
            name: name.into(),
            species: species.into(),
            kind: kind.into(),
            gender: gender.into(),
            status: status.into(),
            image: image.into(),
            created: created.into(),
            origin: None,
            location: None,
            episode: Vec::new(),
        }
    }

    /// Milliseconds since the epoch parsed from `created`, if it is a valid
    /// RFC 3339 timestamp.
    pub fn created_millis(&self) -> Option<i64> {
        DateTime::parse_from_rfc3339(&self.created)
            .ok()
            .map(|dt| dt.timestamp_millis())
    }
}

/// Stable key used to identify a card within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKey {
    Created(i64),
    Position(usize),
}

impl CardKey {
    pub fn for_character(c: &Character, position: usize) -> Self {
        match c.created_millis() {
            Some(ms) => CardKey::Created(ms),
            None => CardKey::Position(position),
        }
    }
}

/// Detail-overlay state owned by the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PopupSettings {
    pub visible: bool,
    pub content: Option<Character>,
}

impl PopupSettings {
    pub fn open(content: Character) -> Self {
        PopupSettings {
            visible: true,
            content: Some(content),
        }
    }
}

/// Which dropdown of the filter form an item refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectKind {
    Status,
    Gender,
    Species,
}

impl SelectKind {
    pub const ALL: [SelectKind; 3] = [SelectKind::Status, SelectKind::Gender, SelectKind::Species];

    /// Placeholder shown on the button when nothing is selected.
    pub fn placeholder(self) -> &'static str {
        match self {
            SelectKind::Status => "Status",
            SelectKind::Gender => "Gender",
            SelectKind::Species => "Species",
        }
    }
}

/// Keyboard focus target. Order matches the Tab cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Select(SelectKind),
    Name,
    Kind,
    Apply,
    Reset,
    Grid,
}

impl Focus {
    const CYCLE: [Focus; 8] = [
        Focus::Select(SelectKind::Status),
        Focus::Select(SelectKind::Gender),
        Focus::Select(SelectKind::Species),
        Focus::Name,
        Focus::Kind,
        Focus::Apply,
        Focus::Reset,
        Focus::Grid,
    ];

    fn position(self) -> usize {
        Self::CYCLE.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::CYCLE[(self.position() + 1) % Self::CYCLE.len()]
    }

    pub fn prev(self) -> Focus {
        let len = Self::CYCLE.len();
        Self::CYCLE[(self.position() + len - 1) % len]
    }

    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::Name | Focus::Kind)
    }
}
