use unicode_segmentation::UnicodeSegmentation;

use crate::app::dropdown::Dropdown;
use crate::app::types::SelectKind;

pub const STATUS_OPTIONS: &[&str] = &["alive", "dead", "unknown"];
pub const GENDER_OPTIONS: &[&str] = &["female", "male", "genderless", "unknown"];
pub const SPECIES_OPTIONS: &[&str] = &[
    "human",
    "alien",
    "humanoid",
    "poopybutthole",
    "mythological",
    "unknown",
    "animal",
    "disease",
    "robot",
    "cronenberg",
    "planet",
];

/// Snapshot of the filter form taken when Apply is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    pub status: Option<String>,
    pub gender: Option<String>,
    pub species: Option<String>,
    pub name: String,
    pub kind: String,
}

/// Filter form state: three dropdowns and two free-text fields.
#[derive(Debug)]
pub struct FilterForm {
    pub status: Dropdown,
    pub gender: Dropdown,
    pub species: Dropdown,
    pub name: String,
    pub kind: String,
    /// Query captured by the last Apply. Not used to filter the grid.
    pub last_applied: Option<FilterQuery>,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterForm {
    pub fn new() -> Self {
        FilterForm {
            status: Dropdown::new(SelectKind::Status, STATUS_OPTIONS),
            gender: Dropdown::new(SelectKind::Gender, GENDER_OPTIONS),
            species: Dropdown::new(SelectKind::Species, SPECIES_OPTIONS),
            name: String::new(),
            kind: String::new(),
            last_applied: None,
        }
    }

    pub fn select(&self, kind: SelectKind) -> &Dropdown {
        match kind {
            SelectKind::Status => &self.status,
            SelectKind::Gender => &self.gender,
            SelectKind::Species => &self.species,
        }
    }

    pub fn select_mut(&mut self, kind: SelectKind) -> &mut Dropdown {
        match kind {
            SelectKind::Status => &mut self.status,
            SelectKind::Gender => &mut self.gender,
            SelectKind::Species => &mut self.species,
        }
    }

    /// The dropdown currently open, if any.
    pub fn open_select(&self) -> Option<SelectKind> {
        SelectKind::ALL.into_iter().find(|k| self.select(*k).is_open())
    }

    pub fn query(&self) -> FilterQuery {
        FilterQuery {
            status: self.status.selected().map(str::to_string),
            gender: self.gender.selected().map(str::to_string),
            species: self.species.selected().map(str::to_string),
            name: self.name.clone(),
            kind: self.kind.clone(),
        }
    }

    /// Record the current values as the applied query. The displayed
    /// collection is left untouched.
    pub fn apply(&mut self) -> &FilterQuery {
        let q = self.query();
        tracing::info!(?q, "filter applied");
        self.last_applied.insert(q)
    }

    /// Clear all five fields and close every dropdown.
    pub fn reset(&mut self) {
        for kind in SelectKind::ALL {
            self.select_mut(kind).reset();
        }
        self.name.clear();
        self.kind.clear();
        tracing::info!("filter reset");
    }

    pub fn is_default(&self) -> bool {
        self.query() == FilterQuery::default()
    }
}

/// Remove the last user-perceived character from `s`.
pub fn pop_grapheme(s: &mut String) {
    if let Some((idx, _)) = s.grapheme_indices(true).next_back() {
        s.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::dropdown::ClickTarget;
    use crate::input::pointer::PointerBus;

    #[test]
    fn reset_clears_everything() {
        let bus = PointerBus::new();
        let mut form = FilterForm::new();
        form.status.click(&bus, ClickTarget::Surface);
        form.status.choose(0);
        form.species.click(&bus, ClickTarget::Surface);
        form.species.choose(3);
        form.gender.click(&bus, ClickTarget::Surface);
        form.name.push_str("Rick");
        form.kind.push_str("Parasite");
        assert!(!form.is_default());

        form.reset();
        assert!(form.is_default());
        assert_eq!(form.open_select(), None);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn apply_records_query_only() {
        let mut form = FilterForm::new();
        form.name.push_str("Morty");
        let q = form.apply().clone();
        assert_eq!(q.name, "Morty");
        assert_eq!(form.last_applied, Some(q));
        assert_eq!(form.name, "Morty");
    }

    #[test]
    fn pop_grapheme_handles_combining_marks() {
        let mut s = String::from("Jose\u{301}");
        pop_grapheme(&mut s);
        assert_eq!(s, "Jos");
        let mut empty = String::new();
        pop_grapheme(&mut empty);
        assert!(empty.is_empty());
    }
}
