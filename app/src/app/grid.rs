use crate::app::types::{CardKey, Character, PopupSettings};

/// A card view over one character. Clicking it hands the whole record to
/// the parent's handler.
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    pub key: CardKey,
    pub character: &'a Character,
}

impl<'a> Card<'a> {
    /// Invoke `on_click` once with open popup settings for this card.
    pub fn click<F: FnOnce(PopupSettings)>(&self, on_click: F) {
        on_click(PopupSettings::open(self.character.clone()));
    }
}

/// Grid of cards plus the single popup state shared by all of them.
#[derive(Debug, Default)]
pub struct ItemsGrid {
    items: Vec<(CardKey, Character)>,
    /// Keyboard selection (card index).
    pub selected: usize,
    /// First visible card row.
    pub offset_row: usize,
    /// Card under the mouse pointer.
    pub hovered: Option<usize>,
    popup: PopupSettings,
}

impl ItemsGrid {
    pub fn new(characters: Vec<Character>) -> Self {
        let items = characters
            .into_iter()
            .enumerate()
            .map(|(i, c)| (CardKey::for_character(&c, i), c))
            .collect();
        ItemsGrid {
            items,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn card(&self, index: usize) -> Option<Card<'_>> {
        self.items.get(index).map(|(key, character)| Card {
            key: *key,
            character,
        })
    }

    pub fn cards(&self) -> impl Iterator<Item = Card<'_>> {
        self.items.iter().map(|(key, character)| Card {
            key: *key,
            character,
        })
    }

    pub fn keys(&self) -> Vec<CardKey> {
        self.items.iter().map(|(k, _)| *k).collect()
    }

    pub fn popup(&self) -> &PopupSettings {
        &self.popup
    }

    /// Popup update callback: replaces the settings wholesale.
    pub fn set_popup(&mut self, settings: PopupSettings) {
        match &settings.content {
            Some(c) if settings.visible => tracing::info!(name = %c.name, "popup opened"),
            _ => tracing::debug!("popup closed"),
        }
        self.popup = settings;
    }

    pub fn close_popup(&mut self) {
        self.set_popup(PopupSettings::default());
    }

    /// Activate the card at `index`. Any open popup content is replaced.
    pub fn click_card(&mut self, index: usize) -> bool {
        let mut next = None;
        match self.card(index) {
            Some(card) => card.click(|s| next = Some(s)),
            None => return false,
        }
        if let Some(settings) = next {
            self.selected = index;
            self.set_popup(settings);
        }
        true
    }

    pub fn activate_selected(&mut self) -> bool {
        self.click_card(self.selected)
    }

    /// Move the selection by `delta` cards, clamped to the collection.
    pub fn move_selection(&mut self, delta: isize) {
        if self.items.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.items.len() - 1;
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, last as isize) as usize;
    }

    /// Adjust `offset_row` so the selected card's row is within the
    /// `visible_rows` window.
    pub fn ensure_selected_visible(&mut self, columns: usize, visible_rows: usize) {
        let columns = columns.max(1);
        if visible_rows == 0 || self.items.is_empty() {
            self.offset_row = 0;
            return;
        }
        let row = self.selected / columns;
        if row < self.offset_row {
            self.offset_row = row;
        } else if row >= self.offset_row + visible_rows {
            self.offset_row = row + 1 - visible_rows;
        }
        self.offset_row = self.offset_row.min(self.max_offset_row(columns, visible_rows));
    }

    pub fn scroll(&mut self, delta_rows: isize, columns: usize, visible_rows: usize) {
        let max = self.max_offset_row(columns, visible_rows) as isize;
        self.offset_row = (self.offset_row as isize + delta_rows).clamp(0, max) as usize;
    }

    fn max_offset_row(&self, columns: usize, visible_rows: usize) -> usize {
        let total_rows = self.items.len().div_ceil(columns.max(1));
        total_rows.saturating_sub(visible_rows)
    }
}

/// Number of card columns fitting in `width` ("auto-fill" with a minimum
/// card width). Always at least one.
pub fn columns_for(width: u16, min_card_width: u16) -> usize {
    (width / min_card_width.max(1)).max(1) as usize
}
