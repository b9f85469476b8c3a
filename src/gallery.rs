//! About Gallery State
//!
//! Splits about items by category, pages the selected category to fit the
//! viewport, and tracks the journey panel and selected card.

use crate::config::{DEFAULT_PAGE_SIZE, GALLERY_BREAKPOINTS};
use crate::models::{AboutItem, AboutKind};
use crate::pagination::{PageSize, Pager};

/// Text shown in the journey panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    pub id: u32,
    pub title: String,
    pub description: String,
}

impl Default for Journey {
    fn default() -> Self {
        Self {
            id: 0,
            title: "No title".to_string(),
            description: "No description".to_string(),
        }
    }
}

impl Journey {
    /// The site owner's own journey text (id 0)
    pub fn intro(description: Option<&str>) -> Self {
        Self {
            id: 0,
            title: "My journey".to_string(),
            description: description.unwrap_or("No description").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutGallery {
    knowledge: Vec<AboutItem>,
    badges: Vec<AboutItem>,
    certificates: Vec<AboutItem>,
    category: AboutKind,
    /// Breakpoint entry of the last resize, resolved per category
    size: PageSize,
    pager: Pager<AboutItem>,
    pub journey: Journey,
    pub selected_item: Option<u32>,
}

impl Default for AboutGallery {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl AboutGallery {
    /// Sort items into categories; unknown `item_type`s are dropped
    pub fn new(items: Vec<AboutItem>) -> Self {
        let mut knowledge = Vec::new();
        let mut badges = Vec::new();
        let mut certificates = Vec::new();
        for item in items {
            match item.kind() {
                Some(AboutKind::Knowledge) => knowledge.push(item),
                Some(AboutKind::Badge) => badges.push(item),
                Some(AboutKind::Certificate) => certificates.push(item),
                None => log::debug!("skipping about item {} with type {}", item.id, item.item_type),
            }
        }
        let pager = Pager::new(&knowledge, DEFAULT_PAGE_SIZE);
        Self {
            knowledge,
            badges,
            certificates,
            category: AboutKind::Knowledge,
            size: PageSize::Fixed(DEFAULT_PAGE_SIZE),
            pager,
            journey: Journey::default(),
            selected_item: None,
        }
    }

    pub fn items(&self, kind: AboutKind) -> &[AboutItem] {
        match kind {
            AboutKind::Knowledge => &self.knowledge,
            AboutKind::Badge => &self.badges,
            AboutKind::Certificate => &self.certificates,
        }
    }

    pub fn category(&self) -> AboutKind {
        self.category
    }

    pub fn pager(&self) -> &Pager<AboutItem> {
        &self.pager
    }

    /// Show a category from its first page
    pub fn select(&mut self, kind: AboutKind) {
        self.category = kind;
        let items = self.items(kind).to_vec();
        if !self.pager.set_page_size(self.size.resolve(items.len()), &items) {
            self.pager.repartition(&items);
        }
    }

    /// Recompute page size for a viewport width; returns whether pages changed
    pub fn resize(&mut self, width: u32) -> bool {
        self.size = PageSize::for_width(width, GALLERY_BREAKPOINTS);
        let items = self.items(self.category).to_vec();
        self.pager.set_page_size(self.size.resolve(items.len()), &items)
    }

    pub fn next_page(&mut self) {
        self.pager.next();
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    /// Show an item's details in the journey panel
    pub fn show_item(&mut self, id: u32) {
        let found = self
            .knowledge
            .iter()
            .chain(&self.badges)
            .chain(&self.certificates)
            .find(|item| item.id == id);
        if let Some(item) = found {
            self.journey = Journey {
                id: item.id,
                title: item.name.clone(),
                description: item.description.clone(),
            };
            self.selected_item = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, item_type: u8) -> AboutItem {
        AboutItem {
            id,
            item_type,
            name: format!("Item {}", id),
            date: "2024".to_string(),
            description: format!("About {}", id),
            link: None,
            image_uri: None,
            image_alt: None,
        }
    }

    fn sample() -> AboutGallery {
        let mut items: Vec<AboutItem> = (1..=8).map(|id| make_item(id, 1)).collect();
        items.push(make_item(20, 2));
        items.push(make_item(30, 3));
        items.push(make_item(40, 9));
        AboutGallery::new(items)
    }

    #[test]
    fn test_items_split_by_category() {
        let gallery = sample();
        assert_eq!(gallery.items(AboutKind::Knowledge).len(), 8);
        assert_eq!(gallery.items(AboutKind::Badge).len(), 1);
        assert_eq!(gallery.items(AboutKind::Certificate).len(), 1);
        assert_eq!(gallery.category(), AboutKind::Knowledge);
        assert_eq!(gallery.pager().total_pages(), 2);
    }

    #[test]
    fn test_select_resets_to_first_page() {
        let mut gallery = sample();
        gallery.next_page();
        assert_eq!(gallery.pager().page_index(), 1);

        gallery.select(AboutKind::Badge);
        assert_eq!(gallery.pager().page_index(), 0);
        assert_eq!(gallery.pager().total_pages(), 1);
        assert_eq!(gallery.pager().current()[0].id, 20);
    }

    #[test]
    fn test_narrow_screen_keeps_each_category_on_one_page() {
        let mut items: Vec<AboutItem> = (1..=3).map(|id| make_item(id, 1)).collect();
        items.extend((10..20).map(|id| make_item(id, 2)));
        let mut gallery = AboutGallery::new(items);

        assert!(gallery.resize(320));
        assert_eq!(gallery.pager().page_size(), 3);

        gallery.select(AboutKind::Badge);
        assert_eq!(gallery.pager().page_size(), 10);
        assert_eq!(gallery.pager().total_pages(), 1);

        // Fixed sizes carry over unchanged
        gallery.resize(800);
        gallery.select(AboutKind::Knowledge);
        assert_eq!(gallery.pager().page_size(), 3);
        gallery.select(AboutKind::Badge);
        assert_eq!(gallery.pager().total_pages(), 4);
    }

    #[test]
    fn test_resize_repartitions_only_on_change() {
        let mut gallery = sample();
        assert!(!gallery.resize(1500));
        assert!(gallery.resize(800));
        assert_eq!(gallery.pager().page_size(), 3);
        assert_eq!(gallery.pager().total_pages(), 3);

        // Narrow screens show the whole category on one page
        assert!(gallery.resize(320));
        assert_eq!(gallery.pager().total_pages(), 1);
        assert!(!gallery.pager().has_multiple_pages());
    }

    #[test]
    fn test_show_item_updates_journey() {
        let mut gallery = sample();
        gallery.show_item(30);
        assert_eq!(gallery.journey.title, "Item 30");
        assert_eq!(gallery.selected_item, Some(30));

        gallery.show_item(999);
        assert_eq!(gallery.selected_item, Some(30));
    }
}
