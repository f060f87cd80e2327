//! Citation panel visibility.
//!
//! Each card has one citation panel addressed by its synthetic id
//! (`bib-{index}`). At most one panel is open at a time: selecting a panel
//! closes every other panel and flips the selected one.

/// Visibility of every citation panel on a page, in card order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BibPanels {
    panels: Vec<(String, bool)>,
}

impl BibPanels {
    /// All panels start hidden.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            panels: ids.into_iter().map(|id| (id.into(), false)).collect(),
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.panels
            .iter()
            .any(|(panel, visible)| panel == id && *visible)
    }

    /// The open panel, if any.
    pub fn visible(&self) -> Option<&str> {
        self.panels
            .iter()
            .find(|(_, visible)| *visible)
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Apply a click on the BibTeX button of `clicked`.
    pub fn select(&self, clicked: &str) -> Self {
        select(self, clicked)
    }
}

/// Hide every panel except `clicked`, then flip `clicked`. An unknown id
/// leaves every panel hidden.
pub fn select(current: &BibPanels, clicked: &str) -> BibPanels {
    let panels = current
        .panels
        .iter()
        .map(|(id, visible)| {
            let next = id == clicked && !visible;
            (id.clone(), next)
        })
        .collect();
    BibPanels { panels }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> BibPanels {
        BibPanels::new(["bib-0", "bib-2", "bib-3"])
    }

    #[test]
    fn test_all_hidden_initially() {
        let panels = three();
        assert_eq!(panels.visible(), None);
        assert_eq!(panels.len(), 3);
    }

    #[test]
    fn test_click_opens_panel() {
        let panels = three().select("bib-2");
        assert!(panels.is_visible("bib-2"));
        assert!(!panels.is_visible("bib-0"));
        assert_eq!(panels.visible(), Some("bib-2"));
    }

    #[test]
    fn test_click_twice_restores_state() {
        let start = three();
        let after = start.select("bib-3").select("bib-3");
        assert_eq!(after, start);
    }

    #[test]
    fn test_opening_another_closes_previous() {
        let panels = three().select("bib-0").select("bib-3");
        assert!(!panels.is_visible("bib-0"));
        assert!(panels.is_visible("bib-3"));
    }

    #[test]
    fn test_at_most_one_visible_over_any_sequence() {
        let clicks = ["bib-0", "bib-2", "bib-2", "bib-3", "bib-0", "bib-0", "bib-3", "bib-2"];
        let mut panels = three();
        for id in clicks {
            panels = select(&panels, id);
            let open = panels.panels.iter().filter(|(_, v)| *v).count();
            assert!(open <= 1, "more than one panel open after clicking {}", id);
        }
    }

    #[test]
    fn test_unknown_id_hides_everything() {
        let panels = three().select("bib-0").select("bib-9");
        assert_eq!(panels.visible(), None);
    }
}
