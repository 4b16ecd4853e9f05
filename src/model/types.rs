//! Core type definitions for the application

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Cinemas,
    Presets,
    Calendar,
    Ranges,
    Film,
    Query,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Cinemas => ActiveSection::Presets,
            ActiveSection::Presets => ActiveSection::Calendar,
            ActiveSection::Calendar => ActiveSection::Ranges,
            ActiveSection::Ranges => ActiveSection::Film,
            ActiveSection::Film => ActiveSection::Query,
            ActiveSection::Query => ActiveSection::Cinemas,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Cinemas => ActiveSection::Query,
            ActiveSection::Presets => ActiveSection::Cinemas,
            ActiveSection::Calendar => ActiveSection::Presets,
            ActiveSection::Ranges => ActiveSection::Calendar,
            ActiveSection::Film => ActiveSection::Ranges,
            ActiveSection::Query => ActiveSection::Film,
        }
    }
}

/// Fixed picker catalogs supplied by configuration
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub cinemas: Vec<String>,
    pub date_presets: Vec<String>,
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub cinema_selected: usize,
    pub preset_selected: usize,
    pub range_selected: usize,
    pub response_scroll: u16,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Query,
            cinema_selected: 0,
            preset_selected: 0,
            range_selected: 0,
            response_scroll: 0,
            show_help_popup: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_cycle_round_trips() {
        let mut section = ActiveSection::Cinemas;
        for _ in 0..6 {
            section = section.next();
        }
        assert_eq!(section, ActiveSection::Cinemas);
        assert_eq!(ActiveSection::Cinemas.prev().next(), ActiveSection::Cinemas);
    }
}
