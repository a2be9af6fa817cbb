pub const DEFAULT_SCROLL_OFFSET: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavSection {
    Home,
    Skills,
    Education,
    Projects,
    Contact,
}

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        NavSection::Home,
        NavSection::Skills,
        NavSection::Education,
        NavSection::Projects,
        NavSection::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::Skills => "skills",
            NavSection::Education => "education",
            NavSection::Projects => "projects",
            NavSection::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Skills => "Skills",
            NavSection::Education => "Education",
            NavSection::Projects => "Projects",
            NavSection::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let trimmed = anchor.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(trimmed))
    }
}

/// Header chrome: the solid background once the page is scrolled, and the
/// mobile menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderState {
    scroll_offset: f64,
    scrolled: bool,
    menu_open: bool,
}

impl HeaderState {
    pub fn new(scroll_offset: f64) -> Self {
        Self {
            scroll_offset,
            scrolled: false,
            menu_open: false,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Returns whether `scrolled` flipped.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let next = offset_y > self.scroll_offset;
        let changed = next != self.scrolled;
        self.scrolled = next;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn navigate(&mut self, section: NavSection) -> &'static str {
        self.menu_open = false;
        section.anchor()
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_OFFSET)
    }
}
