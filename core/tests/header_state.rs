use folio_core::{HeaderState, NavSection};

#[test]
fn scrolled_flips_past_offset_only() {
    let mut header = HeaderState::default();
    assert!(!header.on_scroll(50.0));
    assert!(!header.scrolled());
    assert!(header.on_scroll(51.0));
    assert!(header.scrolled());
    assert!(!header.on_scroll(400.0));
    assert!(header.on_scroll(0.0));
    assert!(!header.scrolled());
}

#[test]
fn navigation_closes_menu() {
    let mut header = HeaderState::new(10.0);
    assert!(header.toggle_menu());
    assert!(header.menu_open());
    assert_eq!(header.navigate(NavSection::Projects), "projects");
    assert!(!header.menu_open());
    assert!(header.toggle_menu());
    header.close_menu();
    assert!(!header.menu_open());
}

#[test]
fn anchors_round_trip() {
    for section in NavSection::ALL {
        assert_eq!(NavSection::from_anchor(&section.href()), Some(section));
    }
    assert_eq!(NavSection::from_anchor("#nowhere"), None);
}
