use super::*;

#[test]
fn first_page_has_no_previous() {
    let pager = Pager { page: 0, total: 41 };
    assert_eq!(pager.offset(), 0);
    assert!(!pager.has_previous());
    assert!(pager.has_next());
}

#[test]
fn last_page_has_no_next() {
    let pager = Pager { page: 2, total: 41 };
    assert_eq!(pager.offset(), 40);
    assert!(pager.has_previous());
    assert!(!pager.has_next());
    assert_eq!(pager.next(), pager);
}

#[test]
fn exact_multiple_stops_before_empty_page() {
    let pager = Pager { page: 1, total: 40 };
    assert!(!pager.has_next());
}

#[test]
fn previous_saturates_at_zero() {
    assert_eq!(Pager::default().previous().page, 0);
    assert_eq!(Pager { page: 3, total: 100 }.previous().page, 2);
}

#[test]
fn confidence_cell_formats() {
    assert_eq!(confidence_cell(Some(0.456)), "46%");
    assert_eq!(confidence_cell(Some(0.0)), "-");
    assert_eq!(confidence_cell(None), "-");
}
