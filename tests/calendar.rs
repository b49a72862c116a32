use chrono::{Datelike, Local, NaiveDate};
use monthgrid::{generate_month_grid, CalendarState, GRID_LEN};

fn march() -> CalendarState {
    CalendarState::from_ymd(2020, 3, 14).unwrap()
}

#[test]
fn derived_fields_for_march_14_2020() {
    let calendar = march();

    assert_eq!(calendar.date(), NaiveDate::from_ymd_opt(2020, 3, 14).unwrap());
    assert_eq!(calendar.year(), 2020);

    assert_eq!(calendar.day().index, 6);
    assert_eq!(calendar.day().number, 14);
    assert_eq!(calendar.day().name, "Saturday");

    assert_eq!(calendar.month().index, 2);
    assert_eq!(calendar.month().number, 3);
    assert_eq!(calendar.month().name, "March");
}

#[test]
fn items_for_march_14_2020() {
    let calendar = march();
    let items = calendar.items();

    assert_eq!(items.len(), GRID_LEN);
    assert_eq!(items.iter().filter(|item| item.active).count(), 31);

    let first = &items[0];
    assert_eq!(first.date, 1);
    assert_eq!(first.full_date, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
    assert!(first.active);
    assert!(!first.selected);
    assert_eq!(first.name, "Sunday");
}

#[test]
fn defaults_to_today() {
    let today = Local::now().date_naive();
    let calendar = CalendarState::default();

    // Guard against running across midnight.
    if calendar.date() == Local::now().date_naive() {
        assert_eq!(calendar.day().number, today.day());
        assert_eq!(calendar.month().index, today.month0());
        assert_eq!(calendar.year(), today.year());
    }
}

#[test]
fn select_date() {
    let mut calendar = march();
    assert_eq!(calendar.month().number, 3);

    calendar.select_date(NaiveDate::from_ymd_opt(2021, 6, 3).unwrap());

    assert_eq!(calendar.month().index, 5);
    assert_eq!(calendar.day().number, 3);
    assert_eq!(calendar.year(), 2021);
    assert_eq!(
        calendar.items(),
        generate_month_grid(&NaiveDate::from_ymd_opt(2021, 6, 3).unwrap()).as_slice()
    );
}

#[test]
fn prev_month() {
    let mut calendar = march();
    calendar.prev_month().unwrap();
    assert_eq!(calendar.month().number, 2);
}

#[test]
fn prev_month_into_previous_year() {
    let mut calendar = march();
    for _ in 0..3 {
        calendar.prev_month().unwrap();
    }

    assert_eq!(calendar.month().number, 12);
    assert_eq!(calendar.year(), 2019);
}

#[test]
fn next_month() {
    let mut calendar = march();
    calendar.next_month().unwrap();
    assert_eq!(calendar.month().number, 4);
}

#[test]
fn next_month_into_next_year() {
    let mut calendar = march();
    for _ in 0..10 {
        calendar.next_month().unwrap();
    }

    assert_eq!(calendar.month().number, 1);
    assert_eq!(calendar.year(), 2021);
}
