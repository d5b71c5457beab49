//! Integration tests that drive the panel through clicks and typing.

use chrono::Duration;
use egui::accesskit::Role;
use kittest::Queryable as _;
use roster_business::{FilterState, NameSearch, SelectionState, SortDirection, SortState, TableRows};
use roster_states::Time;
use roster_ui::state::State;
use roster_ui::widgets::{current_page_ids, information_table_panel};
use ustr::Ustr;

use crate::common::TestCtx;

mod common;

fn panel(ui: &mut egui::Ui, state: &mut State) {
    information_table_panel(&mut state.ctx, ui);
}

fn summary(state: &State) -> Vec<String> {
    state
        .ctx
        .state::<SelectionState>()
        .summary()
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn row_count(state: &State) -> usize {
    state.ctx.cached::<TableRows>().map_or(0, TableRows::len)
}

#[test]
fn test_row_checkbox_selects_row() {
    let mut ctx = TestCtx::new(panel);
    let harness = ctx.harness_mut();
    harness.step();

    // the header checkbox comes first
    harness
        .query_all_by_role(Role::CheckBox)
        .nth(1)
        .expect("first row checkbox")
        .click();
    harness.step();
    harness.step();

    assert_eq!(summary(harness.state()), ["10"]);
    assert!(harness.query_by_label_contains("• 10").is_some());
}

#[test]
fn test_header_checkbox_selects_page() {
    let mut ctx = TestCtx::new(panel);
    let harness = ctx.harness_mut();
    harness.step();

    harness
        .query_all_by_role(Role::CheckBox)
        .next()
        .expect("header checkbox")
        .click();
    harness.step();
    harness.step();

    assert_eq!(summary(harness.state()), ["10", "11", "12", "13", "14"]);
}

#[test]
fn test_header_click_sorts_ascending() {
    let mut ctx = TestCtx::new(panel);
    let harness = ctx.harness_mut();
    harness.step();

    harness.get_by_label("Name").click();
    harness.step();
    harness.step();

    let sort = *harness.state().ctx.state::<SortState>();
    assert_eq!(sort.column(), Some(Ustr::from("name")));
    assert_eq!(sort.direction(), SortDirection::Ascending);
    assert!(harness.query_by_label("Name ⬆").is_some());
}

#[test]
fn test_typing_applies_after_quiet_period() {
    let mut ctx = TestCtx::new(panel);
    let harness = ctx.harness_mut();
    harness.step();

    // the field only takes keystrokes once it has focus
    harness.get_by_role(Role::TextInput).click();
    harness.step();
    harness.get_by_role(Role::TextInput).type_text("lena");
    harness.step();
    harness.step();

    assert_eq!(harness.state().ctx.state::<NameSearch>().text(), "lena");
    assert_eq!(harness.state().ctx.state::<FilterState>().name(), "");
    assert_eq!(row_count(harness.state()), 8);

    harness
        .state_mut()
        .ctx
        .update::<Time>(|time| time.advance(Duration::milliseconds(1000)));
    harness.step();
    harness.step();

    assert_eq!(harness.state().ctx.state::<FilterState>().name(), "lena");
    assert_eq!(current_page_ids(&harness.state().ctx), [Ustr::from("12")]);
}

#[test]
fn test_role_dropdown_ticks_several_roles() {
    let mut ctx = TestCtx::new(panel);
    let harness = ctx.harness_mut();
    harness.step();

    // the role filter is laid out before the rows-per-page box
    harness
        .query_all_by_role(Role::ComboBox)
        .next()
        .expect("role filter")
        .click();
    harness.step();

    harness.get_by_role_and_label(Role::CheckBox, "Admin").click();
    harness.step();
    harness.step();

    let roles = harness.state().ctx.state::<FilterState>().roles().to_vec();
    assert_eq!(roles, [Ustr::from("Admin")]);
    assert_eq!(row_count(harness.state()), 2);

    // the popup is still open after the first tick
    harness.get_by_role_and_label(Role::CheckBox, "Viewer").click();
    harness.step();
    harness.step();

    let roles = harness.state().ctx.state::<FilterState>().roles().to_vec();
    assert_eq!(roles, [Ustr::from("Admin"), Ustr::from("Viewer")]);
    assert_eq!(row_count(harness.state()), 3);
}
