//! Integration tests for the debounced name search and the role filter.

use chrono::Duration;
use kittest::Queryable as _;
use roster_business::{FilterState, NameSearch, RoleOption, TableConfig, TableRows};
use roster_states::Time;
use roster_ui::state::State;
use roster_ui::widgets::{current_page_ids, information_table_panel};
use ustr::Ustr;

use crate::common::TestCtx;

mod common;

fn panel(ui: &mut egui::Ui, state: &mut State) {
    information_table_panel(&mut state.ctx, ui);
}

fn type_search(harness: &mut egui_kittest::Harness<'_, State>, text: &str) {
    let ctx = &mut harness.state_mut().ctx;
    let now = *ctx.state::<Time>().as_ref();
    ctx.state_mut::<NameSearch>().on_input(text, now);
}

fn advance(harness: &mut egui_kittest::Harness<'_, State>, ms: i64) {
    harness
        .state_mut()
        .ctx
        .update::<Time>(|time| time.advance(Duration::milliseconds(ms)));
}

fn row_count(harness: &egui_kittest::Harness<'_, State>) -> usize {
    harness
        .state()
        .ctx
        .cached::<TableRows>()
        .map_or(0, TableRows::len)
}

#[test]
fn test_rapid_typing_commits_last_value_once() {
    let mut ctx = TestCtx::new(panel);
    let harness = ctx.harness_mut();
    harness.step();

    for text in ["o", "os", "osk"] {
        type_search(harness, text);
        advance(harness, 300);
        harness.step();
        assert_eq!(
            harness.state().ctx.state::<FilterState>().name(),
            "",
            "filter must not change while typing"
        );
    }

    advance(harness, 700);
    harness.step();

    assert_eq!(harness.state().ctx.state::<FilterState>().name(), "osk");
    assert_eq!(current_page_ids(&harness.state().ctx), [Ustr::from("15")]);
    assert!(harness.query_by_label_contains("Karl").is_none());
}

#[test]
fn test_search_is_case_insensitive() {
    let mut ctx = TestCtx::new(panel);
    let harness = ctx.harness_mut();
    harness.step();

    type_search(harness, "RA");
    advance(harness, 1000);
    harness.step();
    harness.step();

    let ids: Vec<String> = current_page_ids(&harness.state().ctx)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(ids, ["14", "16"]);
}

#[test]
fn test_shorter_quiet_period_from_config() {
    let config = TableConfig::builder()
        .search_quiet_period(Duration::milliseconds(200))
        .build();
    let mut ctx = TestCtx::with_config(config, panel);
    let harness = ctx.harness_mut();
    harness.step();

    type_search(harness, "lena");
    advance(harness, 200);
    harness.step();
    harness.step();

    assert_eq!(row_count(harness), 1);
}

#[test]
fn test_roles_filter_inclusively() {
    let mut ctx = TestCtx::new(panel);
    let harness = ctx.harness_mut();
    harness.step();

    harness.state_mut().ctx.update::<FilterState>(|filter| {
        filter.apply_role_option(RoleOption::Role(Ustr::from("Admin")));
        filter.apply_role_option(RoleOption::Role(Ustr::from("Viewer")));
    });
    harness.step();
    harness.step();

    assert_eq!(row_count(harness), 3);
    assert!(harness.query_by_label_contains("Ingrid").is_some());
    assert!(harness.query_by_label_contains("Nora").is_some());
    assert!(harness.query_by_label_contains("Karl").is_none());

    harness
        .state_mut()
        .ctx
        .update::<FilterState>(|filter| filter.apply_role_option(RoleOption::All));
    harness.step();
    harness.step();

    assert_eq!(row_count(harness), 8);
    assert!(harness.state().ctx.state::<FilterState>().roles().is_empty());
}

#[test]
fn test_no_match_shows_empty_table() {
    let mut ctx = TestCtx::new(panel);
    let harness = ctx.harness_mut();
    harness.step();

    type_search(harness, "zzz");
    advance(harness, 1000);
    harness.step();
    harness.step();

    assert_eq!(row_count(harness), 0);
    assert!(harness.query_by_label_contains("No records to display.").is_some());
    assert!(harness.query_by_label_contains("Page 1 of 1").is_some());
}
