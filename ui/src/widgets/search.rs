//! Toolbar inputs: debounced name search and the role multi-select.

use egui::{ComboBox, PopupCloseBehavior, Response, TextEdit, Ui};
use roster_business::{ALL_ROLES, FilterState, NameSearch, RoleOption, RoleOptions};
use roster_states::{StateCtx, Time};

const SEARCH_WIDTH: f32 = 220.0;
const ROLE_FILTER_WIDTH: f32 = 200.0;

/// Text field feeding [`NameSearch`]. The filter itself only changes once
/// the quiet period has passed.
pub fn name_search_field(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let now = *state_ctx.state::<Time>().as_ref();
    let mut text = state_ctx.state::<NameSearch>().text().to_owned();

    let response = ui.add(
        TextEdit::singleline(&mut text)
            .hint_text("Search Name")
            .desired_width(SEARCH_WIDTH),
    );
    if response.changed() {
        state_ctx.state_mut::<NameSearch>().on_input(text, now);
    }
    response
}

/// Dropdown with "All Roles" followed by each distinct role.
pub fn role_filter(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let options: Vec<RoleOption> = state_ctx
        .cached::<RoleOptions>()
        .map(|roles| roles.options().collect())
        .unwrap_or_else(|| vec![RoleOption::All]);
    let filter = state_ctx.state::<FilterState>();
    let mut picked = None;

    let selected_text = if filter.roles().is_empty() {
        ALL_ROLES.to_owned()
    } else {
        filter
            .roles()
            .iter()
            .map(|role| role.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let response = ComboBox::from_id_salt("role_filter")
        .width(ROLE_FILTER_WIDTH)
        .selected_text(selected_text)
        // stays open while several roles are ticked
        .close_behavior(PopupCloseBehavior::CloseOnClickOutside)
        .show_ui(ui, |ui| {
            for option in &options {
                let mut checked = match option {
                    RoleOption::All => filter.roles().is_empty(),
                    RoleOption::Role(role) => filter.has_role(role),
                };
                if ui.checkbox(&mut checked, option.label()).changed() {
                    picked = Some(*option);
                }
            }
        })
        .response;

    if let Some(option) = picked {
        state_ctx.update::<FilterState>(|filter| filter.apply_role_option(option));
    }
    response
}
