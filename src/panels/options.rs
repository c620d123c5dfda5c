//! The options menu: one button per settings sub-panel plus "Back".

use crate::host::PanelKind;
use crate::interaction::interactable::callback;
use crate::tree::WidgetId;
use crate::ui::Ui;
use crate::widgets::{ButtonStyle, Column, Rect, WidgetState, button, column, set_button_style};

pub const TITLE: &str = "OPTIONS";

const BUTTON_HEIGHT: f32 = 64.0;
const BUTTON_SPACING: f32 = 16.0;
const PANEL_WIDTH: f32 = 410.0;
const PANEL_PADDING: f32 = 16.0;
const TITLE_HEIGHT: f32 = 64.0;

const ENTRIES: [(&str, PanelKind); 4] = [
    ("Camera", PanelKind::Camera),
    ("Controls", PanelKind::Controls),
    ("Display", PanelKind::Display),
    ("Sound", PanelKind::Sound),
];

/// Build the options panel and push it onto the host's panel stack.
///
/// `caller` is the widget that opened the panel. Returns the panel node.
pub fn create_options_panel(ui: &mut Ui, caller: Option<WidgetId>) -> WidgetId {
    let body_height = Column::content_height(ENTRIES.len() + 1, BUTTON_HEIGHT, BUTTON_SPACING);
    let panel_height = TITLE_HEIGHT + body_height + PANEL_PADDING * 2.0;
    let panel_rect = ui.screen().centered(PANEL_WIDTH, panel_height);

    let root = ui.root();
    let panel = ui.add_widget(root, panel_rect);
    if let Some(state) = ui.tree_mut().state_mut(panel) {
        *state = WidgetState::labeled(TITLE);
    }

    let body_rect = Rect::new(
        panel_rect.x + PANEL_PADDING,
        panel_rect.y + PANEL_PADDING + TITLE_HEIGHT,
        PANEL_WIDTH - PANEL_PADDING * 2.0,
        body_height,
    );
    let mut body = column(ui, panel, body_rect).spacing(BUTTON_SPACING);

    let mut default_focus = None;
    for (label, kind) in ENTRIES {
        let rect = body.next_rect(BUTTON_HEIGHT);
        let id = button(ui, body.id(), rect, label);
        ui.hook_click(
            id,
            Some(callback(move |ui, _| ui.host_mut().open_panel(kind))),
        );
        default_focus.get_or_insert(id);
    }

    let rect = body.next_rect(BUTTON_HEIGHT);
    let back = button(ui, body.id(), rect, "Back");
    set_button_style(ui, back, ButtonStyle::Back);
    ui.hook_click(back, Some(callback(|ui, _| ui.host_mut().panel_back())));

    log::debug!("Created options panel {:?}", panel);
    ui.host_mut().add_panel(caller, panel, default_focus);
    panel
}
