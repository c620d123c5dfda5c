//! The interaction context owned by the game's main loop.

use crate::config::InteractionConfig;
use crate::host::Host;
use crate::input::{Pad, PadMerger};
use crate::interaction::{EventKind, HitTester, Session};
use crate::tree::{Tree, WidgetId};
use crate::widgets::Rect;

/// Widget tree plus the interaction session that dispatches into it.
///
/// Handlers receive `&mut Ui`, so they can move focus, start a keybinding
/// capture, build panels or remove widgets (including their own) while
/// being dispatched.
pub struct Ui {
    pub(crate) tree: Tree,
    pub(crate) root: WidgetId,
    pub(crate) session: Session,
    pub(crate) merger: PadMerger,
    pub(crate) hit_tester: HitTester,
    pub(crate) host: Box<dyn Host>,
    pub(crate) config: InteractionConfig,
    pub(crate) pad: Pad,
    pub(crate) override_pad: bool,
}

impl Ui {
    pub fn new(host: impl Host + 'static, screen: Rect) -> Self {
        Self::with_config(host, screen, InteractionConfig::default())
    }

    pub fn with_config(host: impl Host + 'static, screen: Rect, config: InteractionConfig) -> Self {
        let mut tree = Tree::new();
        let root = tree.register(screen);
        Self {
            tree,
            root,
            session: Session::new(),
            merger: PadMerger::new(&config),
            hit_tester: HitTester::new(),
            host: Box::new(host),
            config,
            pad: Pad::default(),
            override_pad: false,
        }
    }

    /// The screen-sized root every panel hangs off.
    pub fn root(&self) -> WidgetId {
        self.root
    }

    pub fn screen(&self) -> Rect {
        self.tree.bounds(self.root).unwrap_or_default()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }

    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> &mut dyn Host {
        self.host.as_mut()
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// Merged pad state from the last tick (raw pad plus keyboard).
    pub fn pad(&self) -> Pad {
        self.pad
    }

    /// Whether another system has asked to read the merged pad instead of
    /// its own controller input.
    pub fn override_pad(&self) -> bool {
        self.override_pad
    }

    pub fn set_override_pad(&mut self, override_pad: bool) {
        self.override_pad = override_pad;
    }

    /// Register a widget under `parent`.
    pub fn add_widget(&mut self, parent: WidgetId, bounds: Rect) -> WidgetId {
        let id = self.tree.register(bounds);
        self.tree.set_parent(id, parent);
        id
    }

    /// Remove a widget and its subtree, clearing every session handle that
    /// pointed into it. No focus-end or hover-end fires for removed widgets.
    pub fn remove_widget(&mut self, id: WidgetId) {
        if id == self.root {
            log::debug!("Refusing to remove the root widget");
            return;
        }
        let removed = self.tree.unregister(id);
        if self.session.forget(&removed)
            && self.session.input_focus.is_none()
            && self.session.binding.is_none()
        {
            self.host.set_cursor_visible(true);
        }
    }

    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        self.tree.set_visible(id, visible);
    }

    /// Enable or disable a widget, firing enabled-change when it flips.
    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) {
        if let Some(previous) = self.tree.replace_enabled(id, enabled)
            && previous != enabled
        {
            self.fire(id, EventKind::EnabledChange);
        }
    }

    /// Whether the cursor is inside the widget's bounds.
    pub fn cursor_inside(&self, id: WidgetId) -> bool {
        let (x, y) = self.host.cursor_position();
        self.tree.bounds(id).is_some_and(|rect| rect.contains(x, y))
    }

    pub fn is_binding(&self) -> bool {
        self.session.binding.is_some()
    }

    pub fn is_input_focus(&self, id: Option<WidgetId>) -> bool {
        self.session.input_focus == id
    }

    pub fn hovered(&self) -> Option<WidgetId> {
        self.session.hovered
    }

    pub fn mouse_down(&self) -> Option<WidgetId> {
        self.session.mouse_down
    }

    pub fn input_focus(&self) -> Option<WidgetId> {
        self.session.input_focus
    }

    pub fn binding(&self) -> Option<WidgetId> {
        self.session.binding
    }
}
