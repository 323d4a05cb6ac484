use gpui::prelude::*;
use gpui::{AnyElement, MouseButton, Window, div, px, rgb};

use crate::form::{ControlKind, ControlSnapshot, FormNode};
use crate::widget::{CheckboxSpec, DropdownSpec, GroupAxis};

use super::config::PanelViewConfig;

/// A GPUI view that renders a form subtree, usually an
/// [`EncodingPanel`](crate::panel::EncodingPanel) root.
///
/// Dropdowns cycle through their options on click (left: next, right:
/// previous); checkboxes flip. Hidden nodes are not rendered but keep their
/// state.
#[derive(Clone)]
pub struct GpuiEncodingPanel {
    root: FormNode,
    config: PanelViewConfig,
}

impl GpuiEncodingPanel {
    /// Create a view for the given root node.
    ///
    /// Uses the default [`PanelViewConfig`].
    pub fn new(root: FormNode) -> Self {
        Self {
            root,
            config: PanelViewConfig::default(),
        }
    }

    /// Create a view with a custom configuration.
    pub fn with_config(root: FormNode, config: PanelViewConfig) -> Self {
        Self { root, config }
    }

    /// Access the rendered root node.
    pub fn root(&self) -> &FormNode {
        &self.root
    }

    fn render_control(
        &self,
        snapshot: &ControlSnapshot,
        cx: &mut Context<Self>,
    ) -> Option<AnyElement> {
        if !snapshot.visible {
            return None;
        }
        let node = self.root.tree().node(snapshot.id)?;
        let element = match &snapshot.kind {
            ControlKind::Label(spec) => {
                let mut label = div().child(spec.text.clone());
                if let Some(width) = spec.width {
                    label = label.w(px(width));
                }
                if let Some(height) = spec.height {
                    label = label.h(px(height));
                }
                label.into_any_element()
            }
            ControlKind::Dropdown(spec) => self.render_dropdown(node, spec, cx),
            ControlKind::Checkbox(spec) => self.render_checkbox(node, spec, cx),
            ControlKind::Group { axis, children } => {
                let group = div().flex().gap(px(self.config.gap));
                let group = match axis {
                    GroupAxis::Vertical => group.flex_col(),
                    GroupAxis::Horizontal => group.flex_row(),
                };
                let children: Vec<AnyElement> = children
                    .iter()
                    .filter_map(|child| self.render_control(child, cx))
                    .collect();
                group.children(children).into_any_element()
            }
        };
        Some(element)
    }

    fn render_dropdown(
        &self,
        node: FormNode,
        spec: &DropdownSpec,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let count = spec.options.len().max(1);
        let next = (spec.selected + 1) % count;
        let previous = (spec.selected + count - 1) % count;
        let current = spec.options.get(spec.selected).cloned().unwrap_or_default();
        let node_for_next = node.clone();

        div()
            .flex()
            .flex_row()
            .items_center()
            .gap(px(self.config.gap))
            .child(spec.description.clone())
            .child(
                div()
                    .px(px(self.config.gap))
                    .border_1()
                    .border_color(rgb(self.config.accent))
                    .rounded_sm()
                    .cursor_pointer()
                    .child(current)
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |_this, _ev, _window, cx| {
                            if node_for_next.select(next) {
                                cx.notify();
                            }
                        }),
                    )
                    .on_mouse_down(
                        MouseButton::Right,
                        cx.listener(move |_this, _ev, _window, cx| {
                            if node.select(previous) {
                                cx.notify();
                            }
                        }),
                    ),
            )
            .into_any_element()
    }

    fn render_checkbox(
        &self,
        node: FormNode,
        spec: &CheckboxSpec,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let checked = spec.checked;
        let mark = if checked { "[x]" } else { "[ ]" };

        div()
            .flex()
            .flex_row()
            .items_center()
            .gap(px(self.config.gap))
            .cursor_pointer()
            .child(div().text_color(rgb(self.config.accent)).child(mark))
            .child(spec.description.clone())
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |_this, _ev, _window, cx| {
                    if node.set_checked(!checked) {
                        cx.notify();
                    }
                }),
            )
            .into_any_element()
    }
}

impl Render for GpuiEncodingPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let snapshot = self.root.snapshot();
        let content = self.render_control(&snapshot, cx);

        div()
            .size_full()
            .p(px(self.config.padding))
            .bg(rgb(self.config.background))
            .text_color(rgb(self.config.foreground))
            .text_size(px(self.config.text_size))
            .children(content)
    }
}
