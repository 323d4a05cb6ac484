//! Factory seam between the panel and a host UI toolkit.
//!
//! The panel never talks to a toolkit directly. It asks a [`WidgetFactory`]
//! for generic form primitives and hands each interactive primitive a
//! [`ChangeHandler`] that the host calls when the user edits the control.

use std::fmt;
use std::sync::Arc;

/// Callback invoked by the host when the user changes a control's value.
pub struct ChangeHandler<T> {
    callback: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> ChangeHandler<T> {
    /// Wrap a callback.
    pub fn new(callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Deliver a new value.
    pub fn call(&self, value: T) {
        (self.callback)(value);
    }
}

impl<T> Clone for ChangeHandler<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<T> fmt::Debug for ChangeHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChangeHandler(..)")
    }
}

/// Static text.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    /// Text content.
    pub text: String,
    /// Width hint in pixels.
    pub width: Option<f32>,
    /// Height hint in pixels.
    pub height: Option<f32>,
}

impl LabelSpec {
    /// Create a label without size hints.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: None,
            height: None,
        }
    }
}

/// Single-choice dropdown. `selected` indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownSpec {
    /// Caption shown next to the control.
    pub description: String,
    /// Option labels in display order.
    pub options: Vec<String>,
    /// Index of the initially selected option.
    pub selected: usize,
}

/// Boolean toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxSpec {
    /// Caption shown next to the control.
    pub description: String,
    /// Initial state.
    pub checked: bool,
}

/// Layout direction of a grouping container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAxis {
    /// Children stacked top to bottom.
    Vertical,
    /// Children laid out left to right.
    Horizontal,
}

/// Handle to a control created by a [`WidgetFactory`].
pub trait Widget: Clone {
    /// Show or hide the control. Hidden controls keep their state and
    /// handlers.
    fn set_visible(&self, visible: bool);
}

/// Capability set a host toolkit provides to build the panel.
pub trait WidgetFactory {
    /// Handle type for created controls.
    type Widget: Widget;

    /// Create a static text label.
    fn label(&mut self, spec: LabelSpec) -> Self::Widget;

    /// Create a dropdown; the host calls `on_change` with the newly selected
    /// option index.
    fn dropdown(&mut self, spec: DropdownSpec, on_change: ChangeHandler<usize>) -> Self::Widget;

    /// Create a checkbox; the host calls `on_change` with the new state.
    fn checkbox(&mut self, spec: CheckboxSpec, on_change: ChangeHandler<bool>) -> Self::Widget;

    /// Create a vertical container.
    fn vbox(&mut self, children: Vec<Self::Widget>) -> Self::Widget;

    /// Create a horizontal container.
    fn hbox(&mut self, children: Vec<Self::Widget>) -> Self::Widget;
}
