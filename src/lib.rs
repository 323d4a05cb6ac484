//! encoding_panel builds a small settings panel that edits a chart encoding
//! (X/Y columns, Y aggregation, logarithmic axes) inside a notebook cell.
//! Controls are created through an injected widget factory, so the panel
//! logic is independent of any UI toolkit.

#![forbid(unsafe_code)]

pub mod choice;
pub mod config;
pub mod datasource;
pub mod encoding;
pub mod error;
pub mod form;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod panel;
pub mod widget;

pub use choice::Choice;
pub use config::PanelConfig;
pub use datasource::DataSource;
pub use encoding::{AggregationKind, Encoding, EncodingHandle};
pub use error::{PanelError, ParseAggregationError};
pub use form::{ControlKind, ControlSnapshot, FormNode, FormTree, NodeId};
#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiEncodingPanel, PanelViewConfig};
pub use panel::{ChangeHook, EncodingPanel, EncodingPanelBuilder};
pub use widget::{
    ChangeHandler, CheckboxSpec, DropdownSpec, GroupAxis, LabelSpec, Widget, WidgetFactory,
};
