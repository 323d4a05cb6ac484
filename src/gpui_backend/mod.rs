//! GPUI integration for encoding_panel.
//!
//! This module provides a GPUI view that renders the control tree recorded
//! by a [`FormTree`](crate::form::FormTree) and forwards clicks back into it
//! as user edits.

mod config;
mod view;

pub use config::PanelViewConfig;
pub use view::GpuiEncodingPanel;
