//! Encoding panel entry points and builder.
//!
//! The panel builds its controls through an injected [`WidgetFactory`],
//! initializes each one from the current [`Encoding`], and binds handlers
//! that write user edits back into the encoding before notifying the caller.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::choice::ChoiceList;
use crate::config::PanelConfig;
use crate::datasource::DataSource;
use crate::encoding::{AggregationKind, Encoding, EncodingHandle};
use crate::error::PanelError;
use crate::widget::{ChangeHandler, CheckboxSpec, DropdownSpec, LabelSpec, Widget, WidgetFactory};

/// Zero-argument hook invoked after every applied change.
pub type ChangeHook = Arc<dyn Fn() + Send + Sync>;

/// Settings panel editing an [`Encoding`].
///
/// The panel owns its controls; [`EncodingPanel::root`] is the outer
/// container a host renders.
pub struct EncodingPanel<W: Widget> {
    encoding: EncodingHandle,
    source: DataSource,
    root: W,
    title: W,
    x_selector: W,
    y_group: W,
    y_selector: W,
    aggregation_selector: W,
    log_x_toggle: W,
    log_y_toggle: W,
}

impl<W: Widget> EncodingPanel<W> {
    /// Build a panel over `columns` editing `encoding`.
    ///
    /// Uses the default [`PanelConfig`].
    pub fn new<F, I, S>(
        columns: I,
        encoding: EncodingHandle,
        on_change: impl Fn() + Send + Sync + 'static,
        factory: &mut F,
    ) -> Result<Self, PanelError>
    where
        F: WidgetFactory<Widget = W>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EncodingPanelBuilder::new()
            .columns(columns)
            .encoding(encoding)
            .on_change(on_change)
            .build(factory)
    }

    /// Access the edited encoding.
    pub fn encoding(&self) -> &EncodingHandle {
        &self.encoding
    }

    /// Access the offered columns.
    pub fn columns(&self) -> &DataSource {
        &self.source
    }

    /// Outer container holding every control.
    pub fn root(&self) -> &W {
        &self.root
    }

    /// Title label.
    pub fn title(&self) -> &W {
        &self.title
    }

    /// X column selector.
    pub fn x_selector(&self) -> &W {
        &self.x_selector
    }

    /// Row holding the Y column and aggregation selectors.
    pub fn y_group(&self) -> &W {
        &self.y_group
    }

    /// Y column selector.
    pub fn y_selector(&self) -> &W {
        &self.y_selector
    }

    /// Aggregation selector.
    pub fn aggregation_selector(&self) -> &W {
        &self.aggregation_selector
    }

    /// Logarithmic X toggle.
    pub fn log_x_toggle(&self) -> &W {
        &self.log_x_toggle
    }

    /// Logarithmic Y toggle.
    pub fn log_y_toggle(&self) -> &W {
        &self.log_y_toggle
    }

    /// Show or hide the X selector.
    pub fn set_x_visible(&self, visible: bool) {
        trace!(visible, "x selector visibility");
        self.x_selector.set_visible(visible);
    }

    /// Show or hide the Y row (column and aggregation).
    pub fn set_y_visible(&self, visible: bool) {
        trace!(visible, "y group visibility");
        self.y_group.set_visible(visible);
    }

    /// Show or hide the logarithmic X toggle.
    pub fn set_log_x_visible(&self, visible: bool) {
        trace!(visible, "log x toggle visibility");
        self.log_x_toggle.set_visible(visible);
    }

    /// Show or hide the logarithmic Y toggle.
    pub fn set_log_y_visible(&self, visible: bool) {
        trace!(visible, "log y toggle visibility");
        self.log_y_toggle.set_visible(visible);
    }

    /// Show or hide the whole control container.
    pub fn set_controls_visible(&self, visible: bool) {
        trace!(visible, "controls visibility");
        self.root.set_visible(visible);
    }
}

impl<W: Widget + fmt::Debug> fmt::Debug for EncodingPanel<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodingPanel")
            .field("encoding", &self.encoding)
            .field("source", &self.source)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring an [`EncodingPanel`] before construction.
#[derive(Default)]
pub struct EncodingPanelBuilder {
    columns: Vec<String>,
    encoding: Option<EncodingHandle>,
    on_change: Option<ChangeHook>,
    config: PanelConfig,
}

impl EncodingPanelBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offered column names.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the encoding the panel edits.
    pub fn encoding(mut self, encoding: impl Into<EncodingHandle>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Set the hook invoked after every applied change.
    pub fn on_change(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(hook));
        self
    }

    /// Set captions and sizing.
    pub fn config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the panel with `factory`.
    pub fn build<F: WidgetFactory>(
        self,
        factory: &mut F,
    ) -> Result<EncodingPanel<F::Widget>, PanelError> {
        let encoding = self.encoding.ok_or(PanelError::MissingEncoding)?;
        let source = DataSource::new(self.columns)?;
        let hook: ChangeHook = match self.on_change {
            Some(hook) => hook,
            None => Arc::new(|| {}),
        };
        let config = self.config;
        let current = encoding.snapshot();
        if source.contains(&config.unset_label) {
            return Err(PanelError::ColumnShadowsUnsetLabel {
                column: config.unset_label,
            });
        }
        for (field, column) in [("x", &current.x), ("y", &current.y)] {
            if let Some(column) = column
                && !source.contains(column)
            {
                return Err(PanelError::UnknownColumn {
                    field,
                    column: column.clone(),
                });
            }
        }
        debug!(columns = source.len(), "building encoding panel");

        let title = factory.label(LabelSpec {
            text: config.title.clone(),
            width: Some(config.title_width),
            height: Some(config.title_height),
        });

        let column_options = ChoiceList::new(source.columns().iter().cloned());

        let x_selector = factory.dropdown(
            DropdownSpec {
                description: config.x_description.clone(),
                options: column_options.labels(&config.unset_label),
                selected: initial_index(&column_options, current.x.as_ref()),
            },
            dropdown_handler("x", column_options.clone(), &encoding, &hook, |encoding, x| {
                encoding.x = x;
            }),
        );

        let y_selector = factory.dropdown(
            DropdownSpec {
                description: config.y_description.clone(),
                options: column_options.labels(&config.unset_label),
                selected: initial_index(&column_options, current.y.as_ref()),
            },
            dropdown_handler("y", column_options, &encoding, &hook, |encoding, y| {
                encoding.y = y;
            }),
        );

        let aggregation_options = ChoiceList::new(AggregationKind::ALL);
        let aggregation_selector = factory.dropdown(
            DropdownSpec {
                description: config.aggregation_description.clone(),
                options: aggregation_options.labels(&config.unset_label),
                selected: initial_index(&aggregation_options, current.y_aggregation.as_ref()),
            },
            dropdown_handler(
                "y_aggregation",
                aggregation_options,
                &encoding,
                &hook,
                |encoding, aggregation| {
                    encoding.y_aggregation = aggregation;
                },
            ),
        );

        let y_group = factory.hbox(vec![y_selector.clone(), aggregation_selector.clone()]);

        let log_x_toggle = factory.checkbox(
            CheckboxSpec {
                description: config.log_x_description.clone(),
                checked: current.logarithmic_x_axis,
            },
            checkbox_handler("logarithmic_x_axis", &encoding, &hook, |encoding, value| {
                encoding.logarithmic_x_axis = value;
            }),
        );

        let log_y_toggle = factory.checkbox(
            CheckboxSpec {
                description: config.log_y_description.clone(),
                checked: current.logarithmic_y_axis,
            },
            checkbox_handler("logarithmic_y_axis", &encoding, &hook, |encoding, value| {
                encoding.logarithmic_y_axis = value;
            }),
        );

        let root = factory.vbox(vec![
            title.clone(),
            x_selector.clone(),
            y_group.clone(),
            log_x_toggle.clone(),
            log_y_toggle.clone(),
        ]);

        Ok(EncodingPanel {
            encoding,
            source,
            root,
            title,
            x_selector,
            y_group,
            y_selector,
            aggregation_selector,
            log_x_toggle,
            log_y_toggle,
        })
    }
}

// Callers check that every encoding value is offered before building.
fn initial_index<T: PartialEq>(options: &ChoiceList<T>, value: Option<&T>) -> usize {
    options.position(value).unwrap_or_default()
}

fn dropdown_handler<T>(
    field: &'static str,
    options: ChoiceList<T>,
    encoding: &EncodingHandle,
    hook: &ChangeHook,
    apply: fn(&mut Encoding, Option<T>),
) -> ChangeHandler<usize>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let encoding = encoding.clone();
    let hook = Arc::clone(hook);
    ChangeHandler::new(move |index| {
        let Some(choice) = options.get(index).cloned() else {
            warn!(field, index, options = options.len(), "ignoring out-of-range selection");
            return;
        };
        encoding.write(|encoding| apply(encoding, choice.into_option()));
        debug!(field, index, "encoding field changed");
        hook();
    })
}

fn checkbox_handler(
    field: &'static str,
    encoding: &EncodingHandle,
    hook: &ChangeHook,
    apply: fn(&mut Encoding, bool),
) -> ChangeHandler<bool> {
    let encoding = encoding.clone();
    let hook = Arc::clone(hook);
    ChangeHandler::new(move |value| {
        encoding.write(|encoding| apply(encoding, value));
        debug!(field, value, "encoding field changed");
        hook();
    })
}
