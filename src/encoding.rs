//! Chart encoding model and its shared handle.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use crate::error::ParseAggregationError;

/// Reduction applied to Y values grouped by X.
///
/// "No aggregation" is expressed as `Option::<AggregationKind>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AggregationKind {
    /// Mean of the group.
    Avg,
    /// Minimum of the group.
    Min,
    /// Maximum of the group.
    Max,
    /// Sum of the group.
    Sum,
    /// Number of rows in the group.
    Count,
}

impl AggregationKind {
    /// All kinds in display order.
    pub const ALL: [AggregationKind; 5] = [Self::Avg, Self::Min, Self::Max, Self::Sum, Self::Count];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Avg => "avg",
            Self::Min => "min",
            Self::Max => "max",
            Self::Sum => "sum",
            Self::Count => "count",
        }
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregationKind {
    type Err = ParseAggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseAggregationError { name: s.to_string() })
    }
}

/// Encoding configuration mapping chart roles to user-chosen values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Encoding {
    /// Column on the X axis.
    pub x: Option<String>,
    /// Column on the Y axis.
    pub y: Option<String>,
    /// Aggregation applied to Y.
    pub y_aggregation: Option<AggregationKind>,
    /// Use a logarithmic X axis.
    pub logarithmic_x_axis: bool,
    /// Use a logarithmic Y axis.
    pub logarithmic_y_axis: bool,
}

impl Encoding {
    /// Create an encoding with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the X column.
    pub fn with_x(mut self, column: impl Into<String>) -> Self {
        self.x = Some(column.into());
        self
    }

    /// Set the Y column.
    pub fn with_y(mut self, column: impl Into<String>) -> Self {
        self.y = Some(column.into());
        self
    }

    /// Set the Y aggregation.
    pub fn with_y_aggregation(mut self, aggregation: AggregationKind) -> Self {
        self.y_aggregation = Some(aggregation);
        self
    }

    /// Toggle the logarithmic X axis.
    pub fn with_logarithmic_x_axis(mut self, enabled: bool) -> Self {
        self.logarithmic_x_axis = enabled;
        self
    }

    /// Toggle the logarithmic Y axis.
    pub fn with_logarithmic_y_axis(mut self, enabled: bool) -> Self {
        self.logarithmic_y_axis = enabled;
        self
    }
}

/// Shared handle to an [`Encoding`].
///
/// The caller keeps a clone and reads the encoding after each change
/// notification; the panel writes through its own clone.
#[derive(Debug, Clone, Default)]
pub struct EncodingHandle {
    encoding: Arc<RwLock<Encoding>>,
}

impl EncodingHandle {
    /// Wrap an encoding in a shared handle.
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding: Arc::new(RwLock::new(encoding)),
        }
    }

    /// Read the encoding.
    ///
    /// The encoding is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&Encoding) -> R) -> R {
        let encoding = self.encoding.read().expect("encoding lock");
        f(&encoding)
    }

    /// Mutate the encoding.
    ///
    /// The encoding is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut Encoding) -> R) -> R {
        let mut encoding = self.encoding.write().expect("encoding lock");
        f(&mut encoding)
    }

    /// Copy the current encoding out of the handle.
    pub fn snapshot(&self) -> Encoding {
        self.read(Encoding::clone)
    }
}

impl From<Encoding> for EncodingHandle {
    fn from(encoding: Encoding) -> Self {
        Self::new(encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregation_names_parse_back() {
        for kind in AggregationKind::ALL {
            assert_eq!(kind.as_str().parse::<AggregationKind>(), Ok(kind));
        }
        assert_eq!(AggregationKind::Count.to_string(), "count");
    }

    #[test]
    fn none_is_not_an_aggregation_name() {
        let err = "none".parse::<AggregationKind>().unwrap_err();
        assert_eq!(err.name, "none");
        assert_eq!(err.to_string(), "unknown aggregation `none`");
    }

    #[test]
    fn handle_writes_are_visible_to_clones() {
        let handle = EncodingHandle::new(Encoding::new().with_x("a"));
        let caller = handle.clone();
        handle.write(|encoding| encoding.logarithmic_y_axis = true);
        let seen = caller.snapshot();
        assert_eq!(seen.x.as_deref(), Some("a"));
        assert!(seen.logarithmic_y_axis);
        assert!(!seen.logarithmic_x_axis);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_camel_case_keys() {
        let encoding = Encoding::new()
            .with_x("time")
            .with_y_aggregation(AggregationKind::Sum)
            .with_logarithmic_x_axis(true);
        let value = serde_json::to_value(&encoding).unwrap();
        assert_eq!(value["x"], "time");
        assert_eq!(value["y"], serde_json::Value::Null);
        assert_eq!(value["yAggregation"], "sum");
        assert_eq!(value["logarithmicXAxis"], true);
        assert_eq!(value["logarithmicYAxis"], false);

        let parsed: Encoding = serde_json::from_str(r#"{"y":"count_col"}"#).unwrap();
        assert_eq!(parsed, Encoding::new().with_y("count_col"));
    }
}
