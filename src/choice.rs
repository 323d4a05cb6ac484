//! Dropdown selections with an explicit unset state.

use std::fmt;

/// A dropdown selection: either the unset sentinel or a domain value.
///
/// Maps one-to-one onto `Option<T>`; the sentinel never leaks into the
/// encoding as a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Choice<T> {
    /// Nothing selected.
    #[default]
    Unset,
    /// A concrete value.
    Value(T),
}

impl<T> Choice<T> {
    /// Convert into the underlying optional value.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Borrow the selected value, if any.
    pub fn as_ref(&self) -> Choice<&T> {
        match self {
            Self::Unset => Choice::Unset,
            Self::Value(value) => Choice::Value(value),
        }
    }

    /// Check whether this is the unset sentinel.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Display label, using `unset_label` for the sentinel.
    pub fn label(&self, unset_label: &str) -> String
    where
        T: fmt::Display,
    {
        match self {
            Self::Unset => unset_label.to_string(),
            Self::Value(value) => value.to_string(),
        }
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Self::Unset,
            Some(value) => Self::Value(value),
        }
    }
}

/// Ordered option list of a dropdown, with the sentinel always first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChoiceList<T> {
    options: Vec<Choice<T>>,
}

impl<T: PartialEq> ChoiceList<T> {
    pub(crate) fn new(values: impl IntoIterator<Item = T>) -> Self {
        let mut options = vec![Choice::Unset];
        options.extend(values.into_iter().map(Choice::Value));
        Self { options }
    }

    /// Index of the option holding `value`; `None` when it is not offered.
    pub(crate) fn position(&self, value: Option<&T>) -> Option<usize> {
        match value {
            None => Some(0),
            Some(value) => self
                .options
                .iter()
                .position(|option| matches!(option, Choice::Value(v) if v == value)),
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Choice<T>> {
        self.options.get(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.options.len()
    }

    pub(crate) fn labels(&self, unset_label: &str) -> Vec<String>
    where
        T: fmt::Display,
    {
        self.options
            .iter()
            .map(|option| option.label(unset_label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_maps_to_none() {
        assert_eq!(Choice::<u8>::Unset.into_option(), None);
        assert_eq!(Choice::Value(3_u8).into_option(), Some(3));
        assert_eq!(Choice::from(None::<u8>), Choice::Unset);
        assert!(Choice::<u8>::default().is_unset());
    }

    #[test]
    fn list_keeps_sentinel_first() {
        let list = ChoiceList::new(["a".to_string(), "b".to_string()]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.labels("-"), vec!["-", "a", "b"]);
        assert_eq!(list.position(None), Some(0));
        assert_eq!(list.position(Some(&"b".to_string())), Some(2));
        assert_eq!(list.position(Some(&"zzz".to_string())), None);
        assert_eq!(list.get(1), Some(&Choice::Value("a".to_string())));
        assert_eq!(list.get(3), None);
    }
}
