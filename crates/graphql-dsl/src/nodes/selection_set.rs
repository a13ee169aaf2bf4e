use crate::Selection;

/// The ordered selections beneath an operation, field, fragment definition
/// or inline fragment. Insertion order is emission order.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct SelectionSet {
    selections: Vec<Selection>,
}
impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Selection> {
        self.selections.iter()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub(crate) fn push(&mut self, selection: Selection) {
        self.selections.push(selection);
    }

    pub fn selections(&self) -> &Vec<Selection> {
        &self.selections
    }
}
impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a Selection;
    type IntoIter = std::slice::Iter<'a, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.selections.iter()
    }
}
