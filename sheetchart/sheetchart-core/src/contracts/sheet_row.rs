use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One worksheet row keyed by the header row.
///
/// Keys keep the column order of the header row when serialized.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct SheetRow {
    fields: Map<String, Value>,
}

impl SheetRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(header.into(), value.into());
    }

    pub fn get(&self, header: &str) -> Option<&Value> {
        self.fields.get(header)
    }

    pub fn headers(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SheetRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = SheetRow::new();
        for (header, value) in iter {
            row.insert(header, value);
        }
        row
    }
}
