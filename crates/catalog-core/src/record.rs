//! Product records and the filter that turns a raw dataset into the set of
//! records that can be displayed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A displayable product. `title` and `primary_image_url` are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub title: String,
    pub primary_image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Record {
    pub fn new(title: impl Into<String>, primary_image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            primary_image_url: primary_image_url.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Build a record from one raw dataset entry, or `None` if the entry
    /// lacks a title or an image.
    fn from_raw(raw: &Value) -> Option<Self> {
        let object = raw.as_object()?;
        let title = non_empty_str(object.get("title"))?;
        let primary_image_url = non_empty_str(object.get("primaryImageUrl"))?;
        let url = non_empty_str(object.get("url"));

        Some(Self {
            title: title.to_string(),
            primary_image_url: primary_image_url.to_string(),
            url: url.map(str::to_string),
        })
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// The ordered, immutable collection of records that survived filtering.
///
/// Records are identified by their position, which is what search indexes
/// hand back in [`crate::SearchMatch::position`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingSet {
    records: Vec<Record>,
}

impl WorkingSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl FromIterator<Record> for WorkingSet {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WorkingSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Keep the raw entries that carry both a non-empty `title` and a non-empty
/// `primaryImageUrl`, in their original order.
///
/// Malformed entries are skipped, never reported.
pub fn filter_records(raw: &[Value]) -> WorkingSet {
    raw.iter().filter_map(Record::from_raw).collect()
}
