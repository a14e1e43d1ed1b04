use serde::{Deserialize, Serialize};

/// Which half of the skill stack an item belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Left column / first in order.
    Creative,
    /// Right column / second in order.
    Engineering,
}

/// A carousel page group or skill stack entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub category: Category,
    /// Page count, or 1 for unit-weight entries.
    pub weight: u32,
}

impl Item {
    pub fn new(id: impl Into<String>, category: Category, weight: u32) -> Self {
        Self {
            id: id.into(),
            category,
            weight,
        }
    }
}

/// All creative items in their original order, then all engineering items.
///
/// This is the ordering every skill stack consumer indexes by.
pub fn reorder_by_category(items: &[Item]) -> Vec<Item> {
    let (mut creative, engineering): (Vec<Item>, Vec<Item>) = items
        .iter()
        .cloned()
        .partition(|item| item.category == Category::Creative);
    creative.extend(engineering);
    creative
}
