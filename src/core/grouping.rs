//! Partitioning entries into display groups by section or bar.

/// Label of the trailing group that collects entries with unrecognized categories.
pub const OTHER_GROUP: &str = "Other";

/// One display group and the entries that belong to it, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a, T> {
    /// Category label
    pub label: String,
    /// Entries in this category
    pub items: Vec<&'a T>,
}

impl<T> Group<'_, T> {
    /// True when no entry fell into this group
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partitions `entities` into one group per entry of `ordered_categories`.
///
/// Groups follow the order of `ordered_categories` and may be empty. Entities
/// whose category is not listed are collected into a trailing [`OTHER_GROUP`],
/// which is only present when it has members. Every entity ends up in exactly
/// one group.
pub fn group_by<'a, T, F>(
    entities: &'a [T],
    ordered_categories: &[String],
    category_of: F,
) -> Vec<Group<'a, T>>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut groups: Vec<Group<'a, T>> = ordered_categories
        .iter()
        .map(|label| Group {
            label: label.clone(),
            items: Vec::new(),
        })
        .collect();
    let mut other = Vec::new();

    for entity in entities {
        let category = category_of(entity);
        match ordered_categories.iter().position(|known| known == category) {
            Some(index) => groups[index].items.push(entity),
            None => other.push(entity),
        }
    }

    if !other.is_empty() {
        groups.push(Group {
            label: OTHER_GROUP.to_string(),
            items: other,
        });
    }
    groups
}
