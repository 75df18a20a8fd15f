//! Named value tables with descriptions.
//!
//! An [`EnumTable`] maps symbolic names to numeric values and values back to
//! human-readable descriptions, for the common UI case of rendering status
//! codes ("1" → "Active") while still comparing against the raw number.
//!
//! Entries are explicit `{name, value, description}` records; both lookup
//! directions are built once at construction. Duplicate names or values are
//! rejected outright rather than silently overwritten.

use std::collections::HashMap;

use anyhow::{Result, bail};

/// One named value: a symbolic name, its numeric value, and the description
/// shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    /// Symbolic name, e.g. `"Active"`.
    pub name: String,

    /// Numeric value the name stands for.
    pub value: i64,

    /// Human-readable description, e.g. `"account is active"`.
    pub description: String,
}

/// A lookup table over a fixed set of [`EnumEntry`] records.
///
/// Supports the three access patterns UI code needs: name → value (using
/// the table where a plain number is expected), name → description, and
/// value → description. Missing lookups return `None` or an empty string;
/// they are not errors.
#[derive(Debug, Default)]
pub struct EnumTable {
    entries: Vec<EnumEntry>,
    by_name: HashMap<String, usize>,
    by_value: HashMap<i64, usize>,
}

impl EnumTable {
    /// Build a table from `(name, value, description)` triples.
    ///
    /// # Errors
    ///
    /// Returns an error if two entries share a name or a numeric value.
    /// Values must be unique because the value → description lookup would
    /// otherwise silently depend on definition order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use table_export::enums::EnumTable;
    /// let states = EnumTable::new([("Active", 1, "account is active")]).unwrap();
    /// assert_eq!(states.value("Active"), Some(1));
    /// assert_eq!(states.desc_from_value(1), "account is active");
    /// ```
    pub fn new<I, N, D>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, i64, D)>,
        N: Into<String>,
        D: Into<String>,
    {
        let mut table = Self::default();

        for (name, value, description) in definitions {
            let entry = EnumEntry {
                name: name.into(),
                value,
                description: description.into(),
            };

            if table.by_name.contains_key(&entry.name) {
                bail!("Duplicate enum name: {}", entry.name);
            }
            if table.by_value.contains_key(&entry.value) {
                bail!("Duplicate enum value {} for name {}", entry.value, entry.name);
            }

            let index = table.entries.len();
            table.by_name.insert(entry.name.clone(), index);
            table.by_value.insert(entry.value, index);
            table.entries.push(entry);
        }

        Ok(table)
    }

    /// The numeric value for a symbolic name, or `None` if absent.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<i64> {
        self.by_name.get(name).map(|&index| self.entries[index].value)
    }

    /// The description for a symbolic name, or `""` if absent.
    #[must_use]
    pub fn desc(&self, name: &str) -> &str {
        self.by_name
            .get(name)
            .map_or("", |&index| self.entries[index].description.as_str())
    }

    /// The description for a numeric value, or `""` if absent.
    #[must_use]
    pub fn desc_from_value(&self, value: i64) -> &str {
        self.by_value
            .get(&value)
            .map_or("", |&index| self.entries[index].description.as_str())
    }

    /// Whether a symbolic name is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// The entries in definition order.
    #[must_use]
    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    /// Iterate over the entries in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, EnumEntry> {
        self.entries.iter()
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EnumTable {
    type Item = &'a EnumEntry;
    type IntoIter = std::slice::Iter<'a, EnumEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states() -> EnumTable {
        EnumTable::new([
            ("Pending", 0, "waiting to start"),
            ("Active", 1, "account is active"),
            ("Suspended", 2, "temporarily disabled"),
        ])
        .expect("unique definitions")
    }

    #[test]
    fn test_value_lookup() {
        let table = states();

        assert_eq!(table.value("Pending"), Some(0));
        assert_eq!(table.value("Active"), Some(1));
        assert_eq!(table.value("missing"), None);
    }

    #[test]
    fn test_desc_lookup() {
        let table = states();

        assert_eq!(table.desc("Active"), "account is active");
        assert_eq!(table.desc("missing"), "");
    }

    #[test]
    fn test_desc_from_value_lookup() {
        let table = states();

        assert_eq!(table.desc_from_value(1), "account is active");
        assert_eq!(table.desc_from_value(2), "temporarily disabled");
        assert_eq!(table.desc_from_value(99), "");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = EnumTable::new([("A", 1, "first"), ("A", 2, "second")]);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Duplicate enum name"));
    }

    #[test]
    fn test_duplicate_value_rejected() {
        let result = EnumTable::new([("A", 1, "first"), ("B", 1, "second")]);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Duplicate enum value"));
    }

    #[test]
    fn test_empty_table() {
        let table = EnumTable::new(Vec::<(String, i64, String)>::new()).expect("empty is valid");

        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.desc("anything"), "");
    }

    #[test]
    fn test_entries_preserve_definition_order() {
        let table = states();
        let names: Vec<&str> = table.iter().map(|entry| entry.name.as_str()).collect();

        assert_eq!(names, vec!["Pending", "Active", "Suspended"]);
        assert_eq!(table.entries().len(), 3);
        assert!(table.contains("Suspended"));
    }

    #[test]
    fn test_negative_values_allowed() {
        let table = EnumTable::new([("Unknown", -1, "state not reported")]).expect("valid");

        assert_eq!(table.value("Unknown"), Some(-1));
        assert_eq!(table.desc_from_value(-1), "state not reported");
    }
}
