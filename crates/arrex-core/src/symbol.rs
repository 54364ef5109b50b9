//! Symbol table for scalar and array variables

use ahash::AHashMap;

use crate::error::{Error, Result};

/// Table of the scalar and array variables an expression references
///
/// Each kind keeps at most one entry per distinct name; re-inserting a name
/// is a no-op. Scalar values default to zero. Array entries start with no
/// backing storage; a zero-filled buffer is allocated once the declared size
/// is learned from the value feed.
///
/// Lookup during evaluation checks scalars before arrays when a name exists
/// in both kinds.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolTable {
    scalars: AHashMap<String, f64>,
    arrays: AHashMap<String, Vec<f64>>,
}

impl SymbolTable {
    /// Create an empty symbol table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scalar name, initialized to zero if not already present
    pub fn insert_scalar(&mut self, name: &str) {
        self.scalars.entry(name.to_string()).or_insert(0.0);
    }

    /// Record an array name with no backing storage if not already present
    pub fn insert_array(&mut self, name: &str) {
        self.arrays.entry(name.to_string()).or_default();
    }

    /// Check whether a scalar with this name was discovered
    pub fn contains_scalar(&self, name: &str) -> bool {
        self.scalars.contains_key(name)
    }

    /// Check whether an array with this name was discovered
    pub fn contains_array(&self, name: &str) -> bool {
        self.arrays.contains_key(name)
    }

    /// Check whether the name was discovered as either kind
    pub fn contains(&self, name: &str) -> bool {
        self.contains_scalar(name) || self.contains_array(name)
    }

    /// Assign a scalar value
    ///
    /// Returns `false` (and assigns nothing) if the name was never
    /// discovered; the table only holds symbols the expression references.
    pub fn set_scalar(&mut self, name: &str, value: f64) -> bool {
        match self.scalars.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Allocate zero-filled storage of the given length for an array
    ///
    /// Replaces any previous storage. Returns `false` if the name was never
    /// discovered as an array.
    pub fn allocate_array(&mut self, name: &str, len: usize) -> bool {
        match self.arrays.get_mut(name) {
            Some(values) => {
                *values = vec![0.0; len];
                true
            }
            None => false,
        }
    }

    /// Assign one element of an array
    pub fn set_element(&mut self, name: &str, index: usize, value: f64) -> Result<()> {
        let values = self
            .arrays
            .get_mut(name)
            .ok_or_else(|| Error::UnknownSymbol(name.to_string()))?;
        let len = values.len();
        let slot = values.get_mut(index).ok_or_else(|| Error::IndexOutOfRange {
            name: name.to_string(),
            index: index as i64,
            len,
        })?;
        *slot = value;
        Ok(())
    }

    /// Get a scalar value
    pub fn scalar(&self, name: &str) -> Option<f64> {
        self.scalars.get(name).copied()
    }

    /// Get an array's storage
    pub fn array(&self, name: &str) -> Option<&[f64]> {
        self.arrays.get(name).map(Vec::as_slice)
    }

    /// Read one element of an array, bounds-checked
    ///
    /// A negative index, or one at or beyond the allocated length, is
    /// [`Error::IndexOutOfRange`]. An array whose size was never declared
    /// has length zero, so any access to it fails the same way.
    pub fn element(&self, name: &str, index: i64) -> Result<f64> {
        let values = self
            .arrays
            .get(name)
            .ok_or_else(|| Error::UnknownSymbol(name.to_string()))?;
        if index < 0 || index as usize >= values.len() {
            return Err(Error::IndexOutOfRange {
                name: name.to_string(),
                index,
                len: values.len(),
            });
        }
        Ok(values[index as usize])
    }

    /// Iterate over scalar symbols as `(name, value)` pairs
    pub fn scalars(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scalars.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Iterate over array symbols as `(name, values)` pairs
    pub fn arrays(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.arrays
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of scalar symbols
    pub fn scalar_count(&self) -> usize {
        self.scalars.len()
    }

    /// Number of array symbols
    pub fn array_count(&self) -> usize {
        self.arrays.len()
    }

    /// Check whether the table holds no symbols of either kind
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.arrays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut table = SymbolTable::new();
        table.insert_scalar("a");
        table.set_scalar("a", 5.0);
        table.insert_scalar("a");

        assert_eq!(table.scalar_count(), 1);
        assert_eq!(table.scalar("a"), Some(5.0));
    }

    #[test]
    fn test_set_scalar_unknown_name() {
        let mut table = SymbolTable::new();
        assert!(!table.set_scalar("missing", 1.0));
        assert!(table.is_empty());
    }

    #[test]
    fn test_array_starts_unallocated() {
        let mut table = SymbolTable::new();
        table.insert_array("A");

        assert_eq!(table.array("A"), Some(&[][..]));
        assert!(matches!(
            table.element("A", 0),
            Err(Error::IndexOutOfRange { len: 0, .. })
        ));
    }

    #[test]
    fn test_allocate_and_set_elements() {
        let mut table = SymbolTable::new();
        table.insert_array("A");
        assert!(table.allocate_array("A", 3));
        table.set_element("A", 1, 7.5).unwrap();

        assert_eq!(table.array("A"), Some(&[0.0, 7.5, 0.0][..]));
        assert_eq!(table.element("A", 1).unwrap(), 7.5);
    }

    #[test]
    fn test_element_bounds() {
        let mut table = SymbolTable::new();
        table.insert_array("A");
        table.allocate_array("A", 2);

        assert!(matches!(
            table.element("A", 2),
            Err(Error::IndexOutOfRange { index: 2, len: 2, .. })
        ));
        assert!(matches!(
            table.element("A", -1),
            Err(Error::IndexOutOfRange { index: -1, .. })
        ));
        assert!(matches!(
            table.set_element("A", 5, 1.0),
            Err(Error::IndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn test_unknown_symbol() {
        let table = SymbolTable::new();
        assert!(matches!(table.element("A", 0), Err(Error::UnknownSymbol(_))));
    }

    #[test]
    fn test_scalar_and_array_share_a_name() {
        let mut table = SymbolTable::new();
        table.insert_scalar("x");
        table.insert_array("x");
        table.set_scalar("x", 2.0);
        table.allocate_array("x", 1);

        assert_eq!(table.scalar("x"), Some(2.0));
        assert_eq!(table.array("x"), Some(&[0.0][..]));
    }
}
