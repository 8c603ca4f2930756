use std::collections::BTreeMap;

use crate::{CrosswalkError, FacilityId};

/// Market-side facility key → regulatory-side facility key.
///
/// Keys are unique; a table that lists the same market key twice is a
/// configuration error, even when both rows agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityCorrections {
    mapping: BTreeMap<FacilityId, FacilityId>,
}

impl FacilityCorrections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from `(row, from, to)` triples.
    pub fn from_rows(
        rows: impl IntoIterator<Item = (usize, FacilityId, FacilityId)>,
    ) -> Result<Self, CrosswalkError> {
        let mut mapping = BTreeMap::new();
        for (row, from, to) in rows {
            if mapping.insert(from, to).is_some() {
                return Err(CrosswalkError::configuration(format!(
                    "facility-key correction table row {row}: duplicate key {from}"
                )));
            }
        }
        Ok(Self { mapping })
    }

    pub fn lookup(&self, facility_id: FacilityId) -> Option<FacilityId> {
        self.mapping.get(&facility_id).copied()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_keys() {
        let rows = vec![
            (1, FacilityId::new(10), FacilityId::new(20)),
            (2, FacilityId::new(10), FacilityId::new(20)),
        ];
        let err = FacilityCorrections::from_rows(rows).unwrap_err();
        assert!(err.to_string().contains("row 2"));
        assert!(matches!(err, CrosswalkError::Configuration { .. }));
    }

    #[test]
    fn lookup_returns_mapped_value() {
        let table =
            FacilityCorrections::from_rows(vec![(1, FacilityId::new(10), FacilityId::new(20))])
                .unwrap();
        assert_eq!(table.lookup(FacilityId::new(10)), Some(FacilityId::new(20)));
        assert_eq!(table.lookup(FacilityId::new(20)), None);
        assert_eq!(table.len(), 1);
    }
}
