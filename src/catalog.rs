//! Pack Catalog

use std::{
    fmt,
    str::FromStr,
    sync::{Arc, PoisonError, RwLock},
};

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::info;

/// Pack sizes available when no catalog has been configured.
pub const DEFAULT_PACK_SIZES: [u64; 5] = [5000, 2000, 1000, 500, 250];

/// Errors raised when building or replacing a pack catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No pack sizes were given.
    #[error("pack catalog must contain at least one size")]
    Empty,

    /// A pack size of zero was given.
    #[error("pack sizes must be greater than zero")]
    ZeroSize,

    /// The same pack size was given more than once.
    #[error("pack size {0} appears more than once")]
    DuplicateSize(u64),

    /// A pack size could not be parsed as an unsigned integer.
    #[error("invalid pack size {0:?}")]
    InvalidSize(String),
}

/// A validated, non-empty set of distinct pack sizes, sorted largest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSizes {
    sizes: SmallVec<[u64; 8]>,
    smallest: u64,
}

impl PackSizes {
    /// Validate the given sizes and sort them in descending order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the sizes are empty, contain a zero, or
    /// contain the same size twice.
    pub fn new(sizes: impl IntoIterator<Item = u64>) -> Result<Self, CatalogError> {
        let mut sizes: SmallVec<[u64; 8]> = sizes.into_iter().collect();
        let mut seen = FxHashSet::default();

        for &size in &sizes {
            if size == 0 {
                return Err(CatalogError::ZeroSize);
            }

            if !seen.insert(size) {
                return Err(CatalogError::DuplicateSize(size));
            }
        }

        sizes.sort_unstable_by(|a, b| b.cmp(a));

        let smallest = sizes.last().copied().ok_or(CatalogError::Empty)?;

        Ok(Self { sizes, smallest })
    }

    /// Sizes in descending order.
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.sizes
    }

    /// Iterate the sizes in descending order.
    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.sizes.iter()
    }

    /// The smallest pack size.
    #[must_use]
    pub fn smallest(&self) -> u64 {
        self.smallest
    }

    /// Adjacent `(large, small)` size pairs, largest pair first.
    pub fn adjacent_pairs(&self) -> impl DoubleEndedIterator<Item = (u64, u64)> + '_ {
        self.sizes.windows(2).filter_map(|pair| match *pair {
            [large, small] => Some((large, small)),
            _ => None,
        })
    }

    /// Copy the sizes into a `Vec`, largest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u64> {
        self.sizes.to_vec()
    }
}

impl Default for PackSizes {
    fn default() -> Self {
        let [.., smallest] = DEFAULT_PACK_SIZES;

        Self {
            sizes: SmallVec::from_slice(&DEFAULT_PACK_SIZES),
            smallest,
        }
    }
}

impl<'a> IntoIterator for &'a PackSizes {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for PackSizes {
    type Err = CatalogError;

    /// Parse a comma separated list such as `5000,2000,1000`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sizes = s
            .split(',')
            .map(str::trim)
            .map(|token| {
                token
                    .parse::<u64>()
                    .map_err(|_err| CatalogError::InvalidSize(token.to_owned()))
            })
            .collect::<Result<SmallVec<[u64; 8]>, _>>()?;

        Self::new(sizes)
    }
}

impl fmt::Display for PackSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, size) in self.sizes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }

            write!(f, "{size}")?;
        }

        Ok(())
    }
}

/// The active set of pack sizes, replaceable wholesale.
///
/// Readers take an [`Arc`] snapshot, so a computation never observes a
/// half-replaced catalog.
#[derive(Debug)]
pub struct PackCatalog {
    active: RwLock<Arc<PackSizes>>,
}

impl PackCatalog {
    /// Create a catalog holding the given sizes.
    #[must_use]
    pub fn new(sizes: PackSizes) -> Self {
        Self {
            active: RwLock::new(Arc::new(sizes)),
        }
    }

    /// Snapshot of the active sizes, largest first.
    #[must_use]
    pub fn current(&self) -> Arc<PackSizes> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Validate `sizes` and make them the active catalog.
    ///
    /// The previous catalog stays active when validation fails.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the sizes do not form a valid catalog.
    pub fn replace(
        &self,
        sizes: impl IntoIterator<Item = u64>,
    ) -> Result<Arc<PackSizes>, CatalogError> {
        let sizes = Arc::new(PackSizes::new(sizes)?);

        *self.active.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&sizes);

        info!(sizes = %sizes, "pack catalog replaced");

        Ok(sizes)
    }
}

impl Default for PackCatalog {
    fn default() -> Self {
        Self::new(PackSizes::default())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_sorts_sizes_descending() -> TestResult {
        let sizes = PackSizes::new([250, 5000, 500, 2000, 1000])?;

        assert_eq!(sizes.as_slice(), &[5000, 2000, 1000, 500, 250]);
        assert_eq!(sizes.smallest(), 250);

        Ok(())
    }

    #[test]
    fn new_rejects_empty_sizes() {
        assert_eq!(PackSizes::new([]), Err(CatalogError::Empty));
    }

    #[test]
    fn new_rejects_zero_size() {
        assert_eq!(PackSizes::new([500, 0, 250]), Err(CatalogError::ZeroSize));
    }

    #[test]
    fn new_rejects_duplicate_size() {
        assert_eq!(
            PackSizes::new([500, 250, 500]),
            Err(CatalogError::DuplicateSize(500))
        );
    }

    #[test]
    fn default_matches_default_pack_sizes() {
        let sizes = PackSizes::default();

        assert_eq!(sizes.as_slice(), &DEFAULT_PACK_SIZES);
        assert_eq!(sizes.smallest(), 250);
    }

    #[test]
    fn adjacent_pairs_walk_large_to_small() {
        let pairs: Vec<_> = PackSizes::default().adjacent_pairs().collect();

        assert_eq!(
            pairs,
            vec![(5000, 2000), (2000, 1000), (1000, 500), (500, 250)]
        );
    }

    #[test]
    fn single_size_has_no_adjacent_pairs() -> TestResult {
        let sizes = PackSizes::new([42])?;

        assert_eq!(sizes.adjacent_pairs().count(), 0);
        assert_eq!(sizes.smallest(), 42);

        Ok(())
    }

    #[test]
    fn from_str_parses_comma_separated_sizes() -> TestResult {
        let sizes: PackSizes = "23, 53,31".parse()?;

        assert_eq!(sizes.as_slice(), &[53, 31, 23]);

        Ok(())
    }

    #[test]
    fn from_str_rejects_non_numeric_token() {
        assert_eq!(
            "500,abc".parse::<PackSizes>(),
            Err(CatalogError::InvalidSize("abc".to_string()))
        );
    }

    #[test]
    fn from_str_rejects_negative_token() {
        assert_eq!(
            "500,-250".parse::<PackSizes>(),
            Err(CatalogError::InvalidSize("-250".to_string()))
        );
    }

    #[test]
    fn display_joins_sizes_with_commas() {
        assert_eq!(PackSizes::default().to_string(), "5000,2000,1000,500,250");
    }

    #[test]
    fn replace_swaps_active_sizes() -> TestResult {
        let catalog = PackCatalog::default();

        let replaced = catalog.replace([31, 23, 53])?;

        assert_eq!(replaced.as_slice(), &[53, 31, 23]);
        assert_eq!(catalog.current().as_slice(), &[53, 31, 23]);

        Ok(())
    }

    #[test]
    fn failed_replace_keeps_previous_sizes() {
        let catalog = PackCatalog::default();

        let result = catalog.replace([0]);

        assert_eq!(result, Err(CatalogError::ZeroSize));
        assert_eq!(catalog.current().as_slice(), &DEFAULT_PACK_SIZES);
    }

    #[test]
    fn snapshots_survive_replacement() -> TestResult {
        let catalog = PackCatalog::default();
        let before = catalog.current();

        catalog.replace([10, 5])?;

        assert_eq!(before.as_slice(), &DEFAULT_PACK_SIZES);
        assert_eq!(catalog.current().as_slice(), &[10, 5]);

        Ok(())
    }

    #[test]
    #[expect(clippy::panic, reason = "poisons the catalog lock")]
    fn poisoned_lock_keeps_serving_last_sizes() -> TestResult {
        let catalog = PackCatalog::default();

        catalog.replace([10, 5])?;

        let writer_panicked = thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = catalog.active.write();

                    panic!("writer failed while holding the catalog lock");
                })
                .join()
                .is_err()
        });

        assert!(writer_panicked, "writer thread should have panicked");
        assert!(catalog.active.is_poisoned(), "catalog lock should be poisoned");
        assert_eq!(catalog.current().as_slice(), &[10, 5]);

        let replaced = catalog.replace([7, 3])?;

        assert_eq!(replaced.as_slice(), &[7, 3]);
        assert_eq!(catalog.current().as_slice(), &[7, 3]);

        Ok(())
    }
}
