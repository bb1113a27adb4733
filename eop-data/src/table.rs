//! Frozen observation tables and the thread-safe table store.
//!
//! An [`ObservationTable`] freezes a record sequence at construction and
//! validates the engine's core data invariant of strictly increasing MJD.
//! The [`TableStore`] memoizes one finals table and one leap-second table
//! behind mutexes: the first access loads through the injected [`EopSource`]
//! while concurrent callers block on the lock, later readers clone the `Arc`
//! under a brief lock, and [`TableStore::invalidate`] deterministically drops
//! the memoized tables so the next access reloads.

use crate::parser;
use crate::record::{FinalsRecord, LeapSecondRecord};
use eop_core::{EopError, EopResult};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Anything keyed by a Modified Julian Date.
pub trait HasMjd {
    fn mjd(&self) -> f64;
}

impl HasMjd for FinalsRecord {
    fn mjd(&self) -> f64 {
        self.mjd
    }
}

impl HasMjd for LeapSecondRecord {
    fn mjd(&self) -> f64 {
        self.mjd
    }
}

/// An immutable, non-empty, strictly MJD-ascending sequence of records.
#[derive(Debug)]
pub struct ObservationTable<R> {
    records: Vec<R>,
}

impl<R: HasMjd> ObservationTable<R> {
    /// Freezes `records` into a table.
    ///
    /// Fails with [`EopError::InvalidInput`] if the sequence is empty or not
    /// strictly increasing by MJD; both indicate a loader bug, and a partial
    /// table is never constructed.
    pub fn new(records: Vec<R>) -> EopResult<Self> {
        if records.is_empty() {
            return Err(EopError::invalid_input("observation table is empty"));
        }

        for pair in records.windows(2) {
            if pair[1].mjd() <= pair[0].mjd() {
                return Err(EopError::invalid_input(format!(
                    "records out of order: MJD {} followed by {}",
                    pair[0].mjd(),
                    pair[1].mjd()
                )));
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first_mjd(&self) -> f64 {
        self.records[0].mjd()
    }

    pub fn last_mjd(&self) -> f64 {
        self.records[self.records.len() - 1].mjd()
    }
}

/// Supplies the two record sequences to the engine.
///
/// This is the external-loader seam: the bundled [`FileSource`] reads the
/// IERS files from disk, and tests inject synthetic records through their
/// own implementations.
pub trait EopSource: Send + Sync {
    fn finals(&self) -> EopResult<Vec<FinalsRecord>>;

    fn leap_seconds(&self) -> EopResult<Vec<LeapSecondRecord>>;
}

/// Reads the finals and leap-second products from local files.
#[derive(Debug, Clone)]
pub struct FileSource {
    finals_path: PathBuf,
    leap_second_path: PathBuf,
}

impl FileSource {
    pub fn new(finals_path: impl Into<PathBuf>, leap_second_path: impl Into<PathBuf>) -> Self {
        Self {
            finals_path: finals_path.into(),
            leap_second_path: leap_second_path.into(),
        }
    }

    fn read(path: &Path) -> EopResult<String> {
        if !path.exists() {
            return Err(EopError::not_found(path.display().to_string()));
        }
        std::fs::read_to_string(path)
            .map_err(|e| EopError::not_found(format!("{}: {e}", path.display())))
    }
}

impl EopSource for FileSource {
    fn finals(&self) -> EopResult<Vec<FinalsRecord>> {
        parser::parse_finals(&Self::read(&self.finals_path)?)
    }

    fn leap_seconds(&self) -> EopResult<Vec<LeapSecondRecord>> {
        parser::parse_leap_seconds(&Self::read(&self.leap_second_path)?)
    }
}

/// Not yet loaded / loaded tri-state; invalidation returns to `Empty`.
enum TableState<T> {
    Empty,
    Loaded(Arc<T>),
}

/// Lazily loads and memoizes the two observation tables.
pub struct TableStore {
    source: Box<dyn EopSource>,
    finals: Mutex<TableState<ObservationTable<FinalsRecord>>>,
    leap_seconds: Mutex<TableState<ObservationTable<LeapSecondRecord>>>,
}

impl TableStore {
    pub fn new(source: impl EopSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            finals: Mutex::new(TableState::Empty),
            leap_seconds: Mutex::new(TableState::Empty),
        }
    }

    /// Returns the finals table, loading it on first access.
    pub fn finals(&self) -> EopResult<Arc<ObservationTable<FinalsRecord>>> {
        let mut state = self.finals.lock().expect("finals table lock poisoned");

        if let TableState::Loaded(table) = &*state {
            return Ok(Arc::clone(table));
        }

        let records = self.source.finals()?;
        let table = Arc::new(ObservationTable::new(records)?);
        log::debug!(
            "loaded finals table: {} records, MJD {}..{}",
            table.len(),
            table.first_mjd(),
            table.last_mjd()
        );
        if table.len() < 2 {
            log::warn!("finals table has a single record; interpolation queries will fail");
        }

        *state = TableState::Loaded(Arc::clone(&table));
        Ok(table)
    }

    /// Returns the leap-second table, loading it on first access.
    pub fn leap_seconds(&self) -> EopResult<Arc<ObservationTable<LeapSecondRecord>>> {
        let mut state = self
            .leap_seconds
            .lock()
            .expect("leap second table lock poisoned");

        if let TableState::Loaded(table) = &*state {
            return Ok(Arc::clone(table));
        }

        let records = self.source.leap_seconds()?;
        let table = Arc::new(ObservationTable::new(records)?);
        log::debug!(
            "loaded leap second table: {} records, MJD {}..{}",
            table.len(),
            table.first_mjd(),
            table.last_mjd()
        );

        *state = TableState::Loaded(Arc::clone(&table));
        Ok(table)
    }

    /// Drops both memoized tables; the next access reloads from the source.
    pub fn invalidate(&self) {
        *self.finals.lock().expect("finals table lock poisoned") = TableState::Empty;
        *self
            .leap_seconds
            .lock()
            .expect("leap second table lock poisoned") = TableState::Empty;
    }

    /// Whether either table is currently memoized.
    pub fn is_loaded(&self) -> bool {
        let finals_loaded = matches!(
            &*self.finals.lock().expect("finals table lock poisoned"),
            TableState::Loaded(_)
        );
        let leap_loaded = matches!(
            &*self
                .leap_seconds
                .lock()
                .expect("leap second table lock poisoned"),
            TableState::Loaded(_)
        );
        finals_loaded || leap_loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eop_core::CalendarDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn leap(mjd: f64, tai_utc: i32) -> LeapSecondRecord {
        LeapSecondRecord {
            mjd,
            date: CalendarDate::new(1972, 1, 1),
            tai_utc,
        }
    }

    #[derive(Clone)]
    struct CountingSource {
        loads: Arc<AtomicUsize>,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                loads: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl EopSource for CountingSource {
        fn finals(&self) -> EopResult<Vec<FinalsRecord>> {
            Err(EopError::not_found("no finals in this source"))
        }

        fn leap_seconds(&self) -> EopResult<Vec<LeapSecondRecord>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(vec![leap(41317.0, 10), leap(41499.0, 11)])
        }
    }

    #[test]
    fn test_table_validates_order() {
        assert!(ObservationTable::new(vec![leap(1.0, 10), leap(2.0, 11)]).is_ok());
        assert!(ObservationTable::new(vec![leap(2.0, 10), leap(1.0, 11)]).is_err());
        assert!(ObservationTable::new(vec![leap(1.0, 10), leap(1.0, 11)]).is_err());
        assert!(ObservationTable::<LeapSecondRecord>::new(vec![]).is_err());
    }

    #[test]
    fn test_table_accessors() {
        let table = ObservationTable::new(vec![leap(1.0, 10), leap(5.0, 11)]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.first_mjd(), 1.0);
        assert_eq!(table.last_mjd(), 5.0);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_store_loads_once() {
        let store = TableStore::new(CountingSource::new());
        assert!(!store.is_loaded());

        let first = store.leap_seconds().unwrap();
        let second = store.leap_seconds().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(store.is_loaded());
    }

    #[test]
    fn test_store_invalidate_reloads() {
        let source = CountingSource::new();
        let loads = Arc::clone(&source.loads);
        let store = TableStore::new(source);

        store.leap_seconds().unwrap();
        store.leap_seconds().unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 1);

        store.invalidate();
        assert!(!store.is_loaded());

        store.leap_seconds().unwrap();
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_store_propagates_source_error() {
        let store = TableStore::new(CountingSource::new());
        let err = store.finals().unwrap_err();
        assert!(matches!(err, EopError::NotFound { .. }));
        // A failed load leaves the state empty, not half-built
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FileSource::new("/nonexistent/finals.all", "/nonexistent/leap.dat");
        assert!(matches!(
            source.finals().unwrap_err(),
            EopError::NotFound { .. }
        ));
    }

    #[test]
    fn test_concurrent_first_access() {
        let store = std::sync::Arc::new(TableStore::new(CountingSource::new()));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = std::sync::Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store.leap_seconds().unwrap().first_mjd()
            }));
        }
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 41317.0);
        }
    }
}
