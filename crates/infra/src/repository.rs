use std::sync::{Arc, RwLock};

/// Read-only record provider: a full snapshot, nothing more.
///
/// No filtering, pagination, or ordering guarantees; callers perform all
/// filtering themselves over the returned snapshot.
pub trait Repository<T>: Send + Sync {
    fn find_all(&self) -> Vec<T>;
}

impl<T, R> Repository<T> for Arc<R>
where
    R: Repository<T> + ?Sized,
{
    fn find_all(&self) -> Vec<T> {
        (**self).find_all()
    }
}

/// In-memory repository for tests/dev, seeded once at construction.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn find_all(&self) -> Vec<T> {
        match self.records.read() {
            Ok(records) => records.clone(),
            Err(_) => vec![],
        }
    }
}
