use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// A source whose changes can be observed by version number.
///
/// Every write bumps the version; derived values compare versions to decide
/// whether they need to recompute.
pub trait Tracked: Send + Sync {
    fn version(&self) -> u64;
}

/// Reactive state wrapper with interior mutability.
///
/// `State<T>` uses `Arc<RwLock<T>>` internally, making it cheap to clone.
/// Clones share the same value, dirty flag and version.
///
/// # Example
///
/// ```
/// use table_column::state::State;
///
/// let width = State::new(80u32);
/// width.update(|w| *w += 20);
/// assert_eq!(width.get(), 100);
/// assert!(width.is_dirty());
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
    version: Arc<AtomicU64>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
            version: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.touch();
        }
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.touch();
        }
    }

    /// A dependency handle for [`Memo::new`].
    pub fn tracker(&self) -> Arc<dyn Tracked>
    where
        T: Send + Sync + 'static,
    {
        Arc::new(self.clone())
    }

    fn touch(&self) {
        self.dirty.store(true, Ordering::SeqCst);
        self.version.fetch_add(1, Ordering::SeqCst);
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: Send + Sync> Tracked for State<T> {
    fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            version: Arc::clone(&self.version),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

type Compute<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// A derived value recomputed on demand when its dependencies change.
///
/// The dependency set is explicit: only the sources passed to [`Memo::new`]
/// invalidate the cached value. A memo with no dependencies computes once.
///
/// # Example
///
/// ```
/// use table_column::state::{Memo, State};
///
/// let align = State::new(Some("left".to_string()));
/// let source = align.clone();
/// let class = Memo::new(vec![align.tracker()], move || {
///     source.get().map(|a| format!("is-{a}"))
/// });
/// assert_eq!(class.get().as_deref(), Some("is-left"));
///
/// align.set(None);
/// assert_eq!(class.get(), None);
/// ```
pub struct Memo<T> {
    deps: Arc<Vec<Arc<dyn Tracked>>>,
    compute: Compute<T>,
    cache: Arc<RwLock<Option<(Vec<u64>, T)>>>,
}

impl<T: Clone> Memo<T> {
    pub fn new(
        deps: Vec<Arc<dyn Tracked>>,
        compute: impl Fn() -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            deps: Arc::new(deps),
            compute: Arc::new(compute),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// A memo that never changes.
    pub fn constant(value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self::new(Vec::new(), move || value.clone())
    }

    /// Current value, recomputing first if any dependency changed.
    pub fn get(&self) -> T {
        let versions: Vec<u64> = self.deps.iter().map(|dep| dep.version()).collect();

        if let Ok(cache) = self.cache.read()
            && let Some((seen, value)) = cache.as_ref()
            && *seen == versions
        {
            return value.clone();
        }

        let value = (self.compute)();
        if let Ok(mut cache) = self.cache.write() {
            *cache = Some((versions, value.clone()));
        }
        value
    }
}

impl<T> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self {
            deps: Arc::clone(&self.deps),
            compute: Arc::clone(&self.compute),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<T> std::fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memo")
            .field("deps", &self.deps.len())
            .finish_non_exhaustive()
    }
}
