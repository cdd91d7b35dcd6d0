use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque handle to the object an event originated from or refers to.
///
/// The event never inspects the target; consumers downcast it to the type
/// they expect. Cloning the handle shares the same underlying object.
#[derive(Clone)]
pub struct Target(Arc<dyn Any + Send + Sync>);

impl Target {
    /// Wrap any shareable value as a target.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Wrap an already shared value without copying it.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self(value)
    }

    /// Borrow the target as `T`, if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns `true` if the target's concrete type is `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Returns `true` if both handles refer to the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Target({:p})", Arc::as_ptr(&self.0))
    }
}
