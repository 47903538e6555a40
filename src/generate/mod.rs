pub mod shapes;
pub mod storm;

/// Upper bound on up-front allocation; longer outputs grow as they are emitted.
pub(crate) const PREALLOC_LIMIT: usize = 4096;
