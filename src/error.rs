use thiserror::Error;

/// The error returned by [`Set::try_insert`](struct.Set.html#method.try_insert).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsertError<T> {
    /// The set already contains an item comparing equal to this one. The rejected item is handed
    /// back untouched.
    #[error("the set already contains an equal item")]
    Duplicate(T),
}

impl<T> InsertError<T> {
    /// Returns the item that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            InsertError::Duplicate(item) => item,
        }
    }
}
