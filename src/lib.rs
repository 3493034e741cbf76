//! An unordered, in-memory set of unique values with the usual set algebra.
//!
//! [`Set`] is single-threaded: mutation needs `&mut Set<T>`, so sharing one
//! between threads goes through an external lock such as
//! `Arc<Mutex<Set<T>>>`.

#[cfg(feature = "rand")]
mod rand;
mod set;

pub use set::{IntoIter, Iter, Set};
