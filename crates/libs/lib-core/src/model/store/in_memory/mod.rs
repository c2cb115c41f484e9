//! # In-Memory Repositories
//!
//! Process-local implementations of the repository traits. Used by tests and
//! by the server when `REPOSITORY_BACKEND=memory`. They honor the same
//! contracts as the SQLite implementations, uniqueness rules included.

mod check_ins;
mod gyms;
mod users;

pub use check_ins::InMemoryCheckInRepository;
pub use gyms::InMemoryGymRepository;
pub use users::InMemoryUserRepository;

use super::{page_offset, PAGE_SIZE};

/// Slice out one 1-indexed page.
fn paginate<T: Clone>(items: impl Iterator<Item = T>, page: u32) -> Vec<T> {
    let skip = usize::try_from(page_offset(page)).unwrap_or(usize::MAX);
    items.skip(skip).take(PAGE_SIZE as usize).collect()
}
