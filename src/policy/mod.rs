//! Eviction policy implementations.
//!
//! | Policy                        | Victim                              | Hit bookkeeping        |
//! |-------------------------------|-------------------------------------|------------------------|
//! | [`lru::LruPolicy`]            | Least recently used                 | Move to MRU end        |
//! | [`lfu::LfuPolicy`]            | Lowest count, oldest admission      | Count + 1              |
//! | [`random::RandomPolicy`]      | Uniform over resident items         | None                   |
//! | [`no_cache::NoCachePolicy`]   | Nothing is ever resident            | None                   |
//!
//! [`Policy`](crate::builder::Policy) wraps the four behind one type selected
//! at construction time.

pub mod lfu;
pub mod lru;
pub mod no_cache;
pub mod random;
