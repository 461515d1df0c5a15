//! Persistence layer. Each module is the explicit storage interface for
//! one table; handlers never write SQL themselves, so the engine behind
//! these functions is swappable.

pub mod products;
pub mod refresh_tokens;
pub mod users;
