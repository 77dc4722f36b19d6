//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod game_repo;
pub mod movie_repo;
pub mod series_repo;
pub mod session_repo;
pub mod trilogy_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use game_repo::GameRepo;
pub use movie_repo::MovieRepo;
pub use series_repo::SeriesRepo;
pub use session_repo::SessionRepo;
pub use trilogy_repo::TrilogyRepo;
pub use user_repo::UserRepo;
