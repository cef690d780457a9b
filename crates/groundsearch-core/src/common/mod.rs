pub mod random_id;

pub use random_id::generate_session_id;
