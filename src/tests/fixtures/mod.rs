pub mod events;
#[cfg(feature = "mongodb")]
pub mod mongo;
pub mod state;
