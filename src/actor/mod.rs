// Actors: the backend-facing half of each command
pub mod service;
pub mod session;

pub use service::{CloudControllerActor, CloudControllerClient};
pub use session::SessionActor;
