//! Adapters implementing the ports against real external services.

mod appwrite;
mod mojang;
mod notifier;
mod rcon;

pub use appwrite::AppwriteStore;
pub use mojang::MojangVerifier;
pub use notifier::TracingNotifier;
pub use rcon::RconGateway;
