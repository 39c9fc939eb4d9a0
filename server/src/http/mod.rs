mod conditional;
mod delivery;
mod error;
mod handlers;
mod local;
mod server;
mod state;


pub use conditional::{Evaluation, evaluate};
pub use error::ProxyError;
pub use local::{AssetHeaders, classify};
pub use server::{router, start_server};
pub use state::{AppState, Responder};
