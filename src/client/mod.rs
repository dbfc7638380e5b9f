pub mod pending;
pub mod remote;
pub mod session;

pub use pending::{FetchOptions, PendingRow};
pub use remote::{CODE_KEY_NOT_FOUND, CODE_OK, OneshotCall, RemoteCall, RemoteResponse};
pub use session::DecodeSession;
