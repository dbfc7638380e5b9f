use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::oneshot;

/// Status code of a successful remote read.
pub const CODE_OK: i32 = 0;
/// Reserved status: the key exists nowhere. Success with an empty result,
/// never an error.
pub const CODE_KEY_NOT_FOUND: i32 = 109;

/// Completion of one remote read: a status code, a human-readable message
/// for non-success codes, and the row payload on success.
#[derive(Debug, Clone)]
pub struct RemoteResponse {
    pub code: i32,
    pub message: String,
    pub payload: Bytes,
}

impl RemoteResponse {
    pub fn ok(payload: impl Into<Bytes>) -> Self {
        Self {
            code: CODE_OK,
            message: String::new(),
            payload: payload.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            code: CODE_KEY_NOT_FOUND,
            message: String::new(),
            payload: Bytes::new(),
        }
    }

    pub fn failed(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            payload: Bytes::new(),
        }
    }
}

/// Capability surface of one pending remote call. Any async backend that
/// can wait, report its state, and cooperatively cancel satisfies it;
/// the decode engine never sees the underlying transport.
///
/// `wait` resolves `None` when the call finishes without a response
/// (sender gone, or cancelled). Timeouts are enforced by the caller
/// around `wait`; the trait owns no timers.
#[async_trait]
pub trait RemoteCall: Send {
    async fn wait(&mut self) -> Option<RemoteResponse>;
    fn cancel(&mut self) -> bool;
    fn is_done(&self) -> bool;
    fn is_cancelled(&self) -> bool;
}

/// `RemoteCall` backed by a tokio oneshot channel. Transports complete
/// the call by sending on the paired sender; dropping the sender counts
/// as "no response".
pub struct OneshotCall {
    rx: oneshot::Receiver<RemoteResponse>,
    received: Option<RemoteResponse>,
    done: bool,
    cancelled: bool,
}

impl OneshotCall {
    pub fn channel() -> (oneshot::Sender<RemoteResponse>, Self) {
        let (tx, rx) = oneshot::channel();
        (
            tx,
            Self {
                rx,
                received: None,
                done: false,
                cancelled: false,
            },
        )
    }
}

#[async_trait]
impl RemoteCall for OneshotCall {
    async fn wait(&mut self) -> Option<RemoteResponse> {
        if self.cancelled {
            return None;
        }
        // a completed receiver must not be polled again
        if self.done {
            return self.received.clone();
        }
        match (&mut self.rx).await {
            Ok(response) => {
                self.done = true;
                self.received = Some(response.clone());
                Some(response)
            }
            Err(_) => {
                self.done = true;
                None
            }
        }
    }

    fn cancel(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.rx.close();
        self.cancelled = true;
        true
    }

    fn is_done(&self) -> bool {
        self.done || self.cancelled
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
