use async_trait::async_trait;

use crate::client::remote::{RemoteCall, RemoteResponse};

enum Outcome {
    Respond(RemoteResponse),
    NoResponse,
    Stall,
}

/// Scripted `RemoteCall` for driving the adapter without a transport.
pub struct FakeCall {
    outcome: Outcome,
    done: bool,
    cancelled: bool,
}

impl FakeCall {
    /// Completes immediately with the given response.
    pub fn completed(response: RemoteResponse) -> Self {
        Self {
            outcome: Outcome::Respond(response),
            done: false,
            cancelled: false,
        }
    }

    /// Completes immediately with no response at all.
    pub fn silent() -> Self {
        Self {
            outcome: Outcome::NoResponse,
            done: false,
            cancelled: false,
        }
    }

    /// Never completes; pair with timeouts or cancellation.
    pub fn stalled() -> Self {
        Self {
            outcome: Outcome::Stall,
            done: false,
            cancelled: false,
        }
    }
}

#[async_trait]
impl RemoteCall for FakeCall {
    async fn wait(&mut self) -> Option<RemoteResponse> {
        if self.cancelled {
            return None;
        }
        match &self.outcome {
            Outcome::Respond(response) => {
                self.done = true;
                Some(response.clone())
            }
            Outcome::NoResponse => {
                self.done = true;
                None
            }
            Outcome::Stall => {
                std::future::pending::<()>().await;
                None
            }
        }
    }

    fn cancel(&mut self) -> bool {
        if self.done {
            return false;
        }
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
