use std::sync::Arc;

use crate::config::Priorities;
use crate::credentials::CredentialStore;
use crate::state::State;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transport {
    Tls,
    Dtls,
}

impl Transport {
    pub fn is_dtls(&self) -> bool {
        *self == Transport::Dtls
    }
}

/// Session is one endpoint of one handshake. The priorities and credentials
/// are shared with other sessions; the state belongs to this handshake only.
#[derive(Clone, Debug)]
pub struct Session {
    pub(crate) transport: Transport,
    pub(crate) priorities: Arc<Priorities>,
    pub(crate) credentials: Arc<CredentialStore>,
    pub state: State,
}

impl Session {
    pub fn new(
        transport: Transport,
        priorities: Arc<Priorities>,
        credentials: Arc<CredentialStore>,
    ) -> Self {
        Session {
            transport,
            priorities,
            credentials,
            state: State::default(),
        }
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn is_dtls(&self) -> bool {
        self.transport.is_dtls()
    }

    pub fn priorities(&self) -> &Priorities {
        &self.priorities
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }
}
