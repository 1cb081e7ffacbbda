mod poller;

pub use poller::{Poller, PollerError, PollerHandle, PollerState, DEFAULT_POLL_INTERVAL};
