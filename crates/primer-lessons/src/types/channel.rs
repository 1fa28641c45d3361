//! One value handed from a spawned worker to the caller.

use std::thread;

use crossbeam::channel::{self, Sender};
use tracing::{debug, warn};

use primer_core::{Error, Result};

use crate::transcript::Transcript;

pub const HANDOFF_VALUE: i64 = 10;

const WORKER_NAME: &str = "sender";

/// Spawns a worker that sends `value` over a zero-capacity channel and blocks
/// until it arrives.
pub fn rendezvous(value: i64) -> Result<i64> {
    handoff(move |tx| {
        if tx.send(value).is_err() {
            warn!("receiver dropped before the handoff");
        }
    })
}

/// Runs `send` on a worker thread and receives one value from it.
fn handoff<F>(send: F) -> Result<i64>
where
    F: FnOnce(Sender<i64>) + Send + 'static,
{
    let (tx, rx) = channel::bounded::<i64>(0);
    let worker = thread::Builder::new()
        .name(WORKER_NAME.to_string())
        .spawn(move || send(tx))
        .map_err(|source| Error::Spawn { name: WORKER_NAME.to_string(), source })?;

    let received = rx.recv();
    let joined = worker.join();
    match (received, joined) {
        (_, Err(_)) => Err(Error::WorkerPanicked { name: WORKER_NAME.to_string() }),
        (Err(_), Ok(())) => Err(Error::ChannelClosed),
        (Ok(v), Ok(())) => {
            debug!(value = v, "handoff complete");
            Ok(v)
        }
    }
}

pub(crate) fn record(t: &mut Transcript) -> Result<()> {
    let value = rendezvous(HANDOFF_VALUE)?;
    t.entry("Channel value", value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receiver_sees_exactly_the_sent_value() {
        assert_eq!(rendezvous(HANDOFF_VALUE).unwrap(), 10);
    }

    #[test]
    fn repeated_handoffs_do_not_deadlock() {
        for n in 0..32 {
            assert_eq!(rendezvous(n).unwrap(), n);
        }
    }

    #[test]
    fn sender_dropped_without_sending_is_channel_closed() {
        let err = handoff(|tx: Sender<i64>| drop(tx)).unwrap_err();
        assert!(matches!(err, Error::ChannelClosed), "got {:?}", err);
    }

    #[test]
    fn panicking_worker_is_reported() {
        let err = handoff(|_tx| panic!("worker gave up")).unwrap_err();
        match err {
            Error::WorkerPanicked { name } => assert_eq!(name, "sender"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
