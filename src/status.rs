//! Bulk TCP liveness probes.
//!
//! Each distinct host identity gets its own tokio task with its own
//! connect timeout. Results come back over a channel keyed by [`HostId`];
//! nothing here touches the host hierarchy directly.

use std::collections::HashSet;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::sync::mpsc;

use crate::models::{HostId, HostStatus};

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

pub type ProbeResult = (HostId, HostStatus);

/// An in-flight round of probes.
#[derive(Debug)]
pub struct ProbeBatch {
    rx: mpsc::UnboundedReceiver<ProbeResult>,
    pending: HashSet<HostId>,
    online: usize,
    offline: usize,
}

impl ProbeBatch {
    pub fn is_pending(&self, id: &HostId) -> bool {
        self.pending.contains(id)
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Collect whatever has arrived without blocking.
    pub fn drain(&mut self) -> Vec<ProbeResult> {
        let mut results = Vec::new();
        while let Ok((id, status)) = self.rx.try_recv() {
            self.pending.remove(&id);
            match status {
                HostStatus::Online => self.online += 1,
                _ => self.offline += 1,
            }
            results.push((id, status));
        }
        results
    }

    /// Online and offline counts of the results drained so far.
    pub fn tally(&self) -> (usize, usize) {
        (self.online, self.offline)
    }
}

/// Start one probe per distinct identity in `hosts`. Must be called from
/// within a tokio runtime.
pub fn spawn_probes(hosts: impl IntoIterator<Item = HostId>, timeout: Duration) -> ProbeBatch {
    let (tx, rx) = mpsc::unbounded_channel();
    let pending: HashSet<HostId> = hosts.into_iter().collect();

    tracing::info!("Probing {} hosts", pending.len());
    for id in pending.iter().cloned() {
        let tx = tx.clone();
        tokio::spawn(async move {
            let status = probe(&id, timeout).await;
            tracing::debug!("Probe {} -> {:?}", id, status);
            // Receiver gone means the batch was replaced; drop the result.
            let _ = tx.send((id, status));
        });
    }

    ProbeBatch {
        rx,
        pending,
        online: 0,
        offline: 0,
    }
}

/// Any failure, including the timeout, reads as offline.
pub async fn probe(id: &HostId, timeout: Duration) -> HostStatus {
    let connect = TcpStream::connect((id.address.as_str(), id.port));
    match tokio::time::timeout(timeout, connect).await {
        Ok(Ok(_stream)) => HostStatus::Online,
        Ok(Err(e)) => {
            tracing::debug!("Probe {} failed: {}", id, e);
            HostStatus::Offline
        }
        Err(_) => HostStatus::Offline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn local(port: u16) -> HostId {
        HostId {
            address: "127.0.0.1".into(),
            port,
            username: "app".into(),
        }
    }

    async fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        port
    }

    #[tokio::test]
    async fn test_probe_listening_port_is_online() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        assert_eq!(probe(&local(port), PROBE_TIMEOUT).await, HostStatus::Online);
    }

    #[tokio::test]
    async fn test_probe_closed_port_is_offline() {
        let port = closed_port().await;
        assert_eq!(probe(&local(port), PROBE_TIMEOUT).await, HostStatus::Offline);
    }

    #[tokio::test]
    async fn test_batch_reports_each_identity_once() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let open = listener.local_addr().unwrap().port();
        let closed = closed_port().await;

        let mut batch = spawn_probes(
            vec![local(open), local(closed), local(open)],
            PROBE_TIMEOUT,
        );
        assert!(batch.is_pending(&local(open)));
        assert!(batch.is_pending(&local(closed)));

        let mut results = Vec::new();
        for _ in 0..2 {
            let (id, status) = batch.rx.recv().await.unwrap();
            batch.pending.remove(&id);
            results.push((id, status));
        }
        results.sort_by(|a, b| a.0.cmp(&b.0));
        assert!(batch.is_done());
        assert!(batch.drain().is_empty());

        let mut expected = vec![
            (local(open), HostStatus::Online),
            (local(closed), HostStatus::Offline),
        ];
        expected.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(results, expected);
    }

    #[tokio::test]
    async fn test_tally_counts_drained_results() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let open = listener.local_addr().unwrap().port();
        let closed = closed_port().await;

        let mut batch = spawn_probes(vec![local(open), local(closed)], PROBE_TIMEOUT);
        assert_eq!(batch.tally(), (0, 0));
        for _ in 0..100 {
            batch.drain();
            if batch.is_done() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert!(batch.is_done());
        assert_eq!(batch.tally(), (1, 1));
    }

    #[tokio::test]
    async fn test_drain_does_not_block() {
        let mut batch = spawn_probes(Vec::new(), PROBE_TIMEOUT);
        assert!(batch.is_done());
        assert!(batch.drain().is_empty());
    }
}
