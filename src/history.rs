use crate::models::{Host, HostId, HostStatus};

pub const HISTORY_CAPACITY: usize = 5;

/// Most-recently-used hosts, most recent first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionHistory {
    entries: Vec<Host>,
}

impl ConnectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `host` to the front, replacing any entry with the same
    /// identity, and keep at most [`HISTORY_CAPACITY`] entries.
    pub fn record_connect(&mut self, host: &Host) {
        self.entries.retain(|h| !h.same_identity(host));
        self.entries.insert(0, host.clone());
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn entries(&self) -> &[Host] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Host> {
        self.entries.get(index)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set_status(&mut self, id: &HostId, status: HostStatus) {
        for host in self.entries.iter_mut().filter(|h| &h.id() == id) {
            host.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(n: u8) -> Host {
        Host::new(format!("h{n}"), format!("10.0.0.{n}"), "root")
    }

    #[test]
    fn test_record_puts_host_first() {
        let mut history = ConnectionHistory::new();
        history.record_connect(&host(1));
        history.record_connect(&host(2));
        assert_eq!(history.get(0).unwrap().name, "h2");
        assert_eq!(history.get(1).unwrap().name, "h1");
    }

    #[test]
    fn test_repeat_connect_moves_to_front_without_duplicate() {
        let mut history = ConnectionHistory::new();
        for n in 1..=3 {
            history.record_connect(&host(n));
        }
        history.record_connect(&host(1));
        let names: Vec<_> = history.entries().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["h1", "h3", "h2"]);
    }

    #[test]
    fn test_identity_match_ignores_name() {
        let mut history = ConnectionHistory::new();
        history.record_connect(&host(1));
        let mut renamed = host(1);
        renamed.name = "renamed".into();
        history.record_connect(&renamed);
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).unwrap().name, "renamed");
    }

    #[test]
    fn test_capacity_is_five() {
        let mut history = ConnectionHistory::new();
        for n in 1..=8 {
            history.record_connect(&host(n));
            assert!(history.len() <= HISTORY_CAPACITY);
            assert_eq!(history.get(0).unwrap().name, format!("h{n}"));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.get(4).unwrap().name, "h4");
    }

    #[test]
    fn test_set_status_by_identity() {
        let mut history = ConnectionHistory::new();
        history.record_connect(&host(1));
        history.record_connect(&host(2));
        history.set_status(&host(1).id(), HostStatus::Online);
        assert_eq!(history.get(1).unwrap().status, HostStatus::Online);
        assert_eq!(history.get(0).unwrap().status, HostStatus::Unknown);
    }
}
