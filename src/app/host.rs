//! Identity-addressed updates on the master group hierarchy.

use crate::models::{Group, Host, HostId, HostStatus};

fn hosts_mut<'a>(groups: &'a mut [Group], id: &'a HostId) -> impl Iterator<Item = &'a mut Host> {
    groups
        .iter_mut()
        .flat_map(|g| g.hosts.iter_mut())
        .filter(move |h| &h.id() == id)
}

/// Flip the favourite flag on every host with this identity. Returns the
/// new value, or `None` when no host matched.
pub fn toggle_favorite(groups: &mut [Group], id: &HostId) -> Option<bool> {
    let mut result = None;
    for host in hosts_mut(groups, id) {
        host.favorite = !host.favorite;
        result = Some(host.favorite);
    }
    result
}

pub fn set_status(groups: &mut [Group], id: &HostId, status: HostStatus) {
    for host in hosts_mut(groups, id) {
        host.status = status;
    }
}

/// Every distinct identity in the hierarchy, in file order.
pub fn identities(groups: &[Group]) -> Vec<HostId> {
    let mut ids: Vec<HostId> = Vec::new();
    for host in groups.iter().flat_map(|g| g.hosts.iter()) {
        let id = host.id();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}
