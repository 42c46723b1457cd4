//! Search filtering over the group/host hierarchy.

use crate::models::{Group, Host};

/// Case-insensitive substring match on name, address or username.
pub fn host_matches(host: &Host, query_lower: &str) -> bool {
    [&host.name, &host.ip, &host.username]
        .iter()
        .any(|field| field.to_lowercase().contains(query_lower))
}

/// Keep hosts matching `query`, drop groups left empty, and preserve the
/// order of both groups and hosts. An empty query returns the input as is.
pub fn filter_groups(groups: &[Group], query: &str) -> Vec<Group> {
    if query.is_empty() {
        return groups.to_vec();
    }

    let query_lower = query.to_lowercase();
    groups
        .iter()
        .filter_map(|group| {
            let hosts: Vec<Host> = group
                .hosts
                .iter()
                .filter(|host| host_matches(host, &query_lower))
                .cloned()
                .collect();
            (!hosts.is_empty()).then(|| Group {
                name: group.name.clone(),
                hosts,
            })
        })
        .collect()
}

/// Every favourite host in file order.
pub fn favorite_hosts(groups: &[Group]) -> Vec<Host> {
    groups
        .iter()
        .flat_map(|g| g.hosts.iter())
        .filter(|h| h.favorite)
        .cloned()
        .collect()
}

/// All hosts flattened and sorted by name.
pub fn all_hosts_sorted(groups: &[Group]) -> Vec<Host> {
    let mut hosts: Vec<Host> = groups.iter().flat_map(|g| g.hosts.iter().cloned()).collect();
    hosts.sort_by(|a, b| a.name.cmp(&b.name));
    hosts
}

pub fn total_hosts(groups: &[Group]) -> usize {
    groups.iter().map(|g| g.hosts.len()).sum()
}
