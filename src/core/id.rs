//! Opaque id generation for lists and tasks.
//!
//! Ids combine an optional scope prefix, a millisecond timestamp and a random
//! component, so several ids minted in the same millisecond (a batch of
//! suggested tasks, for instance) still differ.

use uuid::Uuid;

fn candidate(prefix: Option<&str>) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple().to_string();
    match prefix {
        Some(p) => format!("{}-{}-{}", p, millis, &random[..12]),
        None => format!("{}-{}", millis, &random[..12]),
    }
}

/// Mint a fresh id that `taken` does not already claim.
pub fn fresh_id(prefix: Option<&str>, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = candidate(prefix);
        if !taken(&id) {
            return id;
        }
        log::debug!("Id collision on {}, regenerating", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn prefixed_ids_carry_scope() {
        let id = fresh_id(Some("list-7"), |_| false);
        assert!(id.starts_with("list-7-"));
    }

    #[test]
    fn batch_ids_are_distinct() {
        let ids: HashSet<String> = (0..200).map(|_| fresh_id(Some("1"), |_| false)).collect();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn skips_taken_ids() {
        let first = fresh_id(None, |_| false);
        let second = fresh_id(None, |id| id == first);
        assert_ne!(first, second);
    }
}
