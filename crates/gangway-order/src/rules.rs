//! Tie-break rules for gang preemption ordering.

use std::cmp::Ordering;

use gangway_object::{Pod, keys};

/// A single tie-break rule. `None` means the rule has no signal for this
/// pair and the next rule decides.
pub type TieBreak = fn(&Pod, &Pod) -> Option<Ordering>;

/// Rules in priority order; role always dominates completion index.
pub const RULES: [TieBreak; 2] = [role_precedence, index_precedence];

/// Total order over pods of one gang: `Less` = more critical = evicted last.
///
/// Stable-sortable: the result is antisymmetric and transitive, and pods
/// with no distinguishing signal compare `Equal` so the caller's sort keeps
/// their relative order.
pub fn gang_order(a: &Pod, b: &Pod) -> Ordering {
    RULES
        .iter()
        .find_map(|rule| rule(a, b))
        .unwrap_or(Ordering::Equal)
}

/// Rule 1: a pod in a protected role (coordinator/launcher) outranks a pod
/// without one.
///
/// Ties where both pods carry a role label fall through, letting the index
/// rule split e.g. two masters of an indexed job. A tie where exactly one
/// pod carries a (non-protected) role label is conclusive equality: the
/// labelled launcher convention is in effect, and an unlabelled peer holds
/// no hidden rank.
fn role_precedence(a: &Pod, b: &Pod) -> Option<Ordering> {
    let a_role = a.label(keys::JOB_ROLE_LABEL);
    let b_role = b.label(keys::JOB_ROLE_LABEL);
    let a_protected = a_role.is_some_and(is_protected);
    let b_protected = b_role.is_some_and(is_protected);

    match (a_protected, b_protected) {
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        _ => match (a_role.is_some(), b_role.is_some()) {
            (true, true) | (false, false) => None,
            _ => Some(Ordering::Equal),
        },
    }
}

fn is_protected(role: &str) -> bool {
    keys::PROTECTED_ROLES.contains(&role)
}

/// Rule 2: in indexed collective jobs, completion index 0 names the
/// coordinator. A pod without a parseable index is not a coordinator.
fn index_precedence(a: &Pod, b: &Pod) -> Option<Ordering> {
    let a_index = completion_index(a);
    let b_index = completion_index(b);
    if a_index.is_none() && b_index.is_none() {
        return None;
    }

    match (a_index == Some(0), b_index == Some(0)) {
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        _ => None,
    }
}

/// Completion index, or `None` when absent or unparsable.
fn completion_index(pod: &Pod) -> Option<i64> {
    pod.annotation(keys::JOB_COMPLETION_INDEX_ANNOTATION)?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pod(name: &str) -> Pod {
        Pod::new("team-a", name)
    }

    fn role_pod(name: &str, role: &str) -> Pod {
        pod(name).with_label(keys::JOB_ROLE_LABEL, role)
    }

    fn indexed_pod(name: &str, index: &str) -> Pod {
        pod(name).with_annotation(keys::JOB_COMPLETION_INDEX_ANNOTATION, index)
    }

    #[test]
    fn launcher_outranks_unlabelled() {
        let a = role_pod("launcher-0", "launcher");
        let b = pod("worker-0");
        assert_eq!(gang_order(&a, &b), Ordering::Less);
        assert_eq!(gang_order(&b, &a), Ordering::Greater);
    }

    #[test]
    fn master_outranks_worker_role() {
        let a = role_pod("master-0", "master");
        let b = role_pod("worker-0", "worker");
        assert_eq!(gang_order(&a, &b), Ordering::Less);
        assert_eq!(gang_order(&b, &a), Ordering::Greater);
    }

    #[test]
    fn two_masters_tie_without_indices() {
        let a = role_pod("master-0", "master");
        let b = role_pod("master-1", "launcher");
        assert_eq!(gang_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn two_labelled_workers_split_by_index() {
        // Both carry role labels, neither protected: the role rule has no
        // signal and the index rule decides.
        let a = role_pod("worker-0", "worker").with_annotation(
            keys::JOB_COMPLETION_INDEX_ANNOTATION,
            "0",
        );
        let b = role_pod("worker-3", "worker").with_annotation(
            keys::JOB_COMPLETION_INDEX_ANNOTATION,
            "3",
        );
        assert_eq!(gang_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn single_unprotected_label_is_equal_not_index_ranked() {
        // One labelled worker, one unlabelled pod at index 0: the label
        // convention is in effect, so the index rule is never reached.
        let a = role_pod("worker-0", "worker");
        let b = indexed_pod("peer-0", "0");
        assert_eq!(gang_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn index_zero_outranks_other_indices() {
        let a = indexed_pod("train-0", "0");
        let b = indexed_pod("train-3", "3");
        assert_eq!(gang_order(&a, &b), Ordering::Less);
        assert_eq!(gang_order(&b, &a), Ordering::Greater);
    }

    #[test]
    fn index_zero_outranks_missing_index() {
        let a = indexed_pod("train-0", "0");
        let b = pod("train-x");
        assert_eq!(gang_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn unparsable_index_is_not_a_coordinator() {
        let a = indexed_pod("train-0", "zero");
        let b = indexed_pod("train-1", "1");
        assert_eq!(gang_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn nonzero_indices_tie() {
        let a = indexed_pod("train-2", "2");
        let b = indexed_pod("train-3", "3");
        assert_eq!(gang_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn no_signal_at_all_is_equal() {
        let a = pod("train-a").with_label("unrelated", "x");
        let b = pod("train-b").with_annotation("unrelated", "y");
        assert_eq!(gang_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn role_dominates_index() {
        let a = role_pod("master-5", "master").with_annotation(
            keys::JOB_COMPLETION_INDEX_ANNOTATION,
            "5",
        );
        let b = indexed_pod("train-0", "0");
        assert_eq!(gang_order(&a, &b), Ordering::Less);
    }

    #[test]
    fn sorts_a_whole_gang_most_critical_first() {
        let mut gang = vec![
            indexed_pod("train-3", "3"),
            pod("aux"),
            role_pod("launcher-0", "launcher"),
            indexed_pod("train-0", "0"),
        ];
        gang.sort_by(|a, b| gang_order(a, b));

        assert_eq!(gang[0].name, "launcher-0");
        assert_eq!(gang[1].name, "train-0");
    }
}
