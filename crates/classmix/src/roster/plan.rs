/// Number of groups needed to keep each group at or below `group_size`.
///
/// Callers guarantee `total >= 1` and `group_size >= 1`.
pub fn group_count(total: usize, group_size: usize) -> usize {
    total.div_ceil(group_size)
}

/// Per-group size targets: the first `total % groups` entries get one extra
/// member, so sizes never differ by more than one and larger groups come
/// first. The targets always sum to `total`.
pub fn planned_sizes(total: usize, groups: usize) -> Vec<usize> {
    let base = total / groups;
    let remainder = total % groups;
    (0..groups)
        .map(|position| if position < remainder { base + 1 } else { base })
        .collect()
}
