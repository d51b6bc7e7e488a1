use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

use super::domain::{Group, GroupingError};
use super::normalizer::dedup_key;

/// Partitions `roster` into groups matching `targets` exactly, keeping every
/// name in `separated` apart from the others.
///
/// Separated names are placed first, each scan starting at a cyclic offset so
/// they spread across groups rather than piling into group zero. Because at
/// most one separated name can land per group and they are placed before
/// anything else, no two of them ever share a group once the feasibility
/// check passes. The rest of the roster is shuffled with the supplied RNG and
/// fed greedily to whichever group is relatively emptiest, which walks every
/// group up to its exact target.
pub fn split_with_separation<R>(
    roster: &[String],
    separated: &[String],
    targets: &[usize],
    rng: &mut R,
) -> Result<Vec<Group>, GroupingError>
where
    R: Rng + ?Sized,
{
    let group_count = targets.len();
    if separated.len() > group_count {
        return Err(GroupingError::TooManySeparated {
            separated: separated.len(),
            groups: group_count,
        });
    }

    let by_key: HashMap<String, &str> = roster
        .iter()
        .map(|name| (dedup_key(name), name.as_str()))
        .collect();

    let mut groups: Vec<Vec<String>> = vec![Vec::new(); group_count];
    let mut separated_keys: HashSet<String> = HashSet::with_capacity(separated.len());

    for (position, name) in separated.iter().enumerate() {
        let key = dedup_key(name);
        let canonical = *by_key
            .get(&key)
            .ok_or_else(|| GroupingError::UnknownSeparated(name.clone()))?;
        separated_keys.insert(key);

        let start = position % group_count;
        let slot = (0..group_count)
            .map(|offset| (start + offset) % group_count)
            .find(|&group| groups[group].len() < targets[group])
            .ok_or(GroupingError::NoRoomForSeparated)?;
        groups[slot].push(canonical.to_string());
    }

    let mut remaining: Vec<&str> = roster
        .iter()
        .map(String::as_str)
        .filter(|name| !separated_keys.contains(&dedup_key(name)))
        .collect();
    remaining.shuffle(rng);

    for name in remaining {
        let mut order: Vec<usize> = (0..group_count).collect();
        // Lowest relative fullness first, ties by absolute size, then by
        // index (stable sort). Cross-multiplying keeps the ratio comparison
        // in integers.
        order.sort_by(|&a, &b| {
            (groups[a].len() * targets[b])
                .cmp(&(groups[b].len() * targets[a]))
                .then(groups[a].len().cmp(&groups[b].len()))
        });
        if let Some(&slot) = order.iter().find(|&&group| groups[group].len() < targets[group]) {
            groups[slot].push(name.to_string());
        }
    }

    Ok(groups.into_iter().map(|members| Group { members }).collect())
}
