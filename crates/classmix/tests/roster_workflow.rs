use std::collections::HashSet;

use classmix::roster::{
    group_count, parse_names, planned_sizes, rng_for, split_with_separation, GroupingError,
};

#[test]
fn pasted_text_flows_into_balanced_groups() {
    let roster = parse_names("Ola Nordmann\nKari Nordmann,Ali Khan;Mina Liu\nPer\nLise\nAhmed");
    assert_eq!(roster.len(), 7);

    let groups = group_count(roster.len(), 3);
    assert_eq!(groups, 3);
    let targets = planned_sizes(roster.len(), groups);
    assert_eq!(targets, vec![3, 2, 2]);

    let mut rng = rng_for(Some(42));
    let formed = split_with_separation(&roster, &[], &targets, &mut rng).expect("split succeeds");

    let placed: HashSet<&str> = formed
        .iter()
        .flat_map(|group| group.members.iter().map(String::as_str))
        .collect();
    let expected: HashSet<&str> = roster.iter().map(String::as_str).collect();
    assert_eq!(placed, expected);

    for (group, target) in formed.iter().zip(&targets) {
        assert_eq!(group.len(), *target);
    }
}

#[test]
fn duplicate_and_differently_cased_entries_collapse_before_grouping() {
    let roster = parse_names("Ola\nola\nOLA\nKari;kari,Per");
    assert_eq!(roster, vec!["Ola", "Kari", "Per"]);

    let targets = planned_sizes(roster.len(), group_count(roster.len(), 2));
    assert_eq!(targets, vec![2, 1]);
}

#[test]
fn separation_list_typed_with_different_delimiters_still_separates() {
    let roster = parse_names("Ann\nBo\nCas\nDag\nEli\nFin\nGro\nHal");
    let separated = parse_names("Ann; Bo");

    let groups = group_count(roster.len(), 4);
    let targets = planned_sizes(roster.len(), groups);

    for seed in 0..32 {
        let mut rng = rng_for(Some(seed));
        let formed = split_with_separation(&roster, &separated, &targets, &mut rng)
            .expect("feasible split");

        let ann_group = formed
            .iter()
            .position(|group| group.members.iter().any(|member| member == "Ann"))
            .expect("Ann placed");
        let bo_group = formed
            .iter()
            .position(|group| group.members.iter().any(|member| member == "Bo"))
            .expect("Bo placed");
        assert_ne!(ann_group, bo_group, "seed {seed}");
    }
}

#[test]
fn infeasible_separation_fails_before_any_shuffle() {
    let roster = parse_names("Ann,Bo,Cas,Dag,Eli,Fin");
    let separated = parse_names("Ann,Bo,Cas,Dag,Eli");
    let targets = planned_sizes(roster.len(), 3);

    let mut rng = rng_for(Some(0));
    let error = split_with_separation(&roster, &separated, &targets, &mut rng)
        .expect_err("five separated names cannot fit three groups");
    assert_eq!(
        error,
        GroupingError::TooManySeparated {
            separated: 5,
            groups: 3,
        }
    );
}
