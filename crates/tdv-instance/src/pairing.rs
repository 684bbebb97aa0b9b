//! Pairing instances with their solutions by exact name match.

use std::collections::HashMap;

use crate::document::Instance;
use crate::solution::Solution;

/// One instance/solution pair ready for analysis.
#[derive(Clone, Debug)]
pub struct PairedCase {
    /// Instance name (the pairing key, typically the document's file stem).
    pub name: String,
    pub instance: Instance,
    pub solution: Solution,
}

/// Pair named instances with solutions by exact `instance_name` match.
///
/// Instances without a matching solution are dropped, as are solutions whose
/// instance is absent — partial corpora are expected, not an error.  Pairs
/// come back in the order the instances were given.
pub fn pair_by_name(
    instances: Vec<(String, Instance)>,
    solutions: Vec<Solution>,
) -> Vec<PairedCase> {
    let mut by_name: HashMap<String, Solution> = solutions
        .into_iter()
        .map(|s| (s.instance_name.clone(), s))
        .collect();

    instances
        .into_iter()
        .filter_map(|(name, instance)| {
            by_name.remove(&name).map(|solution| PairedCase {
                name,
                instance,
                solution,
            })
        })
        .collect()
}

/// Instance type derived from the name prefix: `"RC"` for names starting
/// with `RC`, otherwise the first character.
///
/// Solomon/Gehring-style corpora encode the customer layout in the prefix
/// (`C` clustered, `R` random, `RC` mixed), which is what the corpus
/// breakdown groups by.
pub fn instance_type_of(name: &str) -> String {
    if name.starts_with("RC") {
        "RC".to_string()
    } else {
        name.chars().take(1).collect()
    }
}
