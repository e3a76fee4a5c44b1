//! Dependency graph over derivation rules.
//!
//! Nodes are rules. There is a data edge `a -> b` when an output of `a` is an
//! input of `b`, and an ordering edge `a -> b` when both write the same field
//! and `a` is declared first. The topological order is computed once at build
//! time; edits only walk data edges to find the rules they reach.

use std::collections::{BTreeSet, HashMap, HashSet};

use tecgas_model::FieldId;

use crate::error::{CoreError, Result};
use crate::rules::Rule;

#[derive(Debug, Clone)]
pub struct DepGraph {
    /// Rule indices keyed by the fields they read.
    readers: HashMap<FieldId, Vec<usize>>,
    /// Data successors of each rule.
    succs: Vec<BTreeSet<usize>>,
    /// Rule indices in evaluation order.
    order: Vec<usize>,
    /// Position of each rule within `order`.
    rank: Vec<usize>,
}

impl DepGraph {
    pub fn build(rules: &[Rule]) -> Result<Self> {
        let mut readers: HashMap<FieldId, Vec<usize>> = HashMap::new();
        let mut writers: HashMap<FieldId, Vec<usize>> = HashMap::new();
        for (index, rule) in rules.iter().enumerate() {
            if rule.outputs.is_empty() {
                return Err(CoreError::NoOutput {
                    rule: rule.name.clone(),
                });
            }
            for input in &rule.inputs {
                readers.entry(*input).or_default().push(index);
            }
            for output in &rule.outputs {
                writers.entry(*output).or_default().push(index);
            }
        }

        let mut succs = vec![BTreeSet::new(); rules.len()];
        for (index, rule) in rules.iter().enumerate() {
            for output in &rule.outputs {
                if let Some(targets) = readers.get(output) {
                    succs[index].extend(targets.iter().copied());
                }
            }
        }

        // Ordering edges only constrain the topological sort.
        let mut ordering = vec![BTreeSet::new(); rules.len()];
        for same_field in writers.values() {
            for pair in same_field.windows(2) {
                ordering[pair[0]].insert(pair[1]);
            }
        }

        let order = topo_order(rules, &succs, &ordering)?;
        let mut rank = vec![0; rules.len()];
        for (position, index) in order.iter().enumerate() {
            rank[*index] = position;
        }

        Ok(Self {
            readers,
            succs,
            order,
            rank,
        })
    }

    /// Rule indices in evaluation order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Rules that read `field` directly.
    pub fn readers(&self, field: FieldId) -> &[usize] {
        self.readers.get(&field).map_or(&[], Vec::as_slice)
    }

    pub fn successors(&self, rule: usize) -> impl Iterator<Item = usize> + '_ {
        self.succs.get(rule).into_iter().flatten().copied()
    }

    /// Every rule reachable from an edit of `field`, in evaluation order.
    pub fn affected(&self, field: FieldId) -> Vec<usize> {
        let mut seen: HashSet<usize> = HashSet::new();
        let mut stack: Vec<usize> = self.readers(field).to_vec();
        while let Some(rule) = stack.pop() {
            if seen.insert(rule) {
                stack.extend(self.successors(rule).filter(|next| !seen.contains(next)));
            }
        }
        let mut affected: Vec<usize> = seen.into_iter().collect();
        affected.sort_by_key(|rule| self.rank[*rule]);
        affected
    }
}

/// Kahn's algorithm over data and ordering edges. Ready rules are taken in
/// declaration order.
fn topo_order(
    rules: &[Rule],
    succs: &[BTreeSet<usize>],
    ordering: &[BTreeSet<usize>],
) -> Result<Vec<usize>> {
    let edges = move |rule: usize| succs[rule].union(&ordering[rule]).copied();

    let mut in_degree = vec![0usize; rules.len()];
    for rule in 0..rules.len() {
        for next in edges(rule) {
            in_degree[next] += 1;
        }
    }

    let mut ready: BTreeSet<usize> = (0..rules.len())
        .filter(|rule| in_degree[*rule] == 0)
        .collect();
    let mut order = Vec::with_capacity(rules.len());

    while let Some(rule) = ready.pop_first() {
        order.push(rule);
        for next in edges(rule) {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.insert(next);
            }
        }
    }

    if order.len() < rules.len() {
        let placed: HashSet<usize> = order.iter().copied().collect();
        let rules = rules
            .iter()
            .enumerate()
            .filter(|(index, _)| !placed.contains(index))
            .map(|(_, rule)| rule.name.clone())
            .collect();
        return Err(CoreError::Cycle { rules });
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RuleKind, planning_rules};
    use tecgas_model::SectionId;

    fn flat(index: usize) -> FieldId {
        FieldId::flat(SectionId::GeneralInfo, index)
    }

    fn mirror(name: &str, from: usize, to: usize) -> Rule {
        Rule::new(name, RuleKind::Mirror, vec![flat(from)], flat(to))
    }

    #[test]
    fn rejects_cycles() {
        let rules = vec![mirror("a", 0, 1), mirror("b", 1, 2), mirror("c", 2, 0)];
        let err = DepGraph::build(&rules).unwrap_err();
        assert_eq!(
            err,
            CoreError::Cycle {
                rules: vec!["a".into(), "b".into(), "c".into()]
            }
        );
    }

    #[test]
    fn rejects_rules_without_output() {
        let mut rule = mirror("a", 0, 1);
        rule.outputs.clear();
        assert!(matches!(
            DepGraph::build(&[rule]),
            Err(CoreError::NoOutput { .. })
        ));
    }

    #[test]
    fn order_follows_data_edges_over_declaration() {
        // Declared downstream-first on purpose.
        let rules = vec![mirror("second", 1, 2), mirror("first", 0, 1)];
        let graph = DepGraph::build(&rules).unwrap();
        assert_eq!(graph.order(), &[1, 0]);
        assert_eq!(graph.affected(flat(0)), vec![1, 0]);
        assert_eq!(graph.affected(flat(1)), vec![0]);
        assert!(graph.affected(flat(2)).is_empty());
    }

    #[test]
    fn shared_output_keeps_declaration_order() {
        let rules = vec![mirror("later input", 3, 4), mirror("early", 0, 4)];
        let graph = DepGraph::build(&rules).unwrap();
        assert_eq!(graph.order(), &[0, 1]);
        // The ordering edge does not make rule 0 reachable from rule 1's input.
        assert_eq!(graph.affected(flat(0)), vec![1]);
    }

    #[test]
    fn planning_rules_are_acyclic_and_ordered() {
        let rules = planning_rules();
        let graph = DepGraph::build(&rules).unwrap();
        assert_eq!(graph.order().len(), rules.len());
        let position: HashMap<usize, usize> = graph
            .order()
            .iter()
            .enumerate()
            .map(|(position, rule)| (*rule, position))
            .collect();
        for rule in 0..rules.len() {
            for next in graph.successors(rule) {
                assert!(
                    position[&rule] < position[&next],
                    "{} must run before {}",
                    rules[rule].name,
                    rules[next].name
                );
            }
        }
    }
}
