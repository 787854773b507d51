//! Sales phases and the catalog that links them.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::PhaseId;

use super::errors::PlaybookError;

/// A named stage of the sales conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPhase {
    pub id: PhaseId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    /// Phases this one may hand over to, in display order.
    #[serde(default)]
    pub successors: Vec<PhaseId>,
}

impl SalesPhase {
    /// Returns true if the conversation cannot advance past this phase.
    pub fn is_terminal(&self) -> bool {
        self.successors.is_empty()
    }

    pub fn has_successor(&self, target: &PhaseId) -> bool {
        self.successors.contains(target)
    }
}

/// Immutable, validated directed graph of sales phases.
#[derive(Debug, Clone)]
pub struct PhaseCatalog {
    start: PhaseId,
    phases: Vec<SalesPhase>,
    index: HashMap<PhaseId, usize>,
}

impl PhaseCatalog {
    /// Builds the catalog, checking that:
    /// - ids are unique and the start phase exists
    /// - every successor id is defined
    /// - the graph reachable from the start phase is acyclic
    pub fn new(start: PhaseId, phases: Vec<SalesPhase>) -> Result<Self, PlaybookError> {
        if phases.is_empty() {
            return Err(PlaybookError::NoPhases);
        }

        let mut index = HashMap::with_capacity(phases.len());
        for (position, phase) in phases.iter().enumerate() {
            if index.insert(phase.id.clone(), position).is_some() {
                return Err(PlaybookError::DuplicatePhase(phase.id.clone()));
            }
        }

        if !index.contains_key(&start) {
            return Err(PlaybookError::UnknownStartPhase(start));
        }

        for phase in &phases {
            if let Some(missing) = phase.successors.iter().find(|s| !index.contains_key(*s)) {
                return Err(PlaybookError::UnknownSuccessor {
                    phase: phase.id.clone(),
                    successor: missing.clone(),
                });
            }
        }

        let catalog = Self { start, phases, index };
        let reachable = catalog.reachable_acyclic()?;
        for phase in catalog.phases.iter().filter(|p| !reachable.contains(&p.id)) {
            warn!(phase = %phase.id, "Phase is unreachable from the start phase");
        }

        Ok(catalog)
    }

    /// Depth-first walk from the start phase.
    ///
    /// Returns the reachable set, or the first phase found on a cycle.
    fn reachable_acyclic(&self) -> Result<HashSet<PhaseId>, PlaybookError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            OnPath,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.phases.len()];
        let start = self.index[&self.start];
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        marks[start] = Mark::OnPath;

        while let Some((node, next_child)) = stack.pop() {
            let successors = &self.phases[node].successors;
            if next_child == successors.len() {
                marks[node] = Mark::Done;
                continue;
            }
            stack.push((node, next_child + 1));

            let child = self.index[&successors[next_child]];
            match marks[child] {
                Mark::OnPath => return Err(PlaybookError::CycleDetected(self.phases[child].id.clone())),
                Mark::Done => {}
                Mark::Unvisited => {
                    marks[child] = Mark::OnPath;
                    stack.push((child, 0));
                }
            }
        }

        Ok(self
            .phases
            .iter()
            .zip(marks)
            .filter(|(_, mark)| *mark == Mark::Done)
            .map(|(phase, _)| phase.id.clone())
            .collect())
    }

    /// The phase every session starts in.
    pub fn start(&self) -> &SalesPhase {
        &self.phases[self.index[&self.start]]
    }

    pub fn start_id(&self) -> &PhaseId {
        &self.start
    }

    pub fn get(&self, id: &PhaseId) -> Option<&SalesPhase> {
        self.index.get(id).map(|&position| &self.phases[position])
    }

    pub fn contains(&self, id: &PhaseId) -> bool {
        self.index.contains_key(id)
    }

    /// Phases in declaration order.
    pub fn phases(&self) -> &[SalesPhase] {
        &self.phases
    }

    /// Declared successors of a phase; empty for unknown ids.
    pub fn successors(&self, id: &PhaseId) -> &[PhaseId] {
        self.get(id).map(|p| p.successors.as_slice()).unwrap_or(&[])
    }

    /// Returns true if `to` is a declared successor of `from`.
    pub fn is_successor(&self, from: &PhaseId, to: &PhaseId) -> bool {
        self.get(from).is_some_and(|phase| phase.has_successor(to))
    }

    pub fn is_terminal(&self, id: &PhaseId) -> bool {
        self.get(id).map_or(true, SalesPhase::is_terminal)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}
