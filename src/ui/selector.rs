//! Radio-style ball type selector

use crate::lock;
use crate::sim::{BallKind, SharedSimulation};

/// One radio option as the host should draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorOption {
    pub kind: BallKind,
    pub label: &'static str,
    pub selected: bool,
}

/// Mutually exclusive choice of the kind used for new balls.
///
/// Holds the simulation it drives; exactly one option is selected at a time.
pub struct TypeSelector {
    sim: SharedSimulation,
    selected: usize,
}

impl TypeSelector {
    /// Select the last listed kind and push it into `sim`
    pub fn new(sim: SharedSimulation) -> Self {
        let selected = BallKind::ALL.len() - 1;
        lock(&sim).set_active_kind(BallKind::ALL[selected]);
        Self { sim, selected }
    }

    pub fn selected(&self) -> BallKind {
        BallKind::ALL[self.selected]
    }

    pub fn options(&self) -> impl Iterator<Item = SelectorOption> + '_ {
        BallKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &kind)| SelectorOption {
                kind,
                label: kind.label(),
                selected: i == self.selected,
            })
    }

    /// Select `kind`. Returns false if it was already selected.
    pub fn select(&mut self, kind: BallKind) -> bool {
        match BallKind::ALL.iter().position(|&k| k == kind) {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    /// Select by option index. Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= BallKind::ALL.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        let kind = BallKind::ALL[index];
        lock(&self.sim).set_active_kind(kind);
        log::info!("Selected {}", kind.label());
        true
    }
}
