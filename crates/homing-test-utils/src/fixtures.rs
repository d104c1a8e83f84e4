//! Reusable fixtures.
//!
//! - [`DEMO_CASES`]: the three sequences printed by the `homing` binary,
//!   with their expected net displacement.
//! - [`RecordingObserver`]: captures every observer callback in order.
//! - [`balanced_walk`]: builds a sequence that is guaranteed to return home.

use homing_core::{Directive, Displacement};
use homing_eval::DisplacementObserver;

/// A literal sequence with its known outcome.
#[derive(Clone, Copy, Debug)]
pub struct DemoCase {
    pub sequence: &'static str,
    pub expected: Displacement,
}

impl DemoCase {
    pub fn returns_home(&self) -> bool {
        self.expected.is_origin()
    }
}

pub const DEMO_CASES: [DemoCase; 3] = [
    DemoCase {
        sequence: "LRUDRLDU",
        expected: Displacement::ORIGIN,
    },
    DemoCase {
        sequence: "LRUDRLD",
        expected: Displacement::new(0, -1),
    },
    // L=12 R=12 U=6 D=6
    DemoCase {
        sequence: "LRULLRRDDRUDLLLURRLRULLRRDDRUDLLLURR",
        expected: Displacement::ORIGIN,
    },
];

/// One captured observer callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObservedEvent {
    Applied {
        index: usize,
        directive: Directive,
        running: Displacement,
    },
    Ignored {
        index: usize,
        character: char,
    },
    Complete {
        total: Displacement,
        at_origin: bool,
    },
}

/// Observer that records every callback for later assertions.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<ObservedEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ObservedEvent::Applied { .. }))
            .count()
    }

    pub fn ignored(&self) -> Vec<(usize, char)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ObservedEvent::Ignored { index, character } => Some((*index, *character)),
                _ => None,
            })
            .collect()
    }

    /// The final event, if the fold completed.
    pub fn completion(&self) -> Option<(Displacement, bool)> {
        match self.events.last() {
            Some(ObservedEvent::Complete { total, at_origin }) => Some((*total, *at_origin)),
            _ => None,
        }
    }
}

impl DisplacementObserver for RecordingObserver {
    fn on_directive(&mut self, index: usize, directive: Directive, running: Displacement) {
        self.events.push(ObservedEvent::Applied {
            index,
            directive,
            running,
        });
    }

    fn on_ignored(&mut self, index: usize, character: char) {
        self.events.push(ObservedEvent::Ignored { index, character });
    }

    fn on_complete(&mut self, total: Displacement, at_origin: bool) {
        self.events.push(ObservedEvent::Complete { total, at_origin });
    }
}

/// Walk out along `directives` and back along their opposites.
pub fn balanced_walk(directives: &[Directive]) -> String {
    directives
        .iter()
        .map(|d| d.as_char())
        .chain(directives.iter().rev().map(|d| d.opposite().as_char()))
        .collect()
}
