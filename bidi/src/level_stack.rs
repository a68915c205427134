use crate::bidi_class::BidiClass;
use crate::level::{Level, MAX_DEPTH};

/// Capacity of the directional status stack: MAX_DEPTH embeddings on top of
/// the paragraph entry, plus room for one overflowing isolate.
pub(crate) const STACK_CAPACITY: usize = MAX_DEPTH + 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Override {
    Neutral,
    LTR,
    RTL,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Frame {
    embedding_level: Level,
    override_status: Override,
    isolate_status: bool,
}

const EMPTY_FRAME: Frame = Frame {
    embedding_level: Level(0),
    override_status: Override::Neutral,
    isolate_status: false,
};

/// The directional status stack of rule X1.
/// It never allocates; pushes beyond its capacity are dropped, which X1-X8
/// never attempt because of their overflow counters.
#[derive(Debug)]
pub(crate) struct LevelStack {
    frames: [Frame; STACK_CAPACITY],
    depth: usize,
}

impl LevelStack {
    /// Creates the stack holding only the paragraph entry.
    pub fn new(paragraph_level: Level) -> Self {
        let mut stack = Self {
            frames: [EMPTY_FRAME; STACK_CAPACITY],
            depth: 0,
        };
        stack.push(paragraph_level, Override::Neutral, false);
        stack
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn push(&mut self, embedding_level: Level, override_status: Override, isolate_status: bool) {
        debug_assert!(self.depth < STACK_CAPACITY, "level stack overflow");
        if self.depth >= STACK_CAPACITY {
            return;
        }
        log::trace!(
            "push level={:?} override={:?} isolate={} depth={}",
            embedding_level,
            override_status,
            isolate_status,
            self.depth
        );
        self.frames[self.depth] = Frame {
            embedding_level,
            override_status,
            isolate_status,
        };
        self.depth += 1;
    }

    /// Pops the top entry; the paragraph entry is never popped.
    pub fn pop(&mut self) {
        if self.depth > 1 {
            self.depth -= 1;
        }
    }

    /// Pops entries up to and including the nearest isolate entry (X6a).
    pub fn pop_isolate(&mut self) {
        while self.depth > 1 && !self.isolate_status() {
            self.depth -= 1;
        }
        self.pop();
    }

    fn top(&self) -> &Frame {
        &self.frames[self.depth - 1]
    }

    pub fn embedding_level(&self) -> Level {
        self.top().embedding_level
    }

    pub fn isolate_status(&self) -> bool {
        self.top().isolate_status
    }

    /// Rewrites `bc` to the directional override of the top entry, if any.
    pub fn apply_override(&self, bc: &mut BidiClass) {
        match self.top().override_status {
            Override::LTR => *bc = BidiClass::LeftToRight,
            Override::RTL => *bc = BidiClass::RightToLeft,
            Override::Neutral => {}
        }
    }
}
