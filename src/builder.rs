use crate::blocks::default_block_size;
use crate::{LayeredEngine, LayeredProblem};

pub struct LayeredEngineBuilder<P: LayeredProblem> {
    problem: P,
    block_size: Option<usize>,
}

impl<P: LayeredProblem> LayeredEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
        }
    }

    /// Leaf block length; `0` falls back to the default when building.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size).filter(|&b| b > 0);
        self
    }

    pub fn build(self) -> LayeredEngine<P> {
        let b = self
            .block_size
            .unwrap_or_else(|| default_block_size(self.problem.num_layers()));
        LayeredEngine::with_block_size(self.problem, b)
    }
}
