/// Tuning parameters of a [`Quadtree`](crate::Quadtree)
///
/// Passed in at construction; a tree never reads process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// A leaf splits once it holds more than this many circles.
    /// Default: 5
    pub max_objects: usize,
    /// Leaves at this level never split, whatever their load.
    /// Default: 20
    pub max_levels: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_objects: 5,
            max_levels: 20,
        }
    }
}

impl Config {
    pub fn with_max_objects(mut self, max_objects: usize) -> Self {
        self.max_objects = max_objects;
        self
    }

    pub fn with_max_levels(mut self, max_levels: u32) -> Self {
        self.max_levels = max_levels;
        self
    }
}
