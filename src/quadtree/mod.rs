mod bounds;
mod node;
mod visit;

pub use bounds::{Bounds, Quadrant};
pub use node::Node;
pub use visit::Visitor;

use crate::{Circle, Config, Error, Point, Result};
use rayon::prelude::*;
use tracing::debug;

/// Spatial index answering "which circle is on top at this point?"
#[derive(Debug, Clone)]
pub struct Quadtree {
    root: Node,
    config: Config,
    len: usize,
}

impl Quadtree {
    /// Create an empty tree covering `height` along `x` and `width` along `y`, starting at
    /// `top_left`, with the default [`Config`].
    pub fn new(top_left: Point, height: i32, width: i32) -> Result<Self> {
        Self::with_config(top_left, height, width, Config::default())
    }

    pub fn with_config(top_left: Point, height: i32, width: i32, config: Config) -> Result<Self> {
        let bounds = Bounds::checked(top_left, height, width)
            .ok_or(Error::InvalidBounds { height, width })?;
        debug!(?bounds, ?config, "created quadtree");
        Ok(Self {
            root: Node::new(0, bounds),
            config,
            len: 0,
        })
    }

    /// Drop every circle, leaving a single empty leaf over the same bounds.
    pub fn clear(&mut self) {
        self.root = Node::new(0, *self.root.bounds());
        self.len = 0;
    }

    /// Insert many circles. Stops at the first invalid circle; the ones before it remain
    /// inserted.
    pub fn extend<It>(&mut self, it: It) -> Result<()>
    where
        It: IntoIterator<Item = Circle>,
    {
        for circle in it {
            self.insert(circle)?;
        }
        Ok(())
    }

    /// Returns `Err` if the circle is malformed or centered outside of the tree.
    pub fn insert(&mut self, circle: Circle) -> Result<()> {
        if circle.radius < 0 {
            return Err(Error::NegativeRadius {
                radius: circle.radius,
                id: circle.id,
            });
        }
        if !self.root.bounds().contains(&circle.center) {
            return Err(Error::OutOfBounds {
                center: circle.center,
                id: circle.id,
            });
        }

        self.root.insert(circle, &self.config);
        self.len += 1;
        Ok(())
    }

    /// Id of the topmost (lowest `z`) circle covering `point`, if any.
    ///
    /// When several covering circles share the lowest `z` the first one met on the way
    /// down wins.
    pub fn collision(&self, point: &Point) -> Option<&str> {
        let mut best: Option<&Circle> = None;
        for c in self.candidates(point) {
            if !c.contains(point) {
                continue;
            }
            match best {
                Some(b) if b.z <= c.z => {}
                _ => best = Some(c),
            }
        }
        best.map(|c| c.id.as_str())
    }

    /// Resolve a batch of points in parallel. The output is in the order of `points`.
    pub fn collisions(&self, points: &[Point]) -> Vec<Option<&str>> {
        points.par_iter().map(|p| self.collision(p)).collect()
    }

    /// Every circle that has to be tested exactly to resolve `point`, in traversal order.
    pub fn candidates<'a>(&'a self, point: &Point) -> Vec<&'a Circle> {
        let mut out = Vec::new();
        self.root.collect_candidates(point, &mut out);
        out
    }

    /// The node where a circle with this footprint is, or would be, stored.
    pub fn locate(&self, center: &Point, radius: i32) -> &Node {
        self.root.locate(center, radius)
    }

    /// Walk every node depth first.
    pub fn traverse<V>(&self, visitor: &mut V)
    where
        V: Visitor,
    {
        visit::traverse(&self.root, visitor);
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn bounds(&self) -> &Bounds {
        self.root.bounds()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of circles inserted
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Level of the deepest node
    pub fn depth(&self) -> u32 {
        self.root.depth()
    }
}
