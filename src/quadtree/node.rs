use super::bounds::Bounds;
use crate::{Circle, Config, Point};
use std::mem;
use tracing::trace;

type Children = Option<Box<[Node; 4]>>;

/// A region of the partition.
///
/// A leaf holds the circles that landed in it. An internal node holds exactly four
/// children and only the circles that straddle its midlines or edges.
#[derive(Debug, Clone)]
pub struct Node {
    level: u32,
    bounds: Bounds,

    children: Children,

    objects: Vec<Circle>,
    // largest radius in `objects`, sizes the query margin
    max_radius: i32,
}

impl Node {
    pub(crate) fn new(level: u32, bounds: Bounds) -> Self {
        Self {
            level,
            bounds,
            children: None,
            objects: Vec::new(),
            max_radius: 0,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Circles held locally: the whole load of a leaf, the straddlers of an internal node.
    pub fn objects(&self) -> &[Circle] {
        &self.objects
    }

    pub fn children(&self) -> Option<&[Node; 4]> {
        self.children.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn max_radius(&self) -> i32 {
        self.max_radius
    }

    pub(crate) fn depth(&self) -> u32 {
        match self.children() {
            Some(children) => children.iter().map(Node::depth).max().unwrap_or(self.level),
            None => self.level,
        }
    }

    fn push(&mut self, circle: Circle) {
        self.max_radius = self.max_radius.max(circle.radius);
        self.objects.push(circle);
    }

    pub(crate) fn insert(&mut self, circle: Circle, config: &Config) {
        let quadrant = self.bounds.classify(&circle.center, circle.radius);
        match (self.children.as_mut(), quadrant) {
            (Some(children), Some(quadrant)) => {
                children[quadrant.index()].insert(circle, config);
            }
            (Some(_), None) => {
                // straddles a midline or an edge, keep it visible to every quadrant
                self.push(circle);
            }
            (None, _) => {
                self.push(circle);
                if self.objects.len() <= config.max_objects {
                    return;
                }
                if self.level < config.max_levels && self.bounds.can_split() {
                    self.split(config);
                } else {
                    trace!(
                        level = self.level,
                        objects = self.objects.len(),
                        "leaf over capacity can not split"
                    );
                }
            }
        }
    }

    fn split(&mut self, config: &Config) {
        assert!(self.children.is_none());

        let level = self.level + 1;
        let [q0, q1, q2, q3] = self.bounds.quadrants();
        let mut children = Box::new([
            Self::new(level, q0),
            Self::new(level, q1),
            Self::new(level, q2),
            Self::new(level, q3),
        ]);

        // classify everything first, then move
        let placements = self
            .objects
            .iter()
            .map(|c| self.bounds.classify(&c.center, c.radius))
            .collect::<Vec<_>>();
        let moved = placements.iter().filter(|q| q.is_some()).count();

        let mut straddlers = Vec::new();
        for (circle, quadrant) in mem::take(&mut self.objects).into_iter().zip(placements) {
            match quadrant {
                Some(quadrant) => children[quadrant.index()].insert(circle, config),
                None => straddlers.push(circle),
            }
        }

        self.max_radius = straddlers.iter().map(|c| c.radius).max().unwrap_or(0);
        self.objects = straddlers;
        self.children = Some(children);

        trace!(
            level = self.level,
            bounds = ?self.bounds,
            moved,
            straddlers = self.objects.len(),
            "split node"
        );
    }

    /// Straddlers here can only cover points within their diameter of a midline or an edge.
    fn straddlers_near(&self, point: &Point) -> bool {
        !self.objects.is_empty() && self.bounds.near_lines(point, 2 * self.max_radius as i64)
    }

    pub(crate) fn collect_candidates<'a>(&'a self, point: &Point, out: &mut Vec<&'a Circle>) {
        let children = match self.children.as_deref() {
            Some(children) => children,
            None => {
                out.extend(self.objects.iter());
                return;
            }
        };

        match self.bounds.classify(point, 0) {
            Some(quadrant) => {
                if self.straddlers_near(point) {
                    out.extend(self.objects.iter());
                }
                children[quadrant.index()].collect_candidates(point, out);
            }
            None => {
                // on a midline or outside: circles held by the children lie strictly inside
                // their quadrant, so none of them can cover the point
                out.extend(self.objects.iter());
            }
        }
    }

    pub(crate) fn locate(&self, center: &Point, radius: i32) -> &Node {
        let quadrant = self.bounds.classify(center, radius);
        match (self.children(), quadrant) {
            (Some(children), Some(quadrant)) => children[quadrant.index()].locate(center, radius),
            _ => self,
        }
    }
}
