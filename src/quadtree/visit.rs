use super::bounds::Bounds;
use super::node::Node;
use crate::Circle;

/// Callbacks for [`Quadtree::traverse`](super::Quadtree::traverse), e.g. to draw the
/// partition.
pub trait Visitor {
    fn circle(&mut self, level: u32, circle: &Circle);
    fn leaf(&mut self, level: u32, bounds: &Bounds);
    fn branch(&mut self, level: u32, bounds: &Bounds);
}

pub(crate) fn traverse<V>(root: &Node, visitor: &mut V)
where
    V: Visitor,
{
    let mut to_process = vec![root];

    while let Some(node) = to_process.pop() {
        match node.children() {
            Some(children) => {
                // reversed so quadrant 0 is visited first
                to_process.extend(children.iter().rev());
                visitor.branch(node.level(), node.bounds());
            }
            None => visitor.leaf(node.level(), node.bounds()),
        }
        for circle in node.objects() {
            visitor.circle(node.level(), circle);
        }
    }
}
