use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, from {:?} to {:?}", .0.route[0], .0.route[1])]
    DuplicateEdge(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first means the start node, last means the end node
    route: Vec<T>,
}

impl<T> DepRoute<T> {
    pub fn nodes(&self) -> &[T] {
        &self.route
    }
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, init)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in init {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Directed graph where an edge `from -> to` means `to` depends on `from`.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    nodes: BTreeSet<Node>,
    routes: Vec<(Node, Node)>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
            routes: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node);
    }

    pub fn route_to(&mut self, from: Node, to: Node) {
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.routes.push((from, to));
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }

    /// Nodes that directly depend on `node`.
    pub fn dependents(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.routes
            .iter()
            .filter(move |(from, _)| *from == node)
            .map(|(_, to)| *to)
    }

    /// Orders all nodes so every node comes after the nodes it depends on.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree: BTreeMap<Node, usize> =
            self.nodes.iter().map(|node| (*node, 0)).collect();
        for (_, to) in &self.routes {
            if let Some(degree) = in_degree.get_mut(to) {
                *degree += 1;
            }
        }

        let mut sorted = Vec::with_capacity(self.nodes.len());
        while !in_degree.is_empty() {
            let Some(node) = in_degree
                .iter()
                .find(|(_, degree)| **degree == 0)
                .map(|(node, _)| *node)
            else {
                let remaining: Vec<Node> = in_degree.keys().copied().collect();
                let route = self.find_cycle(&remaining).unwrap_or_default();
                return Err(TopologyError::CycleDetected(DepRoute { route }));
            };

            in_degree.remove(&node);
            for connected in self.direct_connected_nodes(node)? {
                if let Some(degree) = in_degree.get_mut(&connected) {
                    *degree -= 1;
                }
            }
            sorted.push(node);
        }

        Ok(sorted)
    }

    fn direct_connected_nodes(&self, node: Node) -> Result<BTreeSet<Node>, TopologyError<Node>> {
        let mut collected = BTreeSet::new();

        for (from, to) in &self.routes {
            if *from == node && !collected.insert(*to) {
                return Err(TopologyError::DuplicateEdge(DepRoute {
                    route: vec![node, *to],
                }));
            }
        }

        Ok(collected)
    }

    fn neighbors_within(&self, node: Node, nodes: &[Node]) -> std::vec::IntoIter<Node> {
        self.dependents(node)
            .filter(|n| nodes.contains(n))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn find_cycle(&self, nodes: &[Node]) -> Option<Vec<Node>> {
        // Iterative DFS; `path` mirrors the stack so the cycle can be cut out of it.
        let mut visited = BTreeSet::new();
        let mut path_set = BTreeSet::new();
        let mut path = Vec::new();
        let mut stack: Vec<(Node, std::vec::IntoIter<Node>)> = Vec::new();

        for &start_node in nodes {
            if !visited.insert(start_node) {
                continue;
            }

            stack.push((start_node, self.neighbors_within(start_node, nodes)));
            path_set.insert(start_node);
            path.push(start_node);

            while let Some((current_node, neighbors)) = stack.last_mut() {
                if let Some(neighbor) = neighbors.next() {
                    if path_set.contains(&neighbor) {
                        let pos = path.iter().position(|&x| x == neighbor)?;
                        let mut cycle = path[pos..].to_vec();
                        cycle.push(neighbor);
                        return Some(cycle);
                    }
                    if visited.insert(neighbor) {
                        path_set.insert(neighbor);
                        path.push(neighbor);
                        stack.push((neighbor, self.neighbors_within(neighbor, nodes)));
                    }
                } else {
                    let node_to_remove = *current_node;
                    stack.pop();
                    path_set.remove(&node_to_remove);
                    path.pop();
                }
            }
        }
        None
    }
}
