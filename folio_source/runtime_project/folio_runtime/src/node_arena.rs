use folio_ids::NodeID;
use folio_nodes::Node;

/// Generational slot storage for every mounted node.
///
/// Removing a node bumps its slot generation, so an ID held past unmount
/// resolves to nothing instead of to whatever reuses the slot.
pub struct NodeArena {
    nodes: Vec<Option<Node>>,
    generations: Vec<u32>,
    free_indices: Vec<usize>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        // Index 0 is the nil sentinel.
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        let mut generations = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(None);
        generations.push(0);
        Self {
            nodes,
            generations,
            free_indices: Vec::new(),
        }
    }

    /// Stores `node` and rewrites `node.id` to the slot it landed in.
    pub fn insert(&mut self, mut node: Node) -> NodeID {
        if let Some(index) = self.free_indices.pop() {
            let id = NodeID::from_parts(index as u32, self.generations[index]);
            node.id = id;
            self.nodes[index] = Some(node);
            return id;
        }

        let index = self.nodes.len();
        let id = NodeID::from_parts(index as u32, 0);
        node.id = id;
        self.nodes.push(Some(node));
        self.generations.push(0);
        id
    }

    fn slot(&self, id: NodeID) -> Option<usize> {
        let index = id.index() as usize;
        if id.is_nil() || index == 0 || index >= self.nodes.len() {
            return None;
        }
        (self.generations[index] == id.generation()).then_some(index)
    }

    pub fn get(&self, id: NodeID) -> Option<&Node> {
        self.slot(id).and_then(|i| self.nodes[i].as_ref())
    }

    pub fn get_mut(&mut self, id: NodeID) -> Option<&mut Node> {
        self.slot(id).and_then(|i| self.nodes[i].as_mut())
    }

    pub fn remove(&mut self, id: NodeID) -> Option<Node> {
        let index = self.slot(id)?;
        self.generations[index] = self.generations[index].wrapping_add(1);
        let removed = self.nodes[index].take();
        if removed.is_some() {
            self.free_indices.push(index);
        }
        removed
    }

    pub fn contains(&self, id: NodeID) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(index, node)| {
                node.as_ref()
                    .map(|n| (NodeID::from_parts(index as u32, self.generations[index]), n))
            })
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|n| n.is_none())
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
