use crate::scene::*;

use std::collections::{HashMap};

/// The first descriptor assigned in a session (lower values are left free so they can't be confused with stdio handles)
pub const FIRST_DESCRIPTOR: i32 = 10;

///
/// A handle that a guest uses to refer to a node in the scene
///
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Descriptor(pub i32);

///
/// An entry in the descriptor table
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ElementInfo {
    /// The id of the node at the time it was registered
    pub id: Option<String>,

    /// The node in the scene graph
    pub node: NodeId,

    /// The descriptor assigned to the node
    pub descriptor: Descriptor,
}

///
/// Assigns descriptors to scene nodes so guest code never has to hold a reference to a host object
///
/// The table only ever grows: descriptors are assigned in increasing order and are never reused within a
/// session, even after the node they refer to has been removed from the scene.
///
pub struct DescriptorTable {
    /// The registered elements, in the order they were registered
    entries: Vec<ElementInfo>,

    /// Index into `entries` for each descriptor
    by_descriptor: HashMap<Descriptor, usize>,

    /// Index into `entries` for each node
    by_node: HashMap<NodeId, usize>,

    /// Index into `entries` of the first element registered with each id
    by_id: HashMap<String, usize>,

    /// The descriptor to assign to the next node
    next_descriptor: i32,
}

impl DescriptorTable {
    ///
    /// Creates an empty descriptor table
    ///
    pub fn new() -> DescriptorTable {
        DescriptorTable {
            entries:            vec![],
            by_descriptor:      HashMap::new(),
            by_node:            HashMap::new(),
            by_id:              HashMap::new(),
            next_descriptor:    FIRST_DESCRIPTOR,
        }
    }

    ///
    /// Registers a node, returning its new descriptor
    ///
    /// A node is only ever registered once: registering it again returns the descriptor it already has.
    ///
    pub fn register(&mut self, node: NodeId, id: Option<String>) -> Descriptor {
        if let Some(existing) = self.resolve_descriptor_by_node(node) {
            return existing;
        }

        let descriptor  = Descriptor(self.next_descriptor);
        let index       = self.entries.len();
        self.next_descriptor += 1;

        self.by_descriptor.insert(descriptor, index);
        self.by_node.insert(node, index);
        if let Some(id) = &id {
            self.by_id.entry(id.clone()).or_insert(index);
        }

        self.entries.push(ElementInfo { id, node, descriptor });

        descriptor
    }

    ///
    /// Finds the node that a descriptor refers to
    ///
    pub fn resolve_by_descriptor(&self, descriptor: Descriptor) -> Option<NodeId> {
        self.by_descriptor.get(&descriptor).map(|index| self.entries[*index].node)
    }

    ///
    /// Finds the first element registered with the specified id
    ///
    pub fn resolve_by_id(&self, id: &str) -> Option<&ElementInfo> {
        self.by_id.get(id).map(|index| &self.entries[*index])
    }

    ///
    /// Finds the descriptor assigned to a node
    ///
    pub fn resolve_descriptor_by_node(&self, node: NodeId) -> Option<Descriptor> {
        self.by_node.get(&node).map(|index| self.entries[*index].descriptor)
    }

    ///
    /// The number of elements that have been registered
    ///
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    ///
    /// A snapshot of every registered element, in registration order
    ///
    pub fn all(&self) -> Vec<ElementInfo> {
        self.entries.clone()
    }
}

impl Default for DescriptorTable {
    fn default() -> DescriptorTable {
        DescriptorTable::new()
    }
}
