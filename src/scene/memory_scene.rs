use super::element::*;
use super::node_id::*;
use super::scene_graph::*;
use super::wire_enums::*;

use std::collections::{HashMap};

///
/// A node stored in a memory scene
///
struct MemoryNode {
    element:        SceneElement,
    subscriptions:  Vec<(EventKind, EventCallback)>,
}

///
/// A scene graph that just stores its elements in memory
///
/// This is enough to drive scripts without a renderer attached: hosts that have their own scene graph implement
/// `SceneGraph` for it instead.
///
pub struct MemoryScene {
    /// The nodes in the scene
    nodes: HashMap<NodeId, MemoryNode>,

    /// The nodes in the order they were added
    order: Vec<NodeId>,

    /// Every update that has been applied, in order
    updates: Vec<(NodeId, ElementUpdate)>,
}

impl MemoryScene {
    ///
    /// Creates an empty scene
    ///
    pub fn new() -> MemoryScene {
        MemoryScene {
            nodes:      HashMap::new(),
            order:      vec![],
            updates:    vec![],
        }
    }

    ///
    /// Adds an element to the scene, returning the ID of the new node
    ///
    pub fn add_element(&mut self, element: SceneElement) -> NodeId {
        let node = NodeId::new();

        self.nodes.insert(node, MemoryNode { element, subscriptions: vec![] });
        self.order.push(node);

        node
    }

    ///
    /// Removes an element from the scene
    ///
    pub fn remove_element(&mut self, node: NodeId) -> Option<SceneElement> {
        self.order.retain(|existing| *existing != node);
        self.nodes.remove(&node).map(|node| node.element)
    }

    ///
    /// The nodes in this scene, in the order they were added
    ///
    pub fn nodes(&self) -> impl '_ + Iterator<Item=NodeId> {
        self.order.iter().copied()
    }

    ///
    /// The updates that have been applied to this scene, oldest first
    ///
    pub fn updates(&self) -> &[(NodeId, ElementUpdate)] {
        &self.updates
    }

    ///
    /// Raises an event on a node, calling every callback subscribed to it. Returns the number of callbacks that were called.
    ///
    pub fn fire_event(&mut self, node: NodeId, event: EventKind) -> usize {
        let Some(node) = self.nodes.get_mut(&node) else { return 0; };

        let mut num_called = 0;
        for (kind, callback) in node.subscriptions.iter_mut() {
            if *kind == event {
                callback();
                num_called += 1;
            }
        }

        num_called
    }

    ///
    /// The number of callbacks subscribed to an event on a node
    ///
    pub fn subscription_count(&self, node: NodeId, event: EventKind) -> usize {
        self.nodes.get(&node)
            .map(|node| node.subscriptions.iter().filter(|(kind, _)| *kind == event).count())
            .unwrap_or(0)
    }

    ///
    /// Retrieves the model state for a node, if it's a model
    ///
    fn model_mut(&mut self, node: NodeId) -> Option<&mut ModelState> {
        match &mut self.nodes.get_mut(&node)?.element.data {
            ElementData::Model(model)   => Some(model),
            _                           => None,
        }
    }
}

impl Default for MemoryScene {
    fn default() -> MemoryScene {
        MemoryScene::new()
    }
}

impl SceneGraph for MemoryScene {
    fn element(&self, node: NodeId) -> Option<SceneElement> {
        self.nodes.get(&node).map(|node| node.element.clone())
    }

    fn update_element(&mut self, node: NodeId, update: ElementUpdate) -> bool {
        let Some(memory_node) = self.nodes.get_mut(&node) else { return false; };

        if update.apply_to(&mut memory_node.element) {
            self.updates.push((node, update));
            true
        } else {
            false
        }
    }

    fn change_animation(&mut self, node: NodeId, index: usize, play_state: PlayState, wrap: AnimationWrap) -> bool {
        let Some(model) = self.model_mut(node) else { return false; };

        if index < model.clips.len() {
            model.current_clip  = Some(index);
            model.play_state    = play_state;
            model.wrap          = wrap;
            true
        } else {
            false
        }
    }

    fn change_animation_by_name(&mut self, node: NodeId, name: &str, play_state: PlayState, wrap: AnimationWrap) -> bool {
        let index = match self.model_mut(node) {
            Some(model) => model.clips.iter().position(|clip| clip == name),
            None        => None,
        };

        match index {
            Some(index) => self.change_animation(node, index, play_state, wrap),
            None        => false,
        }
    }

    fn subscribe(&mut self, node: NodeId, event: EventKind, callback: EventCallback) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.subscriptions.push((event, callback));
        }
    }
}
