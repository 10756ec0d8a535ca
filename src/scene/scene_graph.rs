use super::element::*;
use super::node_id::*;
use super::wire_enums::*;

///
/// A callback installed on a scene node, called when the node raises an event
///
pub type EventCallback = Box<dyn Send + FnMut()>;

///
/// The host's scene graph, as seen by the scripting bridge
///
/// The bridge never stores references to nodes: it only ever holds `NodeId`s, and reads a fresh view of the
/// node whenever a guest asks for an attribute.
///
pub trait SceneGraph {
    ///
    /// Retrieves a view of a node in the scene graph
    ///
    fn element(&self, node: NodeId) -> Option<SceneElement>;

    ///
    /// Applies a merged update to a node, returning false if the update could not be applied
    ///
    fn update_element(&mut self, node: NodeId, update: ElementUpdate) -> bool;

    ///
    /// Changes the current animation of a model node by index
    ///
    fn change_animation(&mut self, node: NodeId, index: usize, play_state: PlayState, wrap: AnimationWrap) -> bool;

    ///
    /// Changes the current animation of a model node by clip name
    ///
    fn change_animation_by_name(&mut self, node: NodeId, name: &str, play_state: PlayState, wrap: AnimationWrap) -> bool;

    ///
    /// Installs a callback to be called whenever a node raises an event of the specified kind
    ///
    fn subscribe(&mut self, node: NodeId, event: EventKind, callback: EventCallback);
}
