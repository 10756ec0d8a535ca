use uuid::*;

///
/// Identifies a node in the host's scene graph
///
/// Guest code never sees these: the descriptor table maps them to small integer descriptors.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(Uuid);

impl NodeId {
    ///
    /// Creates a new, unique, node ID
    ///
    pub fn new() -> NodeId {
        NodeId(Uuid::new_v4())
    }

    ///
    /// Creates a node ID with a well-known UUID
    ///
    pub const fn well_known(uuid: Uuid) -> NodeId {
        NodeId(uuid)
    }
}

impl Default for NodeId {
    fn default() -> NodeId {
        NodeId::new()
    }
}
