use crate::descriptor_table::*;
use crate::scene::*;

use std::sync::*;

///
/// A session shared between every script loaded from the same scene
///
pub type SharedSession<TScene> = Arc<Mutex<ScriptSession<TScene>>>;

///
/// The state for one scene loading session: the scene graph and the descriptor table that names its nodes
///
pub struct ScriptSession<TScene: SceneGraph> {
    table: DescriptorTable,
    scene: TScene,
}

impl<TScene: SceneGraph> ScriptSession<TScene> {
    ///
    /// Creates a new session for a scene, with an empty descriptor table
    ///
    pub fn new(scene: TScene) -> ScriptSession<TScene> {
        ScriptSession {
            table: DescriptorTable::new(),
            scene,
        }
    }

    ///
    /// Creates a new session that can be shared between scripts
    ///
    pub fn shared(scene: TScene) -> SharedSession<TScene> {
        Arc::new(Mutex::new(Self::new(scene)))
    }

    ///
    /// Registers a node from the scene, returning the descriptor that scripts can use to refer to it
    ///
    /// Returns `None` if the node is not in the scene.
    ///
    pub fn register_node(&mut self, node: NodeId) -> Option<Descriptor> {
        let element = self.scene.element(node)?;

        Some(self.table.register(node, element.id))
    }

    #[inline]
    pub fn table(&self) -> &DescriptorTable {
        &self.table
    }

    #[inline]
    pub fn scene(&self) -> &TScene {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut TScene {
        &mut self.scene
    }
}

impl ScriptSession<MemoryScene> {
    ///
    /// Adds an element to a memory scene and registers it in one step
    ///
    pub fn add_element(&mut self, element: SceneElement) -> Descriptor {
        let id      = element.id.clone();
        let node    = self.scene.add_element(element);

        self.table.register(node, id)
    }
}
