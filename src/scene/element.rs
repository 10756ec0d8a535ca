use super::values::*;
use super::wire_enums::*;

///
/// The kind of an element, as reported to the guest
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ElementKind {
    Generic,
    Model,
    Text,
    Image,
    Video,
    Geometry,
    TiledAsset,
    ScreenSpace,
}

impl ElementKind {
    ///
    /// The code used for this kind of element in the wire protocol
    ///
    /// (6 is reserved and is never returned)
    ///
    pub fn code(&self) -> i32 {
        use ElementKind::*;

        match self {
            Generic     => 1,
            Model       => 2,
            Text        => 3,
            Image       => 4,
            Video       => 5,
            Geometry    => 7,
            TiledAsset  => 8,
            ScreenSpace => 12,
        }
    }
}

///
/// Animation state for a model element
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ModelState {
    /// Names of the animation clips the model contains
    pub clips:          Vec<String>,

    /// Index into `clips` of the current animation, if one has been chosen
    pub current_clip:   Option<usize>,

    pub play_state:     PlayState,
    pub wrap:           AnimationWrap,
}

///
/// Content of a text element
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TextState {
    pub text:       String,
    pub background: Rgba,
}

///
/// Content of a geometry element
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct GeometryState {
    pub color: Rgba,
}

///
/// The variant-specific data for an element
///
/// Each variant carries only the state it actually supports, so the ABI decides whether an attribute is
/// available by matching on this rather than by probing for fields.
///
#[derive(Clone, PartialEq, Debug)]
pub enum ElementData {
    Generic,
    Model(ModelState),
    Text(TextState),
    Image,
    Video,
    Geometry(GeometryState),
    TiledAsset,
    ScreenSpace,
}

impl ElementData {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementData::Generic        => ElementKind::Generic,
            ElementData::Model(_)       => ElementKind::Model,
            ElementData::Text(_)        => ElementKind::Text,
            ElementData::Image          => ElementKind::Image,
            ElementData::Video          => ElementKind::Video,
            ElementData::Geometry(_)    => ElementKind::Geometry,
            ElementData::TiledAsset     => ElementKind::TiledAsset,
            ElementData::ScreenSpace    => ElementKind::ScreenSpace,
        }
    }

    ///
    /// The color an element exposes as its 'background', if it has one
    ///
    pub fn background_color(&self) -> Option<Rgba> {
        match self {
            ElementData::Text(text)         => Some(text.background),
            ElementData::Geometry(geometry) => Some(geometry.color),
            _                               => None,
        }
    }
}

///
/// A read view of an element in the scene graph
///
#[derive(Clone, PartialEq, Debug)]
pub struct SceneElement {
    pub id:         Option<String>,
    pub display:    DisplayMode,
    pub position:   Vec3,
    pub rotation:   Quaternion,
    pub scale:      Scale,
    pub data:       ElementData,
}

impl SceneElement {
    ///
    /// Creates an element with a default transform
    ///
    pub fn new(id: Option<&str>, data: ElementData) -> SceneElement {
        SceneElement {
            id:         id.map(|id| id.to_string()),
            display:    DisplayMode::default(),
            position:   Vec3::default(),
            rotation:   Quaternion::default(),
            scale:      Scale::default(),
            data,
        }
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.data.kind()
    }
}

///
/// A merged update to an element
///
/// The ABI always fills in `id` with the element's existing id alongside the one field that changed, so a
/// host can route updates by id.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ElementUpdate {
    pub id:         Option<String>,
    pub display:    Option<DisplayMode>,
    pub position:   Option<Vec3>,
    pub rotation:   Option<Quaternion>,
    pub scale:      Option<Scale>,
    pub text:       Option<String>,
    pub background: Option<Rgba>,
    pub play_state: Option<PlayState>,
}

impl ElementUpdate {
    ///
    /// An update that changes nothing, keyed by the id of the specified element
    ///
    pub fn for_element(element: &SceneElement) -> ElementUpdate {
        ElementUpdate {
            id: element.id.clone(),
            ..ElementUpdate::default()
        }
    }

    ///
    /// Applies this update to an element, returning false if it contains a field the element doesn't support
    ///
    /// Unsupported updates leave the element unchanged.
    ///
    pub fn apply_to(&self, element: &mut SceneElement) -> bool {
        // Check that everything can be applied before changing anything
        let needs_text  = self.text.is_some() || self.background.is_some();
        let needs_model = self.play_state.is_some();

        match (&element.data, needs_text, needs_model) {
            (ElementData::Text(_), _, false)    => { }
            (ElementData::Model(_), false, _)   => { }
            (_, false, false)                   => { }
            _                                   => { return false; }
        }

        if let Some(id) = &self.id              { element.id = Some(id.clone()); }
        if let Some(display) = self.display     { element.display = display; }
        if let Some(position) = self.position   { element.position = position; }
        if let Some(rotation) = self.rotation   { element.rotation = rotation; }
        if let Some(scale) = self.scale         { element.scale = scale; }

        match &mut element.data {
            ElementData::Text(text) => {
                if let Some(new_text) = &self.text          { text.text = new_text.clone(); }
                if let Some(background) = self.background   { text.background = background; }
            }

            ElementData::Model(model) => {
                if let Some(play_state) = self.play_state   { model.play_state = play_state; }
            }

            _ => { }
        }

        true
    }
}
