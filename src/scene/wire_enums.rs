//!
//! Small enumerations that cross the host/guest boundary as `i32` codes
//!

///
/// How an element is displayed
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum DisplayMode {
    #[default]
    Visible,
    None,

    /// The element is not drawn, but still hides anything behind it
    Occlusion,
}

///
/// Whether a model's current animation is running
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum PlayState {
    #[default]
    Stop,
    Play,
}

///
/// What happens when an animation reaches its last frame
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum AnimationWrap {
    #[default]
    Once,
    Loop,
    PingPong,
}

///
/// The kinds of event that can be delivered to a script
///
/// `Start` is never delivered by the host: it's implied by the first `Update`.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    Start,
    Update,
    Select,
}

impl DisplayMode {
    pub fn from_code(code: i32) -> Option<DisplayMode> {
        match code {
            0 => Some(DisplayMode::Visible),
            1 => Some(DisplayMode::None),
            2 => Some(DisplayMode::Occlusion),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            DisplayMode::Visible    => 0,
            DisplayMode::None       => 1,
            DisplayMode::Occlusion  => 2,
        }
    }
}

impl PlayState {
    pub fn from_code(code: i32) -> Option<PlayState> {
        match code {
            0 => Some(PlayState::Stop),
            1 => Some(PlayState::Play),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            PlayState::Stop => 0,
            PlayState::Play => 1,
        }
    }
}

impl AnimationWrap {
    pub fn from_code(code: i32) -> Option<AnimationWrap> {
        match code {
            0 => Some(AnimationWrap::Once),
            1 => Some(AnimationWrap::Loop),
            2 => Some(AnimationWrap::PingPong),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            AnimationWrap::Once     => 0,
            AnimationWrap::Loop     => 1,
            AnimationWrap::PingPong => 2,
        }
    }
}

impl EventKind {
    pub fn from_code(code: i32) -> Option<EventKind> {
        match code {
            0 => Some(EventKind::Start),
            1 => Some(EventKind::Update),
            2 => Some(EventKind::Select),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            EventKind::Start    => 0,
            EventKind::Update   => 1,
            EventKind::Select   => 2,
        }
    }
}
