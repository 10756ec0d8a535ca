use super::element_event::*;
use super::scene_abi::*;
use crate::codec::*;
use crate::descriptor_table::*;
use crate::error::*;
use crate::memory::*;
use crate::scene::*;
use crate::session::*;

use log::*;

///
/// Implements the scene ABI against a guest's memory and a script session
///
/// An adapter is created for the duration of a single call from the guest.
///
pub struct SceneAbiAdapter<'a, TMemory: ?Sized + GuestMemory, TScene: SceneGraph> {
    /// The guest's linear memory
    memory: &'a mut TMemory,

    /// The descriptor table and scene
    session: &'a mut ScriptSession<TScene>,

    /// Where event callbacks installed by this guest send their events
    events: &'a ElementEventSender,
}

///
/// Converts a guest-supplied buffer length to a `usize`, rejecting negative values
///
#[inline]
fn buffer_len(len: i32) -> Result<usize, AbiStatus> {
    usize::try_from(len).map_err(|_| AbiStatus::InvalidArgument)
}

///
/// Retrieves the animation state of an element, if it's a model
///
#[inline]
fn model_state(element: &SceneElement) -> Result<&ModelState, AbiStatus> {
    match &element.data {
        ElementData::Model(model)   => Ok(model),
        _                           => Err(AbiStatus::UnsupportedOperation),
    }
}

///
/// Retrieves the text state of an element, if it's a text element
///
#[inline]
fn text_state(element: &SceneElement) -> Result<&TextState, AbiStatus> {
    match &element.data {
        ElementData::Text(text) => Ok(text),
        _                       => Err(AbiStatus::UnsupportedOperation),
    }
}

#[inline]
fn decode<T>(value: Option<T>) -> Result<T, AbiStatus> {
    value.ok_or(AbiStatus::InvalidArgument)
}

impl<'a, TMemory: ?Sized + GuestMemory, TScene: SceneGraph> SceneAbiAdapter<'a, TMemory, TScene> {
    ///
    /// Creates an adapter for a call from a guest
    ///
    pub fn new(memory: &'a mut TMemory, session: &'a mut ScriptSession<TScene>, events: &'a ElementEventSender) -> Self {
        SceneAbiAdapter { memory, session, events }
    }

    ///
    /// Finds the node a descriptor refers to, along with a view of it
    ///
    fn resolve(&self, descriptor: i32) -> Result<(NodeId, SceneElement), AbiStatus> {
        let node    = self.session.table().resolve_by_descriptor(Descriptor(descriptor)).ok_or(AbiStatus::ElementNotFound)?;
        let element = self.session.scene().element(node).ok_or(AbiStatus::ElementNotFound)?;

        Ok((node, element))
    }

    ///
    /// Sends a single-field update to a node, keyed by its existing id
    ///
    fn apply(&mut self, node: NodeId, element: &SceneElement, update: impl FnOnce(&mut ElementUpdate)) -> Result<(), AbiStatus> {
        let mut element_update = ElementUpdate::for_element(element);
        update(&mut element_update);

        if self.session.scene_mut().update_element(node, element_update) {
            Ok(())
        } else {
            warn!("Scene refused an update from a script to element {:?}", element.id);
            Err(AbiStatus::UnknownError)
        }
    }

    #[inline]
    fn write_out<TValue: WireValue>(&mut self, ptr: u32, value: &TValue) -> Result<(), AbiStatus> {
        Ok(write_value(self.memory, ptr, value)?)
    }

    #[inline]
    fn read_in<TValue: WireValue>(&self, ptr: u32) -> Result<TValue, AbiStatus> {
        Ok(read_value(&*self.memory, ptr)?)
    }

    ///
    /// The `(descriptor, kind)` records for every registered element that is still in the scene
    ///
    fn element_records(&self) -> Vec<ElementRecord> {
        self.session.table().all().into_iter()
            .filter_map(|info| {
                let element = self.session.scene().element(info.node)?;
                Some(ElementRecord { descriptor: info.descriptor.0, kind: element.kind().code() })
            })
            .collect()
    }

    ///
    /// Copies element records to the guest, returning the number of records that were copied
    ///
    pub fn copy_element_records(&mut self, array_ptr: u32, array_len: i32, count_ptr: u32) -> Result<usize, AbiStatus> {
        let array_len   = buffer_len(array_len)?;
        let records     = self.element_records();
        let total       = i32::try_from(records.len()).map_err(|_| AbiStatus::UnknownError)?;
        let num_copied  = records.len().min(array_len);

        // Check the count can be written before writing the array, so a failure leaves memory unchanged
        check_bounds(self.memory.size(), count_ptr, 4)?;

        // A query for the count alone doesn't touch the array
        if num_copied > 0 {
            write_array(self.memory, array_ptr, &records[0..num_copied])?;
        }
        write_i32(self.memory, count_ptr, total)?;

        Ok(num_copied)
    }

    fn try_get_id_len(&mut self, descriptor: i32, out_len_ptr: u32) -> Result<(), AbiStatus> {
        let (_, element) = self.resolve(descriptor)?;

        Ok(write_string_len(self.memory, out_len_ptr, element.id.as_deref().unwrap_or(""))?)
    }

    fn try_get_id(&mut self, descriptor: i32, out_ptr: u32, out_len: i32) -> Result<(), AbiStatus> {
        let (_, element)    = self.resolve(descriptor)?;
        let out_len         = buffer_len(out_len)?;

        Ok(write_string(self.memory, out_ptr, out_len, element.id.as_deref().unwrap_or(""))?)
    }

    fn try_get_display(&mut self, descriptor: i32, out_ptr: u32) -> Result<(), AbiStatus> {
        let (_, element) = self.resolve(descriptor)?;

        Ok(write_i32(self.memory, out_ptr, element.display.code())?)
    }

    fn try_set_display(&mut self, descriptor: i32, display: i32) -> Result<(), AbiStatus> {
        let (node, element) = self.resolve(descriptor)?;
        let display         = decode(DisplayMode::from_code(display))?;

        self.apply(node, &element, |update| update.display = Some(display))
    }

    fn try_get_position(&mut self, descriptor: i32, out_ptr: u32) -> Result<(), AbiStatus> {
        let (_, element) = self.resolve(descriptor)?;

        self.write_out(out_ptr, &element.position)
    }

    fn try_set_position(&mut self, descriptor: i32, in_ptr: u32) -> Result<(), AbiStatus> {
        let (node, element) = self.resolve(descriptor)?;
        let position        = self.read_in::<Vec3>(in_ptr)?;

        self.apply(node, &element, |update| update.position = Some(position))
    }

    fn try_get_rotation(&mut self, descriptor: i32, out_ptr: u32) -> Result<(), AbiStatus> {
        let (_, element) = self.resolve(descriptor)?;

        self.write_out(out_ptr, &element.rotation)
    }

    fn try_set_rotation(&mut self, descriptor: i32, in_ptr: u32) -> Result<(), AbiStatus> {
        let (node, element) = self.resolve(descriptor)?;
        let rotation        = self.read_in::<Quaternion>(in_ptr)?;

        self.apply(node, &element, |update| update.rotation = Some(rotation))
    }

    fn try_get_scale(&mut self, descriptor: i32, out_ptr: u32) -> Result<(), AbiStatus> {
        let (_, element) = self.resolve(descriptor)?;

        self.write_out(out_ptr, &element.scale.as_vec3())
    }

    fn try_set_scale(&mut self, descriptor: i32, in_ptr: u32) -> Result<(), AbiStatus> {
        let (node, element) = self.resolve(descriptor)?;
        let scale           = self.read_in::<Vec3>(in_ptr)?;

        self.apply(node, &element, |update| update.scale = Some(Scale::Axes(scale)))
    }

    fn try_get_text_len(&mut self, descriptor: i32, out_len_ptr: u32) -> Result<(), AbiStatus> {
        let (_, element)    = self.resolve(descriptor)?;
        let text            = text_state(&element)?;

        Ok(write_string_len(self.memory, out_len_ptr, &text.text)?)
    }

    fn try_get_text(&mut self, descriptor: i32, out_ptr: u32, out_len: i32) -> Result<(), AbiStatus> {
        let (_, element)    = self.resolve(descriptor)?;
        let text            = text_state(&element)?;
        let out_len         = buffer_len(out_len)?;

        Ok(write_string(self.memory, out_ptr, out_len, &text.text)?)
    }

    fn try_set_text(&mut self, descriptor: i32, in_ptr: u32, in_len: i32) -> Result<(), AbiStatus> {
        let (node, element) = self.resolve(descriptor)?;
        text_state(&element)?;

        let in_len          = buffer_len(in_len)?;
        let new_text        = read_utf8(&*self.memory, in_ptr, in_len)?;

        self.apply(node, &element, |update| update.text = Some(new_text))
    }

    fn try_get_background_color(&mut self, descriptor: i32, out_ptr: u32) -> Result<(), AbiStatus> {
        let (_, element)    = self.resolve(descriptor)?;
        let color           = element.data.background_color().ok_or(AbiStatus::UnsupportedOperation)?;

        self.write_out(out_ptr, &color)
    }

    fn try_set_background_color(&mut self, descriptor: i32, in_ptr: u32) -> Result<(), AbiStatus> {
        let (node, element) = self.resolve(descriptor)?;
        text_state(&element)?;

        let color           = self.read_in::<Rgba>(in_ptr)?;

        self.apply(node, &element, |update| update.background = Some(color))
    }

    fn try_change_anim(&mut self, descriptor: i32, index: i32, play_state: i32, wrap: i32) -> Result<(), AbiStatus> {
        let (node, element) = self.resolve(descriptor)?;
        model_state(&element)?;

        let index           = usize::try_from(index).map_err(|_| AbiStatus::InvalidArgument)?;
        let play_state      = decode(PlayState::from_code(play_state))?;
        let wrap            = decode(AnimationWrap::from_code(wrap))?;

        if self.session.scene_mut().change_animation(node, index, play_state, wrap) {
            Ok(())
        } else {
            Err(AbiStatus::InvalidArgument)
        }
    }

    fn try_change_anim_by_name(&mut self, descriptor: i32, name_ptr: u32, name_len: i32, play_state: i32, wrap: i32) -> Result<(), AbiStatus> {
        let (node, element) = self.resolve(descriptor)?;
        model_state(&element)?;

        let name_len        = buffer_len(name_len)?;
        let name            = read_utf8(&*self.memory, name_ptr, name_len)?;
        let play_state      = decode(PlayState::from_code(play_state))?;
        let wrap            = decode(AnimationWrap::from_code(wrap))?;

        if self.session.scene_mut().change_animation_by_name(node, &name, play_state, wrap) {
            Ok(())
        } else {
            Err(AbiStatus::InvalidArgument)
        }
    }

    fn try_get_anim_play_state(&mut self, descriptor: i32, out_ptr: u32) -> Result<(), AbiStatus> {
        let (_, element)    = self.resolve(descriptor)?;
        let model           = model_state(&element)?;

        Ok(write_i32(self.memory, out_ptr, model.play_state.code())?)
    }

    fn try_set_anim_play_state(&mut self, descriptor: i32, play_state: i32) -> Result<(), AbiStatus> {
        let (node, element) = self.resolve(descriptor)?;
        model_state(&element)?;

        let play_state      = decode(PlayState::from_code(play_state))?;

        self.apply(node, &element, |update| update.play_state = Some(play_state))
    }

    fn try_get_current_anim(&mut self, descriptor: i32, out_ptr: u32) -> Result<(), AbiStatus> {
        let (_, element)    = self.resolve(descriptor)?;
        let model           = model_state(&element)?;
        let index           = model.current_clip.and_then(|index| i32::try_from(index).ok()).unwrap_or(-1);

        Ok(write_i32(self.memory, out_ptr, index)?)
    }

    fn try_get_element_count(&mut self, out_ptr: u32) -> Result<(), AbiStatus> {
        let count = i32::try_from(self.element_records().len()).map_err(|_| AbiStatus::UnknownError)?;

        Ok(write_i32(self.memory, out_ptr, count)?)
    }

    fn try_get_element_by_id(&mut self, id_ptr: u32, id_len: i32, out_ptr: u32) -> Result<(), AbiStatus> {
        let id_len  = buffer_len(id_len)?;
        let id      = read_utf8(&*self.memory, id_ptr, id_len)?;

        let info    = self.session.table().resolve_by_id(&id).ok_or(AbiStatus::ElementNotFound)?;
        let element = self.session.scene().element(info.node).ok_or(AbiStatus::ElementNotFound)?;
        let record  = ElementRecord { descriptor: info.descriptor.0, kind: element.kind().code() };

        self.write_out(out_ptr, &record)
    }

    fn try_register_event(&mut self, descriptor: i32, event_kind: i32, user_data: i32) -> Result<(), AbiStatus> {
        let (node, element) = self.resolve(descriptor)?;
        let event           = decode(EventKind::from_code(event_kind))?;

        let element_event   = ElementEvent { descriptor, element_kind: element.kind().code(), event_kind: event.code(), user_data };
        let events          = self.events.clone();

        self.session.scene_mut().subscribe(node, event, Box::new(move || {
            // The script may have been dropped, in which case there's nothing to deliver the event to
            events.unbounded_send(element_event).ok();
        }));

        Ok(())
    }
}

impl<'a, TMemory: ?Sized + GuestMemory, TScene: SceneGraph> SceneAbi for SceneAbiAdapter<'a, TMemory, TScene> {
    fn get_id_len(&mut self, descriptor: i32, out_len_ptr: u32) -> AbiStatus                    { self.try_get_id_len(descriptor, out_len_ptr).into() }
    fn get_id(&mut self, descriptor: i32, out_ptr: u32, out_len: i32) -> AbiStatus              { self.try_get_id(descriptor, out_ptr, out_len).into() }
    fn get_display(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus                       { self.try_get_display(descriptor, out_ptr).into() }
    fn set_display(&mut self, descriptor: i32, display: i32) -> AbiStatus                       { self.try_set_display(descriptor, display).into() }
    fn get_position(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus                      { self.try_get_position(descriptor, out_ptr).into() }
    fn set_position(&mut self, descriptor: i32, in_ptr: u32) -> AbiStatus                       { self.try_set_position(descriptor, in_ptr).into() }
    fn get_rotation(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus                      { self.try_get_rotation(descriptor, out_ptr).into() }
    fn set_rotation(&mut self, descriptor: i32, in_ptr: u32) -> AbiStatus                       { self.try_set_rotation(descriptor, in_ptr).into() }
    fn get_scale(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus                         { self.try_get_scale(descriptor, out_ptr).into() }
    fn set_scale(&mut self, descriptor: i32, in_ptr: u32) -> AbiStatus                          { self.try_set_scale(descriptor, in_ptr).into() }
    fn get_text_len(&mut self, descriptor: i32, out_len_ptr: u32) -> AbiStatus                  { self.try_get_text_len(descriptor, out_len_ptr).into() }
    fn get_text(&mut self, descriptor: i32, out_ptr: u32, out_len: i32) -> AbiStatus            { self.try_get_text(descriptor, out_ptr, out_len).into() }
    fn set_text(&mut self, descriptor: i32, in_ptr: u32, in_len: i32) -> AbiStatus              { self.try_set_text(descriptor, in_ptr, in_len).into() }
    fn get_background_color(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus              { self.try_get_background_color(descriptor, out_ptr).into() }
    fn set_background_color(&mut self, descriptor: i32, in_ptr: u32) -> AbiStatus              { self.try_set_background_color(descriptor, in_ptr).into() }
    fn change_anim(&mut self, descriptor: i32, index: i32, play_state: i32, wrap: i32) -> AbiStatus { self.try_change_anim(descriptor, index, play_state, wrap).into() }
    fn get_anim_play_state(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus               { self.try_get_anim_play_state(descriptor, out_ptr).into() }
    fn set_anim_play_state(&mut self, descriptor: i32, play_state: i32) -> AbiStatus            { self.try_set_anim_play_state(descriptor, play_state).into() }
    fn get_current_anim(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus                  { self.try_get_current_anim(descriptor, out_ptr).into() }
    fn get_element_count(&mut self, out_ptr: u32) -> AbiStatus                                  { self.try_get_element_count(out_ptr).into() }
    fn get_elements(&mut self, array_ptr: u32, array_len: i32, count_ptr: u32) -> AbiStatus     { self.copy_element_records(array_ptr, array_len, count_ptr).into() }
    fn get_element_by_id(&mut self, id_ptr: u32, id_len: i32, out_ptr: u32) -> AbiStatus        { self.try_get_element_by_id(id_ptr, id_len, out_ptr).into() }
    fn register_event(&mut self, descriptor: i32, event_kind: i32, user_data: i32) -> AbiStatus { self.try_register_event(descriptor, event_kind, user_data).into() }

    fn change_anim_by_name(&mut self, descriptor: i32, name_ptr: u32, name_len: i32, play_state: i32, wrap: i32) -> AbiStatus {
        self.try_change_anim_by_name(descriptor, name_ptr, name_len, play_state, wrap).into()
    }
}
