use crate::error::*;

///
/// The scene ABI: the functions that a guest can import to inspect and change the scene
///
/// Parameters are the raw values passed by the guest. Pointers are offsets into the guest's linear memory,
/// descriptors are values handed out by the descriptor table, and enumerations are passed as their wire
/// codes. Every call reports its outcome as an `AbiStatus`.
///
pub trait SceneAbi {
    /// Writes the length in bytes of an element's id (0 if it has none)
    fn get_id_len(&mut self, descriptor: i32, out_len_ptr: u32) -> AbiStatus;

    /// Writes an element's id into a buffer of `out_len` bytes
    fn get_id(&mut self, descriptor: i32, out_ptr: u32, out_len: i32) -> AbiStatus;

    fn get_display(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus;
    fn set_display(&mut self, descriptor: i32, display: i32) -> AbiStatus;

    fn get_position(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus;
    fn set_position(&mut self, descriptor: i32, in_ptr: u32) -> AbiStatus;

    fn get_rotation(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus;
    fn set_rotation(&mut self, descriptor: i32, in_ptr: u32) -> AbiStatus;

    fn get_scale(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus;
    fn set_scale(&mut self, descriptor: i32, in_ptr: u32) -> AbiStatus;

    fn get_text_len(&mut self, descriptor: i32, out_len_ptr: u32) -> AbiStatus;
    fn get_text(&mut self, descriptor: i32, out_ptr: u32, out_len: i32) -> AbiStatus;
    fn set_text(&mut self, descriptor: i32, in_ptr: u32, in_len: i32) -> AbiStatus;

    fn get_background_color(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus;
    fn set_background_color(&mut self, descriptor: i32, in_ptr: u32) -> AbiStatus;

    /// Changes the animation a model is playing, by index
    fn change_anim(&mut self, descriptor: i32, index: i32, play_state: i32, wrap: i32) -> AbiStatus;

    /// Changes the animation a model is playing, by clip name
    fn change_anim_by_name(&mut self, descriptor: i32, name_ptr: u32, name_len: i32, play_state: i32, wrap: i32) -> AbiStatus;

    fn get_anim_play_state(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus;
    fn set_anim_play_state(&mut self, descriptor: i32, play_state: i32) -> AbiStatus;

    /// Writes the index of a model's current animation (-1 if no animation has been chosen)
    fn get_current_anim(&mut self, descriptor: i32, out_ptr: u32) -> AbiStatus;

    /// Writes the number of elements in the scene
    fn get_element_count(&mut self, out_ptr: u32) -> AbiStatus;

    ///
    /// Copies up to `array_len` 8-byte `(descriptor, kind)` records to `array_ptr`, and writes the total number of
    /// elements (which may be more than were copied) to `count_ptr`
    ///
    fn get_elements(&mut self, array_ptr: u32, array_len: i32, count_ptr: u32) -> AbiStatus;

    /// Writes the `(descriptor, kind)` record for the first element with the specified id
    fn get_element_by_id(&mut self, id_ptr: u32, id_len: i32, out_ptr: u32) -> AbiStatus;

    ///
    /// Asks for the guest's event export to be called whenever an element raises an event
    ///
    /// Registering the same event twice means the guest is called twice when it fires.
    ///
    fn register_event(&mut self, descriptor: i32, event_kind: i32, user_data: i32) -> AbiStatus;
}
