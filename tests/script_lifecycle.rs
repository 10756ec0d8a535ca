use flo_scene_script::*;

use futures::executor;

///
/// Records a code for each lifecycle export it's called through, as a list of i32s starting at address 256
///
const RECORD_CALLS: &str = r#"
(module
    (memory (export "memory") 1)
    (global $count (mut i32) (i32.const 0))

    (func $record (param $code i32)
        (i32.store (i32.add (i32.const 256) (i32.mul (global.get $count) (i32.const 4))) (local.get $code))
        (global.set $count (i32.add (global.get $count) (i32.const 1))))

    (func (export "_start")     (call $record (i32.const 1)))
    (func (export "on_start")   (call $record (i32.const 2)))
    (func (export "on_update")  (call $record (i32.const 3)))
    (func (export "on_select")  (call $record (i32.const 4))))
"#;

fn script(wat: &str) -> ScriptComponent<MemoryScene> {
    script_with_scene(wat, MemoryScene::new())
}

fn script_with_scene(wat: &str, scene: MemoryScene) -> ScriptComponent<MemoryScene> {
    ScriptComponent::new(ScriptSession::shared(scene), BytesModuleSource::new(wat), ScriptConfig::default())
}

fn loaded_script(wat: &str) -> ScriptComponent<MemoryScene> {
    let mut script = script(wat);
    executor::block_on(async { script.instantiate().await.unwrap() });

    script
}

///
/// Reads `count` i32 values from the guest memory
///
fn read_i32s(script: &ScriptComponent<MemoryScene>, offset: u32, count: usize) -> Vec<i32> {
    script.read_guest_memory(offset, count * 4).unwrap()
        .chunks(4)
        .map(|bytes| i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect()
}

///
/// The lifecycle calls recorded by `RECORD_CALLS`
///
fn recorded_calls(script: &ScriptComponent<MemoryScene>) -> Vec<i32> {
    read_i32s(script, 256, 16).into_iter()
        .take_while(|code| *code != 0)
        .collect()
}

#[test]
fn instantiate_script() {
    let mut script = script(RECORD_CALLS);
    assert!(script.state() == ScriptState::Unloaded);

    executor::block_on(async { script.instantiate().await.unwrap() });

    assert!(script.state() == ScriptState::Initialized { started: false });
    assert!(recorded_calls(&script).is_empty());
}

#[test]
fn first_update_starts_the_script() {
    let mut script = loaded_script(RECORD_CALLS);

    script.dispatch(ScriptEvent::Update).unwrap();

    assert!(recorded_calls(&script) == vec![1, 2, 3]);
    assert!(script.state() == ScriptState::Initialized { started: true });
}

#[test]
fn later_updates_only_call_on_update() {
    let mut script = loaded_script(RECORD_CALLS);

    script.dispatch(ScriptEvent::Update).unwrap();
    script.dispatch(ScriptEvent::Update).unwrap();
    script.dispatch(ScriptEvent::Update).unwrap();

    assert!(recorded_calls(&script) == vec![1, 2, 3, 3, 3]);
}

#[test]
fn select_before_start_is_dropped() {
    let mut script = loaded_script(RECORD_CALLS);

    script.dispatch(ScriptEvent::Select).unwrap();
    assert!(recorded_calls(&script).is_empty());
    assert!(script.state() == ScriptState::Initialized { started: false });

    script.dispatch(ScriptEvent::Update).unwrap();
    script.dispatch(ScriptEvent::Select).unwrap();

    assert!(recorded_calls(&script) == vec![1, 2, 3, 4]);
}

#[test]
fn missing_exports_are_skipped() {
    let mut script = loaded_script(r#"(module (memory (export "memory") 1))"#);

    script.dispatch(ScriptEvent::Update).unwrap();
    script.dispatch(ScriptEvent::Select).unwrap();

    assert!(script.state() == ScriptState::Initialized { started: true });
}

#[test]
fn wrongly_typed_export_is_ignored() {
    let mut script = loaded_script(r#"
        (module
            (memory (export "memory") 1)
            (func (export "on_update") (param i32) (i32.store (i32.const 256) (i32.const 7))))
    "#);

    script.dispatch(ScriptEvent::Update).unwrap();

    assert!(read_i32s(&script, 256, 1) == vec![0]);
}

#[test]
fn dispatch_before_instantiate_does_nothing() {
    let mut script = script(RECORD_CALLS);

    assert!(script.dispatch(ScriptEvent::Update) == Ok(()));
    assert!(script.deliver_events() == Ok(0));
    assert!(script.state() == ScriptState::Unloaded);
    assert!(script.read_guest_memory(256, 4).is_none());
}

#[test]
fn cannot_instantiate_twice() {
    let mut script = loaded_script(RECORD_CALLS);

    let second_attempt = executor::block_on(async { script.instantiate().await });

    assert!(second_attempt == Err(ScriptError::AlreadyInstantiated));
    assert!(script.state() == ScriptState::Initialized { started: false });
}

#[test]
fn invalid_module_fails_permanently() {
    let mut script = script("this is not a wasm module");

    let first_attempt = executor::block_on(async { script.instantiate().await });
    assert!(matches!(first_attempt, Err(ScriptError::CompileFailed(_))));
    assert!(script.state() == ScriptState::Failed);

    let second_attempt = executor::block_on(async { script.instantiate().await });
    assert!(second_attempt.is_err());
    assert!(script.state() == ScriptState::Failed);

    assert!(script.dispatch(ScriptEvent::Update) == Ok(()));
    assert!(script.state() == ScriptState::Failed);
}

#[test]
fn module_without_memory_fails() {
    let mut script  = script(r#"(module (func (export "on_update")))"#);
    let result      = executor::block_on(async { script.instantiate().await });

    assert!(result == Err(ScriptError::MissingMemory));
    assert!(script.state() == ScriptState::Failed);
}

#[test]
fn unknown_import_fails() {
    let mut script  = script(r#"(module (import "env" "not_provided" (func)) (memory (export "memory") 1))"#);
    let result      = executor::block_on(async { script.instantiate().await });

    assert!(matches!(result, Err(ScriptError::InstantiationFailed(_))));
    assert!(script.state() == ScriptState::Failed);
}

#[test]
fn missing_file_fails() {
    let mut script  = ScriptComponent::new(ScriptSession::shared(MemoryScene::new()), FileModuleSource::new("/no/such/script.wasm"), ScriptConfig::default());
    let result      = executor::block_on(async { script.instantiate().await });

    assert!(matches!(result, Err(ScriptError::FetchFailed(_))));
    assert!(script.state() == ScriptState::Failed);
}

#[test]
fn trap_is_reported() {
    let mut script = loaded_script(r#"
        (module
            (memory (export "memory") 1)
            (func (export "on_update") unreachable))
    "#);

    let result = script.dispatch(ScriptEvent::Update);

    assert!(matches!(result, Err(ScriptError::GuestTrap(_))));
    assert!(script.state() == ScriptState::Initialized { started: true });
}

#[test]
fn trap_in_on_start_still_starts_the_script() {
    let mut script = loaded_script(r#"
        (module
            (memory (export "memory") 1)
            (func (export "on_start") unreachable)
            (func (export "on_update") (i32.store (i32.const 256) (i32.const 3))))
    "#);

    assert!(script.dispatch(ScriptEvent::Update).is_err());
    assert!(read_i32s(&script, 256, 1) == vec![0]);

    script.dispatch(ScriptEvent::Update).unwrap();
    assert!(read_i32s(&script, 256, 1) == vec![3]);
}

#[test]
fn trap_in_entry_point_still_calls_on_start() {
    let mut script = loaded_script(r#"
        (module
            (memory (export "memory") 1)
            (func (export "_start") unreachable)
            (func (export "on_start") (i32.store (i32.const 256) (i32.const 2)))
            (func (export "on_update") (i32.store (i32.const 260) (i32.const 3))))
    "#);

    let result = script.dispatch(ScriptEvent::Update);

    assert!(matches!(result, Err(ScriptError::GuestTrap(_))));
    assert!(read_i32s(&script, 256, 2) == vec![2, 0]);
    assert!(script.state() == ScriptState::Initialized { started: true });

    // The start sequence isn't repeated
    script.dispatch(ScriptEvent::Update).unwrap();
    assert!(read_i32s(&script, 256, 2) == vec![2, 3]);
}

#[test]
fn calls_from_the_start_section_have_no_memory() {
    let mut script = loaded_script(r#"
        (module
            (import "flo_scene" "get_element_count" (func $get_element_count (param i32) (result i32)))
            (import "wasi_snapshot_preview1" "clock_time_get" (func $clock_time_get (param i32 i64 i32) (result i32)))
            (memory (export "memory") 1)

            (func $init
                (i32.store (i32.const 0) (call $get_element_count (i32.const 8)))
                (i32.store (i32.const 4) (call $clock_time_get (i32.const 0) (i64.const 0) (i32.const 16))))
            (start $init)

            (func (export "on_update")
                (i32.store (i32.const 32) (call $get_element_count (i32.const 36)))))
    "#);

    // The start section runs while the instance is being created, before the host can see its memory
    assert!(read_i32s(&script, 0, 3) == vec![AbiStatus::UnknownError as i32, Errno::Fault as i32, 0]);
    assert!(read_i32s(&script, 16, 2) == vec![0, 0]);

    script.dispatch(ScriptEvent::Update).unwrap();
    assert!(read_i32s(&script, 32, 2) == vec![0, 0]);
}

#[test]
fn custom_export_names() {
    let mut config                  = ScriptConfig::default();
    config.exports.on_update        = "tick".to_string();

    let wat = r#"
        (module
            (memory (export "memory") 1)
            (func (export "tick") (i32.store (i32.const 256) (i32.const 9))))
    "#;

    let mut script = ScriptComponent::new(ScriptSession::shared(MemoryScene::new()), BytesModuleSource::new(wat), config);
    executor::block_on(async { script.instantiate().await.unwrap() });

    script.dispatch(ScriptEvent::Update).unwrap();
    assert!(read_i32s(&script, 256, 1) == vec![9]);
}

#[test]
fn guest_changes_animation() {
    let mut scene   = MemoryScene::new();
    let robot       = scene.add_element(SceneElement::new(Some("robot"), ElementData::Model(ModelState {
        clips: vec!["walk".to_string(), "run".to_string()],
        ..ModelState::default()
    })));

    let session = ScriptSession::shared(scene);
    assert!(session.lock().unwrap().register_node(robot) == Some(Descriptor(10)));

    let wat = r#"
        (module
            (import "flo_scene" "change_anim" (func $change_anim (param i32 i32 i32 i32) (result i32)))
            (import "flo_scene" "get_current_anim" (func $get_current_anim (param i32 i32) (result i32)))
            (memory (export "memory") 1)

            (func (export "on_update")
                (i32.store (i32.const 0) (call $change_anim (i32.const 10) (i32.const 0) (i32.const 1) (i32.const 1)))
                (i32.store (i32.const 4) (call $get_current_anim (i32.const 10) (i32.const 8)))))
    "#;

    let mut script = ScriptComponent::new(session.clone(), BytesModuleSource::new(wat), ScriptConfig::default());
    executor::block_on(async { script.instantiate().await.unwrap() });
    script.dispatch(ScriptEvent::Update).unwrap();

    assert!(read_i32s(&script, 0, 3) == vec![0, 0, 0]);

    match session.lock().unwrap().scene().element(robot).unwrap().data {
        ElementData::Model(model) => {
            assert!(model.current_clip == Some(0));
            assert!(model.play_state == PlayState::Play);
            assert!(model.wrap == AnimationWrap::Loop);
        }

        _ => { assert!(false, "Not a model"); }
    };
}

#[test]
fn guest_reads_missing_element() {
    let wat = r#"
        (module
            (import "flo_scene" "get_position" (func $get_position (param i32 i32) (result i32)))
            (memory (export "memory") 1)

            (func (export "on_update")
                (i32.store (i32.const 0) (call $get_position (i32.const 10) (i32.const 16)))))
    "#;

    let mut script = loaded_script(wat);
    script.dispatch(ScriptEvent::Update).unwrap();

    assert!(read_i32s(&script, 0, 1) == vec![AbiStatus::ElementNotFound as i32]);
}

#[test]
fn abi_namespace_can_be_changed() {
    let session = ScriptSession::shared(MemoryScene::new());
    session.lock().unwrap().add_element(SceneElement::new(Some("cube"), ElementData::Generic));

    let config = ScriptConfig::from_ron(r#"(abi_namespace: "scene")"#).unwrap();
    let wat = r#"
        (module
            (import "scene" "get_element_count" (func $get_element_count (param i32) (result i32)))
            (memory (export "memory") 1)

            (func (export "on_update")
                (i32.store (i32.const 0) (call $get_element_count (i32.const 4)))))
    "#;

    let mut script = ScriptComponent::new(session, BytesModuleSource::new(wat), config);
    executor::block_on(async { script.instantiate().await.unwrap() });
    script.dispatch(ScriptEvent::Update).unwrap();

    assert!(read_i32s(&script, 0, 2) == vec![0, 1]);
}

///
/// Registers for select events on element 10 (twice) when it starts, and records every event it receives
///
const RECORD_EVENTS: &str = r#"
(module
    (import "flo_scene" "register_event" (func $register_event (param i32 i32 i32) (result i32)))
    (memory (export "memory") 1)
    (global $count (mut i32) (i32.const 0))

    (func (export "on_start")
        (i32.store (i32.const 0) (call $register_event (i32.const 10) (i32.const 2) (i32.const 99)))
        (i32.store (i32.const 4) (call $register_event (i32.const 10) (i32.const 2) (i32.const 99))))

    (func (export "on_element_event") (param $descriptor i32) (param $kind i32) (param $event i32) (param $user_data i32)
        (local $base i32)
        (local.set $base (i32.add (i32.const 256) (i32.mul (global.get $count) (i32.const 16))))
        (i32.store (local.get $base) (local.get $descriptor))
        (i32.store offset=4 (local.get $base) (local.get $kind))
        (i32.store offset=8 (local.get $base) (local.get $event))
        (i32.store offset=12 (local.get $base) (local.get $user_data))
        (global.set $count (i32.add (global.get $count) (i32.const 1)))))
"#;

#[test]
fn registered_events_are_delivered() {
    let mut scene   = MemoryScene::new();
    let button      = scene.add_element(SceneElement::new(Some("button"), ElementData::Generic));
    let session     = ScriptSession::shared(scene);
    session.lock().unwrap().register_node(button);

    let mut script = ScriptComponent::new(session.clone(), BytesModuleSource::new(RECORD_EVENTS), ScriptConfig::default());
    executor::block_on(async { script.instantiate().await.unwrap() });
    script.dispatch(ScriptEvent::Update).unwrap();

    // Both registrations succeed
    assert!(read_i32s(&script, 0, 2) == vec![0, 0]);
    assert!(script.deliver_events() == Ok(0));

    // Each registration gets its own callback, so one select delivers two events
    assert!(session.lock().unwrap().scene_mut().fire_event(button, EventKind::Select) == 2);
    assert!(script.deliver_events() == Ok(2));

    assert!(read_i32s(&script, 256, 8) == vec![10, 1, 2, 99, 10, 1, 2, 99]);
    assert!(script.deliver_events() == Ok(0));
}

#[test]
fn events_without_a_handler_are_dropped() {
    let mut scene   = MemoryScene::new();
    let button      = scene.add_element(SceneElement::new(Some("button"), ElementData::Generic));
    let session     = ScriptSession::shared(scene);
    session.lock().unwrap().register_node(button);

    let wat = r#"
        (module
            (import "flo_scene" "register_event" (func $register_event (param i32 i32 i32) (result i32)))
            (memory (export "memory") 1)
            (func (export "on_start") (drop (call $register_event (i32.const 10) (i32.const 1) (i32.const 0)))))
    "#;

    let mut script = ScriptComponent::new(session.clone(), BytesModuleSource::new(wat), ScriptConfig::default());
    executor::block_on(async { script.instantiate().await.unwrap() });
    script.dispatch(ScriptEvent::Update).unwrap();

    assert!(session.lock().unwrap().scene_mut().fire_event(button, EventKind::Update) == 1);
    assert!(script.deliver_events() == Ok(0));
}

#[test]
fn events_registered_during_a_failed_start_are_delivered() {
    let mut scene   = MemoryScene::new();
    let button      = scene.add_element(SceneElement::new(Some("button"), ElementData::Generic));
    let session     = ScriptSession::shared(scene);
    session.lock().unwrap().register_node(button);

    let wat = r#"
        (module
            (import "flo_scene" "register_event" (func $register_event (param i32 i32 i32) (result i32)))
            (memory (export "memory") 1)

            (func (export "_start")
                (drop (call $register_event (i32.const 10) (i32.const 2) (i32.const 5)))
                unreachable)

            (func (export "on_element_event") (param i32 i32 i32 i32)
                (i32.store (i32.const 256) (local.get 3))))
    "#;

    let mut script = ScriptComponent::new(session.clone(), BytesModuleSource::new(wat), ScriptConfig::default());
    executor::block_on(async { script.instantiate().await.unwrap() });
    assert!(script.deliver_events() == Ok(0));

    assert!(script.dispatch(ScriptEvent::Update).is_err());

    assert!(session.lock().unwrap().scene_mut().fire_event(button, EventKind::Select) == 1);
    assert!(script.deliver_events() == Ok(1));
    assert!(read_i32s(&script, 256, 1) == vec![5]);
}
