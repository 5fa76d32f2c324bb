//! Input aggregation for the camera controller.
//!
//! Collects held movement keys and raw pointer motion into [`InputState`],
//! owns pointer capture (cursor grab), and maps keyboard shortcuts onto the
//! display state. Movement and look input are only collected while a
//! capture-eligible camera mode is active.

use std::collections::HashSet;

use bevy::app::AppExit;
use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow, WindowFocused};
use bevy_egui::EguiContexts;
use thiserror::Error;

use crate::camera::CameraMode;
use crate::state::DisplayState;
use crate::types::{FrameSet, configure_frame_sets};

/// Keys moving along local -Z.
pub const FORWARD_KEYS: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
/// Keys moving along local +Z.
pub const BACKWARD_KEYS: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
/// Keys moving along local -X.
pub const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
/// Keys moving along local +X.
pub const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];

/// Pending change to pointer capture, applied by the host at the end of the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureRequest {
    Acquire,
    Release,
}

/// Reasons the host refused to capture the pointer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerLockError {
    #[error("no primary window to capture the pointer in")]
    NoPrimaryWindow,
    #[error("window must be focused before the pointer can be captured")]
    WindowUnfocused,
}

/// Held keys, the latest pointer delta and pointer capture state.
#[derive(Resource, Debug, Default, Clone)]
pub struct InputState {
    held: HashSet<KeyCode>,
    pointer_delta: Vec2,
    captured: bool,
    pending: Option<CaptureRequest>,
}

impl InputState {
    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.held.contains(k))
    }

    /// Unit movement direction in camera-local space, or zero.
    ///
    /// Forward is -Z. Opposing keys cancel out.
    pub fn movement_direction(&self) -> Vec3 {
        let mut direction = Vec3::ZERO;
        if self.any_held(&FORWARD_KEYS) {
            direction.z -= 1.0;
        }
        if self.any_held(&BACKWARD_KEYS) {
            direction.z += 1.0;
        }
        if self.any_held(&LEFT_KEYS) {
            direction.x -= 1.0;
        }
        if self.any_held(&RIGHT_KEYS) {
            direction.x += 1.0;
        }
        direction.normalize_or_zero()
    }

    /// Record this frame's pointer motion. Ignored unless captured.
    ///
    /// Overwrites any delta the controller has not consumed yet.
    pub fn set_pointer_delta(&mut self, delta: Vec2) {
        if self.captured {
            self.pointer_delta = delta;
        }
    }

    /// Read and clear the pointer delta.
    pub fn take_pointer_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.pointer_delta)
    }

    pub fn captured(&self) -> bool {
        self.captured
    }

    /// Ask the host to capture the pointer. No-op if already captured.
    pub fn request_capture(&mut self) {
        if !self.captured {
            self.pending = Some(CaptureRequest::Acquire);
        }
    }

    /// Ask the host to release the pointer. No-op if nothing is captured or pending.
    pub fn request_release(&mut self) {
        if self.captured || self.pending == Some(CaptureRequest::Acquire) {
            self.pending = Some(CaptureRequest::Release);
        }
    }

    /// The window lost focus, so capture and held keys are gone.
    ///
    /// No key-up arrives for keys still down when focus leaves, so the held
    /// set is dropped along with the pointer delta.
    pub fn capture_lost(&mut self) {
        if self.captured || self.pending == Some(CaptureRequest::Acquire) {
            debug!("Pointer capture lost");
            self.pending = Some(CaptureRequest::Release);
        }
        self.captured = false;
        self.clear();
    }

    pub fn pending_request(&self) -> Option<CaptureRequest> {
        self.pending
    }

    /// Take the pending request for the host to apply.
    pub fn take_request(&mut self) -> Option<CaptureRequest> {
        self.pending.take()
    }

    /// Record the outcome of an acquire request.
    pub fn apply_capture_result(&mut self, result: Result<(), PointerLockError>) {
        match result {
            Ok(()) => {
                self.captured = true;
                info!("Pointer captured");
            }
            Err(err) => {
                self.captured = false;
                warn!("Pointer capture refused: {err}");
            }
        }
    }

    /// Record that the pointer was released.
    pub fn released(&mut self) {
        self.captured = false;
        self.pointer_delta = Vec2::ZERO;
    }

    /// Forget held keys and motion, as if all listeners were dropped.
    pub fn clear(&mut self) {
        self.held.clear();
        self.pointer_delta = Vec2::ZERO;
    }
}

/// Plugin wiring raw window input into [`InputState`] and applying capture requests.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        configure_frame_sets(app);
        app.init_resource::<InputState>()
            .init_resource::<DisplayState>()
            .add_systems(
                Update,
                (
                    gather_movement_input.run_if(capture_mode_active),
                    pointer_capture_input,
                    keyboard_shortcuts,
                )
                    .chain()
                    .in_set(FrameSet::Input),
            )
            .add_systems(Update, apply_pointer_capture.in_set(FrameSet::Apply))
            .add_systems(Last, release_pointer_on_exit);
    }
}

/// Run condition: movement and look listeners only exist in FreeFly and Chase.
pub fn capture_mode_active(display: Res<DisplayState>) -> bool {
    display.camera_mode().captures_pointer()
}

/// Whether the HUD is using the pointer this frame.
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .ok()
        .is_some_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}

/// Collect movement keys and pointer motion.
fn gather_movement_input(
    mut keyboard: MessageReader<KeyboardInput>,
    mut motion: MessageReader<MouseMotion>,
    mut input: ResMut<InputState>,
) {
    for event in keyboard.read() {
        match event.state {
            ButtonState::Pressed => input.press(event.key_code),
            ButtonState::Released => input.release(event.key_code),
        }
    }

    let frame_motion: Vec2 = motion.read().map(|m| m.delta).sum();
    if frame_motion != Vec2::ZERO {
        input.set_pointer_delta(frame_motion);
    }
}

/// One frame of the raw signals that can change pointer capture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptureSignals {
    pub clicked: bool,
    pub escape: bool,
    pub focus_lost: bool,
    /// The click landed on the HUD.
    pub over_hud: bool,
}

/// What a frame's signals do to pointer capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureAction {
    /// Focus left the window: drop capture and held keys.
    Lost,
    Request(CaptureRequest),
}

/// Decide the capture change for one frame.
///
/// Focus loss wins over Escape, which wins over a click. Escape always asks
/// for release; [`InputState::request_release`] ignores it when idle. A click
/// only asks for capture in FreeFly or Chase, while uncaptured and off the HUD.
pub fn capture_action(
    signals: CaptureSignals,
    mode: CameraMode,
    captured: bool,
) -> Option<CaptureAction> {
    if signals.focus_lost {
        return Some(CaptureAction::Lost);
    }
    if signals.escape {
        return Some(CaptureAction::Request(CaptureRequest::Release));
    }
    (signals.clicked && mode.captures_pointer() && !captured && !signals.over_hud)
        .then_some(CaptureAction::Request(CaptureRequest::Acquire))
}

/// Turn clicks, Escape and focus loss into capture requests.
fn pointer_capture_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut focus: MessageReader<WindowFocused>,
    display: Res<DisplayState>,
    mut input: ResMut<InputState>,
    mut contexts: EguiContexts,
) {
    let clicked = mouse.just_pressed(MouseButton::Left);
    let signals = CaptureSignals {
        clicked,
        escape: keys.just_pressed(KeyCode::Escape),
        focus_lost: focus.read().fold(false, |lost, event| lost || !event.focused),
        over_hud: clicked && egui_wants_pointer(&mut contexts),
    };

    match capture_action(signals, display.camera_mode(), input.captured()) {
        Some(CaptureAction::Lost) => input.capture_lost(),
        Some(CaptureAction::Request(CaptureRequest::Release)) => input.request_release(),
        Some(CaptureAction::Request(CaptureRequest::Acquire)) => input.request_capture(),
        None => {}
    }
}

/// Handle keyboard shortcuts for simulation and camera control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut display: ResMut<DisplayState>,
    mut contexts: EguiContexts,
) {
    // Don't steal keys from a focused text field
    if contexts
        .ctx_mut()
        .ok()
        .is_some_and(|ctx| ctx.wants_keyboard_input())
    {
        return;
    }

    // F: cycle camera mode
    if keys.just_pressed(KeyCode::KeyF) {
        display.cycle_camera_mode();
    }

    // R: follow the default body again
    if keys.just_pressed(KeyCode::KeyR) {
        display.reset_camera();
    }

    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        display.toggle_paused();
    }
}

/// Grab the cursor of the primary window.
fn grab_cursor(window: &Window, cursor: &mut CursorOptions) -> Result<(), PointerLockError> {
    if !window.focused {
        return Err(PointerLockError::WindowUnfocused);
    }
    // Browsers only support confining the cursor
    #[cfg(not(target_family = "wasm"))]
    {
        cursor.grab_mode = CursorGrabMode::Locked;
    }
    #[cfg(target_family = "wasm")]
    {
        cursor.grab_mode = CursorGrabMode::Confined;
    }
    cursor.visible = false;
    Ok(())
}

fn ungrab_cursor(cursor: &mut CursorOptions) {
    cursor.grab_mode = CursorGrabMode::None;
    cursor.visible = true;
}

/// Apply the frame's capture request to the primary window.
fn apply_pointer_capture(
    mut input: ResMut<InputState>,
    mut windows: Query<(&Window, &mut CursorOptions), With<PrimaryWindow>>,
) {
    let Some(request) = input.take_request() else {
        return;
    };

    let window = windows.single_mut();
    match request {
        CaptureRequest::Acquire => {
            let result = match window {
                Ok((window, mut cursor)) => grab_cursor(window, &mut cursor),
                Err(_) => Err(PointerLockError::NoPrimaryWindow),
            };
            input.apply_capture_result(result);
        }
        CaptureRequest::Release => {
            if let Ok((_, mut cursor)) = window {
                ungrab_cursor(&mut cursor);
            }
            input.released();
        }
    }
}

/// Hand the cursor back on shutdown.
pub fn release_pointer_on_exit(
    mut exit: MessageReader<AppExit>,
    mut input: ResMut<InputState>,
    mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if exit.read().next().is_none() {
        return;
    }
    if let Ok(mut cursor) = cursors.single_mut() {
        ungrab_cursor(&mut cursor);
    }
    input.released();
}
