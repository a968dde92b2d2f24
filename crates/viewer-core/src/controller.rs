//! The view controller: reconciles vehicle signals, manual orbiting and
//! named camera presets.
//!
//! One [`ViewController`] owns all state for one viewer. It never reads the
//! clock itself; every time-dependent call takes `now`, and the host drives
//! it once per frame through [`ViewController::tick`].
//!
//! Mode rules:
//! - entering `Home` engages the parking brake and selects the showroom,
//! - entering `Drive` releases it and selects the road scene,
//! - entering any other preset releases it only if it was never set.
//!
//! The brake signal is edge-triggered: only a change from the last seen
//! value moves the camera. After the user lets go of the camera, the active
//! mode's preset is restored once the revert delay passes without another
//! interaction.

use crate::config::ViewerConfig;
use crate::constants::{DRIVE, HOME};
use crate::environment::{Environment, Lighting, SceneMode};
use crate::notice::Notice;
use crate::pose::{CameraReadout, Pose, PoseInput};
use crate::presets::PresetStore;
use crate::scenery::DriveScenery;
use crate::signal::{SignalRoute, SignalRouter, SignalValue};
use crate::speed::SpeedModel;
use crate::storage::KeyValueStore;
use crate::tween::{CameraTweener, TweenHandle, TweenStep};
use instant::Instant;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Home,
    Drive,
    Named(String),
}

impl ViewMode {
    pub fn from_name(name: &str) -> Self {
        match name {
            HOME => ViewMode::Home,
            DRIVE => ViewMode::Drive,
            other => ViewMode::Named(other.to_owned()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ViewMode::Home => HOME,
            ViewMode::Drive => DRIVE,
            ViewMode::Named(name) => name,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParkBrake {
    Released,
    Engaged,
}

impl ParkBrake {
    pub fn from_flag(engaged: bool) -> Self {
        if engaged {
            ParkBrake::Engaged
        } else {
            ParkBrake::Released
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            ParkBrake::Released => 0,
            ParkBrake::Engaged => 1,
        }
    }
}

/// Snapshot for the HUD.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStatus {
    pub mode: Option<String>,
    pub park_brake: Option<u8>,
    pub scene: SceneMode,
    pub driving: bool,
    pub day: bool,
    pub speed_mph: f32,
    pub animation_speed: f32,
    pub user_interacting: bool,
}

impl fmt::Display for ViewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.park_brake {
            Some(v) => write!(f, "park_brake: {}", v)?,
            None => f.write_str("park_brake: -")?,
        }
        write!(f, " (mode: {})", self.mode.as_deref().unwrap_or("none"))
    }
}

/// Everything the renderer needs after a frame tick.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameUpdate<'a> {
    pub camera: Pose,
    pub lighting: Lighting,
    pub scenery: &'a DriveScenery,
}

pub struct ViewController<S: KeyValueStore> {
    config: ViewerConfig,
    storage: S,
    presets: PresetStore,
    camera: Pose,
    tweener: CameraTweener,
    // Preset the in-flight tween is heading to, for the arrival notice.
    move_label: Option<String>,
    router: SignalRouter,
    speed: SpeedModel,
    environment: Environment,
    scenery: DriveScenery,
    mode: Option<ViewMode>,
    park_brake: Option<ParkBrake>,
    last_brake: ParkBrake,
    user_interacting: bool,
    revert_deadline: Option<Instant>,
    notices: Vec<Notice>,
}

impl<S: KeyValueStore> ViewController<S> {
    /// Load presets from `storage`, seed the well-known ones and start in
    /// `Home` with the camera placed exactly on its preset.
    pub fn new(mut storage: S, config: ViewerConfig) -> Self {
        let loaded = PresetStore::load(&mut storage);
        if loaded.outcome.is_degraded() {
            log::warn!("[presets] starting from an empty store");
        }
        let mut presets = loaded.store;
        presets.seed_missing(
            &mut storage,
            &[
                (DRIVE.to_owned(), config.default_drive),
                (HOME.to_owned(), config.default_home),
            ],
        );
        let speed = SpeedModel::new(
            config.max_speed_mph,
            config.calibration_speed_mph,
            config.base_rate,
        );
        let scenery = DriveScenery::new(config.scenery_seed);
        let mut controller = Self {
            camera: config.default_home,
            config,
            storage,
            presets,
            tweener: CameraTweener::new(),
            move_label: None,
            router: SignalRouter::default(),
            speed,
            environment: Environment::default(),
            scenery,
            mode: None,
            park_brake: None,
            last_brake: ParkBrake::Engaged,
            user_interacting: false,
            revert_deadline: None,
            notices: Vec::new(),
        };
        controller.start_at_home();
        controller
    }

    fn start_at_home(&mut self) {
        self.set_mode(HOME);
        if let Some(home) = self.presets.get(HOME) {
            self.camera = home;
        }
        log::info!("[mode] initialised to Home");
    }

    // ---------------- Modes ----------------

    /// Make `name` the active mode without moving the camera.
    pub fn set_mode(&mut self, name: &str) {
        let mode = ViewMode::from_name(name);
        match mode {
            ViewMode::Home => {
                self.park_brake = Some(ParkBrake::Engaged);
                self.environment.enter_showroom();
            }
            ViewMode::Drive => {
                self.park_brake = Some(ParkBrake::Released);
                self.environment.enter_drive();
                self.scenery.reset_road();
            }
            ViewMode::Named(_) => {
                if self.park_brake.is_none() {
                    self.park_brake = Some(ParkBrake::Released);
                }
            }
        }
        log::debug!("[mode] {}", mode.name());
        self.mode = Some(mode);
        self.revert_deadline = None;
    }

    /// Switch to the mode named after a preset and move the camera there.
    /// Returns `None` (and queues a not-found notice) when no such preset
    /// exists; nothing else changes in that case.
    pub fn go_to_mode(&mut self, name: &str, duration: Duration, now: Instant) -> Option<TweenHandle> {
        let Some(pose) = self.presets.get(name) else {
            log::debug!("[mode] no preset named `{}`", name);
            self.notices.push(Notice::PresetNotFound(name.to_owned()));
            return None;
        };
        self.set_mode(name);
        Some(self.move_camera(pose, duration, now, Some(name)))
    }

    /// [`Self::go_to_mode`] with the configured default duration.
    pub fn go_to_preset(
        &mut self,
        name: &str,
        duration: Option<Duration>,
        now: Instant,
    ) -> Option<TweenHandle> {
        let duration = duration.unwrap_or_else(|| self.config.default_move());
        self.go_to_mode(name, duration, now)
    }

    /// Move the camera to an arbitrary pose. The active mode is untouched.
    pub fn animate_to(&mut self, pose: Pose, duration: Option<Duration>, now: Instant) -> TweenHandle {
        let duration = duration.unwrap_or_else(|| self.config.default_move());
        self.move_camera(pose, duration, now, None)
    }

    /// Go Home on request from the keyboard shortcut.
    pub fn go_home(&mut self, now: Instant) -> Option<TweenHandle> {
        if !self.presets.contains(HOME) {
            self.notices.push(Notice::NoHome);
            return None;
        }
        self.go_to_mode(HOME, self.config.home_shortcut_move(), now)
    }

    fn move_camera(
        &mut self,
        end: Pose,
        duration: Duration,
        now: Instant,
        label: Option<&str>,
    ) -> TweenHandle {
        self.move_label = None;
        let handle = self.tweener.start(&mut self.camera, end, duration, now);
        if handle.is_finished() {
            self.camera.clamp_to_floor(self.config.floor_y);
            if let Some(name) = label {
                self.notices.push(Notice::MovedTo(name.to_owned()));
            }
        } else {
            self.move_label = label.map(str::to_owned);
        }
        handle
    }

    // ---------------- Signals ----------------

    /// Apply a parking-brake reading. Only a change from the last reading
    /// moves the camera: released goes to `Drive`, engaged goes to `Home`.
    pub fn set_parking_brake(&mut self, value: &SignalValue, now: Instant) {
        let brake = ParkBrake::from_flag(value.as_flag());
        self.park_brake = Some(brake);
        match (self.last_brake, brake) {
            (ParkBrake::Engaged, ParkBrake::Released) => {
                let drive_found = self.presets.contains(DRIVE);
                log::info!("[brake] released (drive preset: {})", drive_found);
                if drive_found {
                    self.go_to_mode(DRIVE, self.config.brake_move(), now);
                }
                self.notices.push(Notice::BrakeReleased { drive_found });
            }
            (ParkBrake::Released, ParkBrake::Engaged) => {
                let home_found = self.presets.contains(HOME);
                log::info!("[brake] engaged (home preset: {})", home_found);
                if home_found {
                    self.go_to_mode(HOME, self.config.brake_move(), now);
                }
                self.notices.push(Notice::BrakeEngaged { home_found });
            }
            _ => {}
        }
        self.last_brake = brake;
    }

    pub fn set_speed(&mut self, value: &SignalValue) {
        self.speed.set_speed(value);
    }

    /// Route a named signal. Returns the route taken, or `None` for an empty
    /// name, which is ignored.
    pub fn receive_signal(
        &mut self,
        name: &str,
        value: SignalValue,
        now: Instant,
    ) -> Option<SignalRoute> {
        let route = self.router.route(name)?;
        log::debug!("[signal] {} = {} -> {:?}", name, value, route);
        match route {
            SignalRoute::ParkingBrake => self.set_parking_brake(&value, now),
            SignalRoute::Speed => {
                self.set_speed(&value);
                self.notices.push(Notice::Speed(self.speed.speed()));
            }
            SignalRoute::Notify => self.notices.push(Notice::Signal {
                name: name.to_owned(),
                value,
            }),
        }
        Some(route)
    }

    // ---------------- Presets ----------------

    /// Save `name`. Whichever half of `input` is missing is taken from the
    /// live camera; `None` saves the live camera as is.
    pub fn save_preset(&mut self, name: &str, input: Option<PoseInput>) -> Pose {
        let pose = input.unwrap_or_default().merge_with(&self.camera);
        self.presets.set(&mut self.storage, name, pose);
        self.notices.push(Notice::PresetSaved(name.to_owned()));
        pose
    }

    pub fn get_preset(&self, name: &str) -> Option<Pose> {
        self.presets.get(name)
    }

    pub fn preset_names(&self) -> Vec<String> {
        self.presets.names()
    }

    // ---------------- Manual interaction ----------------

    pub fn interaction_start(&mut self) {
        self.user_interacting = true;
        if self.tweener.cancel() {
            self.move_label = None;
        }
        self.revert_deadline = None;
    }

    pub fn interaction_end(&mut self, now: Instant) {
        self.user_interacting = false;
        // An unrepresentable deadline means the revert never comes due.
        self.revert_deadline = now.checked_add(self.config.revert_delay());
    }

    /// The orbit control moved the camera. Stores the pose with the floor
    /// clamp applied and returns what the camera should be set to.
    pub fn pose_changed(&mut self, pose: Pose) -> Pose {
        self.camera = pose;
        self.camera.clamp_to_floor(self.config.floor_y);
        self.camera
    }

    fn fire_revert_if_due(&mut self, now: Instant) {
        let Some(deadline) = self.revert_deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        self.revert_deadline = None;
        if self.user_interacting {
            return;
        }
        let Some(name) = self.mode.as_ref().map(|m| m.name().to_owned()) else {
            return;
        };
        if !self.presets.contains(&name) {
            return;
        }
        log::debug!("[revert] back to {}", name);
        self.go_to_mode(&name, self.config.revert_move(), now);
        self.notices.push(Notice::Reverting(name));
    }

    // ---------------- Frame ----------------

    /// Advance one frame: fire a due revert, step the camera tween and
    /// scroll the drive scenery.
    pub fn tick(&mut self, now: Instant) -> FrameUpdate<'_> {
        self.fire_revert_if_due(now);
        match self.tweener.step(&mut self.camera, now) {
            TweenStep::Idle => {}
            TweenStep::Moving => {
                self.camera.clamp_to_floor(self.config.floor_y);
            }
            TweenStep::Arrived => {
                self.camera.clamp_to_floor(self.config.floor_y);
                if let Some(name) = self.move_label.take() {
                    self.notices.push(Notice::MovedTo(name));
                }
            }
        }
        self.scenery
            .advance(self.environment.is_driving(), self.speed.animation_speed());
        FrameUpdate {
            camera: self.camera,
            lighting: self.environment.lighting(),
            scenery: &self.scenery,
        }
    }

    // ---------------- Day / night ----------------

    pub fn set_day_mode(&mut self, day: bool) {
        self.environment.set_day_mode(day);
    }

    pub fn day_mode(&self) -> bool {
        self.environment.is_day()
    }

    pub fn toggle_day_night(&mut self) -> bool {
        self.environment.toggle_day_night()
    }

    // ---------------- Reads ----------------

    pub fn speed(&self) -> f32 {
        self.speed.speed()
    }

    pub fn animation_speed(&self) -> f32 {
        self.speed.animation_speed()
    }

    pub fn camera_pose(&self) -> Pose {
        self.camera
    }

    pub fn readout(&self) -> CameraReadout {
        CameraReadout::from(&self.camera)
    }

    pub fn current_mode(&self) -> Option<&str> {
        self.mode.as_ref().map(ViewMode::name)
    }

    pub fn park_brake(&self) -> Option<ParkBrake> {
        self.park_brake
    }

    pub fn is_driving(&self) -> bool {
        self.environment.is_driving()
    }

    pub fn is_user_interacting(&self) -> bool {
        self.user_interacting
    }

    pub fn revert_pending(&self) -> bool {
        self.revert_deadline.is_some()
    }

    pub fn is_moving(&self) -> bool {
        self.tweener.is_active()
    }

    pub fn lighting(&self) -> Lighting {
        self.environment.lighting()
    }

    pub fn scenery(&self) -> &DriveScenery {
        &self.scenery
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn status(&self) -> ViewStatus {
        ViewStatus {
            mode: self.current_mode().map(str::to_owned),
            park_brake: self.park_brake.map(ParkBrake::as_u8),
            scene: self.environment.mode(),
            driving: self.environment.is_driving(),
            day: self.environment.is_day(),
            speed_mph: self.speed.speed(),
            animation_speed: self.speed.animation_speed(),
            user_interacting: self.user_interacting,
        }
    }

    // ---------------- Notices ----------------

    /// Queue a notice on behalf of the host (keyboard shortcuts and the like).
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
