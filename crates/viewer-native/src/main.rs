mod session;
mod storage;

use anyhow::Context;
use instant::Instant;
use session::{Session, Step};
use std::time::Duration;
use storage::JsonFileStorage;
use viewer_core::{Notice, ViewController, ViewerConfig};

const FRAME: Duration = Duration::from_micros(16_667);
// Time left after the last scripted step for moves to finish
const SETTLE_SECS: f32 = 3.0;
const LOG_EVERY_FRAMES: u64 = 30;

fn load_config(path: Option<&str>) -> anyhow::Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    ViewerConfig::from_json(&text).with_context(|| format!("parsing {}", path))
}

fn log_notices(notices: Vec<Notice>) {
    for notice in notices {
        log::info!("[toast] {}", notice);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let storage_path = args.first().map(String::as_str).unwrap_or("viewer-storage.json");
    let config = load_config(args.get(1).map(String::as_str))?;
    let storage = JsonFileStorage::open(storage_path)?;

    let mut viewer = ViewController::new(storage, config);
    log::info!("{} presets: {:?}", viewer.status(), viewer.preset_names());
    let cfg = viewer.config();
    log::info!(
        "revert after {}ms, top speed {} mph, floor y {}",
        cfg.revert_delay_ms,
        cfg.max_speed_mph,
        cfg.floor_y
    );

    let mut session = Session::drive_and_park();
    let end = session.last_time() + SETTLE_SECS;
    let start = Instant::now();
    let mut frame: u64 = 0;
    loop {
        let now = start + FRAME * frame as u32;
        let t = (now - start).as_secs_f32();
        if t > end {
            break;
        }
        for step in session.due(t) {
            match step {
                Step::Signal(name, value) => {
                    viewer.receive_signal(name, value, now);
                }
                Step::OrbitStart => viewer.interaction_start(),
                Step::OrbitDrag(pose) => {
                    let clamped = viewer.pose_changed(pose);
                    if clamped != pose {
                        log::info!("[mode] orbit clamped to floor: {:?}", clamped.position);
                    }
                }
                Step::OrbitEnd => viewer.interaction_end(now),
                Step::ToggleDayNight => {
                    let day = viewer.toggle_day_night();
                    viewer.push_notice(Notice::DayMode(day));
                }
            }
        }
        let camera = viewer.tick(now).camera;
        log_notices(viewer.take_notices());
        if frame % LOG_EVERY_FRAMES == 0 {
            let r = viewer.readout();
            log::info!(
                "t={:5.2}s {} speed={:.0} anim={:.3} pos=({:.2},{:.2},{:.2}) dist={:.2} az={:.1}",
                t,
                viewer.status(),
                viewer.speed(),
                viewer.animation_speed(),
                camera.position.x,
                camera.position.y,
                camera.position.z,
                r.distance,
                r.azimuth_deg,
            );
        }
        frame += 1;
    }

    log::info!(
        "done after {} frames: {} road offset {:.1}",
        frame,
        viewer.status(),
        viewer.scenery().road_offset
    );
    Ok(())
}
