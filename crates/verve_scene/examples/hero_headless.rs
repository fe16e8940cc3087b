//! Headless Hero Demo
//!
//! Drives the stock hero composition with a fixed timestep and synthetic
//! input: the page scrolls through the tracked window while the pointer
//! sweeps across the container. Snapshot summaries are printed once per
//! simulated second.
//!
//! Run with: cargo run -p verve_scene --example hero_headless

use anyhow::Result;
use verve_core::events::{shared_hub, InputEvent, Viewport};
use verve_core::geometry::{Point, Rect};
use verve_scene::{hero, RecordingComposer};

const FPS: f64 = 60.0;
const SECONDS: f64 = 6.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let hub = shared_hub();
    let mut scene = hero::build(&hub)?;
    let mut composer = RecordingComposer::new();

    tracing::info!(
        elements = scene.element_count(),
        springs = scene.active_springs(),
        timelines = scene.active_timelines(),
        "hero scene mounted"
    );

    // The page under the scene: the tracked element sits at y = 1000 in an
    // 800 px viewport, and we scroll the whole window past it.
    let target = Rect::new(0.0, 1000.0, 424.0, 424.0);
    let container = Rect::new(100.0, 120.0, 424.0, 424.0);

    let frames = (SECONDS * FPS) as u32;
    for frame in 0..frames {
        let now = frame as f64 / FPS;
        let t = now / SECONDS;

        // Scroll from before-enter to after-exit over the run.
        let scroll_y = 200.0 + t as f32 * 1800.0;
        hub.borrow_mut().dispatch(&InputEvent::Scroll {
            viewport: Viewport::new(scroll_y, 800.0),
            target,
        });

        // Pointer sweeps left-to-right across the container.
        let center = container.center();
        let sweep = ((now * 0.8).sin() as f32) * 300.0;
        hub.borrow_mut().dispatch(&InputEvent::PointerMove {
            position: Point::new(center.x + sweep, center.y),
            container,
        });

        scene.tick(now, &mut composer);

        if frame % FPS as u32 == 0 {
            let container_props = scene
                .element_by_name("container")
                .and_then(|id| scene.committed(id))
                .expect("container exists");
            let left = scene
                .element_by_name("left-character")
                .and_then(|id| scene.committed(id))
                .expect("left character exists");
            tracing::info!(
                t = format!("{now:.1}s"),
                opacity = format!("{:.2}", container_props.resolved_opacity()),
                tilt_x = format!("{:+.2}", container_props.resolved_rotate_x()),
                tilt_y = format!("{:+.2}", container_props.resolved_rotate_y()),
                parallax_y = format!("{:+.1}", left.resolved_translate().1),
                "snapshot"
            );
        }
    }

    tracing::info!(
        applies = composer.applies(),
        elements = composer.element_count(),
        "run complete"
    );

    scene.unmount();
    assert_eq!(scene.active_timelines(), 0);
    assert_eq!(scene.active_springs(), 0);
    assert_eq!(hub.borrow().handler_count(), 0);
    tracing::info!("teardown clean");

    Ok(())
}
