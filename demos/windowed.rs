//! # Windowed Showroom
//!
//! Opens a window and drives the showroom from real pointer and keyboard
//! input. No renderer is attached; the frame callback logs whenever the
//! current scene changes.
//!
//! ## Usage:
//! ```bash
//! cargo run --example windowed [config.json]
//! ```
//!
//! Click to leave the loading scene, click a product at home, then use
//! A/D or the arrow keys to browse and Escape to reframe.

use showroom::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => ShowroomConfig::from_path(&path)?,
        None => ShowroomConfig::default(),
    };

    let loader = StaticLoader::new()
        .with_model(
            &config.models.loading,
            LoadedModel {
                nodes: vec![SceneNode::new("LoadingSphere").with_bounds(
                    Vector3::new(-5.0, -5.0, -5.0),
                    Vector3::new(5.0, 5.0, 5.0),
                )],
                clips: Vec::new(),
            },
        )
        .with_model(
            &config.models.home,
            LoadedModel {
                nodes: config
                    .products
                    .iter()
                    .map(|product| {
                        let half = Vector3::new(1.0, 1.0, 1.0);
                        SceneNode::new(&product.name)
                            .with_bounds(product.look_at_pos - half, product.look_at_pos + half)
                    })
                    .collect(),
                clips: Vec::new(),
            },
        );

    let mut app = ShowroomApp::new(config, Box::new(loader))?;

    let mut last_scene = None;
    app.set_frame_callback(move |scene, camera, highlighted| {
        if last_scene != Some(scene.name) {
            last_scene = Some(scene.name);
            log::info!(
                "Now showing {} ({} nodes) from ({:.1}, {:.1}, {:.1}), highlight {:?}",
                scene.name,
                scene.get_statistics().node_count,
                camera.eye.x,
                camera.eye.y,
                camera.eye.z,
                highlighted
            );
        }
    });

    app.run()
}
