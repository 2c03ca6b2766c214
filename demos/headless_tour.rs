//! # Headless Tour
//!
//! Walks the showroom from the loading scene to the home scene, into a
//! product and around the carousel without opening a window. Models come
//! from an in-memory loader.
//!
//! ## Usage:
//! ```bash
//! RUST_LOG=debug cargo run --example headless_tour
//! ```

use showroom::prelude::*;

const FRAME: f32 = 1.0 / 60.0;

fn boxed(name: &str, center: Vector3<f32>, half: f32) -> SceneNode {
    let extent = Vector3::new(half, half, half);
    SceneNode::new(name).with_bounds(center - extent, center + extent)
}

fn loader_for(config: &ShowroomConfig) -> StaticLoader {
    let products = config
        .products
        .iter()
        .map(|product| boxed(&product.name, product.look_at_pos, 0.8));
    let clips: Vec<AnimationClip> = config
        .products
        .iter()
        .map(|product| AnimationClip::new(&product.clip_name(&config.clip_suffix), 2.5))
        .collect();

    StaticLoader::new()
        .with_model(
            &config.models.loading,
            LoadedModel {
                nodes: vec![boxed("LoadingSphere", Vector3::zero(), 5.0)],
                clips: Vec::new(),
            },
        )
        .with_model(
            &config.models.home,
            LoadedModel {
                nodes: std::iter::once(boxed("Prod2_pedestal", Vector3::new(0.0, 5.0, 8.0), 1.0))
                    .chain(products.clone())
                    .collect(),
                clips: clips.clone(),
            },
        )
        .with_model(
            &config.models.product_detail,
            LoadedModel {
                nodes: products.collect(),
                clips,
            },
        )
}

fn settle(showroom: &mut Showroom, seconds: f32) {
    for _ in 0..(seconds / FRAME).ceil() as usize + 5 {
        showroom.tick(FRAME);
        for cue in showroom.drain_cues() {
            log::info!("cue: {:?}", cue);
        }
    }
}

fn report(showroom: &Showroom) {
    let state = showroom.state();
    let eye = showroom.camera().eye;
    log::info!(
        "{} | {:?} | product {:?} | eye ({:.1}, {:.1}, {:.1}) | clips {:?}",
        showroom.current_scene_name(),
        state.phase,
        state.current_product,
        eye.x,
        eye.y,
        eye.z,
        showroom.playing_clips()
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ShowroomConfig {
        auto_rotate: false,
        ..ShowroomConfig::default()
    };
    let loader = loader_for(&config);
    let mut showroom = Showroom::new(config, Box::new(loader))?;

    settle(&mut showroom, 0.1);
    report(&showroom);

    showroom.pointer_clicked((0.0, 0.0));
    settle(&mut showroom, 3.0);
    report(&showroom);

    // The pedestal sits straight ahead of the home pose
    showroom.pointer_moved((0.0, 0.0));
    log::info!("highlight: {:?}", showroom.highlighted());
    showroom.pointer_clicked((0.0, 0.0));
    settle(&mut showroom, 3.0);
    report(&showroom);

    for key in [NavKey::Next, NavKey::Next, NavKey::Prev, NavKey::Back] {
        showroom.key_pressed(key);
        settle(&mut showroom, 3.0);
        report(&showroom);
    }

    Ok(())
}
