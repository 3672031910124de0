// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use driftgallery::{
    config::Config,
    models::Container,
    render::{nannou_surface::is_remote, NannouSurface},
    views::{ClickEvent, Gallery},
};

const FPS_LOG_INTERVAL: u64 = 600;

struct Model {
    gallery: Gallery<NannouSurface>,

    // FPS
    last_update: Instant,
    fps: f32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("driftgallery=info".parse().unwrap()),
        )
        .init();

    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = load_config();

    // Create window
    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .resized(resized)
        .mouse_pressed(mouse_pressed)
        .build()
        .unwrap();
    let rect = app.window(window_id).unwrap().rect();

    let sources = config
        .images
        .sources
        .iter()
        .map(|source| {
            if is_remote(source) {
                source.clone()
            } else {
                config.resolve_source(source).to_string_lossy().into_owned()
            }
        })
        .collect();

    let surface = NannouSurface::new(Container::new(rect.w(), rect.h()), config.style.clone());

    Model {
        gallery: Gallery::new(config.gallery.clone(), sources, surface),
        last_update: Instant::now(),
        fps: 0.0,
    }
}

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(err) if err.is_not_found() => {
            tracing::warn!("No config.toml found, using built-in defaults");
            Config::default()
        }
        Err(err) => panic!("Failed to load config file: {}", err),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    model.fps = 1.0 / duration.as_secs_f32().max(f32::EPSILON);

    // The first tick builds the images, so textures load right after it
    model.gallery.tick();
    model.gallery.surface_mut().load_images(app);

    if model.gallery.frame() % FPS_LOG_INTERVAL == 0 {
        tracing::debug!("FPS: {:.1}", model.fps);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.gallery.surface().draw(&draw);
    draw.to_frame(app, &frame).unwrap();
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model
        .gallery
        .surface_mut()
        .set_container(Container::new(size.x, size.y));
    model.gallery.handle_resize();
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }

    let surface = model.gallery.surface();
    let point = surface.to_gallery_point(app.mouse.position());
    let target = surface.element_at(point);
    model.gallery.handle_click(ClickEvent { point, target });
}
