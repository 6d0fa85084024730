use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use crate::{
    assets::{AssetLocator, Assets},
    config::ViewerConfig,
    frame::{FrameDriver, Viewport},
    logging::{debug, error, info},
    rendering::renderer::StagingRenderer,
    scenes::Glade,
    timer::Timer,
};

pub mod assets;
pub mod config;
pub mod effects;
pub mod frame;
mod frame_counter;
pub mod lighting;
mod logging;
pub mod mesh;
pub mod obj_loader;
pub mod object;
mod path_wrangler;
pub mod rendering;
pub mod scene;
pub mod scenes;
pub mod timer;
pub mod transform;

pub use frame_counter::FrameCounter;

pub fn main() {
    logging::init();
    let timer = Timer::new();

    let config = ViewerConfig::from_env();
    let mut assets = Assets::new(AssetLocator::new(&config.asset_root));
    let Glade {
        registry: mut scene,
        lights,
    } = match Glade::new(&config, &mut assets) {
        Ok(glade) => glade,
        Err(e) => {
            error!("Scene setup failed: {}", error_chain(&e));
            std::process::exit(1);
        }
    };
    debug!(
        "{} lights, {} shaders, {} textures fixed for the run",
        lights.as_slice().len(),
        assets.shaders().count(),
        assets.textures().count()
    );

    let event_loop = EventLoop::new();
    let window = match WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
        .build(&event_loop)
    {
        Ok(window) => window,
        Err(e) => {
            error!("Failed to create window: {e}");
            std::process::exit(1);
        }
    };

    let mut renderer = StagingRenderer::new(&lights, assets);
    let mut driver = FrameDriver::new(timer);
    info!("Entering frame loop");

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(new_size) => {
                debug!("Window resized to {}x{}", new_size.width, new_size.height);
            }
            WindowEvent::CloseRequested => {
                let counter = driver.frame_counter();
                info!(
                    "Closing after {} frames ({:.1} fps)",
                    counter.frame_count(),
                    counter.framerate()
                );
                control_flow.set_exit();
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            let viewport = viewport(window.inner_size());
            driver.advance_frame(&mut scene, viewport, &mut renderer);
        }
        _ => {}
    })
}

fn viewport(size: PhysicalSize<u32>) -> Viewport {
    Viewport {
        width: size.width as f32,
        height: size.height as f32,
    }
}

fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
