use nalgebra::Vector2;

/// Full-screen animated background; reads resolution, time and frame number.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackgroundEffect {
    resolution: Vector2<f32>,
    time: f32,
    frame: u64,
}

impl BackgroundEffect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_resolution(&mut self, width: f32, height: f32) {
        self.resolution = Vector2::new(width, height);
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    pub fn set_frame(&mut self, frame: u64) {
        self.frame = frame;
    }

    pub fn resolution(&self) -> Vector2<f32> {
        self.resolution
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Skybox {
    time: f32,
}

impl Skybox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time;
    }

    pub fn time(&self) -> f32 {
        self.time
    }
}
