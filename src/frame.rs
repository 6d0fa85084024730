use crate::effects::{BackgroundEffect, Skybox};
use crate::frame_counter::FrameCounter;
use crate::logging::trace;
use crate::rendering::renderer::{FrameSnapshot, Renderer};
use crate::scene::SceneRegistry;
use crate::timer::TimeSource;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Advances animation time once per tick and hands the frame to the renderer.
///
/// Elapsed time is measured from the clock's fixed start and never decreases
/// between calls, even if the time source does.
pub struct FrameDriver<C> {
    clock: C,
    counter: FrameCounter,
    last_elapsed: f32,
    background: Option<BackgroundEffect>,
    skybox: Option<Skybox>,
}

impl<C: TimeSource> FrameDriver<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            counter: FrameCounter::new(),
            last_elapsed: 0.0,
            background: None,
            skybox: None,
        }
    }

    pub fn with_background(mut self, background: BackgroundEffect) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_skybox(mut self, skybox: Skybox) -> Self {
        self.skybox = Some(skybox);
        self
    }

    pub fn background(&self) -> Option<&BackgroundEffect> {
        self.background.as_ref()
    }

    pub fn skybox(&self) -> Option<&Skybox> {
        self.skybox.as_ref()
    }

    pub fn frame_counter(&self) -> &FrameCounter {
        &self.counter
    }

    /// Pushes the current elapsed time into every object and effect, then
    /// draws. Returns the elapsed time used for this frame.
    pub fn advance_frame<R: Renderer + ?Sized>(
        &mut self,
        scene: &mut SceneRegistry,
        viewport: Viewport,
        renderer: &mut R,
    ) -> f32 {
        let elapsed = self.clock.elapsed().max(self.last_elapsed);
        self.last_elapsed = elapsed;
        let frame = self.counter.current();

        for object in scene.objects_mut() {
            object.set_time(elapsed);
        }

        if let Some(background) = &mut self.background {
            background.set_resolution(viewport.width, viewport.height);
            background.set_time(elapsed);
            background.set_frame(frame);
        }

        if let Some(skybox) = &mut self.skybox {
            skybox.set_time(elapsed);
        }

        trace!("Advanced {} objects to {elapsed:.3}s (frame {frame})", scene.len());

        renderer.draw(&FrameSnapshot {
            objects: scene.objects(),
            background: self.background.as_ref(),
            skybox: self.skybox.as_ref(),
            elapsed,
            frame,
        });

        self.counter.end_frame(elapsed);
        elapsed
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mesh::MeshDataset;
    use crate::timer::{ManualClock, Timer};

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    /// Records what the renderer observed for each frame.
    #[derive(Default)]
    struct Recorder {
        object_times: Vec<Vec<f32>>,
        background: Vec<Option<BackgroundEffect>>,
        skybox_times: Vec<Option<f32>>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, frame: &FrameSnapshot) {
            self.object_times
                .push(frame.objects.iter().map(|o| o.time()).collect());
            self.background.push(frame.background.cloned());
            self.skybox_times.push(frame.skybox.map(|s| s.time()));
        }
    }

    fn scene_with(n: usize) -> SceneRegistry {
        let mut scene = SceneRegistry::new();
        for _ in 0..n {
            scene.add_from_mesh(&MeshDataset::new_triangle()).unwrap();
        }
        scene.finalize();
        scene
    }

    #[test]
    fn test_every_object_gets_the_same_time() {
        let clock = ManualClock::new();
        let mut driver = FrameDriver::new(&clock);
        let mut scene = scene_with(3);
        let mut recorder = Recorder::default();

        for t in [0.0, 0.5, 1.0] {
            clock.set(t);
            assert_eq!(driver.advance_frame(&mut scene, VIEWPORT, &mut recorder), t);
            assert!(scene.objects().iter().all(|o| o.time() == t));
        }

        assert_eq!(
            recorder.object_times,
            vec![vec![0.0; 3], vec![0.5; 3], vec![1.0; 3]]
        );
    }

    #[test]
    fn test_frame_counter_starts_at_zero() {
        let clock = ManualClock::new();
        let mut driver = FrameDriver::new(&clock).with_background(BackgroundEffect::new());
        let mut scene = scene_with(1);
        let mut recorder = Recorder::default();

        for k in 1..=5u64 {
            clock.set(k as f32 * 0.1);
            driver.advance_frame(&mut scene, VIEWPORT, &mut recorder);
            let background = driver.background().unwrap();
            assert_eq!(background.frame(), k - 1);
            assert_eq!(background.time(), k as f32 * 0.1);
            assert_eq!(background.resolution().x, 1280.0);
            assert_eq!(background.resolution().y, 720.0);
        }
        assert_eq!(driver.frame_counter().frame_count(), 5);
    }

    #[test]
    fn test_elapsed_never_decreases() {
        let clock = ManualClock::new();
        let mut driver = FrameDriver::new(&clock);
        let mut scene = scene_with(2);
        let mut recorder = Recorder::default();

        let mut previous = 0.0;
        for t in [0.2, 0.7, 0.4, 0.9] {
            clock.set(t);
            let elapsed = driver.advance_frame(&mut scene, VIEWPORT, &mut recorder);
            assert!(elapsed >= previous);
            previous = elapsed;
        }
        assert_eq!(recorder.object_times[2], vec![0.7; 2]);
    }

    #[test]
    fn test_empty_scene_without_effects() {
        let clock = ManualClock::new();
        clock.set(2.0);
        let mut driver = FrameDriver::new(&clock);
        let mut scene = SceneRegistry::new();
        let mut recorder = Recorder::default();

        assert_eq!(driver.advance_frame(&mut scene, VIEWPORT, &mut recorder), 2.0);
        assert_eq!(recorder.object_times, vec![Vec::<f32>::new()]);
        assert_eq!(recorder.background, vec![None]);
        assert_eq!(recorder.skybox_times, vec![None]);
    }

    #[test]
    fn test_renderer_sees_updated_effects() {
        let clock = ManualClock::new();
        let mut driver = FrameDriver::new(&clock)
            .with_background(BackgroundEffect::new())
            .with_skybox(Skybox::new());
        let mut scene = scene_with(1);
        let mut recorder = Recorder::default();

        clock.set(3.25);
        driver.advance_frame(&mut scene, VIEWPORT, &mut recorder);

        assert_eq!(recorder.skybox_times, vec![Some(3.25)]);
        let background = recorder.background[0].as_ref().unwrap();
        assert_eq!(background.time(), 3.25);
        assert_eq!(background.frame(), 0);
    }

    #[test]
    fn test_elapsed_counts_from_clock_start() {
        let timer = Timer::new();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let mut driver = FrameDriver::new(timer);
        let mut scene = scene_with(1);
        let mut recorder = Recorder::default();

        let elapsed = driver.advance_frame(&mut scene, VIEWPORT, &mut recorder);
        assert!(elapsed >= 0.02);
    }
}
