mod common;

use common::{EventLog, MockScene, StubAssets};
use scene_switcher::core::{HeadlessRenderer, InputManager, Phase, SceneManager};
use scene_switcher::traits::{Scene, SceneContext};
use scene_switcher::SceneKind;

const FADE: f32 = 0.6;

struct Harness {
    renderer: HeadlessRenderer,
    input: InputManager,
    assets: StubAssets,
    manager: SceneManager,
    log: EventLog,
}

impl Harness {
    fn new() -> Self {
        Self {
            renderer: HeadlessRenderer::new(800, 600),
            input: InputManager::new(),
            assets: StubAssets::ready(),
            manager: SceneManager::new(FADE),
            log: EventLog::default(),
        }
    }

    fn scene(&self, name: &'static str, kind: SceneKind) -> MockScene {
        MockScene::new(name, kind, &self.log)
    }

    fn set(&mut self, scene: Box<dyn Scene>) {
        let mut ctx = SceneContext::new(&mut self.renderer, &self.input, &self.assets);
        self.manager.set_scene(scene, &mut ctx);
    }

    fn tick(&mut self, elapsed: f32) {
        let mut ctx = SceneContext::new(&mut self.renderer, &self.input, &self.assets);
        self.manager.tick(elapsed, &mut ctx);
    }

    /// Install a scene and run until its fade-in is over
    fn settle_with(&mut self, name: &'static str, kind: SceneKind) {
        let scene = self.scene(name, kind).boxed();
        self.set(scene);
        self.tick(1.0);
        self.tick(1.0);
        assert_eq!(self.manager.phase(), Phase::Idle);
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn test_first_scene_initializes_without_fade_out() {
    let mut h = Harness::new();
    let scene = h.scene("a", SceneKind::Cube).boxed();
    h.set(scene);

    assert_eq!(h.log.lifecycle(), vec!["init a"]);
    assert_eq!(h.manager.phase(), Phase::FadingIn { elapsed: 0.0 });
    assert_eq!(h.manager.opacity(), 0.0);

    h.tick(0.3);
    assert!(approx(h.manager.opacity(), 0.5));

    h.tick(0.4);
    assert_eq!(h.manager.phase(), Phase::Idle);
    assert_eq!(h.manager.opacity(), 1.0);
}

#[test]
fn test_switch_disposes_old_before_new_init() {
    let mut h = Harness::new();
    h.settle_with("a", SceneKind::Cube);

    let next = h.scene("b", SceneKind::Sphere).boxed();
    h.set(next);

    // Old scene stays current for the whole fade-out
    assert_eq!(h.manager.current_kind(), Some(SceneKind::Cube));
    assert_eq!(h.manager.target_kind(), Some(SceneKind::Sphere));
    h.tick(0.3);
    assert_eq!(h.manager.current_kind(), Some(SceneKind::Cube));
    assert!(!h.log.contains("dispose a"));

    h.tick(0.4);
    assert_eq!(h.manager.current_kind(), Some(SceneKind::Sphere));
    assert_eq!(h.log.lifecycle(), vec!["init a", "dispose a", "drop a", "init b"]);
    assert_eq!(h.manager.phase(), Phase::FadingIn { elapsed: 0.0 });
}

#[test]
fn test_fade_out_is_linear() {
    let mut h = Harness::new();
    h.settle_with("a", SceneKind::Cube);

    let next = h.scene("b", SceneKind::Sphere).boxed();
    h.set(next);
    assert_eq!(h.manager.opacity(), 1.0);

    h.tick(0.15);
    assert!(approx(h.manager.opacity(), 0.75));
    h.tick(0.15);
    assert!(approx(h.manager.opacity(), 0.5));
    h.tick(0.15);
    assert!(approx(h.manager.opacity(), 0.25));
}

#[test]
fn test_superseded_pending_request_is_dropped_uninitialized() {
    let mut h = Harness::new();
    h.settle_with("a", SceneKind::Cube);

    let b = h.scene("b", SceneKind::Sphere).boxed();
    let c = h.scene("c", SceneKind::Cube).boxed();
    let d = h.scene("d", SceneKind::Cube).boxed();
    h.set(b);
    h.set(c);
    h.set(d);

    assert!(h.log.contains("drop c"));
    assert!(h.manager.is_transitioning());

    h.tick(0.7);

    assert!(!h.log.contains("init c"));
    assert_eq!(
        h.log.lifecycle(),
        vec![
            "init a", "drop c", "dispose a", "drop a", "init b", "dispose b", "drop b", "init d"
        ]
    );
    assert_eq!(h.manager.current_kind(), Some(SceneKind::Cube));
}

#[test]
fn test_request_during_pending_init_waits_for_it() {
    let mut h = Harness::new();
    let slow = h.scene("a", SceneKind::Sphere).pending_for(2).boxed();
    h.set(slow);
    assert_eq!(h.manager.phase(), Phase::Initializing);
    assert_eq!(h.manager.opacity(), 0.0);

    let b = h.scene("b", SceneKind::Cube).boxed();
    h.set(b);
    assert_eq!(h.manager.current_kind(), Some(SceneKind::Sphere));

    h.tick(0.016);
    assert_eq!(h.manager.phase(), Phase::Initializing);
    assert!(!h.log.contains("dispose a"));

    h.tick(0.016);
    let init_a = h.log.position("init a").unwrap();
    let dispose_a = h.log.position("dispose a").unwrap();
    let init_b = h.log.position("init b").unwrap();
    assert!(init_a < dispose_a && dispose_a < init_b);
    assert_eq!(h.manager.current_kind(), Some(SceneKind::Cube));
}

#[test]
fn test_interrupted_fade_in_reverses_from_current_brightness() {
    let mut h = Harness::new();
    h.settle_with("a", SceneKind::Cube);

    let b = h.scene("b", SceneKind::Sphere).boxed();
    h.set(b);
    h.tick(0.7);
    h.tick(0.15);
    assert!(approx(h.manager.opacity(), 0.25));

    let c = h.scene("c", SceneKind::Cube).boxed();
    h.set(c);

    assert!(matches!(h.manager.phase(), Phase::FadingOut { .. }));
    assert!(approx(h.manager.opacity(), 0.25));
    assert_eq!(h.manager.current_kind(), Some(SceneKind::Sphere));
}

#[test]
fn test_failed_init_keeps_manager_running() {
    let mut h = Harness::new();
    let broken = h.scene("a", SceneKind::Sphere).failing().boxed();
    h.set(broken);

    assert!(h.log.contains("init a"));
    assert_eq!(h.manager.current_kind(), Some(SceneKind::Sphere));
    assert!(!h.manager.current().unwrap().is_initialized());

    h.tick(1.0);
    assert_eq!(h.manager.phase(), Phase::Idle);

    let b = h.scene("b", SceneKind::Cube).boxed();
    h.set(b);
    h.tick(1.0);
    assert_eq!(h.log.lifecycle(), vec!["init a", "dispose a", "drop a", "init b"]);
}

#[test]
fn test_shutdown_disposes_current() {
    let mut h = Harness::new();
    h.settle_with("a", SceneKind::Cube);

    h.manager.shutdown(&mut h.renderer);

    assert!(h.log.contains("dispose a"));
    assert!(h.manager.current().is_none());
    assert_eq!(h.manager.phase(), Phase::Idle);
    assert!(!h.manager.is_transitioning());
}
