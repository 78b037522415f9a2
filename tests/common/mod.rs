#![allow(dead_code)]

use futures::channel::oneshot;
use futures::future::{self, FutureExt};
use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;
use std::task::Poll;

use scene_switcher::camera::Camera;
use scene_switcher::error::{AssetError, RenderError, SceneError};
use scene_switcher::material::TextureData;
use scene_switcher::traits::{AssetLoader, Renderer, Scene, SceneContext, TextureFuture};
use scene_switcher::SceneKind;

/// Shared, ordered record of lifecycle calls
#[derive(Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    pub fn push(&self, entry: String) {
        self.0.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Entries excluding per-frame noise
    pub fn lifecycle(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.starts_with("init ") || e.starts_with("dispose ") || e.starts_with("drop "))
            .collect()
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.0.borrow().iter().position(|e| e == entry)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.position(entry).is_some()
    }
}

/// Scene double that logs every lifecycle call
pub struct MockScene {
    name: &'static str,
    kind: SceneKind,
    log: EventLog,
    pending_polls: u32,
    fail: bool,
    ready: bool,
    camera: Option<Camera>,
}

impl MockScene {
    pub fn new(name: &'static str, kind: SceneKind, log: &EventLog) -> Self {
        Self {
            name,
            kind,
            log: log.clone(),
            pending_polls: 0,
            fail: false,
            ready: false,
            camera: None,
        }
    }

    /// Init stays pending for `polls` polls before completing
    pub fn pending_for(mut self, polls: u32) -> Self {
        self.pending_polls = polls;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn boxed(self) -> Box<dyn Scene> {
        Box::new(self)
    }
}

impl Scene for MockScene {
    fn kind(&self) -> SceneKind {
        self.kind
    }

    fn init(&mut self, _ctx: &mut SceneContext) -> Poll<Result<(), SceneError>> {
        if self.pending_polls > 0 {
            self.pending_polls -= 1;
            self.log.push(format!("poll {}", self.name));
            return Poll::Pending;
        }

        self.log.push(format!("init {}", self.name));
        if self.fail {
            return Poll::Ready(Err(AssetError::Canceled.into()));
        }
        self.ready = true;
        self.camera = Some(Camera::orthographic(10.0, 1.0, 0.1, 1000.0));
        Poll::Ready(Ok(()))
    }

    fn update(&mut self, _dt: f32, _ctx: &mut SceneContext) {
        if self.ready {
            self.log.push(format!("update {}", self.name));
        }
    }

    fn render(&mut self, _dt: f32, _renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        if self.ready {
            self.log.push(format!("render {}", self.name));
        }
        Ok(())
    }

    fn dispose(&mut self, _renderer: &mut dyn Renderer) {
        self.log.push(format!("dispose {}", self.name));
        self.ready = false;
        self.camera = None;
    }

    fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    fn is_initialized(&self) -> bool {
        self.ready
    }
}

impl Drop for MockScene {
    fn drop(&mut self) {
        self.log.push(format!("drop {}", self.name));
    }
}

/// How a stub loader answers texture requests
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextureMode {
    Ready,
    Failing,
    /// Requests stay pending until `StubAssets::release` is called
    Gated,
}

/// Asset loader double with controllable completion
#[derive(Clone)]
pub struct StubAssets {
    mode: TextureMode,
    waiting: Rc<RefCell<Vec<oneshot::Sender<Result<TextureData, AssetError>>>>>,
    requests: Rc<Cell<usize>>,
}

impl StubAssets {
    pub fn new(mode: TextureMode) -> Self {
        Self {
            mode,
            waiting: Rc::default(),
            requests: Rc::default(),
        }
    }

    pub fn ready() -> Self {
        Self::new(TextureMode::Ready)
    }

    pub fn failing() -> Self {
        Self::new(TextureMode::Failing)
    }

    pub fn gated() -> Self {
        Self::new(TextureMode::Gated)
    }

    /// Complete every gated request with a white texel
    pub fn release(&self) {
        for sender in self.waiting.borrow_mut().drain(..) {
            let _ = sender.send(Ok(TextureData::white()));
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl AssetLoader for StubAssets {
    fn load_texture(&self, _path: &Path) -> TextureFuture {
        self.requests.set(self.requests.get() + 1);
        match self.mode {
            TextureMode::Ready => future::ready(Ok(TextureData::white())).boxed(),
            TextureMode::Failing => future::ready(Err(AssetError::Canceled)).boxed(),
            TextureMode::Gated => {
                let (sender, receiver) = oneshot::channel();
                self.waiting.borrow_mut().push(sender);
                receiver
                    .map(|received| received.unwrap_or(Err(AssetError::Canceled)))
                    .boxed()
            }
        }
    }
}
