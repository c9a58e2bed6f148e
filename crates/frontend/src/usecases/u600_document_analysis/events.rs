//! Event wiring: the view reports `(Affordance, UiEvent)` pairs and the
//! registry routes them to controller operations.

use super::controller::{AnalyzerController, UiPort};
use super::transport::{SelectedFile, Transport};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Runs a request future to completion; `spawn_local` in the browser
pub type Spawner = Rc<dyn Fn(LocalTask)>;

type Handler<B> = Rc<dyn Fn(UiEvent<B>)>;

/// Interactive elements of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    UploadArea,
    FileInput,
    IngestButton,
    QueryInput,
    AnalyzeButton,
    QuickQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent<B> {
    Click,
    DragEnter,
    DragLeave,
    Drop(Option<SelectedFile<B>>),
    FileChosen(Option<SelectedFile<B>>),
    KeyDown { key: String, ctrl: bool, meta: bool },
    QuickQuery(String),
}

impl<B> UiEvent<B> {
    /// Ctrl+Enter (Cmd+Enter on macOS) submits the query
    pub fn is_submit_shortcut(&self) -> bool {
        matches!(self, UiEvent::KeyDown { key, ctrl, meta } if key == "Enter" && (*ctrl || *meta))
    }
}

pub struct EventRegistry<B> {
    handlers: Vec<(Affordance, Handler<B>)>,
}

impl<B> Default for EventRegistry<B> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<B> EventRegistry<B> {
    pub fn register(&mut self, affordance: Affordance, handler: impl Fn(UiEvent<B>) + 'static) {
        self.handlers.push((affordance, Rc::new(handler)));
    }

    pub fn is_bound(&self, affordance: Affordance) -> bool {
        self.handlers.iter().any(|(a, _)| *a == affordance)
    }

    /// Returns false when nothing is bound to `affordance`
    pub fn emit(&self, affordance: Affordance, event: UiEvent<B>) -> bool
    where
        B: Clone,
    {
        let mut handled = false;
        for (_, handler) in self.handlers.iter().filter(|(a, _)| *a == affordance) {
            handler(event.clone());
            handled = true;
        }
        handled
    }
}

/// Bind every affordance of the page to the controller
pub fn wire_events<U, T>(
    controller: Rc<AnalyzerController<U, T>>,
    spawn: Spawner,
) -> EventRegistry<T::Blob>
where
    U: UiPort + 'static,
    T: Transport + 'static,
{
    let mut registry = EventRegistry::default();

    let c = controller.clone();
    registry.register(Affordance::UploadArea, move |event| match event {
        UiEvent::Click => c.open_file_picker(),
        UiEvent::DragEnter => c.set_drag_over(true),
        UiEvent::DragLeave => c.set_drag_over(false),
        UiEvent::Drop(file) => {
            c.set_drag_over(false);
            c.select_file(file);
        }
        _ => {}
    });

    let c = controller.clone();
    registry.register(Affordance::FileInput, move |event| {
        if let UiEvent::FileChosen(file) = event {
            c.select_file(file);
        }
    });

    let c = controller.clone();
    let s = spawn.clone();
    registry.register(Affordance::IngestButton, move |event| {
        if matches!(event, UiEvent::Click) {
            let c = c.clone();
            s(Box::pin(async move { c.ingest().await }));
        }
    });

    let c = controller.clone();
    let s = spawn.clone();
    registry.register(Affordance::QueryInput, move |event| {
        if event.is_submit_shortcut() {
            let c = c.clone();
            s(Box::pin(async move { c.analyze_current_query().await }));
        }
    });

    let c = controller.clone();
    let s = spawn;
    registry.register(Affordance::AnalyzeButton, move |event| {
        if matches!(event, UiEvent::Click) {
            let c = c.clone();
            s(Box::pin(async move { c.analyze_current_query().await }));
        }
    });

    let c = controller;
    registry.register(Affordance::QuickQuery, move |event| {
        if let UiEvent::QuickQuery(query) = event {
            c.apply_quick_query(&query);
        }
    });

    registry
}
