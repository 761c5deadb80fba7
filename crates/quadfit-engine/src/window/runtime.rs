use anyhow::{Context, Result, anyhow};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::render::RenderCtx;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Redraw continuously instead of only when the window asks for it.
    pub continuous: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "quadfit".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            continuous: false,
        }
    }
}

/// Entry point for the runtime.
///
/// Owns one window and its GPU surface and drives the [`App`] callbacks on
/// the event-loop thread.
pub struct Runtime;

impl Runtime {
    /// Runs until the window closes or the app exits.
    ///
    /// Returns the error that stopped the loop, if any (for example a failed
    /// [`App::on_surface_created`]).
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowEntry {
    fn render_ctx_call<T>(&self, f: impl FnOnce(&RenderCtx<'_>) -> T) -> T {
        self.with_gpu(|gpu| {
            let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), gpu.viewport());
            f(&ctx)
        })
    }
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    fatal: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            fatal: None,
            exit_requested: false,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")
    }

    /// Creates the window, then runs the created/changed callbacks once.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let entry = self.create_window_entry(event_loop)?;

        entry
            .render_ctx_call(|ctx| self.app.on_surface_created(ctx))
            .context("surface setup failed")?;

        entry.render_ctx_call(|ctx| self.app.on_surface_changed(ctx))?;

        entry.with_window(|w| w.request_redraw());
        self.window = Some(entry);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) {
        let Some(entry) = self.window.as_mut() else { return };

        entry.with_gpu_mut(|gpu| gpu.resize(viewport));
        if !viewport.is_valid() {
            log::debug!("surface minimized; waiting for a real size");
            return;
        }

        if let Err(e) = entry.render_ctx_call(|ctx| self.app.on_surface_changed(ctx)) {
            log::error!("surface change failed: {e:#}");
        }
        entry.with_window(|w| w.request_redraw());
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = self.window.as_mut() else { return };

        let viewport = entry.borrow_gpu().viewport();
        if !viewport.is_valid() {
            return;
        }

        let app = &mut self.app;
        let control = entry.with_mut(|fields| {
            let mut frame = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
            };
            app.on_draw_frame(&mut frame)
        });

        if control == AppControl::Exit {
            self.exit_requested = true;
            event_loop.exit();
        }
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        if self.config.continuous {
            if let Some(entry) = &self.window {
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let is_ours = self
            .window
            .as_ref()
            .is_some_and(|e| e.with_window(|w| w.id()) == window_id);
        if !is_ours {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.window = None;
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::Resized(size) => self.resize(size.into()),

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self.window.as_ref().map(|e| e.with_window(|w| w.inner_size()));
                if let Some(size) = size {
                    self.resize(size.into());
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::Destroyed => {
                if !self.exit_requested {
                    self.fail(event_loop, anyhow!("window destroyed unexpectedly"));
                }
            }

            _ => {}
        }
    }
}
