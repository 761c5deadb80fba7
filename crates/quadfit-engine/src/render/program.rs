//! Shader program: fixed WGSL source compiled into a render pipeline.

use super::{InitError, RenderCtx};

/// `(One, OneMinusSrcAlpha)` on color and alpha.
///
/// Correct for premultiplied sources, which is what `content` produces.
pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// How the quad is composited onto the cleared frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum BlendMode {
    /// Blend only if the content has translucent pixels.
    #[default]
    Auto,
    /// Overwrite the frame.
    Replace,
    /// Premultiplied-alpha "over", for content with translucent pixels.
    PremultipliedAlpha,
}

impl BlendMode {
    /// Settles [`BlendMode::Auto`] once the content is known.
    pub fn resolve(self, translucent: bool) -> BlendMode {
        match self {
            BlendMode::Auto if translucent => BlendMode::PremultipliedAlpha,
            BlendMode::Auto => BlendMode::Replace,
            other => other,
        }
    }

    pub(super) fn state(self) -> wgpu::BlendState {
        match self {
            BlendMode::Replace => wgpu::BlendState::REPLACE,
            // Unresolved auto blends.
            BlendMode::PremultipliedAlpha | BlendMode::Auto => premul_alpha_blend(),
        }
    }
}

/// Everything that differs between the two quad programs.
pub(super) struct ProgramDesc<'a> {
    pub label: &'static str,
    pub source: &'static str,
    pub bind_group_layout: &'a wgpu::BindGroupLayout,
    pub buffers: &'a [wgpu::VertexBufferLayout<'a>],
    pub topology: wgpu::PrimitiveTopology,
    pub blend: BlendMode,
}

/// Compiles `desc.source` and links it into a pipeline for the surface format.
///
/// Validation errors raised while doing so are captured and returned as
/// [`InitError::ShaderCompilation`].
pub(super) fn build_pipeline(
    ctx: &RenderCtx<'_>,
    desc: ProgramDesc<'_>,
) -> Result<wgpu::RenderPipeline, InitError> {
    let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

    let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(desc.label),
        source: wgpu::ShaderSource::Wgsl(desc.source.into()),
    });

    let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(desc.label),
        bind_group_layouts: &[desc.bind_group_layout],
        immediate_size: 0,
    });

    let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: desc.buffers,
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(desc.blend.state()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: desc.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    let info = pollster::block_on(shader.get_compilation_info());
    let mut messages: Vec<String> = Vec::new();
    for msg in &info.messages {
        match msg.message_type {
            wgpu::CompilationMessageType::Error => messages.push(msg.message.clone()),
            _ => log::warn!("{}: {}", desc.label, msg.message),
        }
    }

    // A compile error also shows up in the scope; keep only the first report.
    if let Some(err) = pollster::block_on(scope.pop()) {
        if messages.is_empty() {
            messages.push(err.to_string());
        }
    }

    if !messages.is_empty() {
        log::error!("{} failed to build ({} message(s))", desc.label, messages.len());
        return Err(InitError::ShaderCompilation { label: desc.label, messages });
    }

    log::debug!("{} pipeline ready ({:?})", desc.label, ctx.surface_format);
    Ok(pipeline)
}
