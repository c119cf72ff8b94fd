//! Render pipeline construction helpers
//!
//! All passes share one scene bind group (camera + light) at group 0 and,
//! for per-model passes, an instance bind group at group 1.

/// Configuration for creating a render pipeline
pub struct PipelineConfig<'a> {
    /// Pipeline label for debugging
    pub label: &'a str,
    /// WGSL shader source code
    pub shader_source: &'a str,
    /// Output texture format
    pub format: wgpu::TextureFormat,
    /// Depth texture format
    pub depth_format: wgpu::TextureFormat,
    /// Bind group layouts (scene layout first)
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    /// Vertex buffer layouts
    pub vertex_layouts: Vec<wgpu::VertexBufferLayout<'a>>,
    /// Primitive topology
    pub topology: wgpu::PrimitiveTopology,
    /// Whether to write to the depth buffer
    pub depth_write: bool,
    /// Depth comparison function
    pub depth_compare: wgpu::CompareFunction,
}

impl<'a> PipelineConfig<'a> {
    /// Create a pipeline config with common defaults: triangle list, no
    /// culling, depth write with Less compare, alpha blending.
    pub fn new(
        label: &'a str,
        shader_source: &'a str,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    ) -> Self {
        Self {
            label,
            shader_source,
            format,
            depth_format,
            bind_group_layouts,
            vertex_layouts: Vec::new(),
            topology: wgpu::PrimitiveTopology::TriangleList,
            depth_write: true,
            depth_compare: wgpu::CompareFunction::Less,
        }
    }

    /// Set vertex buffer layouts
    pub fn with_vertex_layouts(mut self, layouts: Vec<wgpu::VertexBufferLayout<'a>>) -> Self {
        self.vertex_layouts = layouts;
        self
    }

    /// Set primitive topology
    pub fn with_topology(mut self, topology: wgpu::PrimitiveTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Set depth write and compare settings
    pub fn with_depth(mut self, write: bool, compare: wgpu::CompareFunction) -> Self {
        self.depth_write = write;
        self.depth_compare = compare;
        self
    }

    /// Build the render pipeline
    pub fn build(self, device: &wgpu::Device) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{} Shader", self.label)),
            source: wgpu::ShaderSource::Wgsl(self.shader_source.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{} Pipeline Layout", self.label)),
            bind_group_layouts: self.bind_group_layouts,
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{} Pipeline", self.label)),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &self.vertex_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: self.topology,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: self.depth_format,
                depth_write_enabled: self.depth_write,
                depth_compare: self.depth_compare,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }
}

/// Create a uniform-only bind group layout with `binding_count` entries,
/// visible to both shader stages.
pub fn create_uniform_bind_group_layout(
    device: &wgpu::Device,
    label: &str,
    binding_count: u32,
) -> wgpu::BindGroupLayout {
    let entries: Vec<wgpu::BindGroupLayoutEntry> = (0..binding_count)
        .map(|binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        })
        .collect();

    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &entries,
    })
}

/// Create the scene bind group binding the camera and light buffers
pub fn create_scene_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    camera_buffer: &wgpu::Buffer,
    light_buffer: &wgpu::Buffer,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("{} Scene Bind Group", label)),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: light_buffer.as_entire_binding(),
            },
        ],
    })
}
