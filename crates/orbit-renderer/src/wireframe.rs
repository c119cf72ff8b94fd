//! Translucent wireframe overlay pass

use crate::mesh::ModelMesh;
use crate::pipeline::{PipelineConfig, create_scene_bind_group};
use crate::vertex::MeshVertex;

/// Wireframe render pass, drawn over the shaded geometry.
///
/// Depth testing uses less-or-equal without writes so edges sit exactly
/// on the surfaces they outline.
pub struct WireframeRenderer {
    pipeline: wgpu::RenderPipeline,
    scene_bind_group: wgpu::BindGroup,
}

impl WireframeRenderer {
    /// Build the wireframe pipeline
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        scene_bind_group_layout: &wgpu::BindGroupLayout,
        instance_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
        light_buffer: &wgpu::Buffer,
    ) -> Self {
        let scene_bind_group = create_scene_bind_group(
            device,
            scene_bind_group_layout,
            camera_buffer,
            light_buffer,
            "Wireframe",
        );

        let pipeline = PipelineConfig::new(
            "Wireframe",
            include_str!("shaders/wireframe.wgsl"),
            format,
            depth_format,
            &[scene_bind_group_layout, instance_bind_group_layout],
        )
        .with_vertex_layouts(vec![MeshVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::LineList)
        .with_depth(false, wgpu::CompareFunction::LessEqual)
        .build(device);

        Self {
            pipeline,
            scene_bind_group,
        }
    }

    /// Draw one model's edges
    pub fn render<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        mesh: &'a ModelMesh,
        instance_bind_group: &'a wgpu::BindGroup,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.scene_bind_group, &[]);
        render_pass.set_bind_group(1, instance_bind_group, &[]);
        render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        render_pass.set_index_buffer(mesh.edge_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..mesh.edge_count, 0, 0..1);
    }
}
