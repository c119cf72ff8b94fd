//! Per-model GPU buffers and the shaded render pass

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use orbit_core::Mesh;

use crate::pipeline::{PipelineConfig, create_scene_bind_group};
use crate::vertex::MeshVertex;

/// Per-model uniform: transform and base color
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ModelInstance {
    /// Model matrix (translation * scale)
    pub model: [[f32; 4]; 4],
    /// Base color (RGBA)
    pub color: [f32; 4],
}

impl Default for ModelInstance {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [0.7, 0.7, 0.7, 1.0],
        }
    }
}

/// GPU buffers for one model: shared-vertex geometry plus triangle and
/// edge index lists, and the per-model instance uniform.
pub struct ModelMesh {
    /// Interleaved position/normal vertices
    pub vertex_buffer: wgpu::Buffer,
    /// Triangle indices
    pub index_buffer: wgpu::Buffer,
    /// Number of triangle indices
    pub index_count: u32,
    /// Wireframe line-list indices
    pub edge_buffer: wgpu::Buffer,
    /// Number of edge indices
    pub edge_count: u32,
    /// CPU copy of the instance uniform
    pub instance: ModelInstance,
    /// GPU instance uniform buffer
    pub instance_buffer: wgpu::Buffer,
}

impl ModelMesh {
    /// Upload a shared mesh's geometry
    pub fn from_mesh(device: &wgpu::Device, mesh: &Mesh) -> Self {
        let vertices: Vec<MeshVertex> = mesh
            .positions
            .iter()
            .zip(&mesh.normals)
            .map(|(&position, &normal)| MeshVertex { position, normal })
            .collect();

        tracing::debug!(
            "Uploading mesh: {} vertices, {} indices, {} edge indices",
            vertices.len(),
            mesh.indices.len(),
            mesh.edges.len()
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Model Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Model Index Buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let edge_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Model Edge Buffer"),
            contents: bytemuck::cast_slice(&mesh.edges),
            usage: wgpu::BufferUsages::INDEX,
        });

        let instance = ModelInstance::default();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Model Instance Buffer"),
            contents: bytemuck::cast_slice(&[instance]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            edge_buffer,
            edge_count: mesh.edges.len() as u32,
            instance,
            instance_buffer,
        }
    }

    /// Update the instance transform
    pub fn update_transform(&mut self, queue: &wgpu::Queue, transform: Mat4) {
        self.instance.model = transform.to_cols_array_2d();
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&[self.instance]),
        );
    }

    /// Update the instance color
    pub fn update_color(&mut self, queue: &wgpu::Queue, color: [f32; 4]) {
        self.instance.color = color;
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&[self.instance]),
        );
    }
}

/// Shaded mesh render pass
pub struct MeshRenderer {
    pipeline: wgpu::RenderPipeline,
    scene_bind_group: wgpu::BindGroup,
}

impl MeshRenderer {
    /// Build the shaded pipeline
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
            "Mesh",
        );

        let pipeline = PipelineConfig::new(
            "Mesh",
            include_str!("shaders/mesh.wgsl"),
            format,
            depth_format,
            &[scene_bind_group_layout, instance_bind_group_layout],
        )
        .with_vertex_layouts(vec![MeshVertex::layout()])
        .build(device);

        Self {
            pipeline,
            scene_bind_group,
        }
    }

    /// Draw one model
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
        render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
