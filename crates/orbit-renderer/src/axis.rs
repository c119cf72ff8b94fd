//! World axis gizmo renderer

use wgpu::util::DeviceExt;

use crate::constants::axes as constants;
use crate::pipeline::{PipelineConfig, create_scene_bind_group};
use crate::vertex::PositionColorVertex;

/// Renders the three world axes as colored lines through the origin
pub struct AxisRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    scene_bind_group: wgpu::BindGroup,
}

impl AxisRenderer {
    /// Build the axis pipeline and its static vertex buffer
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        scene_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
        light_buffer: &wgpu::Buffer,
    ) -> Self {
        let scene_bind_group = create_scene_bind_group(
            device,
            scene_bind_group_layout,
            camera_buffer,
            light_buffer,
            "Axis",
        );

        let pipeline = PipelineConfig::new(
            "Axis",
            include_str!("shaders/axis.wgsl"),
            format,
            depth_format,
            &[scene_bind_group_layout],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::LineList)
        .build(device);

        let vertices = generate_axis_vertices(constants::LENGTH);
        let vertex_count = vertices.len() as u32;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Axis Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            vertex_count,
            scene_bind_group,
        }
    }

    /// Draw the axes
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.scene_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}

/// Generate line vertices for the x, y, and z axes, each running from
/// the world origin along its positive direction
fn generate_axis_vertices(length: f32) -> Vec<PositionColorVertex> {
    let axes = [
        ([length, 0.0, 0.0], constants::X_COLOR),
        ([0.0, length, 0.0], constants::Y_COLOR),
        ([0.0, 0.0, length], constants::Z_COLOR),
    ];

    let mut vertices = Vec::with_capacity(6);
    for (end, color) in axes {
        vertices.push(PositionColorVertex {
            position: [0.0, 0.0, 0.0],
            color,
        });
        vertices.push(PositionColorVertex {
            position: end,
            color,
        });
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_lines_start_at_origin() {
        let vertices = generate_axis_vertices(25.0);
        assert_eq!(vertices.len(), 6);
        for pair in vertices.chunks(2) {
            assert_eq!(pair[0].position, [0.0, 0.0, 0.0]);
            assert_eq!(pair[0].color, pair[1].color);
        }
    }

    #[test]
    fn test_axis_endpoints_and_colors() {
        let vertices = generate_axis_vertices(25.0);
        assert_eq!(vertices[1].position, [25.0, 0.0, 0.0]);
        assert_eq!(vertices[1].color, constants::X_COLOR);
        assert_eq!(vertices[3].position, [0.0, 25.0, 0.0]);
        assert_eq!(vertices[3].color, constants::Y_COLOR);
        assert_eq!(vertices[5].position, [0.0, 0.0, 25.0]);
        assert_eq!(vertices[5].color, constants::Z_COLOR);
    }
}
