//! Main renderer combining the shaded, wireframe, and axis passes

use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use uuid::Uuid;
use wgpu::util::DeviceExt;

use orbit_core::{Light, Model};

use crate::axis::AxisRenderer;
use crate::camera::OrbitCamera;
use crate::constants::viewport::CLEAR_COLOR;
use crate::mesh::{MeshRenderer, ModelMesh};
use crate::pipeline::create_uniform_bind_group_layout;
use crate::wireframe::WireframeRenderer;

/// Light uniform buffer data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightUniform {
    /// Light position in world space
    pub position: [f32; 3],
    /// Global intensity multiplier
    pub intensity: f32,
    /// Nonzero when the light sits inside the models
    pub inside: u32,
    /// Struct padding for uniform buffer alignment
    pub _pad: [u32; 3],
}

impl LightUniform {
    fn from_light(light: &Light) -> Self {
        Self {
            position: light.position.to_array(),
            intensity: light.intensity(),
            inside: light.inside as u32,
            _pad: [0; 3],
        }
    }
}

/// GPU entry for one scene model
pub struct MeshEntry {
    /// Geometry and instance buffers
    pub data: ModelMesh,
    /// Instance bind group (group 1)
    pub bind_group: wgpu::BindGroup,
}

/// Viewport renderer
///
/// Owns the camera, the scene uniforms, and the per-model GPU registry.
/// Each frame the frontend syncs the registry against the scene, then
/// records a single render pass: clear, shaded models, wireframe overlay,
/// axis gizmo.
pub struct Renderer {
    camera: OrbitCamera,
    camera_buffer: wgpu::Buffer,
    light_buffer: wgpu::Buffer,
    instance_bind_group_layout: wgpu::BindGroupLayout,
    depth_view: wgpu::TextureView,

    mesh_renderer: MeshRenderer,
    wireframe_renderer: WireframeRenderer,
    axis_renderer: AxisRenderer,

    meshes: HashMap<Uuid, MeshEntry>,
    // Scene order from the last sync; passes draw in this order so the
    // translucent wireframe blend stays deterministic
    draw_order: Vec<Uuid>,
    // Per-model MVPs from the last synced frame, used for picking
    mvp_cache: HashMap<Uuid, Mat4>,

    /// Whether the wireframe overlay is drawn
    pub show_wireframe: bool,
    /// Whether the world axes are drawn
    pub show_axes: bool,

    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Create the renderer and its pipelines
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat, width: u32, height: u32) -> Self {
        let depth_format = wgpu::TextureFormat::Depth32Float;

        let camera = OrbitCamera::new(width as f32 / height.max(1) as f32);
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera.uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let light_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Light Buffer"),
            contents: bytemuck::cast_slice(&[LightUniform::from_light(&Light::default())]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let scene_bind_group_layout =
            create_uniform_bind_group_layout(device, "Scene Bind Group Layout", 2);
        let instance_bind_group_layout =
            create_uniform_bind_group_layout(device, "Instance Bind Group Layout", 1);

        let depth_view = create_depth_texture(device, width, height);

        let mesh_renderer = MeshRenderer::new(
            device,
            format,
            depth_format,
            &scene_bind_group_layout,
            &instance_bind_group_layout,
            &camera_buffer,
            &light_buffer,
        );

        let wireframe_renderer = WireframeRenderer::new(
            device,
            format,
            depth_format,
            &scene_bind_group_layout,
            &instance_bind_group_layout,
            &camera_buffer,
            &light_buffer,
        );

        let axis_renderer = AxisRenderer::new(
            device,
            format,
            depth_format,
            &scene_bind_group_layout,
            &camera_buffer,
            &light_buffer,
        );

        Self {
            camera,
            camera_buffer,
            light_buffer,
            instance_bind_group_layout,
            depth_view,
            mesh_renderer,
            wireframe_renderer,
            axis_renderer,
            meshes: HashMap::new(),
            draw_order: Vec::new(),
            mvp_cache: HashMap::new(),
            show_wireframe: false,
            show_axes: true,
            format,
            width,
            height,
        }
    }

    /// Camera access
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Mutable camera access
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Output texture format
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Viewport size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Recreate size-dependent resources
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.camera.update_aspect(width as f32 / height as f32);
        self.depth_view = create_depth_texture(device, width, height);
    }

    /// Upload the light uniform
    pub fn update_light(&self, queue: &wgpu::Queue, light: &Light) {
        queue.write_buffer(
            &self.light_buffer,
            0,
            bytemuck::cast_slice(&[LightUniform::from_light(light)]),
        );
    }

    /// Register a model's GPU buffers
    pub fn add_model(&mut self, device: &wgpu::Device, model: &Model, mesh: &orbit_core::Mesh) {
        let data = ModelMesh::from_mesh(device, mesh);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Model Instance Bind Group"),
            layout: &self.instance_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: data.instance_buffer.as_entire_binding(),
            }],
        });

        tracing::debug!("Registered model {} for rendering", model.name);
        self.meshes.insert(model.id, MeshEntry { data, bind_group });
    }

    /// Whether a model is registered
    pub fn has_model(&self, id: Uuid) -> bool {
        self.meshes.contains_key(&id)
    }

    /// Number of registered models
    pub fn model_count(&self) -> usize {
        self.meshes.len()
    }

    /// Ids of every registered model
    pub fn model_ids(&self) -> Vec<Uuid> {
        self.meshes.keys().copied().collect()
    }

    /// Drop a model's GPU buffers
    pub fn remove_model(&mut self, id: Uuid) {
        self.meshes.remove(&id);
        self.mvp_cache.remove(&id);
        self.draw_order.retain(|entry| *entry != id);
    }

    /// Drop every model
    pub fn clear_models(&mut self) {
        self.meshes.clear();
        self.mvp_cache.clear();
        self.draw_order.clear();
    }

    /// Set the order models are drawn in, normally the scene's list order
    pub fn set_draw_order(&mut self, order: Vec<Uuid>) {
        self.draw_order = order;
    }

    /// Push a model's transform and color to the GPU and refresh its
    /// cached MVP for picking.
    pub fn sync_model(&mut self, queue: &wgpu::Queue, model: &Model) {
        let transform =
            Mat4::from_translation(model.world_position) * Mat4::from_scale(model.scale);

        if let Some(entry) = self.meshes.get_mut(&model.id) {
            entry.data.update_transform(queue, transform);
            let [r, g, b] = model.color;
            entry.data.update_color(queue, [r, g, b, 1.0]);
        }

        self.mvp_cache
            .insert(model.id, self.camera.view_projection() * transform);
    }

    /// Per-model MVPs from the last synced frame
    pub fn model_mvps(&self) -> &HashMap<Uuid, Mat4> {
        &self.mvp_cache
    }

    fn update_camera(&self, queue: &wgpu::Queue) {
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.uniform()]),
        );
    }

    /// Record the scene into a render pass on `view`
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        queue: &wgpu::Queue,
    ) {
        self.update_camera(queue);

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        for entry in in_draw_order(&self.draw_order, &self.meshes) {
            self.mesh_renderer
                .render(&mut render_pass, &entry.data, &entry.bind_group);
        }

        if self.show_wireframe {
            for entry in in_draw_order(&self.draw_order, &self.meshes) {
                self.wireframe_renderer
                    .render(&mut render_pass, &entry.data, &entry.bind_group);
            }
        }

        if self.show_axes {
            self.axis_renderer.render(&mut render_pass);
        }
    }
}

/// Walk a registry in the given order, skipping ids with no entry
fn in_draw_order<'a, T>(
    order: &'a [Uuid],
    registry: &'a HashMap<Uuid, T>,
) -> impl Iterator<Item = &'a T> {
    order.iter().filter_map(|id| registry.get(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_order_is_followed_and_missing_ids_skipped() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let removed = Uuid::new_v4();

        let mut registry = HashMap::new();
        registry.insert(a, "a");
        registry.insert(b, "b");

        let order = vec![b, removed, a];
        let drawn: Vec<&str> = in_draw_order(&order, &registry).copied().collect();
        assert_eq!(drawn, vec!["b", "a"]);
    }
}

fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
