//! Viewport rendering state

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use orbit_core::Scene;
use orbit_renderer::Renderer;

/// Render texture for the viewport
struct RenderTexture {
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    egui_texture_id: egui::TextureId,
    width: u32,
    height: u32,
}

/// Viewport rendering state
pub struct ViewportState {
    /// Scene renderer
    pub renderer: Renderer,
    /// Shared wgpu device
    pub device: Arc<wgpu::Device>,
    /// Shared wgpu queue
    pub queue: Arc<wgpu::Queue>,
    render_texture: Option<RenderTexture>,
}

impl ViewportState {
    /// Create a new viewport state
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        format: wgpu::TextureFormat,
    ) -> Self {
        let renderer = Renderer::new(&device, format, 800, 600);
        Self {
            renderer,
            device,
            queue,
            render_texture: None,
        }
    }

    /// Ensure the render texture matches the requested size
    pub fn ensure_texture(
        &mut self,
        width: u32,
        height: u32,
        egui_renderer: &mut egui_wgpu::Renderer,
    ) -> egui::TextureId {
        let width = width.max(1);
        let height = height.max(1);

        let needs_recreate = self
            .render_texture
            .as_ref()
            .is_none_or(|t| t.width != width || t.height != height);

        if needs_recreate {
            if let Some(old) = self.render_texture.take() {
                egui_renderer.free_texture(&old.egui_texture_id);
            }

            let texture = self.device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Viewport Render Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: self.renderer.format(),
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                    | wgpu::TextureUsages::TEXTURE_BINDING,
                view_formats: &[],
            });

            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

            let egui_texture_id = egui_renderer.register_native_texture(
                &self.device,
                &view,
                wgpu::FilterMode::Linear,
            );

            self.renderer.resize(&self.device, width, height);

            self.render_texture = Some(RenderTexture {
                texture,
                view,
                egui_texture_id,
                width,
                height,
            });
        }

        self.render_texture.as_ref().unwrap().egui_texture_id
    }

    /// Render the 3D scene to the texture
    pub fn render(&mut self) {
        let Some(ref rt) = self.render_texture else {
            return;
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Viewport Render Encoder"),
            });

        self.renderer.render(&mut encoder, &rt.view, &self.queue);

        self.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Bring the GPU registry in line with the scene: register new
    /// models, drop removed ones, and push current transforms, colors,
    /// and the light.
    pub fn sync_scene(&mut self, scene: &Scene) {
        for id in self.renderer.model_ids() {
            if scene.model(id).is_none() {
                self.renderer.remove_model(id);
            }
        }

        for model in scene.models() {
            if !self.renderer.has_model(model.id) {
                let mesh = scene.mesh(model.kind);
                self.renderer.add_model(&self.device, model, &mesh);
            }
            self.renderer.sync_model(&self.queue, model);
        }

        // Draw in the scene's list order, not registry order.
        self.renderer
            .set_draw_order(scene.models().iter().map(|m| m.id).collect());

        self.renderer.update_light(&self.queue, &scene.light);
    }

    /// Drop every model's GPU buffers
    pub fn clear_models(&mut self) {
        self.renderer.clear_models();
    }

    /// Remove one model's GPU buffers
    pub fn remove_model(&mut self, id: Uuid) {
        self.renderer.remove_model(id);
    }
}

pub type SharedViewportState = Arc<Mutex<ViewportState>>;
