mod helpers;
mod targets;

use crate::constants::{CLEAR_COLOR, DEPTH_FORMAT};
use app_core::{
    GpuModelUniforms, GpuSceneUniforms, RenderBackend, SceneFrame, ViewportSceneController,
};
use helpers::GpuMesh;
use targets::RenderTargets;
use web_sys as web;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    targets: RenderTargets,

    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    plane_buffer: wgpu::Buffer,
    plane_bind_group: wgpu::BindGroup,
    sphere_buffer: wgpu::Buffer,
    sphere_bind_group: wgpu::BindGroup,

    plane: GpuMesh,
    sphere: GpuMesh,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// Set up the WebGPU surface on `canvas` and upload the scene's meshes.
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        scene: &ViewportSceneController,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits; older WebGPU impls reject unknown fields
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Colors are authored as display hex values, so skip the sRGB encode
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {:?} {}x{}", format, width, height);

        let targets = RenderTargets::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gradient_shader"),
            source: wgpu::ShaderSource::Wgsl(app_core::GRADIENT_WGSL.into()),
        });
        let scene_bgl = helpers::uniform_layout(&device, "scene_bgl");
        let model_bgl = helpers::uniform_layout(&device, "model_bgl");
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("gradient_pl"),
            bind_group_layouts: &[&scene_bgl, &model_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("gradient_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[helpers::vertex_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let frame = scene.frame();
        let (scene_buffer, scene_bind_group) =
            helpers::uniform_binding(&device, &scene_bgl, "scene_uniforms", &frame.gpu_uniforms());
        let (plane_buffer, plane_bind_group) = helpers::uniform_binding(
            &device,
            &model_bgl,
            "plane_uniforms",
            &frame.plane_uniforms(),
        );
        let (sphere_buffer, sphere_bind_group) = helpers::uniform_binding(
            &device,
            &model_bgl,
            "sphere_uniforms",
            &frame.sphere_uniforms(),
        );

        let plane = helpers::upload_mesh(&device, "plane", &scene.plane_geometry().build());
        let sphere = helpers::upload_mesh(&device, "sphere", &scene.sphere_geometry().build());
        log::info!(
            "[gpu] meshes plane={} sphere={} indices",
            plane.index_count,
            sphere.index_count
        );

        let [r, g, b, a] = CLEAR_COLOR;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            targets,
            scene_buffer,
            scene_bind_group,
            plane_buffer,
            plane_bind_group,
            sphere_buffer,
            sphere_bind_group,
            plane,
            sphere,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
            log::debug!("[gpu] resize {}x{}", width, height);
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
    }

    fn write_uniforms(
        &self,
        scene: &GpuSceneUniforms,
        plane: &GpuModelUniforms,
        sphere: &GpuModelUniforms,
    ) {
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(scene));
        self.queue
            .write_buffer(&self.plane_buffer, 0, bytemuck::bytes_of(plane));
        self.queue
            .write_buffer(&self.sphere_buffer, 0, bytemuck::bytes_of(sphere));
    }

    fn draw(&mut self, frame: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        self.write_uniforms(
            &frame.gpu_uniforms(),
            &frame.plane_uniforms(),
            &frame.sphere_uniforms(),
        );
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            for (mesh, bind_group) in [
                (&self.plane, &self.plane_bind_group),
                (&self.sphere, &self.sphere_bind_group),
            ] {
                rpass.set_bind_group(1, bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl RenderBackend for GpuState {
    fn render(&mut self, frame: &SceneFrame) -> anyhow::Result<()> {
        match self.draw(frame) {
            Ok(()) => Ok(()),
            // Surface went stale (tab switch, resize race); rebuild and skip this frame
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost, reconfiguring");
                self.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::Timeout) => Ok(()),
            Err(e) => Err(anyhow::anyhow!("render error: {:?}", e)),
        }
    }
}
