use crate::constants::{CLEAR_COLOR, ORB_RADIUS, SPHERE_SEGMENTS, STARS_RADIUS};
use crate::core::camera::Camera;
use crate::core::geometry::uv_sphere;
use crate::core::lighting::{light_directions, LIGHT_COLORS, LIGHT_COUNT, LIGHT_INTENSITY};
use crate::core::texture::DecodedImage;
use crate::core::{LightRigTransform, MeshTransform, ShaderUniforms};
use glam::Mat4;
use web_sys as web;

mod helpers;
mod mesh;
mod targets;
use mesh::{GpuMesh, MeshPass};
use targets::DepthTarget;

/// Mirror of the `Scene` struct in `shaders/*.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    params: [f32; 4],
    light_dirs: [[f32; 4]; LIGHT_COUNT],
    light_colors: [[f32; 4]; LIGHT_COUNT],
}

impl SceneUniforms {
    pub(crate) fn new(
        camera: &Camera,
        mesh: &MeshTransform,
        lights: &LightRigTransform,
        uniforms: &ShaderUniforms,
    ) -> Self {
        let model = Mat4::from_translation(mesh.position) * Mat4::from_rotation_y(mesh.rotation_y);
        let dirs = light_directions(lights.rotation_x, lights.rotation_y);
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            params: [uniforms.time, uniforms.audio_level, 0.0, 0.0],
            light_dirs: dirs.map(|d| d.extend(0.0).to_array()),
            light_colors: LIGHT_COLORS.map(|[r, g, b]| {
                [
                    r * LIGHT_INTENSITY,
                    g * LIGHT_INTENSITY,
                    b * LIGHT_INTENSITY,
                    1.0,
                ]
            }),
        }
    }
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    material_bgl: wgpu::BindGroupLayout,
    linear_sampler: wgpu::Sampler,
    nearest_sampler: wgpu::Sampler,

    orb: MeshPass,
    stars: MeshPass,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        // Group 0: per-frame scene uniforms, shared by both pipelines
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        // Group 1: material texture + sampler
        let material_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("material_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&scene_bgl, &material_bgl],
            push_constant_ranges: &[],
        });

        let linear_sampler =
            helpers::create_sampler(&device, "linear_sampler", wgpu::FilterMode::Linear);
        let nearest_sampler =
            helpers::create_sampler(&device, "nearest_sampler", wgpu::FilterMode::Nearest);
        let placeholder = DecodedImage::placeholder();

        let orb_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("orb_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::ORB_WGSL.into()),
        });
        let (orb_tex, orb_view) =
            helpers::upload_rgba_texture(&device, &queue, "matcap_tex", &placeholder);
        let orb = MeshPass {
            pipeline: helpers::make_mesh_pipeline(
                &device,
                "orb_pipeline",
                &layout,
                &orb_shader,
                ("vs_orb", "fs_orb"),
                format,
                Some(wgpu::Face::Back),
            ),
            mesh: GpuMesh::upload(
                &device,
                "orb",
                &uv_sphere(ORB_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            ),
            material: material_bind_group(
                &device,
                &material_bgl,
                &orb_view,
                &linear_sampler,
                "matcap_bg",
            ),
            _texture: orb_tex,
        };

        // Drawn from inside: cull the outward faces
        let stars_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stars_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::STARS_WGSL.into()),
        });
        let (stars_tex, stars_view) =
            helpers::upload_rgba_texture(&device, &queue, "stars_tex", &placeholder);
        let stars = MeshPass {
            pipeline: helpers::make_mesh_pipeline(
                &device,
                "stars_pipeline",
                &layout,
                &stars_shader,
                ("vs_stars", "fs_stars"),
                format,
                Some(wgpu::Face::Front),
            ),
            mesh: GpuMesh::upload(
                &device,
                "stars",
                &uv_sphere(STARS_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
            ),
            material: material_bind_group(
                &device,
                &material_bgl,
                &stars_view,
                &nearest_sampler,
                "stars_bg",
            ),
            _texture: stars_tex,
        };

        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            uniform_buffer,
            scene_bind_group,
            material_bgl,
            linear_sampler,
            nearest_sampler,
            orb,
            stars,
            width,
            height,
        })
    }

    pub fn set_matcap(&mut self, img: &DecodedImage) {
        let (tex, view) =
            helpers::upload_rgba_texture(&self.device, &self.queue, "matcap_tex", img);
        self.orb.material = material_bind_group(
            &self.device,
            &self.material_bgl,
            &view,
            &self.linear_sampler,
            "matcap_bg",
        );
        self.orb._texture = tex;
    }

    pub fn set_starfield(&mut self, img: &DecodedImage) {
        let (tex, view) =
            helpers::upload_rgba_texture(&self.device, &self.queue, "stars_tex", img);
        self.stars.material = material_bind_group(
            &self.device,
            &self.material_bgl,
            &view,
            &self.nearest_sampler,
            "stars_bg",
        );
        self.stars._texture = tex;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub(crate) fn render(&mut self, uniforms: &SceneUniforms) -> Result<(), wgpu::SurfaceError> {
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        let frame = self.surface.get_current_texture()?;
        let view = frame
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
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            self.stars.draw(&mut rpass);
            self.orb.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn material_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
