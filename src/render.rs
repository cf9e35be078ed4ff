use folio_core::scene::{BackgroundUniforms, SurfaceSize};
use web_sys as web;

mod background;

use background::BackgroundPass;

// Deep navy behind the noise plane; shows through while the first frame loads.
const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.025,
    b: 0.06,
    a: 1.0,
};

/// WebGPU surface bound to the background canvas.
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pass: BackgroundPass,
    size: SurfaceSize,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let size = SurfaceSize::new(canvas.width(), canvas.height());
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let (adapter, device, queue) = open_device(&instance, &surface).await?;

        let caps = surface.get_capabilities(&adapter);
        let format = preferred_format(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: Vec::new(),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", size.width, size.height, format);

        let pass = BackgroundPass::new(&device, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            pass,
            size,
        })
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Reconfigure the surface when the canvas backing size changed.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if !self.size.sync(width, height) {
            return;
        }
        self.config.width = self.size.width;
        self.config.height = self.size.height;
        self.surface.configure(&self.device, &self.config);
        log::debug!("[gpu] resized to {}x{}", width, height);
    }

    pub fn render(&mut self, uniforms: &BackgroundUniforms) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&Default::default());
        self.pass.upload(&self.queue, uniforms);

        let mut encoder = self.device.create_command_encoder(&Default::default());
        self.pass.draw(&mut encoder, &view, CLEAR);
        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

async fn open_device(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'_>,
) -> anyhow::Result<(wgpu::Adapter, wgpu::Device, wgpu::Queue)> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| anyhow::anyhow!("no WebGPU adapter"))?;
    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("folio.device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
            },
            None,
        )
        .await
        .map_err(|e| anyhow::anyhow!("request_device: {e:?}"))?;
    Ok((adapter, device, queue))
}

/// sRGB output when offered, otherwise whatever the surface lists first.
fn preferred_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .or_else(|| formats.first().copied())
}
