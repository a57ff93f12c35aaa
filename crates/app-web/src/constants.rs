// DOM contract between the page markup and the front-end

// Elements
pub const CANVAS_ID: &str = "canvas";
pub const STALKER_SELECTOR: &str = ".js-stalker";
pub const HOVER_TARGET_SELECTOR: &str = ".js-link";
pub const PALETTE_SELECTOR: &str = ".js-palette";
pub const PALETTE_ATTR: &str = "data-color";

// Panel
pub const PANEL_ID: &str = "tuning-panel";
pub const PANEL_CONTROL_ATTR: &str = "data-control";
pub const PANEL_TOGGLE_KEY: &str = "h";

// Renderer
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0]; // transparent, page shows through
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
