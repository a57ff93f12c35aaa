// Shared visual tuning constants used by the core and the web frontend.

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR_MULTIPLIER: f32 = 2.0; // far plane = distance * this, keeps the sphere visible

// Viewport
pub const MIN_VIEWPORT_PX: f32 = 1.0; // lower clamp for either axis

// Plane / sphere layout
pub const PLANE_SEGMENTS: u32 = 40;
pub const SPHERE_RADIUS: f32 = 200.0;
pub const SPHERE_SEGMENTS: u32 = 40;
pub const SPHERE_OFFSET_Z: f32 = 300.0; // towards the camera
pub const PLANE_SCALE_EPSILON: f32 = 0.01; // overshoot against edge seams

// Uniform defaults
pub const TIME_SCALE: f32 = 0.5; // uTime = elapsed * TIME_SCALE
pub const DEFAULT_TIME_SPEED: f32 = 0.5;
pub const TEX_RESOLUTION: [f32; 2] = [2048.0, 1024.0];
pub const DEFAULT_NOISE_LOUDNESS: [f32; 2] = [1.0, 1.0];
pub const DEFAULT_COLORS: [u32; 4] = [0x159F85, 0xF4D03E, 0xD33E8C, 0x014FC4];

// Light
pub const LIGHT_COLOR: u32 = 0xFFFFFF;
pub const LIGHT_INTENSITY: f32 = 1.5;
pub const LIGHT_POSITION: [f32; 3] = [1.0, 1.0, 1.0];
pub const SPHERE_SHADE: f32 = 0.25; // how much the light darkens the sphere's back

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // dolly scale per wheel notch
pub const ORBIT_PHI_EPSILON: f32 = 1e-6;

// Cursor stalker
pub const CURSOR_SMOOTHING: f32 = 0.1; // fraction of the gap closed per reference frame
pub const CURSOR_SNAP_EPSILON_PX: f32 = 1e-3;

// Ticker
pub const REFERENCE_FPS: f32 = 60.0;
pub const LAG_THRESHOLD_SEC: f64 = 0.5; // gaps longer than this are treated as ...
pub const LAG_ADJUSTED_DELTA_SEC: f64 = 0.033; // ... this much time

// Palette transition
pub const PALETTE_TRANSITION_SEC: f32 = 1.4;
