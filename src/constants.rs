/// Fixed parameters of the generated speaker icon

pub mod icons {
    /// Icon edge lengths in pixels, in generation order
    pub const SIZES: [u32; 4] = [16, 32, 48, 128];

    /// Smallest margin around the artwork, whatever the icon size
    pub const MIN_MARGIN: u32 = 2;

    /// Number of candidate sound waves to the right of the speaker
    pub const WAVE_COUNT: u32 = 3;

    /// Output file name for an icon of the given size
    pub fn file_name(size: u32) -> String {
        format!("icon-{}.png", size)
    }
}

pub mod palette {
    /// RGBA components, kept free of the `image` types so the
    /// placeholder-only build still has them
    pub type Rgba = [u8; 4];

    pub const TRANSPARENT: Rgba = [0, 0, 0, 0];
    pub const SPEAKER_FILL: Rgba = [64, 128, 255, 255];
    pub const SPEAKER_OUTLINE: Rgba = [32, 64, 128, 255];
    pub const WAVE_STROKE: Rgba = [64, 128, 255, 255];
}

pub mod arcs {
    /// Sweep of every sound wave, in degrees clockwise from the +x axis
    /// (image coordinates, y pointing down)
    pub const START_DEGREES: f32 = -30.0;
    pub const END_DEGREES: f32 = 30.0;
}
