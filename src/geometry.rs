//! Integer layout of the speaker icon
//!
//! Every value here is derived from the icon size with truncating `u32`
//! division, so the same size always yields the same pixels.

use crate::constants::icons::{MIN_MARGIN, WAVE_COUNT};

/// Speaker box, corners inclusive: it covers `x..=x + width` and `y..=y + height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGeometry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoxGeometry {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Pixel at the middle of the box
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// One candidate sound wave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wave {
    pub index: u32,
    pub radius: u32,
    /// False when the arc would reach into the right margin
    pub drawn: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub margin: u32,
    pub speaker: BoxGeometry,
    /// Shared centre of all waves
    pub wave_x: u32,
    pub center_y: u32,
    pub stroke_width: u32,
    pub waves: Vec<Wave>,
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        let margin = MIN_MARGIN.max(size / 8);

        let box_width = size / 3;
        let box_height = size / 2;
        let speaker = BoxGeometry {
            x: margin,
            y: (size - box_height) / 2,
            width: box_width,
            height: box_height,
        };

        let wave_x = speaker.x + box_width + margin;
        let center_y = size / 2;
        let limit = size.saturating_sub(margin);

        let waves = (0..WAVE_COUNT)
            .map(|index| {
                let radius = (index + 1) * (size / 8);
                Wave {
                    index,
                    radius,
                    drawn: wave_x + radius < limit,
                }
            })
            .collect();

        IconGeometry {
            size,
            margin,
            speaker,
            wave_x,
            center_y,
            stroke_width: (size / 32).max(1),
            waves,
        }
    }

    /// Waves that survive the right-margin bound
    pub fn drawn_waves(&self) -> impl Iterator<Item = &Wave> {
        self.waves.iter().filter(|w| w.drawn)
    }
}
