//! Filter catalog and convolution kernels.
//!
//! Each filter is a square integer kernel with a divisor and an offset:
//! `out = round(sum(weight * sample) / scale + offset)`, clamped to `0..=255`.
//! Kernels run over the colour channels only; alpha is carried through.
//! Samples that fall outside the image repeat the nearest edge pixel.

use image::{Rgba, RgbaImage};

use crate::error::CoreError;

/// A square convolution kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// Side length (3 or 5).
    pub size: usize,
    /// Row-major weights, `size * size` entries.
    pub weights: &'static [i32],
    pub scale: i32,
    pub offset: i32,
}

/// A named entry in the filter catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    pub name: &'static str,
    pub kernel: Kernel,
}

#[rustfmt::skip]
const BLUR: Kernel = Kernel {
    size: 5,
    weights: &[
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 1, 1, 1, 1,
    ],
    scale: 16,
    offset: 0,
};

#[rustfmt::skip]
const CONTOUR: Kernel = Kernel {
    size: 3,
    weights: &[
        -1, -1, -1,
        -1,  8, -1,
        -1, -1, -1,
    ],
    scale: 1,
    offset: 255,
};

#[rustfmt::skip]
const DETAIL: Kernel = Kernel {
    size: 3,
    weights: &[
         0, -1,  0,
        -1, 10, -1,
         0, -1,  0,
    ],
    scale: 6,
    offset: 0,
};

#[rustfmt::skip]
const EDGE_ENHANCE: Kernel = Kernel {
    size: 3,
    weights: &[
        -1, -1, -1,
        -1, 10, -1,
        -1, -1, -1,
    ],
    scale: 2,
    offset: 0,
};

#[rustfmt::skip]
const EDGE_ENHANCE_MORE: Kernel = Kernel {
    size: 3,
    weights: &[
        -1, -1, -1,
        -1,  9, -1,
        -1, -1, -1,
    ],
    scale: 1,
    offset: 0,
};

#[rustfmt::skip]
const EMBOSS: Kernel = Kernel {
    size: 3,
    weights: &[
        -1, 0, 0,
         0, 1, 0,
         0, 0, 0,
    ],
    scale: 1,
    offset: 128,
};

#[rustfmt::skip]
const FIND_EDGES: Kernel = Kernel {
    size: 3,
    weights: &[
        -1, -1, -1,
        -1,  8, -1,
        -1, -1, -1,
    ],
    scale: 1,
    offset: 0,
};

#[rustfmt::skip]
const SHARPEN: Kernel = Kernel {
    size: 3,
    weights: &[
        -2, -2, -2,
        -2, 32, -2,
        -2, -2, -2,
    ],
    scale: 16,
    offset: 0,
};

#[rustfmt::skip]
const SMOOTH: Kernel = Kernel {
    size: 3,
    weights: &[
        1, 1, 1,
        1, 5, 1,
        1, 1, 1,
    ],
    scale: 13,
    offset: 0,
};

#[rustfmt::skip]
const SMOOTH_MORE: Kernel = Kernel {
    size: 5,
    weights: &[
        1, 1,  1, 1, 1,
        1, 5,  5, 5, 1,
        1, 5, 44, 5, 1,
        1, 5,  5, 5, 1,
        1, 1,  1, 1, 1,
    ],
    scale: 100,
    offset: 0,
};

/// The fixed filter catalog, in presentation order.
pub const FILTERS: &[Filter] = &[
    Filter { name: "blur", kernel: BLUR },
    Filter { name: "contour", kernel: CONTOUR },
    Filter { name: "detail", kernel: DETAIL },
    Filter { name: "edge enhance", kernel: EDGE_ENHANCE },
    Filter { name: "edge enhance more", kernel: EDGE_ENHANCE_MORE },
    Filter { name: "emboss", kernel: EMBOSS },
    Filter { name: "find edges", kernel: FIND_EDGES },
    Filter { name: "sharpen", kernel: SHARPEN },
    Filter { name: "smooth", kernel: SMOOTH },
    Filter { name: "smooth more", kernel: SMOOTH_MORE },
];

/// All filter names in presentation order.
pub fn filter_names() -> Vec<&'static str> {
    FILTERS.iter().map(|f| f.name).collect()
}

/// Resolve a filter by its exact catalog name.
pub fn find_filter(name: &str) -> Result<&'static Filter, CoreError> {
    FILTERS
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| CoreError::InvalidSelection(format!("Unknown filter type '{name}'")))
}

impl Kernel {
    /// Convolve `src` with this kernel, producing a new image of the same size.
    pub fn apply(&self, src: &RgbaImage) -> RgbaImage {
        let (width, height) = src.dimensions();
        let radius = (self.size / 2) as i64;
        let max_x = i64::from(width) - 1;
        let max_y = i64::from(height) - 1;
        let scale = self.scale as f32;
        let offset = self.offset as f32;

        RgbaImage::from_fn(width, height, |x, y| {
            let mut acc = [0i32; 3];

            for (i, &weight) in self.weights.iter().enumerate() {
                if weight == 0 {
                    continue;
                }
                let kx = (i % self.size) as i64 - radius;
                let ky = (i / self.size) as i64 - radius;
                let sx = (i64::from(x) + kx).clamp(0, max_x) as u32;
                let sy = (i64::from(y) + ky).clamp(0, max_y) as u32;
                let sample = src.get_pixel(sx, sy);

                for (sum, &channel) in acc.iter_mut().zip(sample.0.iter()) {
                    *sum += weight * i32::from(channel);
                }
            }

            let finish = |sum: i32| (sum as f32 / scale + offset).round().clamp(0.0, 255.0) as u8;
            let alpha = src.get_pixel(x, y)[3];
            Rgba([finish(acc[0]), finish(acc[1]), finish(acc[2]), alpha])
        })
    }
}
