use super::Rgb;

/// Accessors for a packed `0xAARRGGBB` pixel
pub trait Argb: Copy {
    fn alpha(self) -> u8;
    fn red(self) -> u8;
    fn green(self) -> u8;
    fn blue(self) -> u8;

    fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self;
}

impl Argb for u32 {
    #[inline(always)]
    fn alpha(self) -> u8 {
        (self >> 24) as u8
    }

    #[inline(always)]
    fn red(self) -> u8 {
        (self >> 16) as u8
    }

    #[inline(always)]
    fn green(self) -> u8 {
        (self >> 8) as u8
    }

    #[inline(always)]
    fn blue(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        u32::from_be_bytes([a, r, g, b])
    }
}

/// Pack a decoded pixel as opaque ARGB, optionally running the inversion stage
#[inline(always)]
pub fn pack_argb(rgb: Rgb, invert: bool) -> u32 {
    if !invert {
        return u32::from_rgba(rgb.r, rgb.g, rgb.b, 0xff);
    }

    // Inverted channels may be negative (250 - 255), they are added with their sign
    let r = 250 - i32::from(rgb.r);
    let g = 250 - i32::from(rgb.g);
    let b = 250 - i32::from(rgb.b);

    0xff00_0000u32
        .wrapping_add_signed(r << 16)
        .wrapping_add_signed(g << 8)
        .wrapping_add_signed(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels() {
        let px = 0x80_11_22_33u32;

        assert_eq!(px.alpha(), 0x80);
        assert_eq!(px.red(), 0x11);
        assert_eq!(px.green(), 0x22);
        assert_eq!(px.blue(), 0x33);
        assert_eq!(u32::from_rgba(0x11, 0x22, 0x33, 0x80), px);
    }

    #[test]
    fn pack_plain() {
        assert_eq!(
            pack_argb(Rgb { r: 1, g: 2, b: 3 }, false),
            0xff_01_02_03
        );
    }

    #[test]
    fn pack_inverted() {
        assert_eq!(pack_argb(Rgb { r: 0, g: 0, b: 0 }, true), 0xff_fa_fa_fa);
        assert_eq!(
            pack_argb(Rgb { r: 250, g: 10, b: 240 }, true),
            0xff_00_f0_0a
        );
    }

    #[test]
    fn pack_inverted_overflowing_channels_borrow() {
        // 0xff000000 - 5 * 0x10000 - 5 * 0x100 - 5
        assert_eq!(
            pack_argb(Rgb { r: 255, g: 255, b: 255 }, true),
            0xfe_fa_fa_fb
        );
    }
}
