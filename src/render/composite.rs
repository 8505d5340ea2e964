use crate::foundation::error::{RingTimerError, RingTimerResult};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over of premultiplied pixels, with `src` scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    // NaN saturates to 0 in the cast
    let op = (opacity.clamp(0.0, 1.0) * 255.0).round() as u16;
    let src_a = mul_div255(src[3], op);
    if src_a == 0 {
        return dst;
    }

    let keep = 255 - u16::from(src_a);
    std::array::from_fn(|i| {
        let s = if i == 3 { src_a } else { mul_div255(src[i], op) };
        s.saturating_add(mul_div255(dst[i], keep))
    })
}

/// [`over`] applied pixel-wise across two equal-length RGBA8 buffers.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> RingTimerResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(RingTimerError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Convert a premultiplied pixel to straight alpha (what PNG expects).
pub fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = px[3];
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let un = |c: u8| -> u8 {
        ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
    };
    [un(px[0]), un(px[1]), un(px[2]), a]
}

fn mul_div255(c: u8, k: u16) -> u8 {
    ((u32::from(c) * u32::from(k) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
